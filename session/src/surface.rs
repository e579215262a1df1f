//! UI surface bookkeeping: at most one session per surface.

use std::collections::HashSet;
use std::fmt;

use crate::SessionError;

/// Identifies one UI surface instance hosting the bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(pub u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Tracks which surfaces currently have an attached session.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    attached: HashSet<SurfaceId>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a surface. Fails if a session is already attached to it.
    pub fn attach(&mut self, surface: SurfaceId) -> Result<(), SessionError> {
        if !self.attached.insert(surface) {
            return Err(SessionError::SurfaceAlreadyAttached(surface));
        }
        Ok(())
    }

    pub fn release(&mut self, surface: SurfaceId) -> Result<(), SessionError> {
        if !self.attached.remove(&surface) {
            return Err(SessionError::SurfaceNotAttached(surface));
        }
        Ok(())
    }

    pub fn is_attached(&self, surface: SurfaceId) -> bool {
        self.attached.contains(&surface)
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}
