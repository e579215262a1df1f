//! Conventional channel names.

/// The three channel names a session answers on.
///
/// - `<namespace>/common/methods` carries `prepareEngine`
/// - `<namespace>/<feature>/methods` carries `startEngine` and `stopEngine`
/// - `<namespace>/<feature>/events` is the outbound event stream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChannelNames {
    pub common_methods: String,
    pub feature_methods: String,
    pub feature_events: String,
}

impl ChannelNames {
    pub fn new(namespace: &str, feature: &str) -> Self {
        let namespace = namespace.trim_end_matches('/');
        Self {
            common_methods: format!("{namespace}/common/methods"),
            feature_methods: format!("{namespace}/{feature}/methods"),
            feature_events: format!("{namespace}/{feature}/events"),
        }
    }
}
