//! idbridge host: runs one bridge session against the demo engine,
//! speaking JSON lines on stdin/stdout.

mod demo;
mod protocol;

use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use idbridge_session::{
    init_logging, BridgeMetrics, BridgeSession, HostConfig, SurfaceId, SurfaceRegistry,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use demo::DemoEngine;
use protocol::{emit, HostMessage, HostOutput, StdoutSubscriber};

#[derive(Parser)]
#[command(name = "idbridge-host", about = "Identity-verification bridge host shell")]
struct Cli {
    /// Channel namespace, e.g. "com.example.app".
    #[arg(long, env = "IDBRIDGE_NAMESPACE")]
    namespace: Option<String>,

    /// Deployment tier: "test", "preprod", "pilot" or "prod".
    #[arg(long, env = "IDBRIDGE_TIER")]
    tier: Option<String>,

    /// Use the plain signaling host instead of the media-server variant.
    #[arg(long, env = "IDBRIDGE_MEDIA_SERVER_CLOSED")]
    media_server_closed: bool,

    /// Let the engine close its own screens when a flow ends.
    #[arg(long, env = "IDBRIDGE_AUTO_CLOSE")]
    auto_close: bool,

    /// Log format: "human" or "json".
    #[arg(long, env = "IDBRIDGE_LOG_FORMAT")]
    log_format: Option<String>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "IDBRIDGE_LOG_LEVEL")]
    log_level: Option<String>,

    /// Milliseconds between demo engine events.
    #[arg(long, default_value_t = 500, env = "IDBRIDGE_TICK_MS")]
    tick_ms: u64,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Attach a session and serve stdin until detach, EOF or Ctrl-C.
    Run,
}

impl Cli {
    fn host_config(&self) -> anyhow::Result<HostConfig> {
        let base = match &self.config {
            Some(path) => HostConfig::from_toml_file(&path.to_string_lossy())?,
            None => HostConfig::default(),
        };
        Ok(HostConfig {
            namespace: self.namespace.clone().unwrap_or(base.namespace),
            tier: self.tier.clone().or(base.tier),
            media_server_closed: self.media_server_closed || base.media_server_closed,
            auto_close: self.auto_close || base.auto_close,
            log_format: self.log_format.clone().unwrap_or(base.log_format),
            log_level: self.log_level.clone().unwrap_or(base.log_level),
            ..base
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.host_config()?;
    init_logging(config.log_format(), &config.log_level);

    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    match cli.command {
        Command::Run => run(config, Duration::from_millis(cli.tick_ms.max(1))).await?,
    }

    tracing::info!("idbridge host exited cleanly");
    Ok(())
}

async fn run(config: HostConfig, tick: Duration) -> anyhow::Result<()> {
    let mut registry = SurfaceRegistry::new();
    let engine = Rc::new(DemoEngine::new());
    let metrics = Rc::new(BridgeMetrics::new());
    let session = BridgeSession::attach(
        &mut registry,
        SurfaceId(1),
        &config,
        engine.clone(),
        None,
        metrics.clone(),
    )?;

    let names = session.channel_names().clone();
    tracing::info!(
        tier = config.tier.as_deref().unwrap_or("unset"),
        "Serving {} / {} / {}",
        names.common_methods,
        names.feature_methods,
        names.feature_events,
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(tick);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("stdin closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                if !handle_line(&session, &line) {
                    break;
                }
            }
            _ = ticker.tick() => {
                engine.tick();
            }
            _ = &mut ctrl_c => {
                tracing::info!("Shutdown signal received, detaching session");
                break;
            }
        }
    }

    session.detach(&mut registry)?;
    tracing::debug!(metrics = %metrics.encode(), "final metrics");
    Ok(())
}

/// Handle one stdin line. Returns `false` when the UI asked to detach.
fn handle_line(session: &BridgeSession, line: &str) -> bool {
    let message = match HostMessage::parse(line) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("ignoring malformed host message: {e}");
            emit(&HostOutput::Error {
                message: format!("malformed message: {e}"),
            });
            return true;
        }
    };

    match message {
        HostMessage::Invoke { channel, command } => {
            let reply = session.invoke(&channel, &command);
            emit(&HostOutput::Reply {
                channel: &channel,
                method: &command.method,
                reply: &reply,
            });
        }
        HostMessage::Listen { channel } => {
            let subscriber = Rc::new(StdoutSubscriber::new(channel.clone()));
            if let Err(e) = session.listen(&channel, subscriber) {
                emit(&HostOutput::Error {
                    message: e.to_string(),
                });
            }
        }
        HostMessage::Cancel { channel } => {
            if let Err(e) = session.cancel(&channel) {
                emit(&HostOutput::Error {
                    message: e.to_string(),
                });
            }
        }
        HostMessage::Detach => return false,
    }
    true
}
