use std::{fs::OpenOptions, io, path::Path, sync::Mutex};
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins when it is set; otherwise everything from this crate at
/// `level`, and only warnings from dependencies.
fn env_filter(level: Level) -> EnvFilter {
  EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(format!("warn,lotview={}", level.to_string().to_lowercase())))
}

/// Routes tracing output to an append-only file, the screen is busy
pub fn init(path: &Path, level: Level) -> io::Result<()> {
  let file = OpenOptions::new().create(true).append(true).open(path)?;

  let layer = fmt::layer()
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_target(true);

  tracing_subscriber::registry()
    .with(env_filter(level))
    .with(layer)
    .init();

  Ok(())
}
