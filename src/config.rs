use clap::{ArgAction, Parser};
use std::path::PathBuf;
use tracing::Level;

pub const DEFAULT_API_URL: &str = "http://api.coxauto-interview.com";

#[derive(Parser, Debug)]
#[command(name = "lotview")]
#[command(author, version, about = "Browse a dealer vehicle inventory from your terminal")]
pub struct Settings {
  /// Base url of the inventory API
  #[arg(long, env = "LOTVIEW_API_URL", default_value = DEFAULT_API_URL)]
  pub api_url: String,

  /// Start with the table already filtered by this text
  #[arg(short, long, default_value = "")]
  pub search: String,

  /// Where log lines go; the terminal belongs to the table
  #[arg(long, env = "LOTVIEW_LOG_FILE")]
  pub log_file: Option<PathBuf>,

  /// More log output (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = ArgAction::Count)]
  pub verbose: u8
}

impl Settings {
  pub fn log_file(&self) -> PathBuf {
    self.log_file
      .clone()
      .unwrap_or_else(|| std::env::temp_dir().join("lotview.log"))
  }

  pub fn log_level(&self) -> Level {
    match self.verbose {
      0 => Level::WARN,
      1 => Level::INFO,
      2 => Level::DEBUG,
      _ => Level::TRACE
    }
  }
}
