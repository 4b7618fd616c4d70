use std::path::PathBuf;

use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "request-counter")]
#[command(about = "Crash-recoverable sliding window request counter")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // File the timestamp log is appended to
    #[arg(long, default_value = "requests.bin")]
    pub persist_file: PathBuf,

    // Counting window in seconds
    #[arg(short, long, default_value_t = 60)]
    pub window: i64,
}
