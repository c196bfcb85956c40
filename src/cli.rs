// src/cli.rs

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "emotilog - log how you feel, one tap at a time",
    long_about = "emotilog keeps an in-memory log of emotion events for one interactive session. \
Tap a numbered emotion to record it with a timestamp, then list the history or view a ranked \
frequency summary. Nothing is written to disk; the log vanishes when the session ends."
)]
pub struct Cli {
    /// Replace the default emotion buttons with your own labels.
    /// Repeat the flag once per label, in button order.
    #[arg(short, long = "label", value_name = "LABEL")]
    pub labels: Vec<String>,
}
