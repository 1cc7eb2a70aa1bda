//! Command-line interface definition.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bulle")]
#[command(about = "A floating, resizable chat widget for the terminal")]
#[command(
    long_about = "Bulle puts a chat bubble in your terminal: a toggle badge opens a floating, \
mouse-resizable panel that sends each line to a backend /chat endpoint and renders the reply.\n\n\
Controls:\n\
  Ctrl+B / badge click   Toggle the chat panel\n\
  Esc / [x] click        Close the panel\n\
  Enter / [Send] click   Send the message\n\
  Mouse drag on border   Resize the panel (left, right, top, bottom, corner)\n\
  Up/Down/Wheel          Scroll the transcript\n\
  Ctrl+C                 Quit"
)]
pub struct Args {
    /// Base URL of the chat backend (overrides the config file)
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write tracing output to this file (RUST_LOG controls the filter)
    #[arg(short, long, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Start with the panel open instead of collapsed to the badge
    #[arg(short, long)]
    pub open: bool,
}
