//! Bulle is a floating chat widget for the terminal: a toggle badge opens a
//! resizable chat panel that sends each user line to a backend `/chat`
//! endpoint and renders the reply.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the widget state: the transcript, the panel geometry and
//!   active drag session, and the Idle/Awaiting-Reply send state machine.
//! - [`ui`] computes the widget layout, renders the panel, and runs the
//!   interactive event loop that drives keyboard and mouse input.
//! - [`api`] defines the request/reply wire types and classifies backend
//!   responses into a single outcome type.
//!
//! The runtime entrypoint lives in the binary crate (`src/main.rs`), which
//! sets up the terminal and dispatches into [`ui::chat_loop`].

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
