//! # CLI Behavior
//!
//! This is **one possible UI client** for notemark, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Markup Commands
//!
//! - `notemark render [FILE]` styles markup from a file or stdin for the terminal.
//!   `--json` prints what a render sink would receive instead.
//! - `notemark spans [FILE]` prints the raw scanner output.
//! - `notemark rules` lists the active rule table, including configured rules.
//!
//! ## Note Commands
//!
//! Notes live in `notes.json` under the data directory (`NOTEMARK_HOME`, or the
//! platform data dir). Every command that takes an id accepts any unique prefix
//! of it, as printed by `list`.
//!
//! Running `notemark` with no arguments lists notes.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Terminal sink for annotations, list and message formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling constants

mod commands;
mod render;
mod setup;
mod styles;

pub use commands::run;
