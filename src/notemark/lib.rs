//! # Notemark Architecture
//!
//! Notemark is a **note-taking core** built around an inline markup engine.
//! Users type lightweight markers (`#bbold#b`, `#iitalic#i`, `#uunderline#u`,
//! `#sstruck#s`) and the engine turns them into styled ranges while the text
//! keeps its literal markers. It is a library first; the `notemark` binary is
//! one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, cli/)                                        │
//! │  - Parses arguments, prints styled text and note lists      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, session.rs)                             │
//! │  - Thin facade over commands, bound to one owner            │
//! │  - Opens edit sessions that push edits back to the store    │
//! └─────────────────────────────────────────────────────────────┘
//!               │                               │
//!               ▼                               ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Commands (commands/*.rs)    │ │  Editor (buffer.rs)        │
//! │  - Note business logic       │ │  - Text + edit batching    │
//! │  - Returns CmdResult         │ │  - Rebuilds annotations    │
//! └──────────────────────────────┘ └────────────────────────────┘
//!               │                               │
//!               ▼                               ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage (store/)            │ │  Markup (markup/)          │
//! │  - DocumentStore trait       │ │  - Rule table, scanner     │
//! │  - File and in-memory stores │ │  - Annotation store, sinks │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything in the library takes Rust arguments and returns Rust types.
//! It never prints and never exits. Diagnostics go through `tracing`; the
//! binary decides whether and where they are shown.
//!
//! ## Testing Strategy
//!
//! 1. **Markup** and **commands** carry the bulk of the unit tests.
//! 2. **API** tests check dispatch and wiring, not logic.
//! 3. **CLI** tests (`tests/cli.rs`) run the binary against a temporary data
//!    directory.
//!
//! In-memory collaborators (`store::InMemoryDocumentStore`,
//! `auth::memory::InMemoryAuth`, `store::fixtures`) are available to other
//! crates' tests through the `test_utils` feature.
//!
//! ## Module Overview

pub mod api;
pub mod auth;
pub mod buffer;
pub mod commands;
pub mod config;
pub mod error;
pub mod markup;
pub mod model;
pub mod session;
pub mod store;
