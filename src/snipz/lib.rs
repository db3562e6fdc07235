//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet library**: an ordered list of titled text
//! snippets kept in a single JSON file. The command line client in `cli/` is
//! one way to drive it; nothing below the API knows about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders themed output, runs editors    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) + Session (session.rs)                  │
//! │  - Thin facade over commands; display indexes → positions   │
//! │  - Session: explicit edit-form state owned by the shell     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per file, returns `CmdResult`              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnippetStore: in-memory list + CRUD + search             │
//! │  - Backend trait: JsonFileBackend, MemoryBackend            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Snippets have no ids. They are addressed by position, so deleting one
//! shifts every later snippet down and invalidates indexes held by callers.
//! See [`index`] for how positions are shown to users.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code returns `Result`s and never prints, logs from
//! the store, or exits. The caller decides whether an error is fatal.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Snippet store and persistence backends
//! - [`model`]: The `Snippet` type and input normalization
//! - [`index`]: One-based display indexes
//! - [`session`]: Edit-form state for interactive shells
//! - [`config`]: User configuration (store file, theme)
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod model;
pub mod session;
pub mod store;
