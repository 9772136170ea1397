//! # Campaigndesk Architecture
//!
//! Campaigndesk keeps the records of a small marketing consultancy (clients,
//! campaigns and a content calendar) in one local JSON file and computes
//! reports over them. It is a **UI-agnostic library** with a terminal client:
//! nothing below the CLI knows about stdout, colors or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, parses record selectors       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per verb, returns CmdResult                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Book (book.rs) + Reports (reports.rs)               │
//! │  - The only writer of the snapshot / pure aggregations      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Leniency
//!
//! The data file is never allowed to block the user. A missing or corrupt file
//! loads as empty, a failed save keeps the change in memory and is reported as
//! a warning, and an unparsable budget counts as zero.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Logic for each command
//! - [`book`]: The record book owning the in-memory snapshot
//! - [`reports`]: Overview, per-client, per-status and per-platform aggregates
//! - [`join`]: Loose matching of campaigns and content to clients
//! - [`index`]: Display indexes and record selectors
//! - [`model`]: Records, enums, patches and the snapshot
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and logging setup
//! - [`error`]: Error types
//! - `cli`: Argument parsing and rendering for the binary (not part of the lib API)

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod join;
pub mod model;
pub mod reports;
pub mod store;
