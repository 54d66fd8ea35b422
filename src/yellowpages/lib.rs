//! # Yellowpages Architecture
//!
//! Yellowpages is a small contact directory: records with a full name, an organization and
//! two phone numbers, kept in memory and written to a flat text file. The library knows
//! nothing about terminals; the interactive menu in the binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts with retry, tables, argument parsing  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Directory and its DataStore                     │
//! │  - Saves after every change                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (directory.rs, model.rs, validate.rs)                 │
//! │  - Record invariants, pk allocation, search, pagination     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Storage (store/)                                           │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Validation
//!
//! Surname, name and patronymic must be Latin or Cyrillic letters with at most one inner
//! hyphen; phones must have 10 digits, or 11 starting with 7 or 8, and are stored as
//! `+7-XXX-XXX-XXXX`. A [`model::Record`] cannot exist with fields that fail these rules,
//! and [`directory::Directory::edit`] validates an update in full before writing any of it.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`directory`]: The in-memory store: pks, search, pagination
//! - [`model`]: `Record`, `RecordUpdate`, `Field`
//! - [`validate`]: Name and phone validators
//! - [`store`]: Persistence and the line format
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
