//! # Storage Layer
//!
//! The directory lives in memory while the program runs and is written out as a whole.
//! [`DataStore`] is the seam between the two: it knows how to produce a [`Directory`] at
//! startup and how to persist one after a change.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, a single UTF-8 text file (`yellow_pages.txt` by
//!   default) rewritten on every save
//! - [`memory::InMemoryStore`]: keeps the encoded text in memory, for tests
//!
//! Both go through [`format`], so the in-memory store exercises the same encoding and the
//! same pk reassignment on load as the file store.

use crate::directory::Directory;
use crate::error::Result;

pub mod format;
pub mod fs;
pub mod memory;

/// Whole-directory persistence.
pub trait DataStore {
    /// Load the persisted directory, or an empty one if nothing was saved yet
    fn load(&self) -> Result<Directory>;

    /// Replace the persisted directory with `directory`
    fn save(&mut self, directory: &Directory) -> Result<()>;

    /// Human-readable location of the data, for messages
    fn describe(&self) -> String;
}
