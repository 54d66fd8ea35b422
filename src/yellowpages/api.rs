//! # API Facade
//!
//! The single entry point for directory operations, whatever the UI. `YellowPagesApi` owns
//! the in-memory [`Directory`] and the [`DataStore`] it came from and is passed explicitly
//! through the interactive layer; there is no global directory.
//!
//! ## Role and Responsibilities
//!
//! - **Dispatches** to the command modules
//! - **Persists**: every operation that changes a record saves the whole directory before
//!   returning, so an interrupted session loses at most the change in progress
//! - **Returns structured types** (`Result<CmdResult>`), never prints
//!
//! ## Generic Over DataStore
//!
//! - Production: `YellowPagesApi<FileStore>`
//! - Testing: `YellowPagesApi<InMemoryStore>`
//!
//! Configuration is not routed through here: [`commands::config`] works on the config
//! directory alone, so it stays usable when the data file cannot be loaded.

use crate::commands;
use crate::directory::{Directory, SearchQuery};
use crate::error::Result;
use crate::model::{Record, RecordUpdate};
use crate::store::DataStore;
use tracing::debug;

pub struct YellowPagesApi<S: DataStore> {
    store: S,
    directory: Directory,
}

impl<S: DataStore> YellowPagesApi<S> {
    /// Loads the directory from `store`.
    pub fn open(store: S) -> Result<Self> {
        let directory = store.load()?;
        debug!(source = %store.describe(), records = directory.len(), "directory opened");
        Ok(Self { store, directory })
    }

    pub fn add_record(&mut self, record: Record) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.directory, record);
        self.persist(&result)?;
        Ok(result)
    }

    pub fn edit_record(
        &mut self,
        pk: u64,
        update: &RecordUpdate,
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&mut self.directory, pk, update)?;
        self.persist(&result)?;
        Ok(result)
    }

    pub fn get_record(&self, pk: u64) -> Result<commands::CmdResult> {
        Ok(commands::get::run(&self.directory, pk))
    }

    pub fn search(&self, term: &str) -> Result<commands::CmdResult> {
        Ok(commands::search::run(&self.directory, term))
    }

    pub fn search_by(&self, query: &SearchQuery) -> Result<commands::CmdResult> {
        Ok(commands::search::run_query(&self.directory, query))
    }

    pub fn page(&self, page_number: usize, page_size: usize) -> Result<commands::CmdResult> {
        Ok(commands::page::run(&self.directory, page_number, page_size))
    }

    pub fn generate(&mut self, count: usize) -> Result<commands::CmdResult> {
        let mut rng = rand::thread_rng();
        let result = commands::generate::run(&mut self.directory, count, &mut rng)?;
        self.persist(&result)?;
        Ok(result)
    }

    /// Writes the directory out unconditionally.
    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(&self.directory)?;
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::info(format!(
            "Saved {} records to {}.",
            self.directory.len(),
            self.store.describe()
        )));
        Ok(result)
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&mut self, result: &commands::CmdResult) -> Result<()> {
        if result.affected_records.is_empty() {
            return Ok(());
        }
        self.store.save(&self.directory)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PageInfo, YellowPagesPaths};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    fn record() -> Record {
        Record::new("Orlov", "Ivan", "Petrovich", "Acme", "9160000000", "9161111111").unwrap()
    }

    #[test]
    fn open_loads_existing_records() {
        let store = StoreFixture::new().with_records(4).build();
        let api = YellowPagesApi::open(store).unwrap();
        assert_eq!(api.directory().len(), 4);
    }

    #[test]
    fn add_saves_immediately() {
        let mut api = YellowPagesApi::open(InMemoryStore::new()).unwrap();
        api.add_record(record()).unwrap();

        assert_eq!(api.store().saves(), 1);
        let reloaded = api.store().load().unwrap();
        assert_eq!(reloaded.records(), api.directory().records());
    }

    #[test]
    fn rejected_edit_does_not_save() {
        let store = StoreFixture::new().with_records(1).build();
        let mut api = YellowPagesApi::open(store).unwrap();

        let update = RecordUpdate::new().with(Field::CellPhone, "555");
        let result = api.edit_record(1, &update).unwrap();
        assert!(result.has_errors());
        assert_eq!(api.store().saves(), 0);

        let update = RecordUpdate::new().with(Field::Name, "Ivan");
        let result = api.edit_record(3, &update).unwrap();
        assert!(result.has_errors());
        assert_eq!(api.store().saves(), 0);
    }

    #[test]
    fn accepted_edit_saves() {
        let store = StoreFixture::new().with_records(1).build();
        let mut api = YellowPagesApi::open(store).unwrap();

        let update = RecordUpdate::new().with(Field::Organization, "Initech");
        api.edit_record(1, &update).unwrap();
        assert_eq!(api.store().saves(), 1);
        assert!(api.store().contents().unwrap().contains("; Initech; "));
    }

    #[test]
    fn generate_adds_and_saves() {
        let mut api = YellowPagesApi::open(InMemoryStore::new()).unwrap();
        let result = api.generate(30).unwrap();
        assert_eq!(result.affected_records.len(), 30);
        assert_eq!(api.directory().len(), 30);
        assert_eq!(api.store().saves(), 1);
    }

    #[test]
    fn page_and_search_dispatch() {
        let store = StoreFixture::new().with_records(12).build();
        let api = YellowPagesApi::open(store).unwrap();

        assert_eq!(api.page(2, 5).unwrap().listed_records.len(), 5);
        assert_eq!(api.search("org 1").unwrap().listed_records.len(), 4);
        assert_eq!(api.get_record(12).unwrap().listed_records.len(), 1);

        let query = SearchQuery::new().with(Field::Organization, "org 12");
        assert_eq!(api.search_by(&query).unwrap().listed_records[0].pk(), 12);
    }

    #[test]
    fn save_reports_location() {
        let mut api = YellowPagesApi::open(InMemoryStore::new()).unwrap();
        let result = api.save().unwrap();
        assert_eq!(result.messages[0].content, "Saved 0 records to memory.");
        assert_eq!(api.store().saves(), 1);
    }
}
