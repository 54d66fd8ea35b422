use super::{format, DataStore};
use crate::directory::Directory;
use crate::error::Result;

/// Keeps the encoded directory text in memory. `saves` counts how often it was written.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `text`, as if read from a file.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
            saves: 0,
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Directory> {
        match &self.contents {
            Some(text) => format::decode(text),
            None => Ok(Directory::new()),
        }
    }

    fn save(&mut self, directory: &Directory) -> Result<()> {
        self.contents = Some(format::encode(directory));
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Builds a store pre-populated with valid records.
    pub struct StoreFixture {
        pub store: InMemoryStore,
        directory: Directory,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                directory: Directory::new(),
            }
        }

        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let record = crate::model::Record::new(
                    "Testov",
                    "Test",
                    "Testovich",
                    &format!("Org {}", i + 1),
                    &format!("916{:07}", i),
                    &format!("8926{:07}", i),
                )
                .unwrap();
                self.directory.add(record);
            }
            self
        }

        pub fn with_record(
            mut self,
            surname: &str,
            name: &str,
            patronymic: &str,
            organization: &str,
        ) -> Self {
            let record = crate::model::Record::new(
                surname,
                name,
                patronymic,
                organization,
                "9160000000",
                "9161111111",
            )
            .unwrap();
            self.directory.add(record);
            self
        }

        pub fn build(mut self) -> InMemoryStore {
            self.store.save(&self.directory).unwrap();
            self.store.saves = 0;
            self.store
        }
    }
}
