//! # The Directory
//!
//! [`Directory`] is the in-memory record store: an ordered list of [`Record`]s plus the
//! counter used to hand out primary keys. Everything is a linear scan; the directory is
//! expected to stay small enough to hold in memory and print page by page.
//!
//! ## Primary keys
//!
//! `add` scans upward from the counter until it finds a pk no record uses, assigns it, and
//! moves the counter one past it. Pks are therefore unique, but a directory rebuilt from a
//! file does not necessarily get the same pks back (see `store::format`).
//!
//! ## Search semantics
//!
//! A [`SearchQuery`] is a list of `(Field, term)` pairs OR-ed together: a record matches when
//! any one of its fields contains the paired term, ignoring case. An empty field never
//! matches, even against an empty term.

use crate::error::{Result, YellowPagesError};
use crate::model::{Field, Record, RecordUpdate};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Directory {
    records: Vec<Record>,
    next_pk: u64,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_pk: 1,
        }
    }

    /// Appends `record` and returns the pk it was given.
    pub fn add(&mut self, mut record: Record) -> u64 {
        while self.records.iter().any(|r| r.pk() == self.next_pk) {
            self.next_pk += 1;
        }
        let pk = self.next_pk;
        record.assign_pk(pk);
        self.records.push(record);
        self.next_pk += 1;
        debug!(pk, total = self.records.len(), "record added");
        pk
    }

    /// Applies `update` to the record with `pk` and returns the edited record.
    pub fn edit(&mut self, pk: u64, update: &RecordUpdate) -> Result<&Record> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.pk() == pk)
            .ok_or(YellowPagesError::NotFound(pk))?;
        record.apply(update)?;
        debug!(pk, "record edited");
        Ok(&*record)
    }

    pub fn get(&self, pk: u64) -> Option<&Record> {
        self.records.iter().find(|r| r.pk() == pk)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<(u64, &Record)> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .map(|record| (record.pk(), record))
            .collect()
    }

    /// Returns page `page_number` (1-based) of `page_size` records. Pages past the end,
    /// page 0 and a zero page size are all empty.
    pub fn paginate(&self, page_number: usize, page_size: usize) -> &[Record] {
        let start = match page_number
            .checked_sub(1)
            .and_then(|p| p.checked_mul(page_size))
        {
            Some(start) if start < self.records.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(page_size).min(self.records.len());
        &self.records[start..end]
    }

    pub fn total_pages(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.records.len().div_ceil(page_size)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Field/term pairs for [`Directory::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<(Field, String)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The same term against every field.
    pub fn any_field(term: &str) -> Self {
        Field::ALL
            .iter()
            .fold(Self::new(), |query, field| query.with(*field, term))
    }

    pub fn with(mut self, field: Field, term: &str) -> Self {
        self.terms.push((field, term.to_lowercase()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.terms.iter().any(|(field, term)| {
            let value = record.get(*field);
            !value.is_empty() && value.to_lowercase().contains(term.as_str())
        })
    }
}
