//! # Command Layer
//!
//! One module per operation. Each `run` takes the [`Directory`](crate::directory::Directory)
//! (or config paths) and returns a [`CmdResult`]: the records it touched or listed plus
//! user-facing messages. Conditions the user can recover from (unknown pk, rejected field,
//! nothing found) come back as error/info messages, not as `Err`; `Err` is reserved for
//! storage and config failures.

use crate::config::YellowPagesConfig;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod edit;
pub mod generate;
pub mod get;
pub mod page;
pub mod search;

#[derive(Debug, Clone)]
pub struct YellowPagesPaths {
    /// Where `config.json` lives
    pub config_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Position of a listed page within the whole directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page_number: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
    /// 1-based position of the first record on the page
    pub first: usize,
    /// 1-based position of the last record on the page; below `first` when the page is empty
    pub last: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<Record>,
    pub page: Option<PageInfo>,
    pub config: Option<YellowPagesConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageInfo) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_config(mut self, config: YellowPagesConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
