use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;

pub fn run(directory: &Directory, pk: u64) -> CmdResult {
    match directory.get(pk) {
        Some(record) => CmdResult::default().with_listed_records(vec![record.clone()]),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::error(format!(
                "Record with pk {} not found.",
                pk
            )));
            result
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn finds_by_pk() {
        let directory = StoreFixture::new().with_records(3).build().load().unwrap();
        let result = run(&directory, 2);
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].organization(), "Org 2");
    }

    #[test]
    fn missing_pk_is_an_error_message() {
        let directory = StoreFixture::new().with_records(1).build().load().unwrap();
        let result = run(&directory, 5);
        assert!(result.listed_records.is_empty());
        assert!(result.has_errors());
    }
}
