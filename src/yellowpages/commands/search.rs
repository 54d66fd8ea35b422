use crate::commands::{CmdMessage, CmdResult};
use crate::directory::{Directory, SearchQuery};

/// Matches `term` against every field.
pub fn run(directory: &Directory, term: &str) -> CmdResult {
    run_query(directory, &SearchQuery::any_field(term))
}

pub fn run_query(directory: &Directory, query: &SearchQuery) -> CmdResult {
    let listed: Vec<_> = directory
        .search(query)
        .into_iter()
        .map(|(_, record)| record.clone())
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    result.with_listed_records(listed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Field;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::DataStore;

    fn directory() -> Directory {
        StoreFixture::new()
            .with_record("Ivanov", "Petr", "Olegovich", "Northwind")
            .with_record("Petrova", "Anna", "Ivanovna", "Contoso")
            .with_record("Smirnov", "Oleg", "Petrovich", "Ivanhoe Ltd")
            .with_record("Kuznetsov", "Denis", "Sergeevich", "")
            .build()
            .load()
            .unwrap()
    }

    #[test]
    fn term_matches_any_field() {
        let result = run(&directory(), "IVAN");
        let pks: Vec<_> = result.listed_records.iter().map(|r| r.pk()).collect();
        assert_eq!(pks, vec![1, 2, 3]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn query_restricted_to_surname() {
        let query = SearchQuery::new().with(Field::Surname, "ivan");
        let result = run_query(&directory(), &query);
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].surname(), "Ivanov");
    }

    #[test]
    fn no_match_reports_info() {
        let result = run(&directory(), "zzz");
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No records found.");
    }
}
