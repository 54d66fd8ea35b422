use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::model::Record;

pub fn run(directory: &mut Directory, record: Record) -> CmdResult {
    let pk = directory.add(record);
    let mut result = CmdResult::default();
    if let Some(stored) = directory.get(pk) {
        result.add_message(CmdMessage::success(format!(
            "Record added ({}): {}",
            pk,
            stored.full_name()
        )));
        result.affected_records.push(stored.clone());
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_and_reports_pk() {
        let mut directory = Directory::new();
        let record =
            Record::new("Petrov", "Oleg", "Ivanovich", "Acme", "9160000000", "9161111111")
                .unwrap();

        let result = run(&mut directory, record);
        assert_eq!(directory.len(), 1);
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].pk(), 1);
        assert_eq!(
            result.messages[0].content,
            "Record added (1): Petrov Oleg Ivanovich"
        );
    }
}
