use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::{Result, YellowPagesError};
use crate::model::RecordUpdate;

pub fn run(directory: &mut Directory, pk: u64, update: &RecordUpdate) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if update.is_empty() {
        result.add_message(CmdMessage::info(format!("Record {} left unchanged.", pk)));
        return Ok(result);
    }

    match directory.edit(pk, update) {
        Ok(record) => {
            result.add_message(CmdMessage::success(format!(
                "Record updated ({}): {}",
                pk,
                record.full_name()
            )));
            result.affected_records.push(record.clone());
        }
        Err(YellowPagesError::NotFound(pk)) => {
            result.add_message(CmdMessage::error(format!(
                "Record with pk {} not found.",
                pk
            )));
        }
        Err(YellowPagesError::Validation(e)) => {
            result.add_message(CmdMessage::error(e.to_string()));
        }
        Err(e) => return Err(e),
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Field, Record};

    fn directory() -> Directory {
        let mut directory = Directory::new();
        directory.add(
            Record::new("Petrov", "Oleg", "Ivanovich", "Acme", "9160000000", "9161111111")
                .unwrap(),
        );
        directory
    }

    #[test]
    fn updates_existing_record() {
        let mut directory = directory();
        let update = RecordUpdate::new().with(Field::Name, "Пётр");
        let result = run(&mut directory, 1, &update).unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(directory.get(1).unwrap().name(), "Петр");
        assert!(!result.has_errors());
    }

    #[test]
    fn reports_missing_pk() {
        let mut directory = directory();
        let update = RecordUpdate::new().with(Field::Name, "Oleg");
        let result = run(&mut directory, 9, &update).unwrap();

        assert!(result.affected_records.is_empty());
        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, "Record with pk 9 not found.");
    }

    #[test]
    fn reports_invalid_phone_and_keeps_record() {
        let mut directory = directory();
        let before = directory.get(1).unwrap().clone();
        let update = RecordUpdate::new().with(Field::WorkPhone, "12-34");
        let result = run(&mut directory, 1, &update).unwrap();

        assert!(result.has_errors());
        assert!(result.affected_records.is_empty());
        assert_eq!(directory.get(1).unwrap(), &before);
    }

    #[test]
    fn empty_update_is_a_no_op() {
        let mut directory = directory();
        let result = run(&mut directory, 1, &RecordUpdate::new()).unwrap();
        assert!(result.affected_records.is_empty());
        assert!(!result.has_errors());
    }
}
