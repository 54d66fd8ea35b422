//! The flat-file line format.
//!
//! ```text
//! 1; Иванов; Иван; Иванович; ООО Ромашка; +7-495-123-4567; +7-916-123-4567
//! ```
//!
//! One record per line: pk, surname, name, patronymic, organization, work phone, cell phone,
//! joined by `"; "`. Nothing is escaped, so a field containing the delimiter produces a line
//! that splits into too many fields on the next load. Existing files depend on this layout,
//! so `encode` only warns about such records.
//!
//! Decoding rebuilds each record through [`Record::new`] and [`Directory::add`], meaning the
//! stored pk is read but not trusted: records get whatever pk allocation hands out.

use crate::directory::Directory;
use crate::error::{Result, YellowPagesError};
use crate::model::{Field, Record};
use tracing::warn;

pub const DELIMITER: &str = "; ";
const FIELD_COUNT: usize = 7;

pub fn encode_record(record: &Record) -> String {
    let mut line = record.pk().to_string();
    for field in Field::ALL {
        line.push_str(DELIMITER);
        line.push_str(record.get(field));
    }
    line
}

pub fn encode(directory: &Directory) -> String {
    let mut out = String::new();
    for record in directory.records() {
        if Field::ALL
            .iter()
            .any(|field| record.get(*field).contains(DELIMITER))
        {
            warn!(
                pk = record.pk(),
                "record contains the field delimiter and will not load back intact"
            );
        }
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

pub fn decode(text: &str) -> Result<Directory> {
    let mut directory = Directory::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(YellowPagesError::Format {
                line: line_no,
                reason: format!("expected {} fields, found {}", FIELD_COUNT, parts.len()),
            });
        }

        let record = Record::new(parts[1], parts[2], parts[3], parts[4], parts[5], parts[6])
            .map_err(|e| YellowPagesError::Format {
                line: line_no,
                reason: e.to_string(),
            })?;

        let pk = directory.add(record);
        if parts[0] != pk.to_string() {
            warn!(
                line = line_no,
                stored = parts[0],
                assigned = pk,
                "stored pk replaced on load"
            );
        }
    }

    Ok(directory)
}
