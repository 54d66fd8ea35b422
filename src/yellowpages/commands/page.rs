use crate::commands::{CmdMessage, CmdResult, PageInfo};
use crate::directory::Directory;

pub fn run(directory: &Directory, page_number: usize, page_size: usize) -> CmdResult {
    let records = directory.paginate(page_number, page_size).to_vec();
    let total_records = directory.len();
    let start = page_number.saturating_sub(1).saturating_mul(page_size);

    let info = PageInfo {
        page_number,
        page_size,
        total_records,
        total_pages: directory.total_pages(page_size),
        first: start.saturating_add(1),
        last: start.saturating_add(records.len()),
    };

    let mut result = CmdResult::default();
    if records.is_empty() && total_records > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is out of range ({} pages of {}).",
            page_number, info.total_pages, page_size
        )));
    }
    result.with_listed_records(records).with_page(info)
}
