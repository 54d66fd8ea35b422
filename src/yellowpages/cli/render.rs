use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use yellowpages::api::{CmdMessage, MessageLevel, PageInfo};
use yellowpages::config::{YellowPagesConfig, KEYS};
use yellowpages::model::Record;

pub(super) const RULE: &str =
    "__________________________________________________________________________________________";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn render_error(error: &dyn std::fmt::Display) -> String {
    format!("{}\n", format!("Error: {}", error).red())
}

/// Listing table: PK, full name, organization, phones.
pub(super) fn render_records(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.pk().to_string(),
                r.full_name(),
                r.organization().to_string(),
                r.work_phone().to_string(),
                r.cell_phone().to_string(),
            ]
        })
        .collect();
    render_table(
        &["PK", "Full name", "Organization", "Work phone", "Cell phone"],
        &rows,
    )
}

/// Picker table for edits: rows numbered from 1, every field in its own column.
pub(super) fn render_numbered(records: &[Record]) -> String {
    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.surname().to_string(),
                r.name().to_string(),
                r.patronymic().to_string(),
                r.organization().to_string(),
                r.work_phone().to_string(),
                r.cell_phone().to_string(),
            ]
        })
        .collect();
    render_table(
        &[
            "#",
            "Surname",
            "Name",
            "Patronymic",
            "Organization",
            "Work phone",
            "Cell phone",
        ],
        &rows,
    )
}

pub(super) fn render_page_header(info: &PageInfo) -> String {
    if info.last < info.first {
        return format!("Page {}/{} - no records\n", info.page_number, info.total_pages);
    }
    format!(
        "Page {}/{} - records {}-{}:\n",
        info.page_number, info.total_pages, info.first, info.last
    )
}

pub(super) fn render_config(config: &YellowPagesConfig) -> String {
    let mut out = String::new();
    for key in KEYS {
        if let Some(value) = config.get(key) {
            out.push_str(&format!("{} = {}\n", key, value));
        }
    }
    out
}

/// Grid table with a `=` rule under the header and a `-` rule between rows.
pub(super) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = rule(&widths, '-');
    out.push_str(&table_line(&widths, headers.iter().copied()));
    out.push_str(&rule(&widths, '='));
    for row in rows {
        out.push_str(&table_line(&widths, row.iter().map(String::as_str)));
        out.push_str(&rule(&widths, '-'));
    }
    out
}

fn rule(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&fill.to_string().repeat(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn table_line<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for (width, cell) in widths.iter().zip(cells) {
        let padding = width.saturating_sub(cell.width());
        line.push_str(&format!(" {}{} |", cell, " ".repeat(padding)));
    }
    line.push('\n');
    line
}
