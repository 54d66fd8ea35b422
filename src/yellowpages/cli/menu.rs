//! The interactive menu.
//!
//! [`Session`] reads answers line by line from any `BufRead` and writes to any `Write`, so
//! the whole dialogue can be scripted in tests. End of input behaves like choosing "Exit"
//! at the main menu and like cancelling inside a dialogue.

use super::render::{
    render_error, render_messages, render_numbered, render_page_header, render_records, RULE,
};
use colored::Colorize;
use std::io::{BufRead, Write};
use yellowpages::api::{CmdResult, YellowPagesApi};
use yellowpages::error::{Result, YellowPagesError};
use yellowpages::model::{Field, Record, RecordUpdate};
use yellowpages::store::DataStore;

const BANNER: &str = "Yellow Pages";

/// Outcome of a validated prompt.
#[derive(Debug, PartialEq, Eq)]
enum Answer {
    Value(String),
    /// Empty input where empty means "keep"
    Skipped,
    /// Declined to retry, or input ended
    Cancelled,
}

pub(super) struct Session<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut YellowPagesApi<S>,
    input: R,
    out: W,
    page_size: usize,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub(super) fn new(
        api: &'a mut YellowPagesApi<S>,
        input: R,
        out: W,
        page_size: usize,
    ) -> Self {
        Self {
            api,
            input,
            out,
            page_size: page_size.max(1),
        }
    }

    /// Runs the main menu until the user exits, then saves.
    pub(super) fn run(mut self) -> Result<()> {
        writeln!(self.out, "{}", BANNER.bold().yellow())?;

        loop {
            writeln!(self.out, "{}", RULE)?;
            writeln!(self.out, "Choose an action:")?;
            writeln!(self.out, "1. Add a record")?;
            writeln!(self.out, "2. Edit a record")?;
            writeln!(self.out, "3. Search records")?;
            writeln!(self.out, "4. Show records")?;
            writeln!(self.out, "5. Exit")?;

            let choice = match self.read_line("Action number> ")? {
                Some(choice) => choice,
                None => "5".to_string(),
            };

            let outcome = match choice.as_str() {
                "1" => self.add_record(),
                "2" => self.edit_record(),
                "3" => self.search_records(),
                "4" => self.display_records(),
                "5" => break,
                _ => self.say("Invalid choice, try again."),
            };

            if let Err(e) = outcome {
                self.report_error(&e)?;
            }
        }

        let result = self.api.save()?;
        self.print_result(&result)?;
        writeln!(self.out, "Data saved. Goodbye!")?;
        Ok(())
    }

    fn add_record(&mut self) -> Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "New record:")?;

        let mut values = Vec::with_capacity(Field::ALL.len());
        for field in Field::ALL {
            let value = if field == Field::Organization {
                self.read_line(&format!("{}: ", field.label()))?
            } else {
                match self.prompt_validated(field.label(), field, false)? {
                    Answer::Value(v) => Some(v),
                    Answer::Skipped | Answer::Cancelled => None,
                }
            };
            match value {
                Some(v) => values.push(v),
                None => return self.say("Record not added."),
            }
        }

        let record = Record::new(
            &values[0], &values[1], &values[2], &values[3], &values[4], &values[5],
        )?;
        let result = self.api.add_record(record)?;
        self.print_result(&result)
    }

    fn edit_record(&mut self) -> Result<()> {
        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Edit a record. Find it by:")?;
        writeln!(self.out, "1. Search")?;
        writeln!(self.out, "2. Record number (PK)")?;

        let Some(choice) = self.read_line("> ")? else {
            return Ok(());
        };

        match choice.as_str() {
            "1" => {
                let Some(term) =
                    self.read_line("Part of a name, organization or phone number: ")?
                else {
                    return Ok(());
                };
                let result = self.api.search(&term)?;
                if result.listed_records.is_empty() {
                    writeln!(self.out, "{}", RULE)?;
                    return self.print_result(&result);
                }

                writeln!(self.out, "{}", RULE)?;
                writeln!(self.out, "Matching records:")?;
                write!(self.out, "{}", render_numbered(&result.listed_records))?;

                let Some(answer) = self.read_line("Number (#) of the record to edit: ")? else {
                    return Ok(());
                };
                match parse_number::<usize>(&answer) {
                    Ok(n) if n >= 1 && n <= result.listed_records.len() => {
                        let pk = result.listed_records[n - 1].pk();
                        self.edit_selected(pk)
                    }
                    Ok(_) => self.say("Invalid record number."),
                    Err(e) => self.report_error(&e),
                }
            }
            "2" => {
                let Some(answer) = self.read_line("PK of the record to edit: ")? else {
                    return Ok(());
                };
                match parse_number::<u64>(&answer) {
                    Ok(pk) if self.api.directory().get(pk).is_some() => self.edit_selected(pk),
                    Ok(pk) => self.report_error(&YellowPagesError::NotFound(pk)),
                    Err(e) => self.report_error(&e),
                }
            }
            _ => self.say("Invalid choice."),
        }
    }

    fn edit_selected(&mut self, pk: u64) -> Result<()> {
        let Some(record) = self.api.directory().get(pk).cloned() else {
            return self.report_error(&YellowPagesError::NotFound(pk));
        };

        writeln!(self.out, "{}", RULE)?;
        writeln!(self.out, "Editing record {}: {}", pk, record)?;
        writeln!(
            self.out,
            "Enter new values (leave empty to keep the current value):"
        )?;

        let mut update = RecordUpdate::new();
        for field in Field::ALL {
            let label = format!("{} (current: {})", field.label(), record.get(field));
            if field == Field::Organization {
                match self.read_line(&format!("{}: ", label))? {
                    Some(v) if !v.is_empty() => update.set(field, v),
                    _ => {}
                }
            } else if let Answer::Value(v) = self.prompt_validated(&label, field, true)? {
                update.set(field, v);
            }
        }

        let result = self.api.edit_record(pk, &update)?;
        writeln!(self.out, "{}", RULE)?;
        self.print_result(&result)
    }

    fn search_records(&mut self) -> Result<()> {
        writeln!(self.out, "{}", RULE)?;
        let Some(term) = self.read_line("Search for: ")? else {
            return Ok(());
        };
        let result = self.api.search(&term)?;
        if !result.listed_records.is_empty() {
            write!(self.out, "{}", render_records(&result.listed_records))?;
        }
        self.print_result(&result)
    }

    fn display_records(&mut self) -> Result<()> {
        let mut page_number = 1;

        loop {
            let total_records = self.api.directory().len();
            let total_pages = self.api.directory().total_pages(self.page_size);

            writeln!(self.out, "{}", RULE)?;
            writeln!(
                self.out,
                "Total records: {}  Total pages: {}",
                total_records, total_pages
            )?;
            writeln!(self.out, "Options:")?;
            writeln!(self.out, "1. Set records per page")?;
            if page_number < total_pages {
                writeln!(self.out, "2. Next page")?;
            }
            if page_number > 1 {
                writeln!(self.out, "3. Previous page")?;
            }
            if total_pages > 1 {
                writeln!(self.out, "4. Go to page")?;
            }
            writeln!(self.out, "5. Back")?;

            let Some(option) = self.read_line("Option: ")? else {
                return Ok(());
            };

            match option.as_str() {
                "1" => {
                    let Some(answer) = self.read_line("Records per page: ")? else {
                        return Ok(());
                    };
                    match parse_number::<usize>(&answer) {
                        Ok(n) if n > 0 => {
                            self.page_size = n;
                            let total_pages = self.api.directory().total_pages(n);
                            page_number = page_number.min(total_pages).max(1);
                        }
                        Ok(_) => {
                            self.say("Records per page must be at least 1.")?;
                            continue;
                        }
                        Err(e) => {
                            self.report_error(&e)?;
                            continue;
                        }
                    }
                }
                "2" if page_number < total_pages => page_number += 1,
                "3" if page_number > 1 => page_number -= 1,
                "4" if total_pages > 1 => {
                    let Some(answer) = self.read_line("Page number: ")? else {
                        return Ok(());
                    };
                    match parse_number::<usize>(&answer) {
                        Ok(n) if n >= 1 && n <= total_pages => page_number = n,
                        Ok(_) => {
                            writeln!(self.out, "{}", RULE)?;
                            self.say("Invalid page number.")?;
                        }
                        Err(e) => {
                            self.report_error(&e)?;
                            continue;
                        }
                    }
                }
                "5" => return Ok(()),
                _ => {
                    self.say("Invalid option.")?;
                    continue;
                }
            }

            self.show_page(page_number)?;
        }
    }

    fn show_page(&mut self, page_number: usize) -> Result<()> {
        let result = self.api.page(page_number, self.page_size)?;
        writeln!(self.out, "{}", RULE)?;
        if let Some(info) = &result.page {
            let header = render_page_header(info);
            write!(self.out, "{}", header)?;
            write!(self.out, "{}", render_records(&result.listed_records))?;
            write!(self.out, "{}", header)?;
        }
        write!(self.out, "{}", render_messages(&result.messages))?;
        Ok(())
    }

    /// Asks for `field` until it validates. A rejected value offers a retry; declining
    /// cancels. With `allow_empty`, an empty answer is [`Answer::Skipped`].
    fn prompt_validated(
        &mut self,
        label: &str,
        field: Field,
        allow_empty: bool,
    ) -> Result<Answer> {
        loop {
            let Some(value) = self.read_line(&format!("{}: ", label))? else {
                return Ok(Answer::Cancelled);
            };
            if allow_empty && value.is_empty() {
                return Ok(Answer::Skipped);
            }
            match field.validate(&value) {
                Ok(valid) => return Ok(Answer::Value(valid)),
                Err(e) => {
                    self.report_error(&YellowPagesError::from(e))?;
                    let retry = self.read_line("Try again? (y/n): ")?.unwrap_or_default();
                    if !retry.trim().eq_ignore_ascii_case("y") {
                        return Ok(Answer::Cancelled);
                    }
                }
            }
        }
    }

    /// Prompts and reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(trimmed))
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        write!(self.out, "{}", render_messages(&result.messages))?;
        Ok(())
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn report_error(&mut self, error: &YellowPagesError) -> Result<()> {
        write!(self.out, "{}", render_error(error))?;
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(input: &str) -> Result<T> {
    input
        .trim()
        .parse::<T>()
        .map_err(|_| YellowPagesError::Parse(input.to_string()))
}
