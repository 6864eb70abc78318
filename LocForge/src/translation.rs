//! Translator-supplied strings table ingestion
//!
//! Loads a strings CSV into a [`TranslationTable`]. The table is the
//! spreadsheet translators work in, with one row per stable identifier:
//!
//! ```csv
//! id,english,russian
//! UI/Title#ABCD1234,Start,Начать
//! UI/Exit#11110000,Quit,
//! ```
//!
//! Rows with an empty id or an empty target text are skipped. Fields may
//! be quoted; quoted fields may contain delimiters, doubled quotes and
//! newlines, which real game text does.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::merge::TranslationTable;

/// Header columns the strings table must carry.
pub const REQUIRED_COLUMNS: [&str; 3] = ["id", "english", "russian"];

/// Load a strings CSV from disk
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and
/// [`Error::MissingColumns`] if the header lacks a required column.
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::MissingColumns`]: crate::Error::MissingColumns
pub fn load_strings_csv<P: AsRef<Path>>(path: P) -> Result<TranslationTable> {
    let mut file = File::open(path)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    parse_strings_csv(&text)
}

/// Parse strings CSV text into a translation table.
///
/// Duplicate ids are resolved deterministically: the last row wins.
pub fn parse_strings_csv(text: &str) -> Result<TranslationTable> {
    let mut records = parse_records(text).into_iter();

    let Some(header) = records.next() else {
        return Err(Error::MissingColumns(REQUIRED_COLUMNS.join(", ")));
    };
    let columns: Vec<String> = header
        .iter()
        .map(|column| column.trim().to_lowercase())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|column| column == *required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns(missing.join(", ")));
    }

    let column_index = |name: &str| columns.iter().position(|column| column == name);
    let (Some(id_column), Some(target_column)) = (column_index("id"), column_index("russian"))
    else {
        return Err(Error::MissingColumns(REQUIRED_COLUMNS.join(", ")));
    };

    let mut table = TranslationTable::new();
    for record in records {
        let id = record.get(id_column).map_or("", String::as_str).trim();
        let target = record.get(target_column).map_or("", String::as_str).trim();
        if id.is_empty() || target.is_empty() {
            continue;
        }
        table.insert(id.to_string(), target.to_string());
    }

    tracing::debug!("loaded {} translated strings", table.len());
    Ok(table)
}

/// Split CSV text into records of unquoted field values.
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                record.push(std::mem::take(&mut field));
                // Blank lines produce a single empty field; drop them
                if record.len() > 1 || !record[0].is_empty() {
                    records.push(std::mem::take(&mut record));
                } else {
                    record.clear();
                }
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_table() {
        let table = parse_strings_csv(
            "id,english,russian\nUI/Title#ABCD1234,Start,Начать\nUI/Exit#11110000,Quit,Выход\n",
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table["UI/Title#ABCD1234"], "Начать");
        assert_eq!(table["UI/Exit#11110000"], "Выход");
    }

    #[test]
    fn test_missing_columns_are_named() {
        match parse_strings_csv("id,english\nA#1,Start\n") {
            Err(Error::MissingColumns(columns)) => assert_eq!(columns, "russian"),
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_fails_validation() {
        assert!(matches!(
            parse_strings_csv(""),
            Err(Error::MissingColumns(_))
        ));
    }

    #[test]
    fn test_skips_rows_without_id_or_target() {
        let table = parse_strings_csv(
            "id,english,russian\n,Orphan,Сирота\nUI/Exit#11110000,Quit,\nUI/Ok#00000001,Ok,Да\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table["UI/Ok#00000001"], "Да");
    }

    #[test]
    fn test_quoted_fields_with_delimiters_and_newlines() {
        let table = parse_strings_csv(
            "id,english,russian\nA#1,\"Hello, world\",\"Привет,\nмир\"\nB#2,\"Say \"\"hi\"\"\",\"Скажи \"\"привет\"\"\"\n",
        )
        .unwrap();
        assert_eq!(table["A#1"], "Привет,\nмир");
        assert_eq!(table["B#2"], "Скажи \"привет\"");
    }

    #[test]
    fn test_extra_columns_and_order_are_tolerated() {
        let table = parse_strings_csv(
            "russian,comment,id,english\nНачать,checked,UI/Title#ABCD1234,Start\n",
        )
        .unwrap();
        assert_eq!(table["UI/Title#ABCD1234"], "Начать");
    }

    #[test]
    fn test_duplicate_id_last_row_wins() {
        let table =
            parse_strings_csv("id,english,russian\nA#1,Start,Старт\nA#1,Start,Начать\n").unwrap();
        assert_eq!(table["A#1"], "Начать");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let table =
            parse_strings_csv("id,english,russian\n\nA#1,Start,Начать\n\n").unwrap();
        assert_eq!(table.len(), 1);
    }
}
