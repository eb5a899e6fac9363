//! Sequence records from FASTA or raw text.

/// One named (or anonymous) sequence to fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: Option<String>,
    pub sequence: String,
}

impl Record {
    pub fn unnamed(sequence: impl Into<String>) -> Self {
        Self { name: None, sequence: sequence.into() }
    }
}

/// Parse FASTA text into records.
///
/// Lines starting with `>` open a new record named by the rest of the line.
/// Lines starting with `;` are comments. Whitespace inside sequences is
/// dropped. Text without any header is a single unnamed record.
pub fn parse_records(text: &str) -> Vec<Record> {
    let mut records: Vec<Record> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('>') {
            let name = header.trim();
            records.push(Record {
                name: (!name.is_empty()).then(|| name.to_string()),
                sequence: String::new(),
            });
            continue;
        }
        if records.is_empty() {
            records.push(Record::unnamed(String::new()));
        }
        if let Some(last) = records.last_mut() {
            last.sequence.extend(line.chars().filter(|c| !c.is_whitespace()));
        }
    }
    records
}
