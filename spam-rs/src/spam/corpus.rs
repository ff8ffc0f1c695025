//! Labeled training corpus
//!
//! An in-memory table of string cells, usually parsed from a CSV upload.
//! The scorer only needs one text column and one 0/1 label column; both are
//! located by name.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, SpamError};

const TEXT_COLUMN_MARKERS: &[&str] = &["text", "body", "message"];
const LABEL_COLUMN_MARKERS: &[&str] = &["label", "class", "spam"];

/// Tabular labeled corpus
#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Columns selected for recalibration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnPair {
    pub text_index: usize,
    pub text_name: String,
    pub label_index: usize,
    pub label_name: String,
}

/// Texts split by label
#[derive(Debug, Default)]
pub struct LabeledTexts {
    pub spam: Vec<String>,
    pub ham: Vec<String>,
}

impl TrainingCorpus {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    /// Parse a CSV document with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let columns = rdr.headers()?.iter().map(str::to_string).collect();
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { columns, rows })
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Pick the text and label columns, honoring explicit names when given
    /// and otherwise taking the first column whose name contains a marker.
    pub fn resolve_columns(
        &self,
        text_hint: Option<&str>,
        label_hint: Option<&str>,
    ) -> Result<ColumnPair> {
        let text_index = match text_hint {
            Some(name) => self.column_by_name(name)?,
            None => self.column_by_marker(TEXT_COLUMN_MARKERS),
        };
        let label_index = match label_hint {
            Some(name) => self.column_by_name(name)?,
            None => self.column_by_marker(LABEL_COLUMN_MARKERS),
        };

        match (text_index, label_index) {
            (Some(text_index), Some(label_index)) => Ok(ColumnPair {
                text_index,
                text_name: self.columns[text_index].clone(),
                label_index,
                label_name: self.columns[label_index].clone(),
            }),
            _ => Err(SpamError::Configuration(format!(
                "No suitable text or label column found in [{}]",
                self.columns.join(", ")
            ))),
        }
    }

    /// Split the text column by label. Fails on the first label that is not
    /// a 0/1 encoding.
    pub fn partition(&self, columns: &ColumnPair) -> Result<LabeledTexts> {
        let mut texts = LabeledTexts::default();

        for (line, row) in self.rows.iter().enumerate() {
            let raw_label = cell(row, columns.label_index);
            let is_spam = parse_label(raw_label).ok_or_else(|| {
                SpamError::Configuration(format!(
                    "Invalid label '{}' in column '{}' at row {} (expected 0 or 1)",
                    raw_label,
                    columns.label_name,
                    line + 1
                ))
            })?;

            let text = cell(row, columns.text_index).to_lowercase();
            if is_spam {
                texts.spam.push(text);
            } else {
                texts.ham.push(text);
            }
        }

        Ok(texts)
    }

    fn column_by_name(&self, name: &str) -> Result<Option<usize>> {
        self.columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .map(Some)
            .ok_or_else(|| SpamError::Configuration(format!("Column '{}' not found", name)))
    }

    fn column_by_marker(&self, markers: &[&str]) -> Option<usize> {
        self.columns.iter().position(|column| {
            let lower = column.to_lowercase();
            markers.iter().any(|marker| lower.contains(marker))
        })
    }
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Parse a binary class label
pub fn parse_label(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "1.0" | "true" => Some(true),
        "0" | "0.0" | "false" => Some(false),
        _ => None,
    }
}

/// Most frequent whitespace-separated terms, ties broken by first occurrence
pub fn top_terms(texts: &[String], n: usize) -> Vec<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0;

    for term in texts.iter().flat_map(|t| t.split_whitespace()) {
        let entry = counts.entry(term).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(term, (count, first))| (term, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(n)
        .map(|(term, _, _)| term.to_string())
        .collect()
}
