//! Record ingestion from delimited text files
//!
//! Reading and parsing are two separate steps: [`FileLoader::load_file_content`]
//! pulls every line from a [`LineSource`] and reports failure as `false`,
//! [`FileLoader::parse_file_content`] turns the retained lines into records.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, trace};

use crate::error::{LibraryError, Result};
use crate::record::Record;

/// Number of fields on every data line
const FIELD_COUNT: usize = 5;

/// Supplies the raw lines of a data resource
pub trait LineSource {
    /// Read the whole resource. The resource is released before returning.
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Reads lines from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLineSource;

impl LineSource for FsLineSource {
    fn read_lines(&self, path: &Path) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(path)?;
        Ok(content.lines().map(String::from).collect())
    }
}

/// How data lines are split into record fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Separator between the five record fields
    pub delimiter: char,
    /// Separator between author names inside the authors field
    pub author_separator: char,
    /// Discard the first line of every file
    pub skip_header: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            delimiter: ',',
            author_separator: '-',
            skip_header: true,
        }
    }
}

/// Loads book records from delimited text
#[derive(Debug)]
pub struct FileLoader<S = FsLineSource> {
    source: S,
    settings: LoaderSettings,
    file_content: Option<Vec<String>>,
}

impl FileLoader<FsLineSource> {
    pub fn new(settings: LoaderSettings) -> Self {
        Self::with_source(FsLineSource, settings)
    }
}

impl Default for FileLoader<FsLineSource> {
    fn default() -> Self {
        Self::new(LoaderSettings::default())
    }
}

impl<S: LineSource> FileLoader<S> {
    pub fn with_source(source: S, settings: LoaderSettings) -> Self {
        Self {
            source,
            settings,
            file_content: None,
        }
    }

    /// Read all lines of `path`, replacing any previously loaded content.
    ///
    /// Read failures are logged and reported as `false`; previously loaded
    /// content is left untouched in that case.
    pub fn load_file_content(&mut self, path: &Path) -> bool {
        match self.source.read_lines(path) {
            Ok(lines) => {
                debug!("Read {} lines from {}", lines.len(), path.display());
                self.file_content = Some(lines);
                true
            }
            Err(e) => {
                error!("Reading file content failed: {e}");
                false
            }
        }
    }

    pub fn content_loaded(&self) -> bool {
        self.file_content.is_some()
    }

    /// Parse the loaded content into records, consuming it.
    ///
    /// A single malformed line fails the whole parse so a file is either
    /// ingested completely or not at all.
    pub fn parse_file_content(&mut self) -> Result<Vec<Record>> {
        let Some(lines) = self.file_content.take() else {
            error!("No content loaded before parsing");
            return Ok(Vec::new());
        };

        let skip = usize::from(self.settings.skip_header);
        let mut records = Vec::with_capacity(lines.len().saturating_sub(skip));

        for (index, line) in lines.iter().enumerate().skip(skip) {
            if line.trim().is_empty() {
                continue;
            }
            let record = self.parse_line(line).map_err(|reason| {
                LibraryError::MalformedLine {
                    line: index + 1,
                    reason,
                }
            })?;
            trace!(title = record.title(), "Parsed record");
            records.push(record);
        }

        Ok(records)
    }

    fn parse_line(&self, line: &str) -> std::result::Result<Record, String> {
        let fields: Vec<&str> = line.split(self.settings.delimiter).collect();
        if fields.len() != FIELD_COUNT {
            return Err(format!(
                "expected {FIELD_COUNT} fields, found {}",
                fields.len()
            ));
        }

        let authors = fields[1]
            .split(self.settings.author_separator)
            .map(String::from)
            .collect();
        let rating: f64 = fields[2]
            .trim()
            .parse()
            .map_err(|e| format!("invalid rating {:?}: {e}", fields[2]))?;
        let pages: i64 = fields[4]
            .trim()
            .parse()
            .map_err(|e| format!("invalid page count {:?}: {e}", fields[4]))?;

        Record::new(fields[0], authors, rating, fields[3], pages).map_err(|e| e.to_string())
    }
}
