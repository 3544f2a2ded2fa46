//! The in-memory book collection commands operate on

use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::loader::{FileLoader, FsLineSource, LineSource};
use crate::record::Record;

/// Ordered collection of records for one run, plus the loader used to grow it
#[derive(Debug)]
pub struct Catalogue<S = FsLineSource> {
    records: Vec<Record>,
    loader: FileLoader<S>,
}

impl Catalogue<FsLineSource> {
    pub fn new() -> Self {
        Self::with_loader(FileLoader::default())
    }
}

impl Default for Catalogue<FsLineSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: LineSource> Catalogue<S> {
    pub fn with_loader(loader: FileLoader<S>) -> Self {
        Self {
            records: Vec::new(),
            loader,
        }
    }

    /// Read `path` and append every record it contains.
    ///
    /// A read failure is logged by the loader and leaves the catalogue as it
    /// was. A malformed line is returned as an error, also without appending.
    pub fn load_data(&mut self, path: &Path) -> Result<()> {
        if !self.loader.load_file_content(path) {
            warn!("Nothing added from {}", path.display());
            return Ok(());
        }

        let records = self.loader.parse_file_content()?;
        info!("Added {} records from {}", records.len(), path.display());
        self.records.extend(records);
        Ok(())
    }
}

impl<S> Catalogue<S> {
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Remove the first record with exactly this title
    pub fn remove_first_by_title(&mut self, title: &str) -> Option<Record> {
        let position = self.records.iter().position(|r| r.title() == title)?;
        Some(self.records.remove(position))
    }

    /// Remove every record listing `author`, returning how many were removed
    pub fn remove_all_by_author(&mut self, author: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.has_author(author));
        before - self.records.len()
    }
}

impl<S> Extend<Record> for Catalogue<S> {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
