//! GROUP command: bucketed listing of titles
//!
//! By title, sorted titles are split into buckets keyed by the uppercased
//! first character. A `## A` header always opens the listing, even when no
//! title starts with `A`, and a new header follows whenever the key changes.
//! Digit-led titles are held back and printed last under `[0-9]`, in their
//! sorted order.
//!
//! By author, each distinct author gets a bucket (authors sorted) listing
//! the titles of that author's records in catalogue order.

use std::collections::BTreeSet;
use std::io::Write;

use super::{construct, require_argument, CommandType, LibraryCommand, EMPTY_CATALOGUE_MESSAGE};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::loader::LineSource;
use crate::record::Record;

/// Key of the bucket that always opens a by-title listing
const FIRST_TITLE_KEY: &str = "A";
/// Key of the trailing bucket for digit-led titles
const DIGIT_KEY: &str = "[0-9]";
/// Indent before every title inside a bucket
const ENTRY_INDENT: &str = "   ";

/// Attribute GROUP buckets by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupMode {
    #[default]
    Title,
    Author,
}

impl GroupMode {
    fn as_str(&self) -> &'static str {
        match self {
            GroupMode::Title => "TITLE",
            GroupMode::Author => "AUTHOR",
        }
    }
}

/// A header key and the titles printed under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    pub key: String,
    pub titles: Vec<&'a str>,
}

impl Bucket<'_> {
    fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            titles: Vec::new(),
        }
    }
}

/// Prints catalogue titles grouped by first character or by author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCmd {
    mode: GroupMode,
}

impl GroupCmd {
    pub fn new(argument: Option<&str>) -> Result<Self> {
        construct(argument)
    }

    pub fn mode(&self) -> GroupMode {
        self.mode
    }
}

impl LibraryCommand for GroupCmd {
    fn command_type(&self) -> CommandType {
        CommandType::Group
    }

    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool> {
        self.mode = match require_argument(argument, "group value")? {
            "TITLE" => GroupMode::Title,
            "AUTHOR" => GroupMode::Author,
            _ => return Ok(false),
        };
        Ok(true)
    }

    fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        out: &mut dyn Write,
    ) -> Result<()> {
        if catalogue.is_empty() {
            writeln!(out, "{EMPTY_CATALOGUE_MESSAGE}")?;
            return Ok(());
        }

        let buckets = match self.mode {
            GroupMode::Title => title_buckets(catalogue.records()),
            GroupMode::Author => author_buckets(catalogue.records()),
        };

        writeln!(out, "Grouped data by {}", self.mode.as_str())?;
        for bucket in &buckets {
            writeln!(out, "## {}", bucket.key)?;
            for title in &bucket.titles {
                writeln!(out, "{ENTRY_INDENT}{title}")?;
            }
        }
        Ok(())
    }
}

/// Bucket titles by uppercased first character, in ordinal order
pub fn title_buckets(records: &[Record]) -> Vec<Bucket<'_>> {
    let mut titles: Vec<&str> = records.iter().map(Record::title).collect();
    titles.sort_unstable();

    let mut buckets = vec![Bucket::new(FIRST_TITLE_KEY)];
    let mut digits = Bucket::new(DIGIT_KEY);

    for title in titles {
        let Some(first) = title.chars().next() else {
            continue;
        };
        if first.is_ascii_digit() {
            digits.titles.push(title);
            continue;
        }

        let key: String = first.to_uppercase().collect();
        match buckets.last_mut() {
            Some(current) if current.key == key => current.titles.push(title),
            _ => {
                let mut bucket = Bucket::new(key);
                bucket.titles.push(title);
                buckets.push(bucket);
            }
        }
    }

    if !digits.titles.is_empty() {
        buckets.push(digits);
    }
    buckets
}

/// One bucket per distinct author, authors in ordinal order
pub fn author_buckets(records: &[Record]) -> Vec<Bucket<'_>> {
    let authors: BTreeSet<&str> = records
        .iter()
        .flat_map(|record| record.authors().iter().map(String::as_str))
        .collect();

    authors
        .into_iter()
        .map(|author| Bucket {
            key: author.to_string(),
            titles: records
                .iter()
                .filter(|record| record.has_author(author))
                .map(Record::title)
                .collect(),
        })
        .collect()
}
