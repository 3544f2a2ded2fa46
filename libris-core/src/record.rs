//! Book record value type

use std::fmt;

use crate::error::{LibraryError, Result};

/// Lowest accepted rating
pub const MIN_RATING: f64 = 0.0;
/// Highest accepted rating
pub const MAX_RATING: f64 = 5.0;

/// Text that counts as blank for titles, identifiers and author names
const BLANK: &str = " ";

/// One book entry. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    title: String,
    authors: Vec<String>,
    rating: f64,
    identifier: String,
    page_count: u32,
}

impl Record {
    /// Build a record, rejecting any field that breaks its invariant.
    ///
    /// `page_count` is taken signed so that zero and negative values coming
    /// from a data file are rejected here rather than at parse time.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        rating: f64,
        identifier: impl Into<String>,
        page_count: i64,
    ) -> Result<Self> {
        let title = title.into();
        let identifier = identifier.into();

        if is_blank(&title) {
            return Err(LibraryError::InvalidRecord("title must not be blank".into()));
        }

        if authors.is_empty() {
            return Err(LibraryError::InvalidRecord(format!(
                "{title}: at least one author is required"
            )));
        }
        if authors.iter().any(|author| is_blank(author)) {
            return Err(LibraryError::InvalidRecord(format!(
                "{title}: author names must not be blank"
            )));
        }

        // NaN fails the range check as well
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(LibraryError::InvalidRecord(format!(
                "{title}: rating {rating} must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }

        if is_blank(&identifier) {
            return Err(LibraryError::InvalidRecord(format!(
                "{title}: identifier must not be blank"
            )));
        }

        let page_count = u32::try_from(page_count)
            .ok()
            .filter(|pages| *pages >= 1)
            .ok_or_else(|| {
                LibraryError::InvalidRecord(format!(
                    "{title}: page count {page_count} must be a positive integer"
                ))
            })?;

        Ok(Self {
            title,
            authors,
            rating,
            identifier,
            page_count,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// True when `author` is one of this record's authors (exact match)
    pub fn has_author(&self, author: &str) -> bool {
        self.authors.iter().any(|a| a == author)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "by {}", self.authors.join(", "))?;
        writeln!(f, "Rating: {}", rating_text(self.rating))?;
        writeln!(f, "ISBN: {}", self.identifier)?;
        write!(f, "{} pages", self.page_count)
    }
}

fn is_blank(text: &str) -> bool {
    text.is_empty() || text == BLANK
}

/// Two-decimal rating text, rounding half up on the shortest decimal form.
///
/// `{:.2}` rounds the exact binary value half to even, which prints 4.125
/// as 4.12. Ratings are non-negative and at most 5, so whole cents fit in a u64.
fn rating_text(rating: f64) -> String {
    let shortest = rating.to_string();
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
    let whole: u64 = whole.parse().unwrap_or(0);

    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let hundredths = digits.next().unwrap_or(0);
    let round_up = digits.next().is_some_and(|next| next >= 5);

    let cents = whole * 100 + tenths * 10 + hundredths + u64::from(round_up);
    format!("{}.{:02}", cents / 100, cents % 100)
}
