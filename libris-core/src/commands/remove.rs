use std::io::Write;

use tracing::info;

use super::{construct, require_argument, CommandType, LibraryCommand};
use crate::catalogue::Catalogue;
use crate::error::{LibraryError, Result};
use crate::loader::LineSource;

const TITLE: &str = "TITLE";
const AUTHOR: &str = "AUTHOR";

/// Mode words with no payload, rejected before the substring check
const BARE_MODES: [&str; 4] = ["TITLE", "TITLE ", "AUTHOR", "AUTHOR "];

/// What a remove directive matches against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RemoveMode {
    /// First record with an exactly matching title
    #[default]
    Title,
    /// Every record listing the author
    Author,
}

/// Removes records by title or by author
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveCmd {
    directive: String,
    mode: RemoveMode,
}

impl RemoveCmd {
    pub fn new(argument: Option<&str>) -> Result<Self> {
        construct(argument)
    }

    pub fn mode(&self) -> RemoveMode {
        self.mode
    }

    /// The full directive as given, mode word included
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Everything after the first whitespace run of the directive.
    ///
    /// Validation only checks for the mode word, so a directive such as
    /// `"XTITLEX"` is accepted yet carries no target.
    pub fn target(&self) -> Result<&str> {
        self.directive
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim_start())
            .ok_or_else(|| LibraryError::MissingRemoveTarget(self.directive.clone()))
    }

    fn remove_title<S>(
        &self,
        catalogue: &mut Catalogue<S>,
        title: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        if catalogue.remove_first_by_title(title).is_some() {
            info!(title, "Removed record");
            writeln!(out, "{title}: removed successfully.")?;
        } else {
            writeln!(out, "{title}: not found.")?;
        }
        Ok(())
    }

    fn remove_author<S>(
        &self,
        catalogue: &mut Catalogue<S>,
        author: &str,
        out: &mut dyn Write,
    ) -> Result<()> {
        let removed = catalogue.remove_all_by_author(author);
        info!(author, removed, "Removed records by author");
        writeln!(out, "{removed} books removed for author: {author}")?;
        Ok(())
    }
}

impl LibraryCommand for RemoveCmd {
    fn command_type(&self) -> CommandType {
        CommandType::Remove
    }

    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool> {
        let argument = require_argument(argument, "remove value")?;

        if BARE_MODES.contains(&argument) {
            return Ok(false);
        }

        self.mode = if argument.contains(TITLE) {
            RemoveMode::Title
        } else if argument.contains(AUTHOR) {
            RemoveMode::Author
        } else {
            return Ok(false);
        };
        self.directive = argument.to_string();
        Ok(true)
    }

    fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let target = self.target()?;
        match self.mode {
            RemoveMode::Title => self.remove_title(catalogue, target, out),
            RemoveMode::Author => self.remove_author(catalogue, target, out),
        }
    }
}
