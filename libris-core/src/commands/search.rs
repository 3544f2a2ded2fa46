use std::io::Write;

use tracing::debug;

use super::{construct, require_argument, CommandType, LibraryCommand};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::loader::LineSource;

/// Prints every title containing a single-word term, ignoring case
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCmd {
    term: String,
}

impl SearchCmd {
    pub fn new(argument: Option<&str>) -> Result<Self> {
        construct(argument)
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl LibraryCommand for SearchCmd {
    fn command_type(&self) -> CommandType {
        CommandType::Search
    }

    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool> {
        let argument = require_argument(argument, "search value")?;
        if argument.is_empty() || argument.contains(' ') {
            return Ok(false);
        }
        self.term = argument.to_string();
        Ok(true)
    }

    fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        out: &mut dyn Write,
    ) -> Result<()> {
        let needle = self.term.to_lowercase();
        let mut hits = 0usize;

        for record in catalogue.records() {
            if record.title().to_lowercase().contains(&needle) {
                hits += 1;
                writeln!(out, "{}", record.title())?;
            }
        }

        debug!(term = %self.term, hits, "Search finished");
        if hits == 0 {
            writeln!(out, "No hits found for search term: {}", self.term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{catalogue_of, record, run};
    use crate::commands::Command;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_argument_validation() {
        assert_eq!(SearchCmd::new(Some("Farm")).unwrap().term(), "Farm");
        // only the space character disqualifies a term
        assert!(SearchCmd::new(Some("a\tb")).is_ok());

        for rejected in ["", " ", "animal farm", "farm "] {
            let err = SearchCmd::new(Some(rejected)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{rejected:?}");
        }
        assert_eq!(
            SearchCmd::new(None).unwrap_err().kind(),
            ErrorKind::NullReference
        );
    }

    #[test]
    fn test_case_insensitive_substring_in_catalogue_order() {
        let cmd = Command::Search(SearchCmd::new(Some("fArM")).unwrap());
        let mut catalogue = catalogue_of(vec![
            record("Animal Farm", &["George Orwell"]),
            record("Dune", &["Frank Herbert"]),
            record("Farmer Giles of Ham", &["J.R.R. Tolkien"]),
        ]);

        assert_eq!(
            run(&cmd, &mut catalogue),
            "Animal Farm\nFarmer Giles of Ham\n"
        );
    }

    #[test]
    fn test_no_hits_message() {
        let cmd = Command::Search(SearchCmd::new(Some("Ulysses")).unwrap());
        let mut catalogue = catalogue_of(vec![record("Dune", &["Frank Herbert"])]);
        assert_eq!(
            run(&cmd, &mut catalogue),
            "No hits found for search term: Ulysses\n"
        );

        let mut empty = catalogue_of(Vec::new());
        assert_eq!(
            run(&cmd, &mut empty),
            "No hits found for search term: Ulysses\n"
        );
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let cmd = Command::Search(SearchCmd::new(Some("e")).unwrap());
        let mut catalogue = catalogue_of(vec![
            record("Emma", &["Jane Austen"]),
            record("Dune", &["Frank Herbert"]),
            record("Ivanhoe", &["Walter Scott"]),
        ]);

        let first = run(&cmd, &mut catalogue);
        let second = run(&cmd, &mut catalogue);
        assert_eq!(first, second);
        assert_eq!(catalogue.len(), 3);
    }
}
