use std::io::Write;

use super::{construct, require_argument, CommandType, LibraryCommand, EMPTY_CATALOGUE_MESSAGE};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::loader::LineSource;

/// How much of each record LIST prints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListMode {
    /// Titles only
    #[default]
    Short,
    /// Full text form followed by a blank line
    Long,
}

/// Prints the catalogue in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCmd {
    mode: ListMode,
}

impl ListCmd {
    pub fn new(argument: Option<&str>) -> Result<Self> {
        construct(argument)
    }

    pub fn mode(&self) -> ListMode {
        self.mode
    }
}

impl LibraryCommand for ListCmd {
    fn command_type(&self) -> CommandType {
        CommandType::List
    }

    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool> {
        self.mode = match require_argument(argument, "list type")? {
            "short" | "" => ListMode::Short,
            "long" => ListMode::Long,
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

        writeln!(out, "{} books in library:", catalogue.len())?;
        for record in catalogue.records() {
            match self.mode {
                ListMode::Short => writeln!(out, "{}", record.title())?,
                ListMode::Long => writeln!(out, "{record}\n")?,
            }
        }
        Ok(())
    }
}
