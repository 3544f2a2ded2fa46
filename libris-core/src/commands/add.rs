use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{construct, require_argument, CommandType, LibraryCommand};
use crate::catalogue::Catalogue;
use crate::error::Result;
use crate::loader::LineSource;

/// Suffix a data file path must end with
const REQUIRED_SUFFIX: &str = ".csv";

/// Adds every record from a data file to the catalogue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddCmd {
    path: PathBuf,
}

impl AddCmd {
    pub fn new(argument: Option<&str>) -> Result<Self> {
        construct(argument)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LibraryCommand for AddCmd {
    fn command_type(&self) -> CommandType {
        CommandType::Add
    }

    fn parse_arguments(&mut self, argument: Option<&str>) -> Result<bool> {
        let argument = require_argument(argument, "path name")?;
        self.path = PathBuf::from(argument);
        Ok(argument.ends_with(REQUIRED_SUFFIX))
    }

    fn execute<S: LineSource>(
        &self,
        catalogue: &mut Catalogue<S>,
        _out: &mut dyn Write,
    ) -> Result<()> {
        info!("Adding records from {}", self.path.display());
        catalogue.load_data(&self.path)
    }
}
