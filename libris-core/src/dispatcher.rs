//! Turns a command name and raw argument into a validated [`Command`]

use tracing::debug;

use crate::commands::{AddCmd, Command, CommandType, GroupCmd, ListCmd, RemoveCmd, SearchCmd};
use crate::error::Result;

/// Select the command named `name` and validate `argument` for it.
///
/// Unknown names and rejected arguments both fail before anything runs.
pub fn dispatch(name: &str, argument: Option<&str>) -> Result<Command> {
    let command_type: CommandType = name.parse()?;
    debug!(command = %command_type, "Dispatching");

    Ok(match command_type {
        CommandType::Add => Command::Add(AddCmd::new(argument)?),
        CommandType::List => Command::List(ListCmd::new(argument)?),
        CommandType::Search => Command::Search(SearchCmd::new(argument)?),
        CommandType::Remove => Command::Remove(RemoveCmd::new(argument)?),
        CommandType::Group => Command::Group(GroupCmd::new(argument)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, LibraryError};

    #[test]
    fn test_dispatch_selects_variant() {
        assert!(matches!(dispatch("ADD", Some("x.csv")), Ok(Command::Add(_))));
        assert!(matches!(dispatch("LIST", Some("")), Ok(Command::List(_))));
        assert!(matches!(dispatch("SEARCH", Some("x")), Ok(Command::Search(_))));
        assert!(matches!(
            dispatch("REMOVE", Some("TITLE x")),
            Ok(Command::Remove(_))
        ));
        assert!(matches!(dispatch("GROUP", Some("AUTHOR")), Ok(Command::Group(_))));
    }

    #[test]
    fn test_unknown_name() {
        let err = dispatch("list", Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(matches!(err, LibraryError::UnknownCommand(name) if name == "list"));
    }

    #[test]
    fn test_unknown_name_checked_before_argument() {
        let err = dispatch("FETCH", None).unwrap_err();
        assert!(matches!(err, LibraryError::UnknownCommand(_)));
    }

    #[test]
    fn test_validation_failures_surface() {
        let err = dispatch("ADD", Some("data.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = dispatch("GROUP", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullReference);
    }
}
