//! Libris core library exports
//!
//! A book catalogue held in memory for a single run, mutated and queried
//! by one validated command at a time.

pub mod catalogue;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod loader;
pub mod record;

pub use catalogue::Catalogue;
pub use commands::{Command, CommandType};
pub use dispatcher::dispatch;
pub use error::{ErrorKind, LibraryError, Result};
pub use record::Record;
