pub mod cli;
pub mod config;
pub mod desktop;
pub mod error;

pub use desktop::{DesktopEntry, EntryParser, Key, LocalizedValue};
pub use error::{EntryError, LookupError};

#[cfg(test)]
pub mod test_utils;
