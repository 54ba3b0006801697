pub mod entry;
pub mod keys;
pub mod locale;
pub mod localized;
pub mod parser;

pub use entry::{DesktopEntry, FieldRef, ValidationWarning};
pub use keys::{FieldKind, Key};
pub use locale::locale_candidates;
pub use localized::{FieldValue, LocalizedValue, split_list};
pub use parser::{Diagnostic, DiagnosticKind, EntryParser, ParseOutcome};
