use crate::desktop::keys::{FieldKind, Key};
use crate::desktop::localized::{LocalizedValue, split_list};
use crate::error::EntryError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// `Type` values defined by the desktop entry format.
const KNOWN_TYPES: [&str; 3] = ["Application", "Link", "Directory"];

/// A parsed `.desktop` file.
///
/// Every field starts out unset (`None`, empty or `false`) and is filled in
/// by the parser one line at a time. Later lines overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesktopEntry {
    source: Option<PathBuf>,
    #[serde(rename = "type")]
    entry_type: Option<String>,
    version: Option<String>,
    name: LocalizedValue,
    generic_name: LocalizedValue,
    no_display: bool,
    comment: LocalizedValue,
    icon: Option<String>,
    hidden: bool,
    only_show_in: Vec<String>,
    not_show_in: Vec<String>,
    dbus_activatable: bool,
    try_exec: Option<String>,
    exec: Option<String>,
    path: Option<String>,
    terminal: bool,
    actions: Vec<String>,
    mime_type: Vec<String>,
    categories: Vec<String>,
    implements: Vec<String>,
    keywords: LocalizedValue<Vec<String>>,
    startup_notify: bool,
    startup_wm_class: Option<String>,
    url: Option<String>,
    prefers_non_default_gpu: bool,
    single_main_window: bool,
}

/// Borrowed view of one field, tagged by how it is stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldRef<'a> {
    Scalar(Option<&'a str>),
    Boolean(bool),
    List(&'a [String]),
    Localized(&'a LocalizedValue),
    LocalizedList(&'a LocalizedValue<Vec<String>>),
}

impl FieldRef<'_> {
    /// The storage kind of the referenced field.
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldRef::Scalar(_) => FieldKind::Scalar,
            FieldRef::Boolean(_) => FieldKind::Boolean,
            FieldRef::List(_) => FieldKind::List,
            FieldRef::Localized(_) | FieldRef::LocalizedList(_) => FieldKind::Localized,
        }
    }
}

/// Non-fatal problem found when validating a parsed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The key that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

impl ValidationWarning {
    fn new(key: Key, message: impl Into<String>) -> Self {
        Self {
            field: key.as_str().to_string(),
            message: message.into(),
        }
    }
}

fn parse_bool(value: &str) -> bool {
    value == "true"
}

impl Default for DesktopEntry {
    fn default() -> Self {
        Self {
            source: None,
            entry_type: None,
            version: None,
            name: LocalizedValue::new(Key::Name.as_str()),
            generic_name: LocalizedValue::new(Key::GenericName.as_str()),
            no_display: false,
            comment: LocalizedValue::new(Key::Comment.as_str()),
            icon: None,
            hidden: false,
            only_show_in: Vec::new(),
            not_show_in: Vec::new(),
            dbus_activatable: false,
            try_exec: None,
            exec: None,
            path: None,
            terminal: false,
            actions: Vec::new(),
            mime_type: Vec::new(),
            categories: Vec::new(),
            implements: Vec::new(),
            keywords: LocalizedValue::new(Key::Keywords.as_str()),
            startup_notify: false,
            startup_wm_class: None,
            url: None,
            prefers_non_default_gpu: false,
            single_main_window: false,
        }
    }
}

impl DesktopEntry {
    /// Load a desktop entry from `path` with the default parser settings.
    ///
    /// Fails with [`EntryError::NotFound`] if the path is not an existing
    /// file and [`EntryError::InvalidFormat`] if it does not end in
    /// `.desktop`. Malformed or unknown lines are logged and skipped.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, EntryError> {
        crate::desktop::parser::EntryParser::default()
            .parse_file(path)
            .map(|outcome| outcome.entry)
    }

    /// An empty entry remembering the file it was read from.
    pub fn with_source(source: impl Into<PathBuf>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// The file this entry was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Set a field from its textual value.
    ///
    /// Localized keys receive the value as their default.
    pub fn set(&mut self, key: Key, value: &str) {
        let scalar = || Some(value.to_string());

        match key {
            Key::Type => self.entry_type = scalar(),
            Key::Version => self.version = scalar(),
            Key::Icon => self.icon = scalar(),
            Key::TryExec => self.try_exec = scalar(),
            Key::Exec => self.exec = scalar(),
            Key::Path => self.path = scalar(),
            Key::StartupWMClass => self.startup_wm_class = scalar(),
            Key::Url => self.url = scalar(),
            Key::NoDisplay => self.no_display = parse_bool(value),
            Key::Hidden => self.hidden = parse_bool(value),
            Key::DBusActivatable => self.dbus_activatable = parse_bool(value),
            Key::Terminal => self.terminal = parse_bool(value),
            Key::StartupNotify => self.startup_notify = parse_bool(value),
            Key::PrefersNonDefaultGpu => self.prefers_non_default_gpu = parse_bool(value),
            Key::SingleMainWindow => self.single_main_window = parse_bool(value),
            Key::OnlyShowIn => self.only_show_in = split_list(value),
            Key::NotShowIn => self.not_show_in = split_list(value),
            Key::Actions => self.actions = split_list(value),
            Key::MimeType => self.mime_type = split_list(value),
            Key::Categories => self.categories = split_list(value),
            Key::Implements => self.implements = split_list(value),
            Key::Name => self.name.set(value.to_string(), None),
            Key::GenericName => self.generic_name.set(value.to_string(), None),
            Key::Comment => self.comment.set(value.to_string(), None),
            Key::Keywords => self.keywords.set(split_list(value), None),
        }
    }

    /// Apply one classified line.
    ///
    /// Localized keys get the untouched line so they can pick up the
    /// `[locale]` subscript themselves. Everything else takes the trimmed
    /// value.
    pub(crate) fn apply_line(&mut self, key: Key, line: &str, value: &str) {
        match key {
            Key::Name => {
                self.name.apply_line(line);
            }
            Key::GenericName => {
                self.generic_name.apply_line(line);
            }
            Key::Comment => {
                self.comment.apply_line(line);
            }
            Key::Keywords => {
                self.keywords.apply_line(line);
            }
            _ => self.set(key, value),
        }
    }

    /// Borrow any field by key.
    pub fn field(&self, key: Key) -> FieldRef<'_> {
        match key {
            Key::Type => FieldRef::Scalar(self.entry_type.as_deref()),
            Key::Version => FieldRef::Scalar(self.version.as_deref()),
            Key::Icon => FieldRef::Scalar(self.icon.as_deref()),
            Key::TryExec => FieldRef::Scalar(self.try_exec.as_deref()),
            Key::Exec => FieldRef::Scalar(self.exec.as_deref()),
            Key::Path => FieldRef::Scalar(self.path.as_deref()),
            Key::StartupWMClass => FieldRef::Scalar(self.startup_wm_class.as_deref()),
            Key::Url => FieldRef::Scalar(self.url.as_deref()),
            Key::NoDisplay => FieldRef::Boolean(self.no_display),
            Key::Hidden => FieldRef::Boolean(self.hidden),
            Key::DBusActivatable => FieldRef::Boolean(self.dbus_activatable),
            Key::Terminal => FieldRef::Boolean(self.terminal),
            Key::StartupNotify => FieldRef::Boolean(self.startup_notify),
            Key::PrefersNonDefaultGpu => FieldRef::Boolean(self.prefers_non_default_gpu),
            Key::SingleMainWindow => FieldRef::Boolean(self.single_main_window),
            Key::OnlyShowIn => FieldRef::List(&self.only_show_in),
            Key::NotShowIn => FieldRef::List(&self.not_show_in),
            Key::Actions => FieldRef::List(&self.actions),
            Key::MimeType => FieldRef::List(&self.mime_type),
            Key::Categories => FieldRef::List(&self.categories),
            Key::Implements => FieldRef::List(&self.implements),
            Key::Name => FieldRef::Localized(&self.name),
            Key::GenericName => FieldRef::Localized(&self.generic_name),
            Key::Comment => FieldRef::Localized(&self.comment),
            Key::Keywords => FieldRef::LocalizedList(&self.keywords),
        }
    }

    pub fn entry_type(&self) -> Option<&str> {
        self.entry_type.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn name(&self) -> &LocalizedValue {
        &self.name
    }

    pub fn name_mut(&mut self) -> &mut LocalizedValue {
        &mut self.name
    }

    pub fn generic_name(&self) -> &LocalizedValue {
        &self.generic_name
    }

    pub fn generic_name_mut(&mut self) -> &mut LocalizedValue {
        &mut self.generic_name
    }

    pub fn no_display(&self) -> bool {
        self.no_display
    }

    pub fn comment(&self) -> &LocalizedValue {
        &self.comment
    }

    pub fn comment_mut(&mut self) -> &mut LocalizedValue {
        &mut self.comment
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn only_show_in(&self) -> &[String] {
        &self.only_show_in
    }

    pub fn not_show_in(&self) -> &[String] {
        &self.not_show_in
    }

    pub fn dbus_activatable(&self) -> bool {
        self.dbus_activatable
    }

    pub fn try_exec(&self) -> Option<&str> {
        self.try_exec.as_deref()
    }

    pub fn exec(&self) -> Option<&str> {
        self.exec.as_deref()
    }

    /// Working directory from the `Path` key.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn terminal(&self) -> bool {
        self.terminal
    }

    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    pub fn mime_type(&self) -> &[String] {
        &self.mime_type
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn implements(&self) -> &[String] {
        &self.implements
    }

    pub fn keywords(&self) -> &LocalizedValue<Vec<String>> {
        &self.keywords
    }

    pub fn keywords_mut(&mut self) -> &mut LocalizedValue<Vec<String>> {
        &mut self.keywords
    }

    pub fn startup_notify(&self) -> bool {
        self.startup_notify
    }

    pub fn startup_wm_class(&self) -> Option<&str> {
        self.startup_wm_class.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn prefers_non_default_gpu(&self) -> bool {
        self.prefers_non_default_gpu
    }

    pub fn single_main_window(&self) -> bool {
        self.single_main_window
    }

    /// Whether the entry carries the keys every desktop file must have:
    /// a `Type` and a non-empty default `Name`.
    pub fn is_valid(&self) -> bool {
        self.entry_type.is_some() && self.name.default_value().is_some_and(|n| !n.is_empty())
    }

    /// Check the entry against the desktop entry rules.
    ///
    /// This checks for:
    /// - Missing `Type` or an unknown `Type` value
    /// - Missing or empty default `Name`
    /// - `Link` entries without `URL`
    /// - `Application` entries without `Exec` that are not D-Bus activatable
    pub fn validate(&self) -> Vec<ValidationWarning> {
        let mut warnings = vec![];

        match self.entry_type.as_deref() {
            None => warnings.push(ValidationWarning::new(Key::Type, "Required key is missing")),
            Some(kind) if !KNOWN_TYPES.contains(&kind) => warnings.push(ValidationWarning::new(
                Key::Type,
                format!("Unknown type '{}'", kind),
            )),
            _ => {}
        }

        match self.name.default_value() {
            None => warnings.push(ValidationWarning::new(Key::Name, "Required key is missing")),
            Some(name) if name.is_empty() => {
                warnings.push(ValidationWarning::new(Key::Name, "Default name is empty"))
            }
            _ => {}
        }

        match self.entry_type.as_deref() {
            Some("Link") if self.url.is_none() => warnings.push(ValidationWarning::new(
                Key::Url,
                "Link entries must have a URL",
            )),
            Some("Application") if self.exec.is_none() && !self.dbus_activatable => {
                warnings.push(ValidationWarning::new(
                    Key::Exec,
                    "Application entries need Exec unless DBusActivatable is set",
                ))
            }
            _ => {}
        }

        warnings
    }

    /// Fixed-order, multi-line summary of every field for logging.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DesktopEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in Key::ALL.into_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match self.field(key) {
                FieldRef::Scalar(value) => write!(f, "{}: {}", key, value.unwrap_or("None"))?,
                FieldRef::Boolean(value) => write!(f, "{}: {}", key, value)?,
                FieldRef::List(values) => write!(f, "{}: {:?}", key, values)?,
                FieldRef::Localized(value) => write!(f, "{}", value)?,
                FieldRef::LocalizedList(value) => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}
