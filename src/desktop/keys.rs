//! Recognized `[Desktop Entry]` keys and how each one is stored.

use std::fmt;

/// How a key's value is stored on a [`DesktopEntry`](super::DesktopEntry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain string, last occurrence wins.
    Scalar,
    /// `true` only on the exact literal `true`.
    Boolean,
    /// A `;`-separated list.
    List,
    /// A string with optional `[locale]` variants.
    Localized,
}

/// Every key the parser knows how to store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Type,
    Version,
    Name,
    GenericName,
    NoDisplay,
    Comment,
    Icon,
    Hidden,
    OnlyShowIn,
    NotShowIn,
    DBusActivatable,
    TryExec,
    Exec,
    Path,
    Terminal,
    Actions,
    MimeType,
    Categories,
    Implements,
    Keywords,
    StartupNotify,
    StartupWMClass,
    Url,
    PrefersNonDefaultGpu,
    SingleMainWindow,
}

impl Key {
    /// All keys in rendering order.
    pub const ALL: [Key; 25] = [
        Key::Type,
        Key::Version,
        Key::Name,
        Key::GenericName,
        Key::NoDisplay,
        Key::Comment,
        Key::Icon,
        Key::Hidden,
        Key::OnlyShowIn,
        Key::NotShowIn,
        Key::DBusActivatable,
        Key::TryExec,
        Key::Exec,
        Key::Path,
        Key::Terminal,
        Key::Actions,
        Key::MimeType,
        Key::Categories,
        Key::Implements,
        Key::Keywords,
        Key::StartupNotify,
        Key::StartupWMClass,
        Key::Url,
        Key::PrefersNonDefaultGpu,
        Key::SingleMainWindow,
    ];

    /// The key name as written in a desktop file.
    pub const fn as_str(self) -> &'static str {
        match self {
            Key::Type => "Type",
            Key::Version => "Version",
            Key::Name => "Name",
            Key::GenericName => "GenericName",
            Key::NoDisplay => "NoDisplay",
            Key::Comment => "Comment",
            Key::Icon => "Icon",
            Key::Hidden => "Hidden",
            Key::OnlyShowIn => "OnlyShowIn",
            Key::NotShowIn => "NotShowIn",
            Key::DBusActivatable => "DBusActivatable",
            Key::TryExec => "TryExec",
            Key::Exec => "Exec",
            Key::Path => "Path",
            Key::Terminal => "Terminal",
            Key::Actions => "Actions",
            Key::MimeType => "MimeType",
            Key::Categories => "Categories",
            Key::Implements => "Implements",
            Key::Keywords => "Keywords",
            Key::StartupNotify => "StartupNotify",
            Key::StartupWMClass => "StartupWMClass",
            Key::Url => "URL",
            Key::PrefersNonDefaultGpu => "PrefersNonDefaultGPU",
            Key::SingleMainWindow => "SingleMainWindow",
        }
    }

    /// How values for this key are stored.
    pub const fn kind(self) -> FieldKind {
        match self {
            Key::Type
            | Key::Version
            | Key::Icon
            | Key::TryExec
            | Key::Exec
            | Key::Path
            | Key::StartupWMClass
            | Key::Url => FieldKind::Scalar,
            Key::NoDisplay
            | Key::Hidden
            | Key::DBusActivatable
            | Key::Terminal
            | Key::StartupNotify
            | Key::PrefersNonDefaultGpu
            | Key::SingleMainWindow => FieldKind::Boolean,
            Key::OnlyShowIn
            | Key::NotShowIn
            | Key::Actions
            | Key::MimeType
            | Key::Categories
            | Key::Implements => FieldKind::List,
            Key::Name | Key::GenericName | Key::Comment | Key::Keywords => FieldKind::Localized,
        }
    }

    /// Look up a key by its exact, case-sensitive name.
    pub fn lookup(name: &str) -> Option<Key> {
        Key::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_roundtrips_every_key() {
        for key in Key::ALL {
            assert_eq!(Key::lookup(key.as_str()), Some(key));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(Key::lookup("name"), None);
        assert_eq!(Key::lookup("Url"), None);
        assert_eq!(Key::lookup("URL"), Some(Key::Url));
    }

    #[test]
    fn test_try_exec_spelling() {
        assert_eq!(Key::lookup("TryExec"), Some(Key::TryExec));
        assert_eq!(Key::lookup("TryeExec"), None);
    }

    #[test]
    fn test_unknown_keys() {
        assert_eq!(Key::lookup("X-Custom"), None);
        assert_eq!(Key::lookup(""), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Key::Type.kind(), FieldKind::Scalar);
        assert_eq!(Key::Terminal.kind(), FieldKind::Boolean);
        assert_eq!(Key::Categories.kind(), FieldKind::List);
        assert_eq!(Key::Keywords.kind(), FieldKind::Localized);
    }
}
