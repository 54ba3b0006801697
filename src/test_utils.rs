//! Test utilities and fixture files.
//!
//! Only compiled in test builds.

use std::path::PathBuf;
use tempfile::TempDir;

/// A typical application entry with translations and an action group.
pub const SAMPLE_ENTRY: &str = "\
[Desktop Entry]
Version=1.5
Type=Application
Name=Firefox
Name[de]=Firefox Webbrowser
GenericName=Web Browser
Comment=Browse the World Wide Web
Comment[sr@Latn]=Pregledajte Web
Exec=firefox %u
TryExec=firefox
Icon=firefox
Terminal=false
Categories=Network;WebBrowser;
MimeType=text/html;x-scheme-handler/http;
Keywords=web;internet;
StartupNotify=true
StartupWMClass=firefox
Actions=new-window;
X-GNOME-FullName=Firefox Web Browser

[Desktop Action new-window]
Name=Open a New Window
Exec=firefox --new-window %u
";

/// Write `content` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned [`TempDir`] is dropped.
pub fn write_fixture(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    (dir, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_fixture() {
        let (_dir, path) = write_fixture("test.desktop", "Type=Application\n");
        assert!(path.is_file());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Type=Application\n");
    }

    #[test]
    fn test_fixture_removed_on_drop() {
        let (dir, path) = write_fixture("test.desktop", "");
        drop(dir);
        assert!(!path.exists());
    }
}
