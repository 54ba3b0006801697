//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// How group headers such as `[Desktop Action new]` are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupMode {
    /// Only keys before the first header or inside `[Desktop Entry]` are read.
    #[default]
    Tracked,
    /// Skip any line containing `[Desktop Entry]` and read every other line,
    /// whatever group it is in.
    Legacy,
}

/// Parser configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Group header handling.
    pub group_mode: GroupMode,
    /// Preferred locales for resolving localized keys, most preferred first.
    pub locales: Vec<String>,
    /// Skip blank lines and `#` comments without reporting them.
    pub skip_comments: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            group_mode: GroupMode::Tracked,
            locales: Vec::new(),
            skip_comments: true,
        }
    }
}

impl ParserConfig {
    /// The configured locales as string slices.
    pub fn locale_refs(&self) -> Vec<&str> {
        self.locales.iter().map(String::as_str).collect()
    }
}
