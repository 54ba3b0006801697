use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::config::{self, GroupMode, ParserConfig};
use crate::desktop::{DesktopEntry, EntryParser};

#[derive(Parser, Debug)]
#[command(name = "zentry")]
#[command(about = "Parse and inspect freedesktop .desktop files")]
pub struct Cli {
    /// Desktop files to parse
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,

    /// Preferred locale for localized keys (repeatable, overrides the config file)
    #[arg(long = "locale", value_name = "TAG")]
    pub locales: Vec<String>,

    /// Read keys from every group instead of only [Desktop Entry]
    #[arg(long)]
    pub legacy_groups: bool,

    /// Report missing or inconsistent required keys
    #[arg(long)]
    pub validate: bool,

    /// Config file to use instead of ~/.config/zentry/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command line overrides.
    pub fn parser_config(&self) -> Result<ParserConfig> {
        let mut config = match &self.config {
            Some(path) => config::load_config_from(path)
                .with_context(|| format!("Failed to load config {:?}", path))?,
            None => config::parser_config(),
        };

        if !self.locales.is_empty() {
            config.locales = self.locales.clone();
        }
        if self.legacy_groups {
            config.group_mode = GroupMode::Legacy;
        }

        Ok(config)
    }
}

/// Initialize logging to stderr.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // By default, only log from zentry crate at info level
    // Users can override with RUST_LOG environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("zentry=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Format one entry for display.
///
/// With preferred locales, the resolved localized values are listed ahead
/// of the full field dump.
pub fn format_entry(entry: &DesktopEntry, locales: &[&str], validate: bool) -> String {
    let mut out = String::new();

    if let Some(source) = entry.source() {
        out.push_str(&format!("# {}\n", source.display()));
    }

    if !locales.is_empty() {
        let name = entry.name().resolve(locales).map_or("None", String::as_str);
        let comment = entry.comment().resolve(locales).map_or("None", String::as_str);
        out.push_str(&format!("Resolved Name: {}\n", name));
        out.push_str(&format!("Resolved Comment: {}\n", comment));
    }

    out.push_str(&entry.render());
    out.push('\n');

    if validate {
        for warning in entry.validate() {
            out.push_str(&format!("warning: {}: {}\n", warning.field, warning.message));
        }
    }

    out
}

/// Parse every file named on the command line and print it.
///
/// Files that fail to load are logged and skipped; the command fails at the
/// end if any did.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.parser_config()?;
    let parser = EntryParser::new(&config);
    let locales = config.locale_refs();

    let mut entries = Vec::new();
    let mut failed = 0;

    for path in &cli.files {
        match parser.parse_file(path) {
            Ok(outcome) => {
                if !outcome.diagnostics.is_empty() {
                    tracing::info!(
                        skipped = outcome.diagnostics.len(),
                        "Skipped lines in {:?}",
                        path
                    );
                }
                entries.push(outcome.entry);
            }
            Err(e) => {
                tracing::error!("{}", e);
                failed += 1;
            }
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            println!("{}", format_entry(entry, &locales, cli.validate));
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} files could not be parsed", failed, cli.files.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desktop::Key;
    use crate::test_utils::{SAMPLE_ENTRY, write_fixture};

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from([
            "zentry",
            "--json",
            "--locale",
            "de",
            "--locale",
            "sr@Latn",
            "a.desktop",
            "b.desktop",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.locales, vec!["de", "sr@Latn"]);
        assert_eq!(cli.files.len(), 2);
    }

    #[test]
    fn test_files_required() {
        assert!(Cli::try_parse_from(["zentry"]).is_err());
    }

    #[test]
    fn test_overrides_apply_to_config() {
        let (_dir, path) = write_fixture("config.toml", "locales = [\"fr\"]\n");
        let cli = Cli::try_parse_from([
            "zentry",
            "--config",
            path.to_str().unwrap(),
            "--legacy-groups",
            "--locale",
            "de",
            "a.desktop",
        ])
        .unwrap();

        let config = cli.parser_config().unwrap();
        assert_eq!(config.group_mode, GroupMode::Legacy);
        assert_eq!(config.locales, vec!["de"]);
    }

    #[test]
    fn test_bad_config_file_fails() {
        let (_dir, path) = write_fixture("config.toml", "group_mode = 3\n");
        let cli =
            Cli::try_parse_from(["zentry", "--config", path.to_str().unwrap(), "a.desktop"])
                .unwrap();
        assert!(cli.parser_config().is_err());
    }

    #[test]
    fn test_format_entry_with_locales() {
        let outcome = EntryParser::default().parse_str(SAMPLE_ENTRY);
        let text = format_entry(&outcome.entry, &["de_DE.UTF-8"], false);

        assert!(text.contains("Resolved Name: Firefox Webbrowser"));
        assert!(text.contains("Resolved Comment: Browse the World Wide Web"));
        assert!(text.contains("Exec: firefox %u"));
    }

    #[test]
    fn test_format_entry_validation() {
        let mut entry = DesktopEntry::default();
        entry.set(Key::Type, "Application");
        let text = format_entry(&entry, &[], true);

        assert!(!text.contains("Resolved"));
        assert!(text.contains("warning: Name:"));
    }

    #[test]
    fn test_run_reports_failures() {
        let (_dir, path) = write_fixture("firefox.desktop", SAMPLE_ENTRY);
        let cli = Cli::try_parse_from([
            "zentry",
            path.to_str().unwrap(),
            "/nonexistent/missing.desktop",
        ])
        .unwrap();

        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("1 of 2"));
    }
}
