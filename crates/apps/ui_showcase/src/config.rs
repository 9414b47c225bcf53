use std::fs;
use std::path::Path;

use semantic_markup::HtmlOptions;
use semantic_ui::{ToggleEvent, Transition};
use serde::{Deserialize, Serialize};

use crate::ShowcaseError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Showcase page settings. Every field is optional in the TOML file.
///
/// ```toml
/// title = "Widgets"
/// transition = "fade"
/// toggle_event = "hover"
///
/// [html]
/// pretty = true
/// indent = 4
/// ```
pub struct ShowcaseConfig {
    /// Page header text.
    pub title: String,
    /// Drawer animation for every dropdown on the page.
    pub transition: Transition,
    /// Interaction that opens the dropdowns.
    pub toggle_event: ToggleEvent,
    /// HTML output options.
    pub html: HtmlOptions,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: "Semantic UI Showcase".to_string(),
            transition: Transition::default(),
            toggle_event: ToggleEvent::default(),
            html: HtmlOptions::default(),
        }
    }
}

impl ShowcaseConfig {
    /// Decodes a TOML document.
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Reads and decodes the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ShowcaseError> {
        let text = fs::read_to_string(path).map_err(|source| ShowcaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ShowcaseError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use pretty_assertions::assert_eq;

    use super::*;

    fn unique_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "showcase-config-{}-{name}",
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("time")
                .as_nanos()
        ))
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = ShowcaseConfig::parse("toggle_event = \"hover\"\n").expect("parse");
        assert_eq!(
            config,
            ShowcaseConfig {
                toggle_event: ToggleEvent::OnHover,
                ..ShowcaseConfig::default()
            }
        );
    }

    #[test]
    fn full_document_round_trips_through_toml() {
        let config = ShowcaseConfig {
            title: "Widgets".to_string(),
            transition: Transition::Fade,
            toggle_event: ToggleEvent::OnFocus,
            html: HtmlOptions {
                pretty: true,
                indent: 4,
            },
        };
        let text = toml::to_string(&config).expect("encode");
        assert_eq!(ShowcaseConfig::parse(&text).expect("decode"), config);
    }

    #[test]
    fn load_reports_missing_and_invalid_files() {
        let missing = unique_path("missing.toml");
        let err = ShowcaseConfig::load(&missing).expect_err("missing file");
        assert!(matches!(err, ShowcaseError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));

        let broken = unique_path("broken.toml");
        fs::write(&broken, "transition = [").expect("write config");
        let err = ShowcaseConfig::load(&broken).expect_err("invalid toml");
        assert!(matches!(err, ShowcaseError::Config { .. }));
        assert!(err.to_string().contains("broken.toml"));
        let _ = fs::remove_file(broken);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert!(ShowcaseConfig::parse("transition = \"spin\"\n").is_err());
    }
}
