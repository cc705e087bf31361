use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use corridor_core::LayoutParams;
use corridor_world::DEFAULT_LAYOUT_SEED;
use serde::Deserialize;

const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// Contents of a TOML run configuration.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    version: u32,
    seed: Option<u64>,
    #[serde(default)]
    layout: LayoutParams,
    #[serde(default)]
    visibility: VisibilityConfig,
}

#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct VisibilityConfig {
    hide_all: bool,
    toggle: Vec<String>,
}

/// Values supplied on the command line that take precedence over the file.
#[derive(Debug, Default)]
pub(crate) struct Overrides {
    pub(crate) size: Option<u32>,
    pub(crate) border_offset: Option<u32>,
    pub(crate) center_radius: Option<u32>,
    pub(crate) min_straight: Option<u32>,
    pub(crate) seed: Option<u64>,
    pub(crate) hide_all: bool,
    pub(crate) toggles: Vec<String>,
}

/// Fully resolved settings for one run.
#[derive(Debug, PartialEq)]
pub(crate) struct RunSettings {
    pub(crate) params: LayoutParams,
    pub(crate) seed: u64,
    pub(crate) hide_all: bool,
    pub(crate) toggles: Vec<String>,
}

impl RunSettings {
    /// Layers command-line values over the optional configuration file.
    ///
    /// File toggles run before command-line toggles.
    pub(crate) fn resolve(file: Option<ConfigFile>, overrides: Overrides) -> Self {
        let file = file.unwrap_or_default();
        let layout = file.layout;

        let params = LayoutParams::new(
            overrides.size.unwrap_or(layout.size),
            overrides.border_offset.unwrap_or(layout.border_offset),
            overrides.center_radius.unwrap_or(layout.center_radius),
            overrides.min_straight.unwrap_or(layout.min_straight),
        );

        let mut toggles = file.visibility.toggle;
        toggles.extend(overrides.toggles);

        Self {
            params,
            seed: overrides.seed.or(file.seed).unwrap_or(DEFAULT_LAYOUT_SEED),
            hide_all: overrides.hide_all || file.visibility.hide_all,
            toggles,
        }
    }
}

pub(crate) fn load(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration at {}", path.display()))?;
    parse(&contents).with_context(|| format!("invalid configuration at {}", path.display()))
}

fn parse(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile =
        toml::from_str(contents).context("failed to parse configuration toml contents")?;
    if config.version != SUPPORTED_CONFIG_VERSION {
        bail!(
            "unsupported configuration version {}; expected {}",
            config.version,
            SUPPORTED_CONFIG_VERSION
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_layout_tables_keep_defaults() {
        let config = parse(
            r#"
            version = 1
            seed = 7

            [layout]
            size = 48
        "#,
        )
        .expect("configuration should parse");

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.layout, LayoutParams::new(48, 3, 10, 5));
        assert_eq!(config.visibility, VisibilityConfig::default());
    }

    #[test]
    fn unsupported_versions_are_rejected() {
        let result = parse("version = 2");
        assert!(result.is_err(), "version 2 must be rejected");
    }

    #[test]
    fn missing_versions_are_rejected() {
        let result = parse("seed = 3");
        assert!(result.is_err(), "configuration without a version must fail");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = parse(
            r#"
            version = 1

            [layout]
            size = 48
            corridors = 3
        "#,
        );
        assert!(result.is_err(), "unknown layout keys must be rejected");
    }

    #[test]
    fn command_line_values_take_precedence() {
        let file = parse(
            r#"
            version = 1
            seed = 7

            [layout]
            size = 48
            center_radius = 6

            [visibility]
            hide_all = true
            toggle = ["Alpha"]
        "#,
        )
        .expect("configuration should parse");

        let settings = RunSettings::resolve(
            Some(file),
            Overrides {
                size: Some(40),
                seed: Some(9),
                toggles: vec!["Bravo".to_owned()],
                ..Overrides::default()
            },
        );

        assert_eq!(
            settings,
            RunSettings {
                params: LayoutParams::new(40, 3, 6, 5),
                seed: 9,
                hide_all: true,
                toggles: vec!["Alpha".to_owned(), "Bravo".to_owned()],
            }
        );
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = RunSettings::resolve(None, Overrides::default());

        assert_eq!(settings.params, LayoutParams::default());
        assert_eq!(settings.seed, DEFAULT_LAYOUT_SEED);
        assert!(!settings.hide_all);
        assert!(settings.toggles.is_empty());
    }
}
