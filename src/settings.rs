//! Configuration loading and resolution.
//!
//! Settings come from an optional `config.toml` in the config directory,
//! any files named on the command line, and finally the CLI flags
//! themselves, with later sources winning.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

use binlift::app_dirs;
use binlift::ui::UiSettings;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    discovery: DiscoverySection,
    ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DiscoverySection {
    extra_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
    animation_interval_ms: Option<u64>,
    dialog_growth_steps: Option<u16>,
    max_filter_len: Option<usize>,
}

pub(crate) struct ResolvedSettings {
    pub(crate) extra_dirs: Vec<PathBuf>,
    pub(crate) ui: UiSettings,
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedSettings> {
    let mut builder = Config::builder();

    if !cli.no_config
        && let Ok(dir) = app_dirs::get_config_dir()
    {
        builder = builder.add_source(File::from(dir.join("config.toml")).required(false));
    }
    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    let raw: RawConfig = builder
        .build()
        .context("failed to load configuration")?
        .try_deserialize()
        .context("invalid configuration")?;

    Ok(resolve(raw, cli))
}

fn resolve(raw: RawConfig, cli: &CliArgs) -> ResolvedSettings {
    let mut ui = UiSettings::default();
    if let Some(ms) = raw.ui.animation_interval_ms {
        ui.animation_interval = Duration::from_millis(ms);
    }
    if let Some(steps) = raw.ui.dialog_growth_steps {
        ui.dialog_growth_steps = steps;
    }
    if let Some(len) = raw.ui.max_filter_len {
        ui.max_filter_len = len;
    }

    let mut extra_dirs = raw.discovery.extra_dirs;
    extra_dirs.extend(cli.dir.iter().cloned());

    ResolvedSettings { extra_dirs, ui }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn cli_with_dirs(dirs: &[&str]) -> CliArgs {
        CliArgs {
            config: Vec::new(),
            no_config: true,
            dir: dirs.iter().map(PathBuf::from).collect(),
            list: false,
        }
    }

    fn parse(toml: &str) -> RawConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn defaults_apply_when_the_config_is_empty() {
        let resolved = resolve(parse(""), &cli_with_dirs(&[]));
        assert!(resolved.extra_dirs.is_empty());
        assert_eq!(resolved.ui.animation_interval, Duration::from_millis(25));
        assert_eq!(resolved.ui.dialog_growth_steps, 4);
        assert_eq!(resolved.ui.max_filter_len, 64);
    }

    #[test]
    fn config_values_override_defaults() {
        let raw = parse(
            r#"
            [discovery]
            extra_dirs = ["/srv/tools"]

            [ui]
            animation_interval_ms = 40
            dialog_growth_steps = 6
            max_filter_len = 16
            "#,
        );
        let resolved = resolve(raw, &cli_with_dirs(&[]));
        assert_eq!(resolved.extra_dirs, vec![PathBuf::from("/srv/tools")]);
        assert_eq!(resolved.ui.animation_interval, Duration::from_millis(40));
        assert_eq!(resolved.ui.dialog_growth_steps, 6);
        assert_eq!(resolved.ui.max_filter_len, 16);
    }

    #[test]
    fn cli_directories_append_after_config_directories() {
        let raw = parse("[discovery]\nextra_dirs = [\"/srv/tools\"]\n");
        let resolved = resolve(raw, &cli_with_dirs(&["/home/me/bin"]));
        assert_eq!(
            resolved.extra_dirs,
            vec![PathBuf::from("/srv/tools"), PathBuf::from("/home/me/bin")]
        );
    }
}
