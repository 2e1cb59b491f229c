use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{Context, Result};
use rubik3_core::ColorScheme;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default_settings.yaml");
const CONFIG_FILE_NAME: &str = "config.yaml";
const ENV_PREFIX: &str = "RUBIK3";

/// Effective configuration, after merging every source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub scramble_length: u32,
    pub strict_notation: bool,
    pub colors: ColorScheme,
    pub solver: SolverConfig,
}

/// How to reach the external solver.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SolverConfig {
    pub command: Option<String>,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Returns the path of the per-user config file, if the platform has a config
/// directory.
pub(crate) fn user_config_file() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "rubik3")?;
    Some(dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Loads configuration, in increasing order of precedence, from:
///
/// 1. built-in defaults
/// 2. the per-user config file, if it exists
/// 3. `explicit_file`, which must exist if given
/// 4. `RUBIK3_*` environment variables (use `__` to separate nested keys,
///    such as `RUBIK3_SOLVER__COMMAND`)
pub(crate) fn load(explicit_file: Option<&Path>) -> Result<Settings> {
    let mut builder = config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_SETTINGS_STR, CONFIG_FILE_FORMAT));

    match user_config_file() {
        Some(path) => {
            log::debug!("looking for user config at {}", path.display());
            builder = builder.add_source(
                config::File::from(path)
                    .format(CONFIG_FILE_FORMAT)
                    .required(false),
            );
        }
        None => log::debug!("no user config directory"),
    }

    if let Some(path) = explicit_file {
        builder = builder.add_source(
            config::File::from(path)
                .format(CONFIG_FILE_FORMAT)
                .required(true),
        );
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder
        .build()
        .and_then(|c| c.try_deserialize())
        .context("error loading configuration")?;

    if !settings.colors.is_complete() {
        log::warn!("color scheme does not map every color to a distinct face");
    }

    Ok(settings)
}
