//! # VetChat Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the configuration system for VetChat, handling
//! loading, merging, validation, and access to configuration data. It supports
//! a multi-level approach that combines defaults, user settings, and
//! project-specific overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file given with `--config` (or `VETCHAT_CONFIG`). When
//!    present, it is the *only* file read.
//! 2. Project-specific `.vetchat.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 3. User-specific `~/.config/vetchat/config.toml`
//! 4. Default values defined in the code
//!
//! Each key is resolved on its own: the highest source that sets it wins,
//! even when it sets the default value. A `[[phrases]]` list replaces the
//! built-in phrase table (or a lower file's list) as a whole. Phrase lists are never merged entry by entry, because the order of
//! the list decides which reply wins.
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! [bot]
//! name = "VetBot"
//! fallback = "Sorry, I'm still learning. Please consult a veterinarian."
//! typing_delay_ms = 1500
//!
//! [server]
//! port = 9000
//!
//! [[phrases]]
//! phrase = "fever"
//! response = "Fever may indicate infection. Ensure proper hydration and consult a vet."
//!
//! [[phrases]]
//! phrase = "sick"
//! response = "Please bring the animal for a checkup."
//! ```
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config(None)?;
//! let responder = cfg.build_responder()?;
//! println!("{}", responder.respond("hello"));
//! ```
//!
use crate::core::error::{Result, VetchatError};
use crate::responder::defaults::{DEFAULT_BOT_NAME, DEFAULT_FALLBACK, DEFAULT_USER_LABEL};
use crate::responder::{PhraseEntry, PhraseTable, Responder};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Effective configuration after merging files and applying defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Config {
    pub bot: BotConfig,
    pub server: ServerDefaults,
    /// Replacement phrase table, in match order. Empty means "use the built-in table".
    pub phrases: Vec<PhraseEntry>,
}

/// How the bot presents itself, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    /// Label printed in front of bot replies.
    pub name: String,
    /// Label printed in front of the user's messages.
    pub user_label: String,
    /// Reply when no phrase matches. Must not be empty.
    pub fallback: String,
    /// Simulated "typing..." pause in `vetchat chat`, in milliseconds.
    pub typing_delay_ms: u64,
}

/// One configuration file as written on disk. Every key is optional so that
/// a key set in a project file wins even when it repeats the default value.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
struct ConfigFile {
    #[serde(default)]
    bot: BotFile,
    #[serde(default)]
    server: ServerDefaults,
    phrases: Option<Vec<PhraseEntry>>,
}

/// The `[bot]` table of one file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct BotFile {
    name: Option<String>,
    user_label: Option<String>,
    fallback: Option<String>,
    typing_delay_ms: Option<u64>,
}

/// Defaults for `vetchat srv` (`[server]`). Command-line flags win over these.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ServerDefaults {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub enable_cors: Option<bool>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_BOT_NAME.to_string(),
            user_label: DEFAULT_USER_LABEL.to_string(),
            fallback: DEFAULT_FALLBACK.to_string(),
            typing_delay_ms: 0,
        }
    }
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let defaults = BotConfig::default();
        Self {
            bot: BotConfig {
                name: file.bot.name.unwrap_or(defaults.name),
                user_label: file.bot.user_label.unwrap_or(defaults.user_label),
                fallback: file.bot.fallback.unwrap_or(defaults.fallback),
                typing_delay_ms: file.bot.typing_delay_ms.unwrap_or(defaults.typing_delay_ms),
            },
            server: file.server,
            phrases: file.phrases.unwrap_or_default(),
        }
    }
}

impl Config {
    /// # Build Phrase Table (`phrase_table`)
    ///
    /// The configured `[[phrases]]`, or the built-in table when none are configured.
    pub fn phrase_table(&self) -> Result<PhraseTable> {
        if self.phrases.is_empty() {
            debug!("No phrases configured, using the built-in table.");
            return Ok(PhraseTable::builtin());
        }
        PhraseTable::new(self.phrases.clone()).context("Invalid [[phrases]] configuration")
    }

    /// # Build Responder (`build_responder`)
    ///
    /// Combines the phrase table and `bot.fallback` into a ready `Responder`.
    pub fn build_responder(&self) -> Result<Responder> {
        let table = self.phrase_table()?;
        let responder = Responder::new(table, self.bot.fallback.clone())
            .context("Invalid [bot] configuration")?;
        info!(
            "Responder ready with {} phrase(s).",
            responder.table().len()
        );
        Ok(responder)
    }
}

const PROJECT_CONFIG_FILENAME: &str = ".vetchat.toml";

/// # Load Configuration (`load_config`)
///
/// Loads, merges and validates configuration.
///
/// ## Arguments
///
/// * `explicit`: Path from `--config` / `VETCHAT_CONFIG`. When set, only this
///   file is read and it must exist. `~` is expanded.
///
/// ## Errors
///
/// Returns an error if a config file cannot be read or parsed, or if the
/// merged configuration fails validation.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = match explicit {
        Some(path) => {
            let expanded = expand_path(path);
            if !expanded.is_file() {
                return Err(anyhow!(VetchatError::FileSystem(format!(
                    "Config file '{}' does not exist or is not a file.",
                    expanded.display()
                ))));
            }
            info!("Loading configuration from: {}", expanded.display());
            Config::from(load_config_from_path(&expanded)?)
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            Config::from(merge_configs(user_config.unwrap_or_default(), project_config))
        }
    };
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Expands a leading `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "VetChat", "vetchat") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.vetchat.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Overlays `project` on `user`, key by key. A key present in the project
/// file wins; `phrases` is taken as a whole list.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> ConfigFile {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    ConfigFile {
        bot: BotFile {
            name: project.bot.name.or(user.bot.name),
            user_label: project.bot.user_label.or(user.bot.user_label),
            fallback: project.bot.fallback.or(user.bot.fallback),
            typing_delay_ms: project.bot.typing_delay_ms.or(user.bot.typing_delay_ms),
        },
        server: ServerDefaults {
            host: project.server.host.or(user.server.host),
            port: project.server.port.or(user.server.port),
            enable_cors: project.server.enable_cors.or(user.server.enable_cors),
        },
        phrases: project.phrases.or(user.phrases),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(VetchatError::Config(
            "[bot] name must not be empty.".to_string()
        )));
    }
    if config.bot.user_label.trim().is_empty() {
        return Err(anyhow!(VetchatError::Config(
            "[bot] user_label must not be empty.".to_string()
        )));
    }
    if config.bot.fallback.is_empty() {
        return Err(anyhow!(VetchatError::EmptyFallback));
    }
    let table = config.phrase_table()?;
    for shadowed in table.shadowed() {
        warn!(
            "Phrase #{} '{}' can never match: phrase #{} '{}' always matches first.",
            shadowed.position,
            shadowed.phrase,
            shadowed.shadowed_by_position,
            shadowed.shadowed_by
        );
    }
    info!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse_file(content: &str) -> ConfigFile {
        toml::from_str(content).expect("Failed to parse TOML")
    }

    fn parse(content: &str) -> Config {
        Config::from(parse_file(content))
    }

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [bot]
            name = "VetBot"
            typing_delay_ms = 1500

            [server]
            port = 9000

            [[phrases]]
            phrase = "Fever"
            response = "Check hydration."

            [[phrases]]
            phrase = "sick"
            response = "Bring the animal in."
        "#;

        let config = parse(toml_content);

        assert_eq!(config.bot.name, "VetBot");
        assert_eq!(config.bot.user_label, DEFAULT_USER_LABEL); // Default
        assert_eq!(config.bot.fallback, DEFAULT_FALLBACK); // Default
        assert_eq!(config.bot.typing_delay_ms, 1500);
        assert_eq!(config.server.port, Some(9000));
        assert_eq!(config.server.host, None);
        assert_eq!(config.phrases.len(), 2);
        assert_eq!(config.phrases[0].phrase, "Fever"); // Lower-cased only when the table is built
        assert_eq!(config.phrases[1].response, "Bring the animal in.");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<ConfigFile, _> = toml::from_str("[bot]\ncolour = \"green\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_builtin_table() {
        let config = parse("");
        assert_eq!(config, Config::default());
        assert_eq!(config.phrase_table().unwrap(), PhraseTable::builtin());
    }

    #[test]
    fn test_build_responder_uses_configured_table() {
        let config = parse(
            r#"
            [bot]
            fallback = "Sorry, I'm still learning."

            [[phrases]]
            phrase = "FEVER"
            response = "Fever may indicate infection."
            "#,
        );

        let responder = config.build_responder().unwrap();
        assert_eq!(responder.table().len(), 1);
        assert_eq!(responder.respond("my cow has a fever"), "Fever may indicate infection.");
        assert_eq!(responder.respond("hello"), "Sorry, I'm still learning.");
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user = parse_file(
            r#"
            [bot]
            name = "UserBot"
            typing_delay_ms = 250

            [server]
            port = 7000
            enable_cors = false

            [[phrases]]
            phrase = "hello"
            response = "from user"
            "#,
        );
        let project = parse_file(
            r#"
            [bot]
            fallback = "project fallback"

            [server]
            port = 9000

            [[phrases]]
            phrase = "bye"
            response = "from project"
            "#,
        );

        let merged = Config::from(merge_configs(user, Some(project)));

        assert_eq!(merged.bot.name, "UserBot"); // Project did not set it
        assert_eq!(merged.bot.user_label, DEFAULT_USER_LABEL);
        assert_eq!(merged.bot.fallback, "project fallback");
        assert_eq!(merged.bot.typing_delay_ms, 250);
        assert_eq!(merged.server.port, Some(9000));
        assert_eq!(merged.server.enable_cors, Some(false));
        // Phrase lists replace, never merge.
        assert_eq!(merged.phrases, vec![PhraseEntry::new("bye", "from project")]);
    }

    #[test]
    fn test_merge_project_can_reset_to_default_values() {
        let user = parse_file(
            r#"
            [bot]
            name = "UserBot"
            fallback = "user fallback"
            typing_delay_ms = 1500
            "#,
        );
        let project = parse_file(&format!(
            "[bot]\nname = \"{}\"\nfallback = \"{}\"\ntyping_delay_ms = 0\n",
            DEFAULT_BOT_NAME, DEFAULT_FALLBACK
        ));

        let merged = Config::from(merge_configs(user, Some(project)));

        assert_eq!(merged.bot, BotConfig::default());
    }

    #[test]
    fn test_merge_project_empty_phrase_list_restores_builtin_table() {
        let user = parse_file("[[phrases]]\nphrase = \"hello\"\nresponse = \"from user\"\n");
        let project = parse_file("phrases = []\n");

        let merged = Config::from(merge_configs(user, Some(project)));

        assert!(merged.phrases.is_empty());
        assert_eq!(merged.phrase_table().unwrap(), PhraseTable::builtin());
    }

    #[test]
    fn test_merge_keeps_user_phrases_when_project_has_none() {
        let user = parse_file("[[phrases]]\nphrase = \"hello\"\nresponse = \"from user\"\n");
        let merged = merge_configs(user.clone(), Some(ConfigFile::default()));
        assert_eq!(merged.phrases, user.phrases);
        assert_eq!(merge_configs(user.clone(), None), user);
    }

    #[test]
    fn test_validate_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_empty_fallback() {
        let config = Config {
            bot: BotConfig {
                fallback: String::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert_eq!(
            err.downcast_ref::<VetchatError>(),
            Some(&VetchatError::EmptyFallback)
        );
    }

    #[test]
    fn test_validate_config_blank_phrase() {
        let config = Config {
            phrases: vec![
                PhraseEntry::new("hello", "hi"),
                PhraseEntry::new(" ", "never"),
            ],
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Phrase #2 is empty"));
    }

    #[test]
    fn test_validate_config_blank_name() {
        let config = Config {
            bot: BotConfig {
                name: "  ".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("name must not be empty"));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("vetchat.toml");
        fs::write(
            &path,
            "[bot]\nname = \"Doc\"\n\n[[phrases]]\nphrase = \"moo\"\nresponse = \"Moo to you too.\"\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.bot.name, "Doc");
        assert_eq!(config.build_responder().unwrap().respond("MOO"), "Moo to you too.");
    }

    #[test]
    fn test_load_config_explicit_missing_file() {
        let temp_dir = tempdir().unwrap();
        let result = load_config(Some(&temp_dir.path().join("missing.toml")));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("does not exist or is not a file"));
    }

    #[test]
    fn test_load_config_explicit_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[bot\nname = ").unwrap();
        let result = load_config(Some(&path));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse TOML"));
    }

    #[test]
    fn test_find_project_config_walks_up_and_stops_at_git() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        let nested = root.join("farm").join("barn");
        fs::create_dir_all(&nested).unwrap();

        // No config anywhere, .git at the root stops the search.
        fs::create_dir(root.join(".git")).unwrap();
        assert_eq!(find_project_config_path(&nested), None);

        // Config in an ancestor below the .git boundary is found.
        let config_path = root.join("farm").join(PROJECT_CONFIG_FILENAME);
        fs::write(&config_path, "").unwrap();
        assert_eq!(find_project_config_path(&nested), Some(config_path));
    }

    #[test]
    fn test_expand_path_leaves_absolute_paths() {
        assert_eq!(
            expand_path(Path::new("/etc/vetchat.toml")),
            PathBuf::from("/etc/vetchat.toml")
        );
        assert!(!expand_path(Path::new("~/vetchat.toml"))
            .to_string_lossy()
            .starts_with('~'));
    }
}
