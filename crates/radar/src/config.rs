use derive_more::{Deref, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::Srgb;
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::PathBuf;
use std::str::FromStr;
use sweep::settings::{SettingsError, SweepSettings};
use thiserror::Error;

/// A color written either as a CSS name (`green`) or hex (`#00ff00`).
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, Deref, From, Into)]
pub struct ConfigColor(Srgb<u8>);

impl ConfigColor {
    pub fn to_rgb(self) -> Srgb<f64> {
        self.0.into_format()
    }
}

impl FromStr for ConfigColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        palette::named::from_str(&s.to_lowercase())
            .or_else(|| s.parse::<Srgb<u8>>().ok())
            .map(Self)
            .ok_or_else(|| ColorParseError(s.to_string()))
    }
}

impl Serialize for ConfigColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (r, g, b) = self.0.into_components();
        serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a color name or hex value")]
pub struct ColorParseError(String);

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Appearance {
    /// Ring color.
    pub accent: ConfigColor,
    /// Fill of the avatar circle while no image is shown.
    pub placeholder: ConfigColor,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            accent: ConfigColor(palette::named::GREEN),
            placeholder: ConfigColor(palette::named::GRAY),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// Image shown after `sign-in` when the command carries no path.
    pub path: Option<PathBuf>,
    /// Rendered diameter in px. Rings start growing at half of it.
    pub size: u32,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 96,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    pub sweep: SweepSettings,
    pub appearance: Appearance,
    pub avatar: AvatarConfig,
}

impl Config {
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.sweep.validate()?;
        Ok(self)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid sweep settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "bis", "radar").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(
            config::Environment::with_prefix("RADAR")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    s.try_deserialize::<Config>()?.validate()
}

pub fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    s.try_deserialize::<Config>()?.validate()
}

pub fn load_or_default() -> Config {
    match load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {}", e);
            Config::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(tx: Sender<AppEvent>) {
    let config_path = match get_config_path() {
        Ok(p) => p,
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_color_deserialization() {
        let cases = vec![
            ("\"green\"", Srgb::new(0, 128, 0)),
            ("\"Lime\"", Srgb::new(0, 255, 0)),
            ("\"#ff8800\"", Srgb::new(255, 136, 0)),
            ("\"00ff7f\"", Srgb::new(0, 255, 127)),
        ];

        for (json, expected) in cases {
            let deserialized: ConfigColor = serde_json::from_str(json).unwrap();
            assert_eq!(*deserialized, expected, "{json}");
        }

        assert!(serde_json::from_str::<ConfigColor>("\"not-a-color\"").is_err());
    }

    #[test]
    fn test_config_color_serializes_as_hex() {
        let json = serde_json::to_string(&ConfigColor::from(Srgb::new(255, 136, 0))).unwrap();
        assert_eq!(json, "\"#ff8800\"");
    }

    #[test]
    fn test_default_config_file_parses_to_defaults() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config(
            r#"
            [sweep]
            ring_count = 2
            duration_ms = 2000

            [appearance]
            accent = "#3daee9"

            [avatar]
            path = "/tmp/me.png"
            "#,
        )
        .unwrap();

        assert_eq!(config.sweep.ring_count, 2);
        assert_eq!(config.sweep.duration_ms, 2000);
        assert_eq!(config.sweep.fill_alpha, 30);
        assert_eq!(*config.appearance.accent, Srgb::new(0x3d, 0xae, 0xe9));
        assert_eq!(config.appearance.placeholder, Appearance::default().placeholder);
        assert_eq!(config.avatar.path, Some(PathBuf::from("/tmp/me.png")));
        assert_eq!(config.avatar.size, 96);
    }

    #[test]
    fn test_invalid_sweep_settings_are_rejected() {
        let err = parse_config("[sweep]\nring_count = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Settings(SettingsError::NoRings)));
    }

    #[test]
    fn test_oversized_sweep_settings_are_rejected() {
        let err = parse_config("[sweep]\nring_count = 3000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Settings(SettingsError::TooManyRings(3000))
        ));

        let err = parse_config("[sweep]\nduration_ms = 9000000000000000000\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Settings(SettingsError::DurationTooLong(_))
        ));
    }
}
