use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Frame rates above this would need sub-millisecond frames
pub const MAX_ANIMATION_FPS: u32 = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scramble: ScrambleConfig,
    #[serde(default)]
    pub phrases: PhraseConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Text scramble animation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Glyphs drawn while a character is scrambling
    #[serde(default = "default_glyphs")]
    pub glyphs: String,
    /// Upper bound (exclusive) of the frame at which a character starts scrambling
    #[serde(default = "default_frame_bound")]
    pub max_start_frames: u32,
    /// Upper bound (exclusive) of how many frames a character scrambles for
    #[serde(default = "default_frame_bound")]
    pub max_scramble_frames: u32,
    /// Chance per frame that a scrambling character picks a fresh glyph
    #[serde(default = "default_reroll_probability")]
    pub reroll_probability: f64,
    /// Frames per second while a pass is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Fixed RNG seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
            max_start_frames: default_frame_bound(),
            max_scramble_frames: default_frame_bound(),
            reroll_probability: default_reroll_probability(),
            animation_fps: default_animation_fps(),
            seed: None,
        }
    }
}

impl ScrambleConfig {
    /// Duration of one animation frame, never shorter than 1ms
    pub fn frame_duration(&self) -> Duration {
        let fps = u64::from(self.animation_fps.clamp(1, MAX_ANIMATION_FPS));
        Duration::from_millis(1000 / fps)
    }

    /// Number of frames after which every pass has settled
    pub fn max_pass_frames(&self) -> u32 {
        self.max_start_frames.saturating_add(self.max_scramble_frames)
    }

    /// Check the animation parameters an animator depends on
    pub fn validate(&self) -> crate::Result<()> {
        if self.glyphs.is_empty() {
            return Err(crate::Error::Config("scramble.glyphs must not be empty".into()));
        }
        if self.max_start_frames == 0 || self.max_scramble_frames == 0 {
            return Err(crate::Error::Config(
                "scramble.max_start_frames and scramble.max_scramble_frames must be at least 1".into(),
            ));
        }
        if self.max_start_frames.checked_add(self.max_scramble_frames).is_none() {
            return Err(crate::Error::Config(format!(
                "scramble.max_start_frames + scramble.max_scramble_frames must not exceed {}",
                u32::MAX
            )));
        }
        if !(0.0..=1.0).contains(&self.reroll_probability) {
            return Err(crate::Error::Config(format!(
                "scramble.reroll_probability must be within [0, 1], got {}",
                self.reroll_probability
            )));
        }
        if !(1..=MAX_ANIMATION_FPS).contains(&self.animation_fps) {
            return Err(crate::Error::Config(format!(
                "scramble.animation_fps must be within [1, {}], got {}",
                MAX_ANIMATION_FPS, self.animation_fps
            )));
        }
        Ok(())
    }
}

/// Hero title phrase rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhraseConfig {
    /// Phrases shown in order, wrapping around
    #[serde(default = "default_phrases")]
    pub items: Vec<String>,
    /// Delay after a pass settles before the next one starts
    #[serde(default = "default_hold_ms")]
    pub hold_ms: u64,
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            items: default_phrases(),
            hold_ms: default_hold_ms(),
        }
    }
}

impl PhraseConfig {
    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Show the coordinate readout
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Refresh interval in milliseconds
    #[serde(default = "default_telemetry_interval")]
    pub interval_ms: u64,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            interval_ms: default_telemetry_interval(),
        }
    }
}

impl TelemetryConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Line shown under the title
    #[serde(default = "default_tagline")]
    pub tagline: String,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            tagline: default_tagline(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "void", "nord")
    pub name: String,
    /// Optional color overrides
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Accept either `theme = "nord"` or `[ui.theme]` with name/colors
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => name = Some(map.next_value()?),
                        "colors" => colors = Some(map.next_value()?),
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

/// Optional color overrides, each a hex string ("#00f3ff" or "00f3ff")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    /// Settled title text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Glyphs that are still scrambling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telemetry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bg: Option<String>,
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("orbitx")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_glyphs() -> String {
    "!<>-_\\/[]{}—=+*^?#________".to_string()
}

fn default_frame_bound() -> u32 {
    40
}

fn default_reroll_probability() -> f64 {
    0.28
}

fn default_animation_fps() -> u32 {
    60
}

fn default_phrases() -> Vec<String> {
    vec![
        "TRANSCEND".to_string(),
        "EXPLORE".to_string(),
        "ORBIT X".to_string(),
    ]
}

fn default_hold_ms() -> u64 {
    3000
}

fn default_true() -> bool {
    true
}

fn default_telemetry_interval() -> u64 {
    2000
}

fn default_tick_rate() -> u64 {
    250
}

fn default_tagline() -> String {
    "BEYOND THE EDGE OF THE KNOWN".to_string()
}

fn default_theme_name() -> String {
    "void".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults when it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Render configuration as pretty TOML
    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default path
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/orbitx/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("orbitx")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("orbitx.log")
    }

    /// Reject values the animation cannot run with
    pub fn validate(&self) -> crate::Result<()> {
        self.scramble.validate()?;
        if self.phrases.items.is_empty() {
            return Err(crate::Error::Config("phrases.items must not be empty".into()));
        }
        if self.telemetry.interval_ms == 0 {
            return Err(crate::Error::Config("telemetry.interval_ms must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scramble.max_start_frames, 40);
        assert_eq!(config.scramble.max_scramble_frames, 40);
        assert!((config.scramble.reroll_probability - 0.28).abs() < f64::EPSILON);
        assert_eq!(config.phrases.items, vec!["TRANSCEND", "EXPLORE", "ORBIT X"]);
        assert_eq!(config.phrases.hold(), Duration::from_millis(3000));
        assert_eq!(config.telemetry.interval(), Duration::from_millis(2000));
        assert_eq!(config.ui.theme.name, "void");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scramble]
            seed = 7

            [phrases]
            items = ["HELLO"]
            "#,
        )
        .unwrap();
        assert_eq!(config.scramble.seed, Some(7));
        assert_eq!(config.scramble.animation_fps, 60);
        assert_eq!(config.phrases.items, vec!["HELLO"]);
        assert_eq!(config.phrases.hold_ms, 3000);
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"gruvbox-dark\"\n[ui.theme.colors]\naccent = \"#ff0000\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "gruvbox-dark");
        assert_eq!(config.ui.theme.colors.accent.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.scramble.glyphs.clear();
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));

        let mut config = AppConfig::default();
        config.scramble.max_scramble_frames = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.scramble.reroll_probability = 1.5;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.phrases.items.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_frame_rate_bounds() {
        let mut config = AppConfig::default();
        assert_eq!(config.scramble.frame_duration(), Duration::from_millis(16));

        config.scramble.animation_fps = MAX_ANIMATION_FPS;
        assert!(config.validate().is_ok());
        assert_eq!(config.scramble.frame_duration(), Duration::from_millis(1));

        config.scramble.animation_fps = 2000;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        assert_eq!(config.scramble.frame_duration(), Duration::from_millis(1));

        config.scramble.animation_fps = 0;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        assert!(!config.scramble.frame_duration().is_zero());
    }

    #[test]
    fn test_frame_bounds_must_not_overflow() {
        let mut config = AppConfig::default();
        config.scramble.max_start_frames = u32::MAX;
        config.scramble.max_scramble_frames = u32::MAX;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));
        assert_eq!(config.scramble.max_pass_frames(), u32::MAX);

        config.scramble.max_scramble_frames = 1;
        assert!(matches!(config.validate(), Err(crate::Error::Config(_))));

        config.scramble.max_start_frames = u32::MAX - 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("orbitx-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");

        let mut config = AppConfig::default();
        config.phrases.items = vec!["ONE".to_string(), "TWO".to_string()];
        config.scramble.seed = Some(42);
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.phrases.items, vec!["ONE", "TWO"]);
        assert_eq!(loaded.scramble.seed, Some(42));
        assert_eq!(loaded.scramble.glyphs, config.scramble.glyphs);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("orbitx-definitely-missing").join("config.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.phrases.items.len(), 3);
    }
}
