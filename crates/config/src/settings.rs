use crate::icons::IconSettings;
use crate::paths::{default_config_path, expand_path};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rofi: RofiSettings,
    pub notifications: NotificationSettings,
    pub audio: AudioSettings,
    pub brightness: BrightnessSettings,
    pub keyboard: KeyboardSettings,
    pub recorder: RecorderSettings,
    pub session: SessionSettings,
    pub icons: IconSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RofiSettings {
    pub program: String,
    pub theme: String,
    pub power_theme: String,
}

impl Default for RofiSettings {
    fn default() -> Self {
        Self {
            program: "rofi".to_string(),
            theme: "$XDG_CONFIG_HOME/rofi/common.rasi".to_string(),
            power_theme: "$XDG_CONFIG_HOME/rofi/power.rasi".to_string(),
        }
    }
}

impl RofiSettings {
    pub fn theme_path(&self) -> PathBuf {
        expand_path(&self.theme)
    }

    pub fn power_theme_path(&self) -> PathBuf {
        expand_path(&self.power_theme)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSettings {
    pub volume_replace_id: u32,
    pub mic_replace_id: u32,
    pub brightness_replace_id: u32,
    pub brightness_expire_ms: u32,
    pub bar_width: usize,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            volume_replace_id: 1000,
            mic_replace_id: 2000,
            brightness_replace_id: 3000,
            brightness_expire_ms: 1200,
            bar_width: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub volume_step: u32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { volume_step: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessSettings {
    pub step: u32,
}

impl Default for BrightnessSettings {
    fn default() -> Self {
        Self { step: 5 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyboardSettings {
    pub layouts: Vec<String>,
    pub state_file: String,
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            layouts: vec!["us".to_string(), "zh".to_string(), "de".to_string()],
            state_file: "/tmp/deskmenu_kb_layout_state".to_string(),
        }
    }
}

impl KeyboardSettings {
    pub fn state_path(&self) -> PathBuf {
        expand_path(&self.state_file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderSettings {
    pub video_dir: String,
    pub screenshot_dir: String,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            video_dir: "~/Videos".to_string(),
            screenshot_dir: "~/Pictures/Screenshots".to_string(),
        }
    }
}

impl RecorderSettings {
    pub fn video_path(&self) -> PathBuf {
        expand_path(&self.video_dir)
    }

    pub fn screenshot_path(&self) -> PathBuf {
        expand_path(&self.screenshot_dir)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub lock_wallpaper: String,
    pub sleep_command: Vec<String>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            lock_wallpaper: "$XDG_CONFIG_HOME/deskmenu/lock_screen.png".to_string(),
            sleep_command: vec!["systemctl".to_string(), "suspend".to_string()],
        }
    }
}

impl SessionSettings {
    pub fn lock_wallpaper_path(&self) -> PathBuf {
        expand_path(&self.lock_wallpaper)
    }
}

impl Settings {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(&path).await?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: Settings = serde_yaml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub async fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)?;
        if let Some(parent) = path.as_ref().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing, unreadable or invalid file yields the built-in defaults.
    pub async fn load_or_default(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
            Some(path) => path,
            None => return Self::default(),
        };

        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load(&path).await {
            Ok(settings) => {
                tracing::debug!("Loaded config from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keyboard.layouts.is_empty() {
            return Err(ConfigError::Invalid(
                "keyboard.layouts must not be empty".to_string(),
            ));
        }
        if self.keyboard.layouts.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "keyboard.layouts contains an empty layout".to_string(),
            ));
        }
        if self.notifications.bar_width == 0 {
            return Err(ConfigError::Invalid(
                "notifications.bar_width must be greater than 0".to_string(),
            ));
        }
        for (name, step) in [
            ("audio.volume_step", self.audio.volume_step),
            ("brightness.step", self.brightness.step),
        ] {
            if !(1..=100).contains(&step) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be within 1..=100, got {step}"
                )));
            }
        }
        if self.session.sleep_command.is_empty() {
            return Err(ConfigError::Invalid(
                "session.sleep_command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
