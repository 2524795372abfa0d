//! Menu glyphs. Each feature owns its own set; the same glyph may mean
//! different things in different menus.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconSettings {
    pub confirm: ConfirmIcons,
    pub power: PowerIcons,
    pub profile: ProfileIcons,
    pub recorder: RecorderIcons,
    pub audio: AudioIcons,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmIcons {
    pub yes: String,
    pub no: String,
}

impl Default for ConfirmIcons {
    fn default() -> Self {
        Self {
            yes: "\u{f058}".to_string(),
            no: "\u{f530}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerIcons {
    pub lock: String,
    pub logout: String,
    pub sleep: String,
    pub shutdown: String,
    pub reboot: String,
}

impl Default for PowerIcons {
    fn default() -> Self {
        Self {
            lock: "\u{f456}".to_string(),
            logout: "\u{f05fd}".to_string(),
            sleep: "\u{f0904}".to_string(),
            shutdown: "\u{f011}".to_string(),
            reboot: "\u{ead2}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIcons {
    pub performance: String,
    pub balanced: String,
    pub quiet: String,
}

impl Default for ProfileIcons {
    fn default() -> Self {
        Self {
            performance: "\u{f14de}".to_string(),
            balanced: "\u{f04c5}".to_string(),
            quiet: "\u{f007b}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecorderIcons {
    pub screen_mic: String,
    pub screen_system: String,
    pub screen_silent: String,
    pub screenshot: String,
    pub audio_only: String,
    pub stop: String,
}

impl Default for RecorderIcons {
    fn default() -> Self {
        Self {
            screen_mic: "\u{f0379} \u{f036c}".to_string(),
            screen_system: "\u{f0379} \u{f057e}".to_string(),
            screen_silent: "\u{f0379} \u{f0581}".to_string(),
            screenshot: "\u{f0100}".to_string(),
            audio_only: "\u{f036c}".to_string(),
            stop: "\u{f04db}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioIcons {
    pub mic: String,
    pub speaker: String,
}

impl Default for AudioIcons {
    fn default() -> Self {
        Self {
            mic: "\u{f036c}".to_string(),
            speaker: "\u{f057e}".to_string(),
        }
    }
}
