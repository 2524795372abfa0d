pub mod icons;
pub mod paths;
pub mod settings;

pub use icons::{AudioIcons, ConfirmIcons, IconSettings, PowerIcons, ProfileIcons, RecorderIcons};
pub use paths::expand_path;
pub use settings::{
    AudioSettings, BrightnessSettings, ConfigError, KeyboardSettings, NotificationSettings,
    RecorderSettings, RofiSettings, SessionSettings, Settings,
};
