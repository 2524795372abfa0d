//! Backlight level through `brightnessctl`.

use deskmenu_core::{CommandSpec, Direction};
use deskmenu_executor::CommandRunner;

async fn read_level(runner: &dyn CommandRunner, query: &str) -> Option<u64> {
    runner
        .stdout_of(&CommandSpec::new("brightnessctl", [query]))
        .await?
        .parse()
        .ok()
}

/// Current level as a rounded percentage of the maximum.
pub async fn brightness_percent(runner: &dyn CommandRunner) -> Option<u32> {
    let current = read_level(runner, "g").await?;
    let maximum = read_level(runner, "m").await?;
    percent_of(current, maximum)
}

pub fn percent_of(current: u64, maximum: u64) -> Option<u32> {
    if maximum == 0 {
        return None;
    }
    let current = current.min(maximum);
    Some(((current * 200 + maximum) / (maximum * 2)) as u32)
}

pub fn adjust(direction: Direction, step: u32) -> CommandSpec {
    CommandSpec::new(
        "brightnessctl",
        ["set".to_string(), format!("{}%{}", step, direction.sign())],
    )
}

/// Notification glyph for a brightness level.
pub fn icon_for(percent: u32) -> &'static str {
    if percent < 50 {
        "🔅"
    } else {
        "🔆"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRunner;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(0, 255), Some(0));
        assert_eq!(percent_of(255, 255), Some(100));
        assert_eq!(percent_of(128, 255), Some(50));
        assert_eq!(percent_of(19200, 96000), Some(20));
        assert_eq!(percent_of(10, 0), None);
        assert_eq!(percent_of(300, 255), Some(100));
    }

    #[tokio::test]
    async fn test_brightness_percent() {
        let runner = ScriptedRunner::new()
            .respond(&["brightnessctl", "g"], "48000\n")
            .respond(&["brightnessctl", "m"], "96000\n");
        assert_eq!(brightness_percent(&runner).await, Some(50));
    }

    #[tokio::test]
    async fn test_brightness_unreadable() {
        let runner = ScriptedRunner::new()
            .respond(&["brightnessctl", "g"], "n/a\n")
            .respond(&["brightnessctl", "m"], "96000\n");
        assert_eq!(brightness_percent(&runner).await, None);

        let runner = ScriptedRunner::new().missing("brightnessctl");
        assert_eq!(brightness_percent(&runner).await, None);
    }

    #[test]
    fn test_adjust_command() {
        assert_eq!(
            adjust(Direction::Up, 5).argv(),
            vec!["brightnessctl", "set", "5%+"]
        );
        assert_eq!(
            adjust(Direction::Down, 10).argv(),
            vec!["brightnessctl", "set", "10%-"]
        );
    }

    #[test]
    fn test_icon_threshold() {
        assert_eq!(icon_for(49), "🔅");
        assert_eq!(icon_for(50), "🔆");
    }
}
