//! Power and session control.

use crate::UNKNOWN;
use deskmenu_core::{ActionCommand, CommandSpec};
use deskmenu_executor::CommandRunner;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Lock,
    Logout,
    Sleep,
    Shutdown,
    Reboot,
}

impl PowerAction {
    /// Menu order.
    pub const ALL: [PowerAction; 5] = [
        PowerAction::Lock,
        PowerAction::Logout,
        PowerAction::Sleep,
        PowerAction::Shutdown,
        PowerAction::Reboot,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PowerAction::Lock => "lock",
            PowerAction::Logout => "logout",
            PowerAction::Sleep => "sleep",
            PowerAction::Shutdown => "shutdown",
            PowerAction::Reboot => "reboot",
        }
    }

    /// `None` when the command cannot be built, e.g. logout without a user.
    pub fn command(&self, env: &SessionEnv) -> Option<ActionCommand> {
        match self {
            PowerAction::Lock => Some(ActionCommand::detached(CommandSpec::new(
                "swaylock",
                [
                    "-i".to_string(),
                    env.lock_wallpaper.to_string_lossy().to_string(),
                ],
            ))),
            PowerAction::Logout => env.user.as_ref().map(|user| {
                ActionCommand::blocking(CommandSpec::new(
                    "pkill",
                    ["-KILL", "-u", user.as_str()],
                ))
            }),
            PowerAction::Sleep => CommandSpec::from_argv(&env.sleep_command).map(ActionCommand::blocking),
            PowerAction::Shutdown => Some(ActionCommand::blocking(CommandSpec::new(
                "systemctl",
                ["poweroff"],
            ))),
            PowerAction::Reboot => Some(ActionCommand::blocking(CommandSpec::new(
                "systemctl",
                ["reboot"],
            ))),
        }
    }
}

/// Inputs the power commands depend on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEnv {
    pub lock_wallpaper: PathBuf,
    pub sleep_command: Vec<String>,
    pub user: Option<String>,
}

pub fn current_user() -> Option<String> {
    ["USER", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|user| !user.is_empty())
}

/// `uptime -p` without its leading `up `.
pub async fn uptime(runner: &dyn CommandRunner) -> String {
    match runner.stdout_of(&CommandSpec::new("uptime", ["-p"])).await {
        Some(output) if !output.is_empty() => output
            .strip_prefix("up ")
            .unwrap_or(&output)
            .to_string(),
        _ => UNKNOWN.to_string(),
    }
}
