//! Platform performance profiles through `asusctl`.

use crate::UNKNOWN;
use deskmenu_core::{ActionCommand, CommandSpec};
use deskmenu_executor::CommandRunner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceProfile {
    Performance,
    Balanced,
    Quiet,
}

impl PerformanceProfile {
    pub const ALL: [PerformanceProfile; 3] = [
        PerformanceProfile::Performance,
        PerformanceProfile::Balanced,
        PerformanceProfile::Quiet,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PerformanceProfile::Performance => "Performance",
            PerformanceProfile::Balanced => "Balanced",
            PerformanceProfile::Quiet => "Quiet",
        }
    }

    pub fn command(&self) -> ActionCommand {
        ActionCommand::blocking(CommandSpec::new("asusctl", ["profile", "-P", self.name()]))
    }
}

/// Active profile name from `asusctl profile -p`.
///
/// Newer releases print `Active profile is <name>`; older ones put the
/// name last on the second line.
pub fn parse_active_profile(output: &str) -> Option<String> {
    let line = output
        .lines()
        .find(|line| line.contains("Active profile"))
        .or_else(|| output.lines().nth(1))?;
    line.split_whitespace().last().map(str::to_string)
}

pub async fn current_profile(runner: &dyn CommandRunner) -> String {
    runner
        .stdout_of(&CommandSpec::new("asusctl", ["profile", "-p"]))
        .await
        .and_then(|output| parse_active_profile(&output))
        .unwrap_or_else(|| UNKNOWN.to_string())
}
