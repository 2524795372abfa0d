use crate::context::Desktop;
use crate::menu;
use deskmenu_config::ProfileIcons;
use deskmenu_core::{MenuOption, Notification};
use deskmenu_tools::profile::{self, PerformanceProfile};
use deskmenu_tools::MenuRequest;

const PROFILE_LAYOUT: &str = "listview {columns: 3; lines: 1;}";

pub fn profile_options(icons: &ProfileIcons) -> Vec<MenuOption<PerformanceProfile>> {
    PerformanceProfile::ALL
        .iter()
        .map(|profile| {
            let icon = match profile {
                PerformanceProfile::Performance => &icons.performance,
                PerformanceProfile::Balanced => &icons.balanced,
                PerformanceProfile::Quiet => &icons.quiet,
            };
            MenuOption::new(format!("{} {}", icon, profile.name()), *profile)
        })
        .collect()
}

pub async fn menu(desktop: &Desktop) -> anyhow::Result<()> {
    let current = profile::current_profile(desktop.runner.as_ref()).await;
    let theme = desktop.settings.rofi.power_theme_path();
    let request = MenuRequest::new("Profile", Vec::new())
        .message(format!("Current Profile: {}", current))
        .theme(theme.clone())
        .theme_str(PROFILE_LAYOUT);

    let options = profile_options(&desktop.settings.icons.profile);
    let Some(chosen) = menu::choose(desktop, request, &options).await else {
        return Ok(());
    };
    let question = format!("Set to {} mode?", chosen.name());
    if !menu::confirm(desktop, &question, theme).await {
        return Ok(());
    }

    desktop.dispatch_checked(&chosen.command()).await?;
    desktop
        .notify(Notification::new(
            "Performance Profile",
            format!("Switched to {}", chosen.name()),
        ))
        .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_options_labels() {
        let icons = ProfileIcons {
            performance: "P".to_string(),
            balanced: "B".to_string(),
            quiet: "Q".to_string(),
        };
        let labels: Vec<_> = profile_options(&icons)
            .into_iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["P Performance", "B Balanced", "Q Quiet"]);
    }
}
