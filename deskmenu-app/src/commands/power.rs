use crate::context::Desktop;
use crate::menu;
use deskmenu_config::PowerIcons;
use deskmenu_core::{MenuOption, Notification, Urgency};
use deskmenu_tools::session::{self, PowerAction, SessionEnv};
use deskmenu_tools::MenuRequest;

pub fn power_options(icons: &PowerIcons) -> Vec<MenuOption<PowerAction>> {
    PowerAction::ALL
        .iter()
        .map(|action| {
            let icon = match action {
                PowerAction::Lock => &icons.lock,
                PowerAction::Logout => &icons.logout,
                PowerAction::Sleep => &icons.sleep,
                PowerAction::Shutdown => &icons.shutdown,
                PowerAction::Reboot => &icons.reboot,
            };
            MenuOption::new(icon.clone(), *action)
        })
        .collect()
}

pub async fn menu(desktop: &Desktop) -> anyhow::Result<()> {
    let uptime = session::uptime(desktop.runner.as_ref()).await;
    let theme = desktop.settings.rofi.power_theme_path();
    let request = MenuRequest::new(format!("Uptime: {}", uptime), Vec::new())
        .message(format!("Uptime: {}", uptime))
        .theme(theme.clone());

    let options = power_options(&desktop.settings.icons.power);
    let Some(action) = menu::choose(desktop, request, &options).await else {
        return Ok(());
    };
    if !menu::confirm(desktop, "Confirm?", theme).await {
        tracing::debug!("{} not confirmed", action.name());
        return Ok(());
    }

    let env = SessionEnv {
        lock_wallpaper: desktop.settings.session.lock_wallpaper_path(),
        sleep_command: desktop.settings.session.sleep_command.clone(),
        user: session::current_user(),
    };
    let Some(command) = action.command(&env) else {
        desktop
            .notify(
                Notification::new("Power Menu", format!("Cannot {} here", action.name()))
                    .urgency(Urgency::Critical),
            )
            .await;
        return Ok(());
    };
    desktop.dispatch(&command).await?;
    Ok(())
}
