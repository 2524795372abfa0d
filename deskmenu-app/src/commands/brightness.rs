use crate::context::Desktop;
use deskmenu_core::{ActionCommand, Direction, Notification, Urgency};
use deskmenu_tools::brightness;

const APP_NAME: &str = "brightness-control";

pub fn brightness_notification(
    percent: u32,
    bar: &str,
    replace_id: u32,
    expire_ms: u32,
) -> Notification {
    Notification::new(
        "Screen Brightness",
        format!(
            "{} Brightness: {}%\n{}",
            brightness::icon_for(percent),
            percent,
            bar
        ),
    )
    .urgency(Urgency::Low)
    .app_name(APP_NAME)
    .replacing(replace_id)
    .expire_after(expire_ms)
}

pub async fn change(desktop: &Desktop, direction: Direction) -> anyhow::Result<()> {
    let adjust = ActionCommand::blocking(brightness::adjust(
        direction,
        desktop.settings.brightness.step,
    ));
    desktop.dispatch_checked(&adjust).await?;

    let Some(percent) = brightness::brightness_percent(desktop.runner.as_ref()).await else {
        tracing::warn!("Brightness unreadable after adjustment");
        return Ok(());
    };
    let settings = &desktop.settings.notifications;
    desktop
        .notify(brightness_notification(
            percent,
            &desktop.bar(percent),
            settings.brightness_replace_id,
            settings.brightness_expire_ms,
        ))
        .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_notification() {
        let n = brightness_notification(70, "███", 3000, 1200);
        assert_eq!(n.title, "Screen Brightness");
        assert_eq!(n.body, "🔆 Brightness: 70%\n███");
        assert_eq!(n.app_name.as_deref(), Some(APP_NAME));
        assert_eq!(n.replace_id, Some(3000));
        assert_eq!(n.expire_ms, Some(1200));

        let n = brightness_notification(10, "", 3000, 1200);
        assert!(n.body.starts_with("🔅"));
    }
}
