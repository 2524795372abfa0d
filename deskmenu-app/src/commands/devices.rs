use crate::context::Desktop;
use crate::menu;
use deskmenu_core::{ActionCommand, MenuOption, Notification};
use deskmenu_tools::audio::{self, AudioDevice, DeviceKind};
use deskmenu_tools::MenuRequest;

struct DeviceMenu {
    prompt: &'static str,
    confirm: &'static str,
    changed: &'static str,
}

fn menu_text(kind: DeviceKind) -> DeviceMenu {
    match kind {
        DeviceKind::Source => DeviceMenu {
            prompt: "Microphone",
            confirm: "Set this mic as default?",
            changed: "Microphone Changed",
        },
        DeviceKind::Sink => DeviceMenu {
            prompt: "Output",
            confirm: "Set this output as default?",
            changed: "Output Changed",
        },
    }
}

/// One labelled option per device; the current default is suffixed.
pub fn device_options(devices: &[AudioDevice], icon: &str) -> Vec<MenuOption<AudioDevice>> {
    devices
        .iter()
        .map(|device| {
            let mut label = format!("{} {}", icon, device.description);
            if device.is_default {
                label.push_str("  (current)");
            }
            MenuOption::new(label, device.clone())
        })
        .collect()
}

pub fn list_layout(rows: usize) -> String {
    format!("window {{width: 800px;}} listview {{columns: 1; lines: {};}}", rows.max(1))
}

pub async fn select_default(desktop: &Desktop, kind: DeviceKind) -> anyhow::Result<()> {
    let text = menu_text(kind);
    let icons = &desktop.settings.icons.audio;
    let icon = match kind {
        DeviceKind::Source => &icons.mic,
        DeviceKind::Sink => &icons.speaker,
    };

    let devices = audio::devices(desktop.runner.as_ref(), kind).await;
    if devices.is_empty() {
        tracing::warn!("No {:?} devices reported", kind);
        return Ok(());
    }
    let current = devices
        .iter()
        .find(|d| d.is_default)
        .map(|d| d.description.as_str())
        .unwrap_or(deskmenu_tools::UNKNOWN);

    let options = device_options(&devices, icon);
    let theme = desktop.settings.rofi.theme_path();
    let request = MenuRequest::new(text.prompt, Vec::new())
        .message(format!("Current: {}", current))
        .theme(theme.clone())
        .theme_str(list_layout(options.len()));

    let Some(device) = menu::choose(desktop, request, &options).await else {
        return Ok(());
    };
    if !menu::confirm(desktop, text.confirm, theme).await {
        return Ok(());
    }

    desktop
        .dispatch(&ActionCommand::blocking(audio::set_default_device(
            kind,
            &device.name,
        )))
        .await?;
    desktop
        .notify(Notification::new(text.changed, device.description))
        .await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn device(name: &str, description: &str, is_default: bool) -> AudioDevice {
        AudioDevice {
            name: name.to_string(),
            description: description.to_string(),
            is_default,
        }
    }

    #[test]
    fn test_device_options_mark_current() {
        let devices = vec![device("a", "Headset", false), device("b", "Built-in", true)];
        let options = device_options(&devices, "M");
        assert_eq!(options[0].label, "M Headset");
        assert_eq!(options[1].label, "M Built-in  (current)");
        assert_eq!(options[1].value.name, "b");
    }

    #[test]
    fn test_list_layout_rows() {
        assert_eq!(
            list_layout(3),
            "window {width: 800px;} listview {columns: 1; lines: 3;}"
        );
        assert!(list_layout(0).contains("lines: 1;"));
    }
}
