use crate::context::Desktop;
use deskmenu_core::{ActionCommand, Direction, Notification, Urgency};
use deskmenu_tools::audio::{self, DeviceKind, VolumeState};

pub fn volume_icon(state: VolumeState) -> &'static str {
    if state.muted {
        "🔇"
    } else if state.percent == 0 {
        "🔈"
    } else if state.percent < 50 {
        "🔉"
    } else {
        "🔊"
    }
}

pub fn volume_notification(state: VolumeState, bar: &str, replace_id: u32) -> Notification {
    let (title, urgency) = if state.muted {
        (format!("Volume Muted ({}%)", state.percent), Urgency::Normal)
    } else {
        (format!("Volume: {}%", state.percent), Urgency::Low)
    };
    Notification::new(format!("{} {}", volume_icon(state), title), bar)
        .urgency(urgency)
        .replacing(replace_id)
}

pub fn mic_notification(muted: bool, replace_id: u32) -> Notification {
    let notification = if muted {
        Notification::new("🎤❌ Microphone Muted", "").urgency(Urgency::Normal)
    } else {
        Notification::new("🎤 Microphone Live", "").urgency(Urgency::Critical)
    };
    notification.replacing(replace_id)
}

async fn notify_volume(desktop: &Desktop, sink: &str) {
    let state = audio::volume_state(desktop.runner.as_ref(), sink).await;
    let notification = volume_notification(
        state,
        &desktop.bar(state.percent),
        desktop.settings.notifications.volume_replace_id,
    );
    desktop.notify(notification).await;
}

pub async fn change_volume(desktop: &Desktop, direction: Direction) -> anyhow::Result<()> {
    let Some(sink) = audio::default_device(desktop.runner.as_ref(), DeviceKind::Sink).await else {
        tracing::debug!("No default sink, nothing to change");
        return Ok(());
    };
    let step = desktop.settings.audio.volume_step;
    desktop
        .dispatch(&ActionCommand::blocking(audio::change_sink_volume(
            &sink, direction, step,
        )))
        .await?;
    notify_volume(desktop, &sink).await;
    Ok(())
}

pub async fn toggle_output_mute(desktop: &Desktop) -> anyhow::Result<()> {
    let Some(sink) = audio::default_device(desktop.runner.as_ref(), DeviceKind::Sink).await else {
        tracing::debug!("No default sink, nothing to mute");
        return Ok(());
    };
    desktop
        .dispatch(&ActionCommand::blocking(audio::toggle_sink_mute(&sink)))
        .await?;
    notify_volume(desktop, &sink).await;
    Ok(())
}

pub async fn toggle_mic_mute(desktop: &Desktop) -> anyhow::Result<()> {
    let toggle = ActionCommand::blocking(audio::toggle_source_mute());
    if let Err(e) = desktop.dispatch_checked(&toggle).await {
        tracing::warn!("Microphone toggle failed: {}", e);
        desktop
            .notify(
                Notification::new("Microphone Error", "Could not toggle mic")
                    .urgency(Urgency::Critical),
            )
            .await;
        return Ok(());
    }

    let muted = audio::source_muted(desktop.runner.as_ref()).await;
    desktop
        .notify(mic_notification(
            muted,
            desktop.settings.notifications.mic_replace_id,
        ))
        .await;
    Ok(())
}
