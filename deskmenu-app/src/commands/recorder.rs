use crate::context::Desktop;
use crate::menu;
use chrono::Local;
use deskmenu_config::RecorderIcons;
use deskmenu_core::{MenuOption, Notification, Urgency};
use deskmenu_executor::ExecutorError;
use deskmenu_tools::recorder::{self, RecorderAction, ScreenAudio};
use deskmenu_tools::{audio, MenuRequest};
use std::path::Path;

/// What the start menu offers; files are named when the choice is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordMode {
    Screen(ScreenAudio),
    Screenshot,
    AudioOnly,
}

impl RecordMode {
    pub fn action(&self, video_dir: &Path, screenshot_dir: &Path) -> RecorderAction {
        let now = Local::now();
        match self {
            RecordMode::Screen(audio) => RecorderAction::StartScreen {
                audio: *audio,
                output: recorder::timestamped_file(video_dir, "recording", "mp4", now),
            },
            RecordMode::AudioOnly => RecorderAction::StartAudio {
                output: recorder::timestamped_file(video_dir, "audio", "mp3", now),
            },
            RecordMode::Screenshot => RecorderAction::Screenshot {
                output: recorder::timestamped_file(screenshot_dir, "screenshot", "png", now),
            },
        }
    }
}

pub fn start_options(icons: &RecorderIcons) -> Vec<MenuOption<RecordMode>> {
    vec![
        MenuOption::new(
            format!("{} Screen + Mic", icons.screen_mic),
            RecordMode::Screen(ScreenAudio::Microphone),
        ),
        MenuOption::new(
            format!("{} Screen + System Audio", icons.screen_system),
            RecordMode::Screen(ScreenAudio::System),
        ),
        MenuOption::new(
            format!("{} Screen Only", icons.screen_silent),
            RecordMode::Screen(ScreenAudio::Silent),
        ),
        MenuOption::new(
            format!("{} Screenshot", icons.screenshot),
            RecordMode::Screenshot,
        ),
        MenuOption::new(
            format!("{} Audio Only", icons.audio_only),
            RecordMode::AudioOnly,
        ),
    ]
}

async fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Dispatch a recorder action, reporting a missing tool instead of failing.
async fn launch(desktop: &Desktop, action: &RecorderAction) -> anyhow::Result<bool> {
    match desktop.dispatch_checked(&action.command()).await {
        Ok(_) => Ok(true),
        Err(ExecutorError::NotFound(tool)) => {
            tracing::warn!("{} is not installed", tool);
            desktop
                .notify(
                    Notification::new("Recorder Unavailable", format!("{} not found", tool))
                        .urgency(Urgency::Critical),
                )
                .await;
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn menu(desktop: &Desktop) -> anyhow::Result<()> {
    let theme = desktop.settings.rofi.theme_path();
    let icons = &desktop.settings.icons.recorder;

    let active =
        recorder::active_recording(desktop.processes.as_ref(), desktop.runner.as_ref()).await;
    if let Some(info) = active {
        let options = vec![MenuOption::new(
            format!("{} Stop Recording", icons.stop),
            info.recorder.clone(),
        )];
        let request = MenuRequest::new("Recorder", Vec::new())
            .message(info.describe())
            .theme(theme);
        let Some(recorder) = menu::choose(desktop, request, &options).await else {
            return Ok(());
        };
        if launch(desktop, &RecorderAction::Stop { recorder }).await? {
            desktop
                .notify(Notification::new("Recording Stopped", info.output))
                .await;
        }
        return Ok(());
    }

    let mic = audio::input_device_name(desktop.runner.as_ref()).await;
    let request = MenuRequest::new("Recorder", Vec::new())
        .message(format!("Choose mode\nMic detected: {}", mic))
        .theme(theme);
    let options = start_options(icons);
    let Some(mode) = menu::choose(desktop, request, &options).await else {
        return Ok(());
    };

    let settings = &desktop.settings.recorder;
    let video_dir = settings.video_path();
    let screenshot_dir = settings.screenshot_path();
    match mode {
        RecordMode::Screenshot => ensure_dir(&screenshot_dir).await?,
        _ => ensure_dir(&video_dir).await?,
    }

    let action = mode.action(&video_dir, &screenshot_dir);
    if !launch(desktop, &action).await? {
        return Ok(());
    }

    let notification = match &action {
        RecorderAction::StartScreen { output, .. } => {
            Notification::new("Recording Started", output.display().to_string())
        }
        RecorderAction::StartAudio { output } => {
            Notification::new("Audio Recording", format!("Mic: {}\n{}", mic, output.display()))
        }
        RecorderAction::Screenshot { output } => {
            Notification::new("Screenshot Taken", output.display().to_string())
        }
        RecorderAction::Stop { .. } => return Ok(()),
    };
    desktop.notify(notification).await;
    Ok(())
}

pub async fn screenshot(desktop: &Desktop) -> anyhow::Result<()> {
    let settings = &desktop.settings.recorder;
    let dir = settings.screenshot_path();
    ensure_dir(&dir).await?;

    let output = recorder::timestamped_file(&dir, "screenshot", "png", Local::now());
    let action = RecorderAction::Screenshot {
        output: output.clone(),
    };
    if launch(desktop, &action).await? {
        desktop
            .notify(Notification::new(
                "Screenshot Taken",
                output.display().to_string(),
            ))
            .await;
    }
    Ok(())
}
