//! Screen and audio recording with `wf-recorder`, `ffmpeg` and `grim`.

use crate::audio;
use chrono::{DateTime, Local};
use deskmenu_core::{ActionCommand, CommandSpec};
use deskmenu_executor::{CommandRunner, ProcessTable};
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

pub const WF_RECORDER: &str = "wf-recorder";
pub const FFMPEG: &str = "ffmpeg";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordingKind {
    Screen,
    AudioOnly,
}

impl fmt::Display for RecordingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordingKind::Screen => write!(f, "screen"),
            RecordingKind::AudioOnly => write!(f, "audio-only"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "source", content = "device")]
pub enum AudioCapture {
    Microphone(String),
    System,
    Silent,
}

impl fmt::Display for AudioCapture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioCapture::Microphone(name) => write!(f, "microphone ({name})"),
            AudioCapture::System => write!(f, "system audio"),
            AudioCapture::Silent => write!(f, "silent"),
        }
    }
}

/// A recording in progress, recovered from the recorder's command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordingInfo {
    pub recorder: String,
    pub kind: RecordingKind,
    pub audio: AudioCapture,
    pub output: String,
}

impl RecordingInfo {
    pub fn describe(&self) -> String {
        format!(
            "<b>Active recording</b>\nType: {}\nAudio: {}\nFile: {}",
            self.kind, self.audio, self.output
        )
    }
}

/// Interpret a running `wf-recorder` argv.
pub fn screen_recording_info(cmd: &[String], mic: &str) -> RecordingInfo {
    let audio = if cmd.iter().any(|arg| arg == "--audio=default") {
        AudioCapture::Microphone(mic.to_string())
    } else if cmd
        .iter()
        .any(|arg| arg == "-a" || arg.starts_with("--audio"))
    {
        AudioCapture::System
    } else {
        AudioCapture::Silent
    };

    let output = cmd
        .iter()
        .position(|arg| arg == "-f")
        .and_then(|i| cmd.get(i + 1))
        .cloned()
        .or_else(|| {
            cmd.iter()
                .find_map(|arg| arg.strip_prefix("--file=").map(str::to_string))
        })
        .unwrap_or_else(|| crate::UNKNOWN.to_lowercase());

    RecordingInfo {
        recorder: WF_RECORDER.to_string(),
        kind: RecordingKind::Screen,
        audio,
        output,
    }
}

/// Interpret a running audio-only `ffmpeg` argv.
pub fn audio_recording_info(cmd: &[String], mic: &str) -> RecordingInfo {
    let output = cmd
        .iter()
        .skip(1)
        .last()
        .cloned()
        .unwrap_or_else(|| crate::UNKNOWN.to_lowercase());

    RecordingInfo {
        recorder: FFMPEG.to_string(),
        kind: RecordingKind::AudioOnly,
        audio: AudioCapture::Microphone(mic.to_string()),
        output,
    }
}

/// The running recording, screen recorder first.
pub async fn active_recording(
    processes: &dyn ProcessTable,
    runner: &dyn CommandRunner,
) -> Option<RecordingInfo> {
    if let Some(process) = processes.find_by_name(WF_RECORDER).await {
        let mic = audio::input_device_name(runner).await;
        return Some(screen_recording_info(&process.cmd, &mic));
    }
    if let Some(process) = processes.find_by_name(FFMPEG).await {
        let mic = audio::input_device_name(runner).await;
        return Some(audio_recording_info(&process.cmd, &mic));
    }
    None
}

/// `<dir>/<prefix>_<YYYYmmdd_HHMMSS>.<ext>`
pub fn timestamped_file(dir: &Path, prefix: &str, ext: &str, now: DateTime<Local>) -> PathBuf {
    dir.join(format!("{prefix}_{}.{ext}", now.format("%Y%m%d_%H%M%S")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAudio {
    Microphone,
    System,
    Silent,
}

/// Concrete recorder commands, each carrying its target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderAction {
    StartScreen { audio: ScreenAudio, output: PathBuf },
    StartAudio { output: PathBuf },
    Screenshot { output: PathBuf },
    Stop { recorder: String },
}

impl RecorderAction {
    pub fn command(&self) -> ActionCommand {
        match self {
            RecorderAction::StartScreen { audio, output } => {
                let mut args = Vec::new();
                match audio {
                    ScreenAudio::Microphone => args.push("--audio=default".to_string()),
                    ScreenAudio::System => args.push("--audio".to_string()),
                    ScreenAudio::Silent => {}
                }
                args.push("-f".to_string());
                args.push(output.to_string_lossy().to_string());
                ActionCommand::detached(CommandSpec::new(WF_RECORDER, args))
            }
            RecorderAction::StartAudio { output } => ActionCommand::detached(CommandSpec::new(
                FFMPEG,
                [
                    "-f".to_string(),
                    "pulse".to_string(),
                    "-i".to_string(),
                    "default".to_string(),
                    "-c:a".to_string(),
                    "mp3".to_string(),
                    output.to_string_lossy().to_string(),
                ],
            )),
            RecorderAction::Screenshot { output } => ActionCommand::detached(CommandSpec::new(
                "grim",
                [output.to_string_lossy().to_string()],
            )),
            // SIGINT lets the recorder finalize its container
            RecorderAction::Stop { recorder } => ActionCommand::blocking(CommandSpec::new(
                "pkill",
                ["-INT", "-x", recorder.as_str()],
            )),
        }
    }
}
