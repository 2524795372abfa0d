//! Sound server queries and commands through `pactl`.

use crate::pactl::{self, DeviceBlock};
use crate::UNKNOWN;
use deskmenu_core::{CommandSpec, Direction};
use deskmenu_executor::CommandRunner;
use serde::Serialize;

pub const NO_MIC: &str = "No Mic";
pub const DEFAULT_SOURCE: &str = "@DEFAULT_SOURCE@";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Sink,
    Source,
}

impl DeviceKind {
    fn header(&self) -> &'static str {
        match self {
            DeviceKind::Sink => "Sink",
            DeviceKind::Source => "Source",
        }
    }

    fn plural(&self) -> &'static str {
        match self {
            DeviceKind::Sink => "sinks",
            DeviceKind::Source => "sources",
        }
    }

    fn default_query(&self) -> &'static str {
        match self {
            DeviceKind::Sink => "get-default-sink",
            DeviceKind::Source => "get-default-source",
        }
    }

    fn default_setter(&self) -> &'static str {
        match self {
            DeviceKind::Sink => "set-default-sink",
            DeviceKind::Source => "set-default-source",
        }
    }
}

/// A selectable device for the picker menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioDevice {
    pub name: String,
    pub description: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VolumeState {
    pub percent: u32,
    pub muted: bool,
}

pub async fn default_device(runner: &dyn CommandRunner, kind: DeviceKind) -> Option<String> {
    runner
        .stdout_of(&CommandSpec::new("pactl", [kind.default_query()]))
        .await
        .filter(|name| !name.is_empty())
}

pub async fn list_devices(runner: &dyn CommandRunner, kind: DeviceKind) -> Vec<DeviceBlock> {
    match runner
        .stdout_of(&CommandSpec::new("pactl", ["list", kind.plural()]))
        .await
    {
        Some(output) => pactl::parse_blocks(&output, kind.header()),
        None => Vec::new(),
    }
}

/// Named devices of `kind`, flagging the current default.
pub async fn devices(runner: &dyn CommandRunner, kind: DeviceKind) -> Vec<AudioDevice> {
    let default = default_device(runner, kind).await;
    list_devices(runner, kind)
        .await
        .iter()
        .filter_map(|block| {
            let name = block.name()?;
            Some(AudioDevice {
                name: name.to_string(),
                description: block.description().unwrap_or(name).to_string(),
                is_default: default.as_deref() == Some(name),
            })
        })
        .collect()
}

/// Pretty active port of the default sink, or `Unknown`.
pub async fn output_port_label(runner: &dyn CommandRunner) -> String {
    let Some(sink) = default_device(runner, DeviceKind::Sink).await else {
        return UNKNOWN.to_string();
    };
    let blocks = list_devices(runner, DeviceKind::Sink).await;
    pactl::find_device(&blocks, &sink)
        .and_then(DeviceBlock::active_port)
        .map(pactl::pretty_port)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Description of the default source, its raw name, or `No Mic`.
pub async fn input_device_name(runner: &dyn CommandRunner) -> String {
    let Some(source) = default_device(runner, DeviceKind::Source).await else {
        return NO_MIC.to_string();
    };
    let blocks = list_devices(runner, DeviceKind::Source).await;
    pactl::find_device(&blocks, &source)
        .and_then(DeviceBlock::description)
        .map(str::to_string)
        .unwrap_or(source)
}

/// Volume and mute flag of `sink`; `0%`, unmuted when unreadable.
pub async fn volume_state(runner: &dyn CommandRunner, sink: &str) -> VolumeState {
    let volume = runner
        .stdout_of(&CommandSpec::new("pactl", ["get-sink-volume", sink]))
        .await;
    let mute = runner
        .stdout_of(&CommandSpec::new("pactl", ["get-sink-mute", sink]))
        .await;

    match (volume, mute) {
        (Some(volume), Some(mute)) => VolumeState {
            percent: pactl::parse_volume_percent(&volume).unwrap_or(0),
            muted: pactl::parse_mute(&mute).unwrap_or(false),
        },
        _ => VolumeState::default(),
    }
}

/// Whether the default source is muted. Unreadable state counts as muted.
pub async fn source_muted(runner: &dyn CommandRunner) -> bool {
    runner
        .stdout_of(&CommandSpec::new("pactl", ["get-source-mute", DEFAULT_SOURCE]))
        .await
        .and_then(|output| pactl::parse_mute(&output))
        .unwrap_or(true)
}

pub fn change_sink_volume(sink: &str, direction: Direction, step: u32) -> CommandSpec {
    CommandSpec::new(
        "pactl",
        [
            "set-sink-volume".to_string(),
            sink.to_string(),
            format!("{}{}%", direction.sign(), step),
        ],
    )
}

pub fn toggle_sink_mute(sink: &str) -> CommandSpec {
    CommandSpec::new("pactl", ["set-sink-mute", sink, "toggle"])
}

pub fn toggle_source_mute() -> CommandSpec {
    CommandSpec::new("pactl", ["set-source-mute", DEFAULT_SOURCE, "toggle"])
}

pub fn set_default_device(kind: DeviceKind, name: &str) -> CommandSpec {
    CommandSpec::new("pactl", [kind.default_setter(), name])
}
