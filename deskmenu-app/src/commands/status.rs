//! Read-only state for status bars, as plain text or a JSON object.

use crate::cli::StatusItem;
use crate::commands::audio::volume_icon;
use crate::context::Desktop;
use deskmenu_state::CycleState;
use deskmenu_tools::audio::{self, DeviceKind};
use deskmenu_tools::{brightness, profile, recorder, UNKNOWN};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    pub class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

impl StatusLine {
    fn new(text: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tooltip: None,
            class: class.into(),
            percentage: None,
        }
    }

    fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    fn percentage(mut self, percentage: u32) -> Self {
        self.percentage = Some(percentage);
        self
    }
}

pub async fn query(desktop: &Desktop, item: StatusItem) -> StatusLine {
    let runner = desktop.runner.as_ref();
    match item {
        StatusItem::AudioOutput => {
            StatusLine::new(audio::output_port_label(runner).await, "audio-output")
        }
        StatusItem::AudioInput => {
            StatusLine::new(audio::input_device_name(runner).await, "audio-input")
        }
        StatusItem::Volume => match audio::default_device(runner, DeviceKind::Sink).await {
            Some(sink) => {
                let state = audio::volume_state(runner, &sink).await;
                let class = if state.muted { "muted" } else { "volume" };
                StatusLine::new(format!("{} {}%", volume_icon(state), state.percent), class)
                    .tooltip(sink)
                    .percentage(state.percent)
            }
            None => StatusLine::new(UNKNOWN, "unavailable"),
        },
        StatusItem::Mic => {
            if audio::source_muted(runner).await {
                StatusLine::new("🎤❌", "muted")
            } else {
                StatusLine::new("🎤", "live")
            }
        }
        StatusItem::Brightness => match brightness::brightness_percent(runner).await {
            Some(percent) => StatusLine::new(
                format!("{} {}%", brightness::icon_for(percent), percent),
                "brightness",
            )
            .percentage(percent),
            None => StatusLine::new(UNKNOWN, "unavailable"),
        },
        StatusItem::Profile => {
            let current = profile::current_profile(runner).await;
            let class = current.to_lowercase();
            StatusLine::new(current, class)
        }
        StatusItem::Recording => {
            match recorder::active_recording(desktop.processes.as_ref(), runner).await {
                Some(info) => StatusLine::new(info.kind.to_string(), "recording")
                    .tooltip(info.describe()),
                None => StatusLine::new("idle", "idle"),
            }
        }
        StatusItem::Layout => {
            let layouts = &desktop.settings.keyboard.layouts;
            let index = CycleState::new(desktop.settings.keyboard.state_path())
                .load()
                .await;
            match layouts.get(index % layouts.len().max(1)) {
                Some(layout) => StatusLine::new(layout.to_uppercase(), "layout"),
                None => StatusLine::new(UNKNOWN, "unavailable"),
            }
        }
    }
}

pub fn render(line: &StatusLine, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(line)
    } else {
        Ok(line.text.clone())
    }
}
