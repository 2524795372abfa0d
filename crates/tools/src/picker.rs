//! Menu presentation through an external dmenu-style picker.

use async_trait::async_trait;
use deskmenu_core::CommandSpec;
use deskmenu_executor::CommandRunner;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuRequest {
    pub prompt: String,
    pub message: Option<String>,
    pub options: Vec<String>,
    pub theme: Option<PathBuf>,
    /// Inline layout override, e.g. `listview {columns: 2; lines: 1;}`.
    pub theme_str: Option<String>,
}

impl MenuRequest {
    pub fn new(prompt: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            ..Default::default()
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn theme(mut self, theme: PathBuf) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn theme_str(mut self, theme_str: impl Into<String>) -> Self {
        self.theme_str = Some(theme_str.into());
        self
    }

    /// Options as fed on the picker's standard input.
    pub fn input(&self) -> String {
        self.options.join("\n")
    }
}

#[async_trait]
pub trait Picker: Send + Sync {
    /// The chosen label, trimmed, or an empty string on cancel or failure.
    async fn pick(&self, request: &MenuRequest) -> String;
}

pub struct RofiPicker {
    runner: Arc<dyn CommandRunner>,
    program: String,
}

impl RofiPicker {
    pub fn new(runner: Arc<dyn CommandRunner>, program: impl Into<String>) -> Self {
        Self {
            runner,
            program: program.into(),
        }
    }

    pub fn command(&self, request: &MenuRequest) -> CommandSpec {
        let mut args = vec!["-dmenu".to_string(), "-p".to_string(), request.prompt.clone()];
        if let Some(message) = &request.message {
            args.push("-mesg".to_string());
            args.push(message.clone());
        }
        if let Some(theme) = &request.theme {
            args.push("-theme".to_string());
            args.push(theme.to_string_lossy().to_string());
        }
        if let Some(theme_str) = &request.theme_str {
            args.push("-theme-str".to_string());
            args.push(theme_str.clone());
        }
        CommandSpec::new(self.program.clone(), args)
    }
}

#[async_trait]
impl Picker for RofiPicker {
    async fn pick(&self, request: &MenuRequest) -> String {
        let spec = self.command(request);
        match self.runner.output(&spec, Some(&request.input())).await {
            Ok(output) if output.success() => output
                .stdout
                .lines()
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
            Ok(_) => {
                tracing::debug!("Picker cancelled: {}", request.prompt);
                String::new()
            }
            Err(e) => {
                tracing::warn!("Picker unavailable: {}", e);
                String::new()
            }
        }
    }
}
