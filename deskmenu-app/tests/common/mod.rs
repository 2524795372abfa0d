#![allow(dead_code)]

use async_trait::async_trait;
use deskmenu_app::Desktop;
use deskmenu_config::Settings;
use deskmenu_core::{CommandSpec, Notification};
use deskmenu_executor::{
    CommandOutput, CommandRunner, ExecutorError, ProcessSnapshot, ProcessTable,
};
use deskmenu_tools::{MenuRequest, Notifier, Picker};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;

fn owned(argv: &[&str]) -> Vec<String> {
    argv.iter().map(|s| s.to_string()).collect()
}

/// Answers queries from a table and records everything it was asked to run.
#[derive(Default)]
pub struct MockRunner {
    responses: Vec<(Vec<String>, CommandOutput)>,
    missing: Vec<String>,
    pub calls: Mutex<Vec<Vec<String>>>,
    pub detached: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, argv: &[&str], stdout: &str) -> Self {
        self.responses.push((
            owned(argv),
            CommandOutput {
                code: Some(0),
                stdout: stdout.to_string(),
                stderr: String::new(),
            },
        ));
        self
    }

    pub fn fail(mut self, argv: &[&str], code: i32) -> Self {
        self.responses.push((
            owned(argv),
            CommandOutput {
                code: Some(code),
                stdout: String::new(),
                stderr: "failed".to_string(),
            },
        ));
        self
    }

    pub fn missing(mut self, program: &str) -> Self {
        self.missing.push(program.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    pub fn detached(&self) -> Vec<Vec<String>> {
        self.detached.lock().clone()
    }

    pub fn ran(&self, argv: &[&str]) -> bool {
        let argv = owned(argv);
        self.calls().contains(&argv) || self.detached().contains(&argv)
    }

    pub fn ran_program(&self, program: &str, first_arg: &str) -> bool {
        self.calls()
            .iter()
            .chain(self.detached().iter())
            .any(|argv| argv.first().map(String::as_str) == Some(program)
                && argv.get(1).map(String::as_str) == Some(first_arg))
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn output(
        &self,
        spec: &CommandSpec,
        _stdin: Option<&str>,
    ) -> Result<CommandOutput, ExecutorError> {
        let argv = spec.argv();
        self.calls.lock().push(argv.clone());
        if self.missing.iter().any(|m| m == spec.program()) {
            return Err(ExecutorError::NotFound(spec.program().to_string()));
        }
        Ok(self
            .responses
            .iter()
            .find(|(expected, _)| *expected == argv)
            .map(|(_, output)| output.clone())
            .unwrap_or(CommandOutput {
                code: Some(0),
                ..Default::default()
            }))
    }

    async fn spawn_detached(&self, spec: &CommandSpec) -> Result<u32, ExecutorError> {
        if self.missing.iter().any(|m| m == spec.program()) {
            return Err(ExecutorError::NotFound(spec.program().to_string()));
        }
        self.detached.lock().push(spec.argv());
        Ok(4242)
    }
}

/// Returns queued selections in order, then cancels.
#[derive(Default)]
pub struct ScriptedPicker {
    selections: Mutex<VecDeque<String>>,
    pub requests: Mutex<Vec<MenuRequest>>,
}

impl ScriptedPicker {
    pub fn new<I, S>(selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selections: Mutex::new(selections.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<MenuRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl Picker for ScriptedPicker {
    async fn pick(&self, request: &MenuRequest) -> String {
        self.requests.lock().push(request.clone());
        self.selections.lock().pop_front().unwrap_or_default()
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.sent().into_iter().map(|n| n.title).collect()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: &Notification) {
        self.sent.lock().push(notification.clone());
    }
}

#[derive(Default)]
pub struct FakeProcesses {
    pub running: Vec<ProcessSnapshot>,
}

impl FakeProcesses {
    pub fn with(name: &str, cmd: &[&str]) -> Self {
        Self {
            running: vec![ProcessSnapshot {
                pid: 900,
                name: name.to_string(),
                cmd: owned(cmd),
            }],
        }
    }
}

#[async_trait]
impl ProcessTable for FakeProcesses {
    async fn find_by_name(&self, name: &str) -> Option<ProcessSnapshot> {
        self.running.iter().find(|p| p.name == name).cloned()
    }
}

pub struct Harness {
    pub desktop: Desktop,
    pub runner: Arc<MockRunner>,
    pub picker: Arc<ScriptedPicker>,
    pub notifier: Arc<RecordingNotifier>,
}

/// Settings pointing every writable path into `dir`.
pub fn settings_in(dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.keyboard.state_file = dir.join("kb_state").to_string_lossy().to_string();
    settings.recorder.video_dir = dir.join("videos").to_string_lossy().to_string();
    settings.recorder.screenshot_dir = dir.join("shots").to_string_lossy().to_string();
    settings
}

pub fn harness(
    settings: Settings,
    runner: MockRunner,
    picker: ScriptedPicker,
    processes: FakeProcesses,
) -> Harness {
    let runner = Arc::new(runner);
    let picker = Arc::new(picker);
    let notifier = Arc::new(RecordingNotifier::default());
    let desktop = Desktop {
        settings,
        runner: runner.clone(),
        picker: picker.clone(),
        notifier: notifier.clone(),
        processes: Arc::new(processes),
    };
    Harness {
        desktop,
        runner,
        picker,
        notifier,
    }
}
