use serde::{Deserialize, Serialize};
use std::fmt;

/// Program plus argument vector for one child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a full argv. Returns `None` for an empty vector.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Whether the dispatcher waits for the child or lets it outlive us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecMode {
    Blocking,
    Detached,
}

/// Relative adjustment direction for volume and brightness keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn sign(&self) -> char {
        match self {
            Direction::Up => '+',
            Direction::Down => '-',
        }
    }
}

/// A command together with its execution mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionCommand {
    pub spec: CommandSpec,
    pub mode: ExecMode,
}

impl ActionCommand {
    pub fn blocking(spec: CommandSpec) -> Self {
        Self {
            spec,
            mode: ExecMode::Blocking,
        }
    }

    pub fn detached(spec: CommandSpec) -> Self {
        Self {
            spec,
            mode: ExecMode::Detached,
        }
    }
}

/// One entry of a picker menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption<T> {
    pub label: String,
    pub value: T,
}

impl<T> MenuOption<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Exact-match lookup of a picker selection. The first matching label wins.
pub fn select_option<'a, T>(options: &'a [MenuOption<T>], selection: &str) -> Option<&'a T> {
    if selection.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| option.label == selection)
        .map(|option| &option.value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    Critical,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::Critical => "critical",
        }
    }
}

/// Desktop notification handed to the notification daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
    pub urgency: Urgency,
    pub replace_id: Option<u32>,
    pub app_name: Option<String>,
    pub expire_ms: Option<u32>,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            urgency: Urgency::Normal,
            replace_id: None,
            app_name: None,
            expire_ms: None,
        }
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    pub fn replacing(mut self, id: u32) -> Self {
        self.replace_id = Some(id);
        self
    }

    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }

    pub fn expire_after(mut self, ms: u32) -> Self {
        self.expire_ms = Some(ms);
        self
    }
}
