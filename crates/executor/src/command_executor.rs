use async_trait::async_trait;
use deskmenu_core::CommandSpec;
use std::process::Stdio;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("Command not found: {0}")]
    NotFound(String),
    #[error("Command `{command}` failed with status {code:?}: {stderr}")]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Captured result of a waited-for child.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Seam between dispatchers and the operating system.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run to completion, optionally feeding `stdin`, and capture output.
    async fn output(
        &self,
        spec: &CommandSpec,
        stdin: Option<&str>,
    ) -> Result<CommandOutput, ExecutorError>;

    /// Start a child that outlives this process. Returns its pid.
    async fn spawn_detached(&self, spec: &CommandSpec) -> Result<u32, ExecutorError>;

    async fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ExecutorError> {
        self.output(spec, None).await
    }

    /// Like `run`, but a nonzero exit is an error.
    async fn run_checked(&self, spec: &CommandSpec) -> Result<CommandOutput, ExecutorError> {
        let output = self.output(spec, None).await?;
        if output.success() {
            return Ok(output);
        }
        Err(ExecutorError::Failed {
            command: spec.to_string(),
            code: output.code,
            stderr: output.stderr.trim().to_string(),
        })
    }

    /// Trimmed stdout of a successful run, `None` on any failure.
    async fn stdout_of(&self, spec: &CommandSpec) -> Option<String> {
        match self.run_checked(spec).await {
            Ok(output) => Some(output.stdout.trim().to_string()),
            Err(e) => {
                tracing::debug!("Query `{}` failed: {}", spec, e);
                None
            }
        }
    }
}

fn spawn_error(spec: &CommandSpec, error: std::io::Error) -> ExecutorError {
    if error.kind() == std::io::ErrorKind::NotFound {
        ExecutorError::NotFound(spec.program().to_string())
    } else {
        ExecutorError::Io(error)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn output(
        &self,
        spec: &CommandSpec,
        stdin: Option<&str>,
    ) -> Result<CommandOutput, ExecutorError> {
        tracing::debug!("Executing command: {}", spec);

        let mut command = Command::new(spec.program());
        command
            .args(spec.args())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });

        let mut child = command.spawn().map_err(|e| spawn_error(spec, e))?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            match pipe.write_all(input.as_bytes()).await {
                Ok(()) => {}
                // child exited without reading everything
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output().await?;
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    async fn spawn_detached(&self, spec: &CommandSpec) -> Result<u32, ExecutorError> {
        tracing::debug!("Spawning detached: {}", spec);

        let child = Command::new(spec.program())
            .args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| spawn_error(spec, e))?;

        Ok(child.id().unwrap_or_default())
    }
}
