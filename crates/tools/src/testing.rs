use async_trait::async_trait;
use deskmenu_core::CommandSpec;
use deskmenu_executor::{CommandOutput, CommandRunner, ExecutorError};
use parking_lot::Mutex;

/// Runner answering from a fixed argv -> output table.
///
/// Unscripted commands succeed with empty output.
#[derive(Default)]
pub(crate) struct ScriptedRunner {
    responses: Vec<(Vec<String>, CommandOutput)>,
    missing: Vec<String>,
    pub calls: Mutex<Vec<Vec<String>>>,
    pub inputs: Mutex<Vec<Option<String>>>,
    pub detached: Mutex<Vec<Vec<String>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, argv: &[&str], stdout: &str) -> Self {
        self.responses.push((
            argv.iter().map(|s| s.to_string()).collect(),
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
            argv.iter().map(|s| s.to_string()).collect(),
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
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn output(
        &self,
        spec: &CommandSpec,
        stdin: Option<&str>,
    ) -> Result<CommandOutput, ExecutorError> {
        let argv = spec.argv();
        self.calls.lock().push(argv.clone());
        self.inputs.lock().push(stdin.map(str::to_string));

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
