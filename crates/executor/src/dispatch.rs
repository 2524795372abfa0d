use crate::command_executor::{CommandOutput, CommandRunner, ExecutorError};
use deskmenu_core::{ActionCommand, ExecMode};

/// What a dispatch left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Completed(CommandOutput),
    Detached(u32),
}

impl Dispatched {
    /// Detached children count as success; their exit is never observed.
    pub fn success(&self) -> bool {
        match self {
            Dispatched::Completed(output) => output.success(),
            Dispatched::Detached(_) => true,
        }
    }
}

/// Launch exactly one child for `action`, honouring its execution mode.
pub async fn dispatch(
    runner: &dyn CommandRunner,
    action: &ActionCommand,
) -> Result<Dispatched, ExecutorError> {
    tracing::info!("Dispatching {:?}: {}", action.mode, action.spec);
    match action.mode {
        ExecMode::Blocking => runner.run(&action.spec).await.map(Dispatched::Completed),
        ExecMode::Detached => runner
            .spawn_detached(&action.spec)
            .await
            .map(Dispatched::Detached),
    }
}
