pub mod command_executor;
pub mod dispatch;
pub mod processes;

pub use command_executor::{CommandOutput, CommandRunner, ExecutorError, SystemRunner};
pub use dispatch::{dispatch, Dispatched};
pub use processes::{ProcessSnapshot, ProcessTable, SystemProcessTable};
