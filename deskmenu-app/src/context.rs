use deskmenu_config::Settings;
use deskmenu_core::{render_bar, ActionCommand, Notification};
use deskmenu_executor::{
    dispatch, CommandRunner, Dispatched, ExecutorError, ProcessTable, SystemProcessTable,
    SystemRunner,
};
use deskmenu_tools::{Notifier, NotifySend, Picker, RofiPicker};
use std::sync::Arc;

/// Everything a dispatcher talks to.
pub struct Desktop {
    pub settings: Settings,
    pub runner: Arc<dyn CommandRunner>,
    pub picker: Arc<dyn Picker>,
    pub notifier: Arc<dyn Notifier>,
    pub processes: Arc<dyn ProcessTable>,
}

impl Desktop {
    /// Wire the real tools: child processes, rofi, notify-send, sysinfo.
    pub fn system(settings: Settings) -> Self {
        let runner: Arc<dyn CommandRunner> = Arc::new(SystemRunner);
        Self {
            picker: Arc::new(RofiPicker::new(runner.clone(), settings.rofi.program.clone())),
            notifier: Arc::new(NotifySend::new(runner.clone())),
            processes: Arc::new(SystemProcessTable),
            runner,
            settings,
        }
    }

    pub async fn notify(&self, notification: Notification) {
        self.notifier.notify(&notification).await;
    }

    pub async fn dispatch(&self, action: &ActionCommand) -> Result<Dispatched, ExecutorError> {
        dispatch(self.runner.as_ref(), action).await
    }

    /// Dispatch, treating a nonzero exit as failure.
    pub async fn dispatch_checked(
        &self,
        action: &ActionCommand,
    ) -> Result<Dispatched, ExecutorError> {
        let dispatched = self.dispatch(action).await?;
        match &dispatched {
            Dispatched::Completed(output) if !output.success() => Err(ExecutorError::Failed {
                command: action.spec.to_string(),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            }),
            _ => Ok(dispatched),
        }
    }

    pub fn bar(&self, percent: u32) -> String {
        render_bar(percent, self.settings.notifications.bar_width)
    }
}
