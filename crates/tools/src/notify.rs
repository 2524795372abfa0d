//! Desktop notifications through `notify-send`.

use async_trait::async_trait;
use deskmenu_core::{CommandSpec, Notification};
use deskmenu_executor::CommandRunner;
use std::sync::Arc;

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `notification`. Failures are logged, never returned.
    async fn notify(&self, notification: &Notification);
}

pub fn notify_send_command(notification: &Notification) -> CommandSpec {
    let mut args = vec!["-u".to_string(), notification.urgency.as_str().to_string()];
    if let Some(id) = notification.replace_id {
        args.push("-r".to_string());
        args.push(id.to_string());
    }
    if let Some(app_name) = &notification.app_name {
        args.push(format!("--app-name={app_name}"));
    }
    if let Some(ms) = notification.expire_ms {
        args.push(format!("--expire-time={ms}"));
    }
    args.push(notification.title.clone());
    args.push(notification.body.clone());
    CommandSpec::new("notify-send", args)
}

pub struct NotifySend {
    runner: Arc<dyn CommandRunner>,
}

impl NotifySend {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl Notifier for NotifySend {
    async fn notify(&self, notification: &Notification) {
        let spec = notify_send_command(notification);
        match self.runner.run(&spec).await {
            Ok(output) if !output.success() => {
                tracing::warn!(
                    "notify-send exited with {:?}: {}",
                    output.code,
                    output.stderr.trim()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Notification not delivered: {}", e),
        }
    }
}
