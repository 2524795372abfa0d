//! Read-only view of the process table.

use async_trait::async_trait;
use std::path::Path;
use sysinfo::System;
use tokio::task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSnapshot {
    pub pid: u32,
    pub name: String,
    pub cmd: Vec<String>,
}

impl ProcessSnapshot {
    pub fn command_line(&self) -> String {
        self.cmd.join(" ")
    }
}

#[async_trait]
pub trait ProcessTable: Send + Sync {
    /// Lowest-pid process whose executable name is exactly `name`.
    async fn find_by_name(&self, name: &str) -> Option<ProcessSnapshot>;
}

fn matches_name(process_name: &str, cmd: &[String], name: &str) -> bool {
    if process_name == name {
        return true;
    }
    cmd.first()
        .and_then(|argv0| Path::new(argv0).file_name())
        .map(|file| file == name)
        .unwrap_or(false)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessTable;

#[async_trait]
impl ProcessTable for SystemProcessTable {
    async fn find_by_name(&self, name: &str) -> Option<ProcessSnapshot> {
        let name = name.to_string();
        let lookup = task::spawn_blocking(move || {
            let mut system = System::new();
            system.refresh_processes();

            system
                .processes()
                .iter()
                .filter(|(_, process)| matches_name(process.name(), process.cmd(), &name))
                .min_by_key(|(pid, _)| pid.as_u32())
                .map(|(pid, process)| ProcessSnapshot {
                    pid: pid.as_u32(),
                    name: process.name().to_string(),
                    cmd: process.cmd().to_vec(),
                })
        })
        .await;

        match lookup {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("Process table lookup failed: {}", e);
                None
            }
        }
    }
}
