//! One dispatcher per feature. Each reads state, optionally asks through the
//! picker, dispatches at most one action and reports through a notification.

pub mod audio;
pub mod brightness;
pub mod devices;
pub mod layout;
pub mod power;
pub mod profile;
pub mod recorder;
pub mod status;

use crate::cli::{BrightnessCommand, Commands, MicCommand, OutputCommand, VolumeCommand};
use crate::context::Desktop;
use deskmenu_core::Direction;
use deskmenu_tools::audio::DeviceKind;

pub async fn run(desktop: &Desktop, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Volume { action } => match action {
            VolumeCommand::Up => audio::change_volume(desktop, Direction::Up).await,
            VolumeCommand::Down => audio::change_volume(desktop, Direction::Down).await,
            VolumeCommand::Mute => audio::toggle_output_mute(desktop).await,
        },
        Commands::Mic { action } => match action {
            MicCommand::Mute => audio::toggle_mic_mute(desktop).await,
            MicCommand::Select => devices::select_default(desktop, DeviceKind::Source).await,
        },
        Commands::Output {
            action: OutputCommand::Select,
        } => devices::select_default(desktop, DeviceKind::Sink).await,
        Commands::Brightness { action } => match action {
            BrightnessCommand::Up => brightness::change(desktop, Direction::Up).await,
            BrightnessCommand::Down => brightness::change(desktop, Direction::Down).await,
        },
        Commands::Power => power::menu(desktop).await,
        Commands::Profile => profile::menu(desktop).await,
        Commands::Record => recorder::menu(desktop).await,
        Commands::Screenshot => recorder::screenshot(desktop).await,
        Commands::Layout => layout::cycle(desktop).await,
        Commands::Status { item, json } => {
            let line = status::query(desktop, item).await;
            println!("{}", status::render(&line, json)?);
            Ok(())
        }
    }
}
