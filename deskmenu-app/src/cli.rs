use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deskmenu", version, about = "Menu-driven desktop controls")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose logging to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file (defaults to $XDG_CONFIG_HOME/deskmenu/config.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Change the default output's volume
    Volume {
        #[command(subcommand)]
        action: VolumeCommand,
    },
    /// Mute or pick the default microphone
    Mic {
        #[command(subcommand)]
        action: MicCommand,
    },
    /// Pick the default audio output
    Output {
        #[command(subcommand)]
        action: OutputCommand,
    },
    /// Change the backlight level
    Brightness {
        #[command(subcommand)]
        action: BrightnessCommand,
    },
    /// Lock, log out, sleep, shut down or reboot
    Power,
    /// Switch the platform performance profile
    Profile,
    /// Start or stop a screen or audio recording
    Record,
    /// Capture the screen to a file
    Screenshot,
    /// Cycle to the next keyboard layout
    Layout,
    /// Print one piece of desktop state for a status bar
    Status {
        #[arg(value_enum)]
        item: StatusItem,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeCommand {
    Up,
    Down,
    Mute,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicCommand {
    Mute,
    Select,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCommand {
    Select,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessCommand {
    Up,
    Down,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusItem {
    AudioOutput,
    AudioInput,
    Volume,
    Mic,
    Brightness,
    Profile,
    Recording,
    Layout,
}
