use deskmenu_core::{ActionCommand, CommandSpec};

/// Switch the X11 keymap without waiting for localectl.
pub fn set_layout(layout: &str) -> ActionCommand {
    ActionCommand::detached(CommandSpec::new("localectl", ["set-x11-keymap", layout]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use deskmenu_core::ExecMode;

    #[test]
    fn test_set_layout() {
        let action = set_layout("de");
        assert_eq!(action.mode, ExecMode::Detached);
        assert_eq!(action.spec.argv(), vec!["localectl", "set-x11-keymap", "de"]);
    }
}
