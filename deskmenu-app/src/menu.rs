//! Picker-backed selection and the yes/no confirmation gate.

use crate::context::Desktop;
use deskmenu_config::ConfirmIcons;
use deskmenu_core::{select_option, MenuOption};
use deskmenu_tools::MenuRequest;
use std::path::PathBuf;

const CONFIRM_LAYOUT: &str = "listview {columns: 2; lines: 1;}";

/// Show `options` and return the value behind the chosen label.
///
/// `None` on cancel or on a selection that matches no option.
pub async fn choose<T: Clone>(
    desktop: &Desktop,
    mut request: MenuRequest,
    options: &[MenuOption<T>],
) -> Option<T> {
    request.options = options.iter().map(|o| o.label.clone()).collect();
    let selection = desktop.picker.pick(&request).await;
    let chosen = select_option(options, &selection).cloned();
    if chosen.is_none() {
        tracing::debug!("No action for selection {:?} in {}", selection, request.prompt);
    }
    chosen
}

pub fn is_affirmative(selection: &str, icons: &ConfirmIcons) -> bool {
    !selection.is_empty() && selection == icons.yes
}

pub fn confirm_request(icons: &ConfirmIcons, message: &str, theme: PathBuf) -> MenuRequest {
    MenuRequest::new("Confirmation", vec![icons.yes.clone(), icons.no.clone()])
        .message(message)
        .theme(theme)
        .theme_str(CONFIRM_LAYOUT)
}

/// Yes/no gate in front of irreversible actions. Anything but the exact
/// affirmative glyph, including cancel, is a no.
pub async fn confirm(desktop: &Desktop, message: &str, theme: PathBuf) -> bool {
    let icons = &desktop.settings.icons.confirm;
    let selection = desktop
        .picker
        .pick(&confirm_request(icons, message, theme))
        .await;
    is_affirmative(&selection, icons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        let icons = ConfirmIcons::default();
        assert!(is_affirmative(&icons.yes, &icons));
        assert!(!is_affirmative(&icons.no, &icons));
        assert!(!is_affirmative("", &icons));
        assert!(!is_affirmative("yes", &icons));
        assert!(!is_affirmative(&format!("{} ", icons.yes), &icons));
    }

    #[test]
    fn test_empty_affirmative_never_confirms() {
        let icons = ConfirmIcons {
            yes: String::new(),
            no: "n".to_string(),
        };
        assert!(!is_affirmative("", &icons));
    }

    #[test]
    fn test_confirm_request_layout() {
        let icons = ConfirmIcons::default();
        let request = confirm_request(&icons, "Confirm?", PathBuf::from("/t.rasi"));
        assert_eq!(request.options, vec![icons.yes.clone(), icons.no.clone()]);
        assert_eq!(request.message.as_deref(), Some("Confirm?"));
        assert_eq!(request.theme_str.as_deref(), Some(CONFIRM_LAYOUT));
    }
}
