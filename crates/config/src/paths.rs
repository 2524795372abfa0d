//! Home and XDG expansion for configured paths.

use std::env;
use std::path::PathBuf;

fn xdg_config_home() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Expand a leading `~` and any `$XDG_CONFIG_HOME` / `$HOME` occurrence.
///
/// Unresolvable variables are left in place.
pub fn expand_path(raw: &str) -> PathBuf {
    let mut expanded = raw.to_string();

    if expanded.contains("$XDG_CONFIG_HOME") {
        if let Some(config) = xdg_config_home() {
            expanded = expanded.replace("$XDG_CONFIG_HOME", &config.to_string_lossy());
        }
    }

    if let Some(home) = dirs::home_dir() {
        let home = home.to_string_lossy();
        if expanded.contains("$HOME") {
            expanded = expanded.replace("$HOME", &home);
        }
        if expanded == "~" {
            expanded = home.to_string();
        } else if let Some(rest) = expanded.strip_prefix("~/") {
            expanded = format!("{home}/{rest}");
        }
    }

    PathBuf::from(expanded)
}

/// Default location of the settings file.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_config_home().map(|dir| dir.join("deskmenu").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_untouched() {
        assert_eq!(expand_path("/tmp/state"), PathBuf::from("/tmp/state"));
    }

    #[test]
    fn test_tilde_expansion() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/Videos"), home.join("Videos"));
            assert_eq!(expand_path("~"), home);
        }
    }

    #[test]
    fn test_tilde_only_expands_at_start() {
        assert_eq!(expand_path("/a/~/b"), PathBuf::from("/a/~/b"));
    }

    #[test]
    fn test_unknown_variable_left_in_place() {
        assert_eq!(
            expand_path("$NOT_A_DESKMENU_VAR/x"),
            PathBuf::from("$NOT_A_DESKMENU_VAR/x")
        );
    }
}
