//! Terminal detection.
//!
//! Two questions are asked of the environment: how wide the console is, and
//! whether escape sequences will be interpreted at all. Both answers are only
//! defaults; a table can override either.

use std::io::IsTerminal;

/// Narrowest console width a table will assume, and the fallback when the
/// size cannot be queried.
pub const MIN_TERMINAL_WIDTH: usize = 80;

struct EnvSettings {
    no_color: Option<String>,
    force_color: Option<String>,
    term: Option<String>,
}

fn read_env_settings() -> EnvSettings {
    EnvSettings {
        no_color: std::env::var("NO_COLOR").ok(),
        force_color: std::env::var("FORCE_COLOR").ok(),
        term: std::env::var("TERM").ok(),
    }
}

/// Get the terminal size (width, height) in cells.
///
/// Returns `None` if the terminal size cannot be determined.
#[must_use]
pub fn get_terminal_size() -> Option<(usize, usize)> {
    crossterm::terminal::size()
        .ok()
        .map(|(w, h)| (w as usize, h as usize))
}

/// Get the console width tables should fit into.
///
/// Falls back to [`MIN_TERMINAL_WIDTH`] when the size is unknown or smaller.
#[must_use]
pub fn get_terminal_width() -> usize {
    clamp_width(get_terminal_size().map(|(w, _)| w))
}

fn clamp_width(detected: Option<usize>) -> usize {
    match detected {
        Some(width) if width >= MIN_TERMINAL_WIDTH => width,
        _ => MIN_TERMINAL_WIDTH,
    }
}

fn force_color_forces_terminal(force_color: Option<&str>) -> bool {
    let Some(force_color) = force_color else {
        return false;
    };
    let force_color = force_color.trim();
    !force_color.is_empty() && force_color != "0"
}

fn is_dumb(term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term == "dumb" || term == "unknown"
}

/// Decide whether rendered tables should carry escape sequences.
///
/// `NO_COLOR` (non-empty) always wins; then `FORCE_COLOR`; otherwise stdout
/// must be a terminal that is not `dumb`.
#[must_use]
pub fn supports_styling() -> bool {
    supports_styling_with(&read_env_settings(), std::io::stdout().is_terminal())
}

fn supports_styling_with(env: &EnvSettings, is_tty: bool) -> bool {
    if env.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
        return false;
    }
    if force_color_forces_terminal(env.force_color.as_deref()) {
        return true;
    }
    is_tty && !env.term.as_deref().is_some_and(is_dumb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_env(
        no_color: Option<&str>,
        force_color: Option<&str>,
        term: Option<&str>,
    ) -> EnvSettings {
        EnvSettings {
            no_color: no_color.map(String::from),
            force_color: force_color.map(String::from),
            term: term.map(String::from),
        }
    }

    #[test]
    fn test_get_terminal_width_has_floor() {
        assert!(get_terminal_width() >= MIN_TERMINAL_WIDTH);
    }

    #[test]
    fn test_clamp_width() {
        assert_eq!(clamp_width(None), 80);
        assert_eq!(clamp_width(Some(40)), 80);
        assert_eq!(clamp_width(Some(80)), 80);
        assert_eq!(clamp_width(Some(132)), 132);
    }

    #[test]
    fn test_force_color_forces_terminal() {
        assert!(!force_color_forces_terminal(None));
        assert!(!force_color_forces_terminal(Some("")));
        assert!(!force_color_forces_terminal(Some("   ")));
        assert!(!force_color_forces_terminal(Some(" 0 ")));
        assert!(force_color_forces_terminal(Some("1")));
        assert!(force_color_forces_terminal(Some("true")));
    }

    #[test]
    fn test_styling_on_plain_tty() {
        assert!(supports_styling_with(&make_env(None, None, Some("xterm-256color")), true));
        assert!(supports_styling_with(&make_env(None, None, None), true));
    }

    #[test]
    fn test_styling_off_without_tty() {
        assert!(!supports_styling_with(&make_env(None, None, Some("xterm")), false));
    }

    #[test]
    fn test_no_color_wins() {
        assert!(!supports_styling_with(&make_env(Some("1"), Some("1"), None), true));
    }

    #[test]
    fn test_no_color_empty_string_ignored() {
        assert!(supports_styling_with(&make_env(Some(""), None, None), true));
    }

    #[test]
    fn test_force_color_without_tty() {
        assert!(supports_styling_with(&make_env(None, Some("1"), None), false));
    }

    #[test]
    fn test_dumb_terminal_disables_styling() {
        assert!(!supports_styling_with(&make_env(None, None, Some("dumb")), true));
        assert!(!supports_styling_with(&make_env(None, None, Some("UNKNOWN")), true));
    }
}
