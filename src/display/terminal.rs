//! TTY detection and color support logic

use std::io::IsTerminal;

use crate::config::Display;

/// Colour-related environment as seen by this process
#[derive(Debug, Default, Clone)]
struct ColorEnv {
    no_color: bool,
    clicolor_force: Option<String>,
    clicolor: Option<String>,
    is_tty: bool,
}

impl ColorEnv {
    fn current() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            clicolor_force: std::env::var("CLICOLOR_FORCE").ok(),
            clicolor: std::env::var("CLICOLOR").ok(),
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    fn allows_color(&self) -> bool {
        // NO_COLOR takes precedence (https://no-color.org/)
        if self.no_color {
            return false;
        }
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }
        self.is_tty
    }
}

/// Determine if colors should be used based on config, environment and TTY status
pub fn should_use_colors(display: &Display) -> bool {
    display.color && ColorEnv::current().allows_color()
}
