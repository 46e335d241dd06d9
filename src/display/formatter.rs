//! Report printing, with the summary lines highlighted when colours are on

use termimad::crossterm::style::{style, Stylize};

use crate::config::Display;
use crate::display::terminal::should_use_colors;
use crate::renderer::Report;

/// Print a status report to stdout
pub fn print_report(report: &Report, display: &Display) {
    if should_use_colors(display) {
        print!("{}", styled(report));
    } else {
        print!("{}", report.to_plain());
    }
}

/// `Report::to_plain` with the summary lines in bold cyan
fn styled(report: &Report) -> String {
    report.layout(|line| style(line).cyan().bold().to_string())
}
