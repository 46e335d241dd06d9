use std::path::PathBuf;

use crate::config;
use crate::display;
use crate::error::Result;
use crate::renderer::Renderer;
use crate::state;
use crate::tracker::{Clock, Operation, SystemClock};

/// Load the data file, apply one operation, print the report and save.
///
/// A failed operation returns before the save, so nothing it changed in
/// memory reaches the file.
pub fn run(config_path: Option<PathBuf>, operation: Operation) -> Result<()> {
    let config = config::resolve(config_path.as_deref())?;
    let mut record = state::load(&config.data_file)?;

    let clock = SystemClock;
    operation.apply(&mut record, &clock)?;

    let report = Renderer::new(&config).render(&record, clock.now(), operation.view())?;
    display::print_report(&report, &config.display);

    state::save(&record, &config.data_file)
}
