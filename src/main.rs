use chaostri::app;
use chaostri::config::{Config, ITERMAX};
use chaostri::display::Display;
use chaostri::record::PositionRecord;

use log::info;
use rand::rngs::OsRng;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::default();
    let mut original = Box::new(PositionRecord::<ITERMAX>::new());

    let outcome = {
        let mut display = Display::open()?;
        let outcome = app::run(&config, display.canvas(), &mut OsRng, &mut *original)?;
        display.wait_for_key()?;
        outcome
    };

    info!(
        "plotted {} cells from {}, inverted {} rows",
        outcome.plotted, outcome.start, outcome.inverted_rows
    );
    Ok(())
}
