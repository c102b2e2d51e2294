use std::time::Duration;

/// Steps drawn by the chaos game, and the capacity of the position record.
pub const ITERMAX: usize = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub iterations: usize,
    pub delay: Duration,
    pub plot_marker: char,
    pub start_marker: char,
    pub anchor_labels: [char; 3],
    /// Marker for the optional pass that overwrites every plotted cell before inversion.
    pub flip_marker: Option<char>,
    pub filled_with: char,
    pub empty_with: char,
    pub farewell: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            iterations: ITERMAX,
            delay: Duration::from_millis(1),
            plot_marker: '*',
            start_marker: '.',
            anchor_labels: ['0', '1', '2'],
            flip_marker: Some('-'),
            filled_with: ' ',
            empty_with: '0',
            farewell: "Press any key to quit".to_string(),
        }
    }
}

impl Config {
    pub fn headless() -> Self {
        Config {
            delay: Duration::from_secs(0),
            ..Config::default()
        }
    }
}
