//! Core data types for the scanner.

mod analysis;
mod bar;
mod interval;
mod order;

pub use analysis::{Analysis, FibLevels, SignalAction};
pub use bar::{Bar, BarSeries};
pub use interval::Interval;
pub use order::{OrderIntent, OrderRecord};
