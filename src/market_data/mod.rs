//! Treasury market data snapshots and CSV loading

pub mod treasury;

pub use treasury::{TreasuryCurve, load_treasury_curves, load_treasury_curves_from_reader, curve_for_date};
