//! ESG Core - Deterministic numerical engine for economic scenario generation
//!
//! This library provides:
//! - The AAA lagged-table random number generator, reproducing the VBA sequence exactly
//! - Per-scenario random streams for interest rate scenario projection
//! - Two-point Nelson-Siegel yield curve interpolation and spot rate bootstrapping
//! - Treasury curve snapshots keyed by tenor, loadable from CSV

pub mod error;
pub mod config;
pub mod rng;
pub mod curve;
pub mod market_data;

// Re-export commonly used types
pub use error::{EsgError, Result};
pub use config::EsgConfig;
pub use rng::{AaaGenerator, ScenarioDraws, draw_scenario, draw_scenarios, scenario_seed};
pub use curve::{CurveConstructor, Tenor, TermStructure};
pub use market_data::TreasuryCurve;
