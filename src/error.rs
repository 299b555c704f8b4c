//! Error types for market data, configuration and output validation
//!
//! The random number generator and the curve arithmetic are total functions;
//! errors only arise at the edges (parsing inputs, checking outputs).

use crate::curve::Tenor;
use thiserror::Error;

/// Errors raised by the ESG core
#[derive(Error, Debug)]
pub enum EsgError {
    /// Tenor label that is not one of the published treasury tenors
    #[error("Unknown tenor label: {0:?}")]
    UnknownTenor(String),

    /// Required tenor absent from a treasury curve snapshot
    #[error("Treasury curve for {date} has no {tenor} rate")]
    MissingTenor {
        date: chrono::NaiveDate,
        tenor: Tenor,
    },

    /// Non-finite value in a computed term structure
    #[error("Non-finite rate at {tenor}: {value}")]
    NonFiniteRate { tenor: Tenor, value: f64 },

    /// Non-finite anchor quote on a treasury curve snapshot
    #[error("Treasury curve for {date} has non-finite {tenor} rate: {value}")]
    NonFiniteQuote {
        date: chrono::NaiveDate,
        tenor: Tenor,
        value: f64,
    },

    #[error("Missing required column {0:?}")]
    MissingColumn(String),

    #[error("Invalid date {value:?} in row {row}")]
    InvalidDate { row: usize, value: String },

    #[error("Invalid rate {value:?} for {tenor} in row {row}")]
    InvalidRate {
        row: usize,
        tenor: Tenor,
        value: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EsgError>;
