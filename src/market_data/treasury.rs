//! Daily treasury par yield curves keyed by tenor
//!
//! CSV layout follows the published daily treasury par yield table: a `Date`
//! column followed by one column per tenor ("1 Mo", "3 Mo", "1 Yr", ...) in
//! percent. Columns for tenors outside the twelve standard ones are ignored.

use crate::curve::Tenor;
use crate::error::{EsgError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Treasury par yields for one business day, as decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreasuryCurve {
    date: NaiveDate,
    rates: BTreeMap<Tenor, f64>,
}

impl TreasuryCurve {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            rates: BTreeMap::new(),
        }
    }

    /// Builder-style rate insertion (decimal, 0.0156 = 1.56%)
    pub fn with_rate(mut self, tenor: Tenor, rate: f64) -> Self {
        self.rates.insert(tenor, rate);
        self
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn rates(&self) -> &BTreeMap<Tenor, f64> {
        &self.rates
    }

    pub fn rate(&self, tenor: Tenor) -> Option<f64> {
        self.rates.get(&tenor).copied()
    }

    /// Rate at `tenor`, or `MissingTenor` if the snapshot does not quote it
    pub fn require(&self, tenor: Tenor) -> Result<f64> {
        self.rate(tenor).ok_or(EsgError::MissingTenor {
            date: self.date,
            tenor,
        })
    }

    /// (1Y, 20Y) anchor rates for curve construction
    pub fn anchor_rates(&self) -> Result<(f64, f64)> {
        Ok((self.require(Tenor::Y1)?, self.require(Tenor::Y20)?))
    }
}

/// Curve quoted on `date`, or the most recent one before it
pub fn curve_for_date(curves: &[TreasuryCurve], date: NaiveDate) -> Option<&TreasuryCurve> {
    curves
        .iter()
        .filter(|c| c.date <= date)
        .max_by_key(|c| c.date)
}

fn parse_date(row: usize, value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .ok_or_else(|| EsgError::InvalidDate {
            row,
            value: value.to_string(),
        })
}

/// Load treasury curves from a CSV file
pub fn load_treasury_curves<P: AsRef<Path>>(path: P) -> Result<Vec<TreasuryCurve>> {
    let file = File::open(path.as_ref())?;
    let curves = load_treasury_curves_from_reader(file)?;
    log::info!("Loaded {} treasury curves from {}", curves.len(), path.as_ref().display());
    Ok(curves)
}

/// Load treasury curves from any CSV reader, in file order
pub fn load_treasury_curves_from_reader<R: Read>(reader: R) -> Result<Vec<TreasuryCurve>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_col = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("date"))
        .ok_or_else(|| EsgError::MissingColumn("Date".to_string()))?;

    let tenor_cols: Vec<(usize, Tenor)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != date_col)
        .filter_map(|(i, h)| match h.parse::<Tenor>() {
            Ok(tenor) => Some((i, tenor)),
            Err(_) => {
                log::debug!("Ignoring treasury column {:?}", h);
                None
            }
        })
        .collect();

    let mut curves = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let row = idx + 1;
        let date = parse_date(row, record.get(date_col).unwrap_or(""))?;

        let mut curve = TreasuryCurve::new(date);
        for &(col, tenor) in &tenor_cols {
            let raw = record.get(col).unwrap_or("");
            if raw.is_empty() || raw.eq_ignore_ascii_case("N/A") {
                continue;
            }
            let pct = raw
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| EsgError::InvalidRate {
                    row,
                    tenor,
                    value: raw.to_string(),
                })?;
            curve.rates.insert(tenor, pct / 100.0);
        }
        curves.push(curve);
    }

    Ok(curves)
}
