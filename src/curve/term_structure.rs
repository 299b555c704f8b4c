//! Ten-point term structure aligned to the curve tenors

use super::tenor::{Tenor, CURVE_TENORS};
use crate::error::{EsgError, Result};
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Rates at 3M, 6M, 1Y, 2Y, 3Y, 5Y, 7Y, 10Y, 20Y, 30Y in that order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TermStructure {
    rates: [f64; 10],
}

impl TermStructure {
    pub fn new(rates: [f64; 10]) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &[f64; 10] {
        &self.rates
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Rate at a tenor, if the tenor is on the curve grid
    pub fn rate(&self, tenor: Tenor) -> Option<f64> {
        CURVE_TENORS
            .iter()
            .position(|t| *t == tenor)
            .map(|i| self.rates[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Tenor, f64)> + '_ {
        CURVE_TENORS.iter().copied().zip(self.rates.iter().copied())
    }

    pub fn is_finite(&self) -> bool {
        self.rates.iter().all(|r| r.is_finite())
    }

    /// Fail on the first non-finite rate
    pub fn ensure_finite(&self) -> Result<&Self> {
        match self.iter().find(|(_, r)| !r.is_finite()) {
            Some((tenor, value)) => Err(EsgError::NonFiniteRate { tenor, value }),
            None => Ok(self),
        }
    }
}

impl Index<usize> for TermStructure {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.rates[index]
    }
}

impl From<TermStructure> for [f64; 10] {
    fn from(ts: TermStructure) -> Self {
        ts.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup() {
        let ts = TermStructure::new([0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        assert_eq!(ts.rate(Tenor::M3), Some(0.0));
        assert_eq!(ts.rate(Tenor::Y20), Some(0.8));
        assert_eq!(ts.rate(Tenor::M1), None);
        assert_eq!(ts[9], 0.9);
        assert_eq!(ts.len(), 10);
        assert!(!ts.is_empty());
        assert_eq!(ts.iter().count(), 10);
    }

    #[test]
    fn test_ensure_finite_reports_tenor() {
        let mut rates = [0.01; 10];
        rates[7] = f64::NAN;
        rates[8] = f64::INFINITY;
        let ts = TermStructure::new(rates);

        assert!(!ts.is_finite());
        match ts.ensure_finite() {
            Err(EsgError::NonFiniteRate { tenor, value }) => {
                assert_eq!(tenor, Tenor::Y10);
                assert!(value.is_nan());
            }
            other => panic!("unexpected result: {:?}", other),
        }

        assert!(TermStructure::new([0.02; 10]).ensure_finite().is_ok());
    }
}
