//! Two-point Nelson-Siegel curve construction and spot rate bootstrapping
//!
//! The 1Y and 20Y rates fix the level and slope factors of a Nelson-Siegel
//! curve with decay 0.4. The ten interpolated par rates are expanded to a
//! semi-annual grid of 61 points and stripped into zero-coupon spot rates.
//! Every step mirrors the VBA scenario generator so results match its
//! spreadsheet output.

use super::tenor::{Tenor, CURVE_MATURITIES};
use super::term_structure::TermStructure;
use crate::error::{EsgError, Result};
use crate::market_data::TreasuryCurve;

/// Nelson-Siegel decay constant
pub const NS_DECAY: f64 = 0.4;

/// Floor applied to the 1Y anchor when building from market data
pub const MINIMUM_SHORT_RATE: f64 = 0.0001;

/// Floor applied to the 20Y anchor when building from market data
pub const MINIMUM_LONG_RATE: f64 = 0.0001;

/// Semi-annual grid size: 3M slot plus 0.5Y..30Y
pub const BOND_CURVE_POINTS: usize = 61;

/// Grid positions of the 3M, 6M, 1Y, 2Y, 3Y, 5Y, 7Y, 10Y, 20Y and 30Y tenors
pub const SPOT_RATE_GRID_INDICES: [usize; 10] = [0, 1, 2, 4, 6, 10, 14, 20, 40, 60];

/// Slope loading (1 - e^{-Kt}) / (Kt)
fn slope_loading(maturity: f64) -> f64 {
    (1.0 - (-NS_DECAY * maturity).exp()) / (NS_DECAY * maturity)
}

/// Two-point yield curve built from the 1Y and 20Y rates
#[derive(Debug, Clone)]
pub struct CurveConstructor {
    short_rate: f64,
    long_rate: f64,
    b0: f64,
    b1: f64,
    interpolated_rates: [f64; 10],
}

impl CurveConstructor {
    /// Build the curve from the 1Y (`short_rate`) and 20Y (`long_rate`)
    /// rates as decimals. No range checks are applied.
    pub fn new(short_rate: f64, long_rate: f64) -> Self {
        let c1 = slope_loading(1.0);
        let c20 = slope_loading(20.0);

        let b1 = (short_rate - long_rate) / (c1 - c20);
        let b0 = short_rate - b1 * c1;

        let mut interpolated_rates = [0.0; 10];
        for (rate, &maturity) in interpolated_rates.iter_mut().zip(CURVE_MATURITIES.iter()) {
            *rate = b0 + b1 * slope_loading(maturity);
        }

        log::debug!(
            "Nelson-Siegel curve for 1Y={} 20Y={}: b0={}, b1={}",
            short_rate, long_rate, b0, b1
        );

        Self {
            short_rate,
            long_rate,
            b0,
            b1,
            interpolated_rates,
        }
    }

    /// Build from a treasury snapshot's 1Y and 20Y quotes, floored at 1bp
    pub fn from_treasury(curve: &TreasuryCurve) -> Result<Self> {
        let short_rate = curve.require(Tenor::Y1)?;
        let long_rate = curve.require(Tenor::Y20)?;

        for (tenor, value) in [(Tenor::Y1, short_rate), (Tenor::Y20, long_rate)] {
            if !value.is_finite() {
                return Err(EsgError::NonFiniteQuote {
                    date: curve.date(),
                    tenor,
                    value,
                });
            }
        }

        if short_rate < MINIMUM_SHORT_RATE || long_rate < MINIMUM_LONG_RATE {
            log::warn!(
                "Flooring treasury anchors for {}: 1Y={} 20Y={}",
                curve.date(), short_rate, long_rate
            );
        }

        Ok(Self::new(
            short_rate.max(MINIMUM_SHORT_RATE),
            long_rate.max(MINIMUM_LONG_RATE),
        ))
    }

    pub fn short_rate(&self) -> f64 {
        self.short_rate
    }

    pub fn long_rate(&self) -> f64 {
        self.long_rate
    }

    /// Level and slope factors (b0, b1)
    pub fn nelson_siegel_factors(&self) -> (f64, f64) {
        (self.b0, self.b1)
    }

    /// Par rates at 3M, 6M, 1Y, 2Y, 3Y, 5Y, 7Y, 10Y, 20Y, 30Y
    pub fn interpolated_rates(&self) -> &[f64; 10] {
        &self.interpolated_rates
    }

    pub fn interpolated_term_structure(&self) -> TermStructure {
        TermStructure::new(self.interpolated_rates)
    }

    /// Semi-annual bond curve.
    ///
    /// Element n is the coupon rate per half year at tenor n/2 years; element 0
    /// holds the annual 3M rate. Segments between curve points are linear with
    /// 4 steps for 3Y, 4 for 5Y, 6 for 7Y and 20 each for 10Y-20Y and 20Y-30Y.
    pub fn bond_curves(&self) -> [f64; BOND_CURVE_POINTS] {
        let r = &self.interpolated_rates;
        let mut bc = [0.0; BOND_CURVE_POINTS];

        bc[0] = r[0];
        bc[1] = r[1];
        bc[2] = r[2];
        bc[3] = (r[2] + r[3]) / 2.0;
        bc[4] = r[3];
        bc[5] = (r[3] + r[4]) / 2.0;
        bc[6] = r[4];
        for i in 1..=4 {
            bc[6 + i] = r[4] + (i as f64 * 0.25 * (r[5] - r[4]));
        }
        for i in 1..=4 {
            bc[10 + i] = r[5] + (i as f64 * 0.25 * (r[6] - r[5]));
        }
        for i in 1..=6 {
            bc[14 + i] = r[6] + (i as f64 / 6.0 * (r[7] - r[6]));
        }
        for i in 1..=20 {
            bc[20 + i] = r[7] + (i as f64 / 20.0 * (r[8] - r[7]));
        }
        for i in 1..=20 {
            bc[40 + i] = r[8] + (i as f64 / 20.0 * (r[9] - r[8]));
        }

        for rate in bc.iter_mut().skip(1) {
            *rate /= 2.0;
        }

        bc
    }

    /// Bootstrap annual effective spot rates at the ten curve tenors.
    ///
    /// A grid point whose discount factor comes out non-positive keeps a spot
    /// rate of zero while its factor still accumulates into the annuity. Results
    /// can be non-finite for extreme inputs; see `TermStructure::ensure_finite`.
    pub fn calculate_spot_rates(&self) -> TermStructure {
        let bc = self.bond_curves();
        let mut s = [0.0; BOND_CURVE_POINTS];

        // 3M enters on the same half-year basis as the rest of the grid
        s[0] = bc[0] / 2.0;
        s[1] = bc[1];
        let mut annuity_factor = 1.0 / (1.0 + s[1]);

        for i in 2..BOND_CURVE_POINTS {
            let pv_factor = (1.0 - bc[i] * annuity_factor) / (1.0 + bc[i]);
            if pv_factor > 0.0 {
                s[i] = pv_factor.powf(-1.0 / i as f64) - 1.0;
            } else {
                log::warn!(
                    "Non-positive discount factor {} at grid point {} (1Y={}, 20Y={})",
                    pv_factor, i, self.short_rate, self.long_rate
                );
            }
            annuity_factor += pv_factor;
        }

        let mut spot_rates = [0.0; 10];
        for (spot, &index) in spot_rates.iter_mut().zip(SPOT_RATE_GRID_INDICES.iter()) {
            *spot = (1.0 + s[index]).powi(2) - 1.0;
        }

        TermStructure::new(spot_rates)
    }
}
