//! Per-scenario random streams
//!
//! Every scenario gets its own generator seeded from its scenario number, so
//! scenarios can be drawn in parallel and any single scenario can be
//! regenerated on its own.

use super::AaaGenerator;
use crate::config::EsgConfig;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Seed for a 1-based scenario number
pub fn scenario_seed(scenario: u32, seed_base: i64) -> i64 {
    scenario as i64 - 1 + seed_base
}

/// Random draws for one scenario, in draw order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioDraws {
    pub scenario: u32,
    pub seed: i64,
    /// periods * draws_per_period values, period-major
    pub values: Vec<f64>,
    pub draws_per_period: u32,
}

impl ScenarioDraws {
    /// Draws for a 1-based projection period
    pub fn period(&self, period: u32) -> Option<&[f64]> {
        let width = self.draws_per_period as usize;
        let start = (period as usize).checked_sub(1)? * width;
        self.values.get(start..start + width)
    }

    /// Last value drawn for the scenario
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }
}

/// Draw `periods * draws_per_period` values for one scenario
pub fn draw_scenario(scenario: u32, seed_base: i64, periods: u32, draws_per_period: u32) -> ScenarioDraws {
    let seed = scenario_seed(scenario, seed_base);
    let mut rng = AaaGenerator::new(seed);
    let values = rng.take_values(periods as usize * draws_per_period as usize);

    ScenarioDraws {
        scenario,
        seed,
        values,
        draws_per_period,
    }
}

/// Draw every configured scenario in parallel, ordered by scenario number
pub fn draw_scenarios(config: &EsgConfig) -> Vec<ScenarioDraws> {
    log::info!(
        "Drawing {} scenarios x {} months x {} draws (seed base {})",
        config.num_scenarios,
        config.projection_months,
        config.draws_per_month,
        config.seed_base
    );

    (1..=config.num_scenarios)
        .into_par_iter()
        .map(|scenario| {
            draw_scenario(
                scenario,
                config.seed_base,
                config.projection_months,
                config.draws_per_month,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario_seed() {
        assert_eq!(scenario_seed(9917, 10200), 20116);
        assert_eq!(scenario_seed(1, 10200), 10200);
    }

    #[test]
    fn test_draw_scenario_layout() {
        let draws = draw_scenario(9917, 10200, 360, 11);
        assert_eq!(draws.seed, 20116);
        assert_eq!(draws.values.len(), 3960);

        let month_1 = draws.period(1).expect("month 1");
        assert_eq!(month_1.len(), 11);
        assert_eq!(month_1[0], draws.values[0]);

        let month_360 = draws.period(360).expect("month 360");
        assert_eq!(month_360[10], draws.last().expect("last draw"));

        assert!(draws.period(0).is_none());
        assert!(draws.period(361).is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let config = EsgConfig {
            num_scenarios: 8,
            projection_months: 12,
            ..Default::default()
        };
        let parallel = draw_scenarios(&config);
        assert_eq!(parallel.len(), 8);

        for (i, draws) in parallel.iter().enumerate() {
            let scenario = i as u32 + 1;
            assert_eq!(draws.scenario, scenario);
            assert_eq!(*draws, draw_scenario(scenario, 10200, 12, 11));
        }
    }
}
