//! Treasury tenors and the fixed curve maturity grid

use crate::error::EsgError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Published treasury curve tenor, ordered by maturity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tenor {
    #[serde(rename = "1M")]
    M1,
    #[serde(rename = "2M")]
    M2,
    #[serde(rename = "3M")]
    M3,
    #[serde(rename = "6M")]
    M6,
    #[serde(rename = "1Y")]
    Y1,
    #[serde(rename = "2Y")]
    Y2,
    #[serde(rename = "3Y")]
    Y3,
    #[serde(rename = "5Y")]
    Y5,
    #[serde(rename = "7Y")]
    Y7,
    #[serde(rename = "10Y")]
    Y10,
    #[serde(rename = "20Y")]
    Y20,
    #[serde(rename = "30Y")]
    Y30,
}

/// Tenors of the constructed curve, ascending
pub const CURVE_TENORS: [Tenor; 10] = [
    Tenor::M3,
    Tenor::M6,
    Tenor::Y1,
    Tenor::Y2,
    Tenor::Y3,
    Tenor::Y5,
    Tenor::Y7,
    Tenor::Y10,
    Tenor::Y20,
    Tenor::Y30,
];

/// Maturities in years aligned with `CURVE_TENORS`
pub const CURVE_MATURITIES: [f64; 10] = [0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0];

impl Tenor {
    pub const ALL: [Tenor; 12] = [
        Tenor::M1,
        Tenor::M2,
        Tenor::M3,
        Tenor::M6,
        Tenor::Y1,
        Tenor::Y2,
        Tenor::Y3,
        Tenor::Y5,
        Tenor::Y7,
        Tenor::Y10,
        Tenor::Y20,
        Tenor::Y30,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tenor::M1 => "1M",
            Tenor::M2 => "2M",
            Tenor::M3 => "3M",
            Tenor::M6 => "6M",
            Tenor::Y1 => "1Y",
            Tenor::Y2 => "2Y",
            Tenor::Y3 => "3Y",
            Tenor::Y5 => "5Y",
            Tenor::Y7 => "7Y",
            Tenor::Y10 => "10Y",
            Tenor::Y20 => "20Y",
            Tenor::Y30 => "30Y",
        }
    }

    /// Maturity in years
    pub fn years(&self) -> f64 {
        match self {
            Tenor::M1 => 1.0 / 12.0,
            Tenor::M2 => 2.0 / 12.0,
            Tenor::M3 => 0.25,
            Tenor::M6 => 0.5,
            Tenor::Y1 => 1.0,
            Tenor::Y2 => 2.0,
            Tenor::Y3 => 3.0,
            Tenor::Y5 => 5.0,
            Tenor::Y7 => 7.0,
            Tenor::Y10 => 10.0,
            Tenor::Y20 => 20.0,
            Tenor::Y30 => 30.0,
        }
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tenor {
    type Err = EsgError;

    /// Accepts "1Y", "1y" and the published column headers "1 Yr", "3 Mo"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_uppercase();
        let normalized = normalized
            .strip_suffix("YR")
            .map(|n| format!("{}Y", n))
            .or_else(|| normalized.strip_suffix("MO").map(|n| format!("{}M", n)))
            .unwrap_or(normalized);

        Tenor::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| EsgError::UnknownTenor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!("1Y".parse::<Tenor>().unwrap(), Tenor::Y1);
        assert_eq!("20y".parse::<Tenor>().unwrap(), Tenor::Y20);
        assert_eq!("3 Mo".parse::<Tenor>().unwrap(), Tenor::M3);
        assert_eq!("30 Yr".parse::<Tenor>().unwrap(), Tenor::Y30);
        assert!(matches!("4 Mo".parse::<Tenor>(), Err(EsgError::UnknownTenor(_))));
        assert!("".parse::<Tenor>().is_err());
    }

    #[test]
    fn test_round_trip_display() {
        for tenor in Tenor::ALL {
            assert_eq!(tenor.to_string().parse::<Tenor>().unwrap(), tenor);
        }
    }

    #[test]
    fn test_curve_maturities_ascending() {
        assert!(CURVE_MATURITIES.windows(2).all(|w| w[0] < w[1]));
        for (tenor, maturity) in CURVE_TENORS.iter().zip(CURVE_MATURITIES) {
            assert_eq!(tenor.years(), maturity);
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&Tenor::Y10).unwrap();
        assert_eq!(json, "\"10Y\"");
        let parsed: Tenor = serde_json::from_str("\"6M\"").unwrap();
        assert_eq!(parsed, Tenor::M6);
    }
}
