//! Yield curve construction from two anchor rates

mod tenor;
mod term_structure;
mod constructor;

pub use tenor::{Tenor, CURVE_TENORS, CURVE_MATURITIES};
pub use term_structure::TermStructure;
pub use constructor::{
    CurveConstructor, BOND_CURVE_POINTS, SPOT_RATE_GRID_INDICES,
    MINIMUM_SHORT_RATE, MINIMUM_LONG_RATE, NS_DECAY,
};
