//! # Unit Types
//!
//! Type-safe wrappers for the quantities a takeoff deals with. These are
//! plain f64 newtypes that serialize as bare numbers.
//!
//! ## US Customary Units
//!
//! Residential framing is estimated in US customary units:
//! - Length: feet (ft), inches (in)
//! - Area: square feet (sq ft), square inches (sq in)
//! - Volume: cubic feet (cu ft), cubic yards (cu yd) for aggregate
//!
//! ## Example
//!
//! ```rust
//! use bldg_core::units::{CuFt, CuYd, Feet, Inches};
//!
//! let run = Feet(12.0);
//! let run_inches: Inches = run.into();
//! assert_eq!(run_inches.0, 144.0);
//!
//! let trench: CuYd = CuFt(27.0).into();
//! assert_eq!(trench.0, 1.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;

/// Square inches per square foot
pub const SQIN_PER_SQFT: f64 = 144.0;

/// Cubic feet per cubic yard
pub const CUFT_PER_CUYD: f64 = 27.0;

// ============================================================================
// Length Units
// ============================================================================

/// Length in feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Feet> for Inches {
    fn from(ft: Feet) -> Self {
        Inches(ft.0 * INCHES_PER_FOOT)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqIn(pub f64);

/// Area in square feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqFt(pub f64);

impl From<SqIn> for SqFt {
    fn from(sqin: SqIn) -> Self {
        SqFt(sqin.0 / SQIN_PER_SQFT)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic feet
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuFt(pub f64);

/// Volume in cubic yards (how gravel and concrete are ordered)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CuYd(pub f64);

impl From<CuFt> for CuYd {
    fn from(cuft: CuFt) -> Self {
        CuYd(cuft.0 / CUFT_PER_CUYD)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self(0.0), |acc, x| acc + x)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Feet);
impl_arithmetic!(Inches);
impl_arithmetic!(SqIn);
impl_arithmetic!(SqFt);
impl_arithmetic!(CuFt);
impl_arithmetic!(CuYd);

/// Multiplying two lengths gives an area.
impl Mul<Feet> for Feet {
    type Output = SqFt;
    fn mul(self, rhs: Feet) -> SqFt {
        SqFt(self.0 * rhs.0)
    }
}

impl Mul<Inches> for Inches {
    type Output = SqIn;
    fn mul(self, rhs: Inches) -> SqIn {
        SqIn(self.0 * rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_inches() {
        let ft = Feet(10.0);
        let inches: Inches = ft.into();
        assert_eq!(inches.0, 120.0);
    }

    #[test]
    fn test_sqin_to_sqft() {
        let area: SqFt = (Inches(36.0) * Inches(48.0)).into();
        assert_eq!(area.0, 12.0);
    }

    #[test]
    fn test_cuft_to_cuyd() {
        let vol: CuYd = CuFt(54.0).into();
        assert_eq!(vol.0, 2.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Feet(10.0);
        let b = Feet(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
        assert_eq!((a * b).0, 50.0);
    }

    #[test]
    fn test_sum() {
        let total: SqFt = vec![SqFt(1.5), SqFt(2.5), SqFt(4.0)].into_iter().sum();
        assert_eq!(total.0, 8.0);
        let empty: SqFt = Vec::<SqFt>::new().into_iter().sum();
        assert_eq!(empty.0, 0.0);
    }

    #[test]
    fn test_serialization() {
        let ft = Feet(12.5);
        let json = serde_json::to_string(&ft).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Feet = serde_json::from_str(&json).unwrap();
        assert_eq!(ft, roundtrip);
    }
}
