//! Different units for angles.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    f64::consts::{FRAC_1_PI, PI},
    ops::{Add, Div, Mul, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f64;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f64;
}

// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f64);

// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f64);

impl Degrees {
    fn value(self) -> f64 {
        self.0
    }
}

impl Radians {
    fn value(self) -> f64 {
        self.0
    }
}

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f64 {
        self.value()
    }

    fn radians(self) -> f64 {
        Radians::from(self).value()
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f64 {
        Degrees::from(self).value()
    }

    fn radians(self) -> f64 {
        self.value()
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.value()))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.value()))
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add for Radians {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub for Radians {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Mul<f64> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Mul<f64> for Radians {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl Div<f64> for Radians {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl PartialEq<Radians> for Degrees {
    fn eq(&self, rhs: &Radians) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialEq<Degrees> for Radians {
    fn eq(&self, rhs: &Degrees) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialOrd<Radians> for Degrees {
    fn partial_cmp(&self, rhs: &Radians) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl PartialOrd<Degrees> for Radians {
    fn partial_cmp(&self, rhs: &Degrees) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value().abs_diff_eq(&other.value(), epsilon)
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.value().abs_diff_eq(&other.value(), epsilon)
    }
}

impl AbsDiffEq<Radians> for Degrees {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Radians, epsilon: f64) -> bool {
        self.value()
            .abs_diff_eq(&Self::from(*other).value(), epsilon)
    }
}

impl RelativeEq for Degrees {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value()
            .relative_eq(&other.value(), epsilon, max_relative)
    }
}

impl RelativeEq for Radians {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.value()
            .relative_eq(&other.value(), epsilon, max_relative)
    }
}

fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (PI / 180.0)
}

fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 * FRAC_1_PI)
}
