//! Axis permutation and reflection transforms.

use super::Matrix4;
use crate::vector::Vector4;

/// A signed coordinate axis direction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisDirection {
    PositiveX,
    NegativeX,
    PositiveY,
    NegativeY,
    PositiveZ,
    NegativeZ,
}

impl AxisDirection {
    /// Returns an array with each direction.
    pub const fn all() -> [Self; 6] {
        [
            Self::PositiveX,
            Self::NegativeX,
            Self::PositiveY,
            Self::NegativeY,
            Self::PositiveZ,
            Self::NegativeZ,
        ]
    }

    /// Returns the index of the axis the direction lies along.
    #[inline]
    pub const fn axis_index(&self) -> usize {
        match self {
            Self::PositiveX | Self::NegativeX => 0,
            Self::PositiveY | Self::NegativeY => 1,
            Self::PositiveZ | Self::NegativeZ => 2,
        }
    }

    /// Returns the sign of the direction along its axis.
    #[inline]
    pub const fn sign(&self) -> f64 {
        match self {
            Self::PositiveX | Self::PositiveY | Self::PositiveZ => 1.0,
            Self::NegativeX | Self::NegativeY | Self::NegativeZ => -1.0,
        }
    }

    /// Returns the direction along the same axis with the opposite sign.
    #[inline]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::PositiveX => Self::NegativeX,
            Self::NegativeX => Self::PositiveX,
            Self::PositiveY => Self::NegativeY,
            Self::NegativeY => Self::PositiveY,
            Self::PositiveZ => Self::NegativeZ,
            Self::NegativeZ => Self::PositiveZ,
        }
    }
}

impl Matrix4 {
    /// Creates the signed permutation matrix whose x-, y- and z-basis vectors
    /// point along the given source axis directions.
    ///
    /// # Panics
    /// If the three directions do not name three distinct axes.
    pub fn axis_permutation(x: AxisDirection, y: AxisDirection, z: AxisDirection) -> Self {
        assert_distinct_axes(x, y, z);

        let mut m = Self::zeros();
        m.set_column(0, &signed_axis_vector(x));
        m.set_column(1, &signed_axis_vector(y));
        m.set_column(2, &signed_axis_vector(z));
        m.m33 = 1.0;
        m
    }

    /// Computes `self` right-multiplied with the signed permutation matrix
    /// for the given directions: the first argument selects which source axis
    /// (and sign) of `self` provides the x-axis of the result, and likewise
    /// for y and z. The translation column is unchanged.
    ///
    /// # Panics
    /// If the three directions do not name three distinct axes.
    pub fn remapped_axes(&self, x: AxisDirection, y: AxisDirection, z: AxisDirection) -> Self {
        assert_distinct_axes(x, y, z);

        Self::from_columns(
            self.column(x.axis_index()) * x.sign(),
            self.column(y.axis_index()) * y.sign(),
            self.column(z.axis_index()) * z.sign(),
            self.column(3),
        )
    }

    /// Replaces this matrix with `self.remapped_axes(x, y, z)`.
    ///
    /// # Panics
    /// If the three directions do not name three distinct axes.
    pub fn remap_axes(&mut self, x: AxisDirection, y: AxisDirection, z: AxisDirection) {
        *self = self.remapped_axes(x, y, z);
    }

    /// Negates the x-basis column, mirroring the transform across the yz-plane
    /// of its source space.
    pub fn negated_x(&self) -> Self {
        self.remapped_axes(
            AxisDirection::NegativeX,
            AxisDirection::PositiveY,
            AxisDirection::PositiveZ,
        )
    }

    /// Negates the y-basis column, mirroring the transform across the xz-plane
    /// of its source space.
    pub fn negated_y(&self) -> Self {
        self.remapped_axes(
            AxisDirection::PositiveX,
            AxisDirection::NegativeY,
            AxisDirection::PositiveZ,
        )
    }

    /// Negates the z-basis column, mirroring the transform across the xy-plane
    /// of its source space.
    pub fn negated_z(&self) -> Self {
        self.remapped_axes(
            AxisDirection::PositiveX,
            AxisDirection::PositiveY,
            AxisDirection::NegativeZ,
        )
    }
}

fn assert_distinct_axes(x: AxisDirection, y: AxisDirection, z: AxisDirection) {
    assert!(
        x.axis_index() != y.axis_index()
            && x.axis_index() != z.axis_index()
            && y.axis_index() != z.axis_index(),
        "axis remap requires three distinct axes"
    );
}

fn signed_axis_vector(direction: AxisDirection) -> Vector4 {
    let mut column = Vector4::zeros();
    column[direction.axis_index()] = direction.sign();
    column
}
