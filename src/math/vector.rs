use nalgebra::SVector;

use crate::error::GeometryError;

/// Checked and fail-soft operations on fixed-size vectors.
///
/// `nalgebra` already provides arithmetic, `dot`, `cross`, `norm`, `lerp`
/// and `slerp`. This trait adds the variants a mesh needs: normalization
/// that degrades to the zero vector instead of producing NaN, and
/// component access that reports an error instead of panicking.
pub trait VectorExt: Sized {
    /// Returns the unit vector in the same direction, or the zero vector
    /// if `self` has zero length.
    #[must_use]
    fn normalize_or_zero(&self) -> Self;

    /// Normalizes in place. A zero-length vector is left unchanged.
    fn normalize_in_place_or_zero(&mut self);

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index` is not below
    /// the vector's dimension.
    fn component(&self, index: usize) -> Result<f64, GeometryError>;

    /// Returns a mutable reference to the component at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::IndexOutOfRange`] if `index` is not below
    /// the vector's dimension.
    fn component_mut(&mut self, index: usize) -> Result<&mut f64, GeometryError>;

    /// Returns `true` if every component has magnitude below `epsilon`.
    fn is_zero_within(&self, epsilon: f64) -> bool;

    /// Returns `true` if the length differs from one by less than `epsilon`.
    fn is_normalized_within(&self, epsilon: f64) -> bool;
}

impl<const D: usize> VectorExt for SVector<f64, D> {
    fn normalize_or_zero(&self) -> Self {
        self.try_normalize(0.0).unwrap_or_else(Self::zeros)
    }

    fn normalize_in_place_or_zero(&mut self) {
        let _ = self.try_normalize_mut(0.0);
    }

    fn component(&self, index: usize) -> Result<f64, GeometryError> {
        self.get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                dimension: D,
            })
    }

    fn component_mut(&mut self, index: usize) -> Result<&mut f64, GeometryError> {
        self.get_mut(index).ok_or(GeometryError::IndexOutOfRange {
            index,
            dimension: D,
        })
    }

    fn is_zero_within(&self, epsilon: f64) -> bool {
        self.iter().all(|c| c.abs() < epsilon)
    }

    fn is_normalized_within(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }
}
