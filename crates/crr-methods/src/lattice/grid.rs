//! `Lattice` — the square node grid of a recombining binomial tree.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` of shape `(M+1) × (M+1)`.
//! Entry `(i, j)` is the node reached after `j` steps of which `i` were
//! down-moves, so only the upper triangle `i ≤ j` is meaningful. The lower
//! triangle is zero padding and is never read by the pricers.

use crr_core::{Error, Real, Result, Size};
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

/// A square `(steps + 1) × (steps + 1)` grid of node values.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice(DMatrix<Real>);

impl Lattice {
    /// Create a zero-filled lattice for a tree with `steps` steps.
    pub fn zeros(steps: Size) -> Self {
        Self(DMatrix::zeros(steps + 1, steps + 1))
    }

    /// Create a lattice by evaluating `f(i, j)` on every node with `i ≤ j`.
    ///
    /// Padding cells (`i > j`) are left at zero.
    pub fn from_nodes(steps: Size, mut f: impl FnMut(Size, Size) -> Real) -> Self {
        let mut lattice = Self::zeros(steps);
        for j in 0..=steps {
            for i in 0..=j {
                lattice.0[(i, j)] = f(i, j);
            }
        }
        lattice
    }

    /// Number of time steps `M`.
    pub fn steps(&self) -> Size {
        self.0.ncols() - 1
    }

    /// Number of time columns (= steps + 1).
    pub fn size(&self) -> Size {
        self.0.ncols()
    }

    /// Checked read of node `(i, j)`.
    ///
    /// Returns [`Error::IndexOutOfRange`] when either index lies past the
    /// last column.
    pub fn get(&self, i: Size, j: Size) -> Result<Real> {
        let size = self.size();
        if j >= size {
            return Err(Error::IndexOutOfRange { index: j, size });
        }
        if i >= size {
            return Err(Error::IndexOutOfRange { index: i, size });
        }
        Ok(self.0[(i, j)])
    }

    /// The meaningful nodes of time column `j` (`i = 0..=j`).
    pub fn column(&self, j: Size) -> Result<Vec<Real>> {
        let size = self.size();
        if j >= size {
            return Err(Error::IndexOutOfRange { index: j, size });
        }
        Ok((0..=j).map(|i| self.0[(i, j)]).collect())
    }

    /// Fail with [`Error::IndexOutOfRange`] unless the tree has at least
    /// `min_steps` steps.
    pub fn require_steps(&self, min_steps: Size) -> Result<()> {
        if self.steps() < min_steps {
            return Err(Error::IndexOutOfRange {
                index: min_steps,
                size: self.size(),
            });
        }
        Ok(())
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }
}

impl Index<(Size, Size)> for Lattice {
    type Output = Real;

    fn index(&self, idx: (Size, Size)) -> &Real {
        &self.0[idx]
    }
}

impl IndexMut<(Size, Size)> for Lattice {
    fn index_mut(&mut self, idx: (Size, Size)) -> &mut Real {
        &mut self.0[idx]
    }
}
