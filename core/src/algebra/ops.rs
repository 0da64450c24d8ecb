use crate::algebra::matrix::{Matrix, Row};
use crate::prelude::{EngineError, EngineResult};

/// Sum of pairwise products of two equal-length integer rows.
///
/// Equal lengths are an internal invariant: `multiply` is the only
/// engine caller and always presents matched rows.
pub fn dot_product(a: &[i64], b: &[i64]) -> i64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

impl Matrix {
    /// Returns the transpose: height and width swap, `out[i][j] == self[j][i]`.
    ///
    /// Cannot fail for any well-formed matrix.
    pub fn transpose(&self) -> Matrix {
        let transposed: Vec<Row> = (0..self.width())
            .map(|col| (0..self.height()).map(|row| self.get(row, col)).collect())
            .collect();
        Matrix::from_rows_unchecked(transposed)
    }

    /// True iff `self * other` is dimensionally valid.
    ///
    /// Validates exactly the order presented; choosing between A*B and
    /// B*A is a caller decision, never inferred here.
    pub fn can_multiply(&self, other: &Matrix) -> bool {
        self.width() == other.height()
    }

    /// Computes `self * other` as dot products of rows of `self` with
    /// columns of `other`.
    ///
    /// `other` is transposed once so column `j` becomes row `j`; each
    /// output cell is then a row-by-row dot product. Incompatible
    /// operands are rejected with `DimensionMismatch` even though
    /// callers are expected to gate with [`Matrix::can_multiply`].
    pub fn multiply(&self, other: &Matrix) -> EngineResult<Matrix> {
        if !self.can_multiply(other) {
            return Err(EngineError::DimensionMismatch(
                self.height(),
                self.width(),
                other.height(),
                other.width(),
            ));
        }

        let other_t = other.transpose();
        let rows: Vec<Row> = (0..self.height())
            .map(|i| {
                (0..other.width())
                    .map(|j| dot_product(self.row(i), other_t.row(j)))
                    .collect()
            })
            .collect();
        Ok(Matrix::from_rows_unchecked(rows))
    }
}
