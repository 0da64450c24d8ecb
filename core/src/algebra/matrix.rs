use crate::prelude::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// One horizontal slice of a matrix, length equal to the matrix width.
pub type Row = Vec<i64>;

/// A rectangular grid of signed integers with fixed height and width.
///
/// A `Matrix` value is never empty: construction requires at least one
/// row and one column, and every row has the same length. "Not yet
/// input" is expressed as `Option<Matrix>` by the owning session, never
/// as a degenerate matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Row>", into = "Vec<Row>")]
pub struct Matrix {
    rows: Vec<Row>,
}

// Serde goes through the same shape checks as `from_rows`, so a
// deserialized matrix upholds the never-empty, equal-width invariant.
impl TryFrom<Vec<Row>> for Matrix {
    type Error = EngineError;

    fn try_from(rows: Vec<Row>) -> EngineResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Matrix::from_rows(height, width, rows)
    }
}

impl From<Matrix> for Vec<Row> {
    fn from(matrix: Matrix) -> Self {
        matrix.rows
    }
}

impl Matrix {
    /// Builds a matrix from validated rows.
    ///
    /// The engine's construction contract: exactly `height` rows, each
    /// of exactly `width` integers, in the order supplied. Re-prompting
    /// for a bad row is the caller's retry loop, not the engine's.
    pub fn from_rows(height: usize, width: usize, rows: Vec<Row>) -> EngineResult<Self> {
        if height == 0 || width == 0 {
            return Err(EngineError::InvalidDimension(format!(
                "{}x{} matrix",
                height, width
            )));
        }
        if rows.len() != height {
            return Err(EngineError::MalformedRow(format!(
                "expected {} rows, got {}",
                height,
                rows.len()
            )));
        }
        for (index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(EngineError::MalformedRow(format!(
                    "row {} has {} values, expected {}",
                    index + 1,
                    row.len(),
                    width
                )));
            }
        }
        Ok(Self { rows })
    }

    /// Internal constructor for rows the engine has already shaped
    /// (transpose and multiply outputs).
    pub(crate) fn from_rows_unchecked(rows: Vec<Row>) -> Self {
        debug_assert!(!rows.is_empty() && !rows[0].is_empty());
        Self { rows }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Borrows row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= height`.
    pub fn row(&self, index: usize) -> &[i64] {
        &self.rows[index]
    }

    /// Element at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_rectangular_matrix() {
        let m = Matrix::from_rows(2, 3, vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 3);
        assert_eq!(m.get(1, 2), 6);
        assert_eq!(m.row(0), &[1, 2, 3]);
    }

    #[test]
    fn from_rows_rejects_zero_dimensions() {
        let err = Matrix::from_rows(0, 3, vec![]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidDimension(_)));
        assert!(matches!(
            Matrix::from_rows(2, 0, vec![vec![], vec![]]).unwrap_err(),
            EngineError::InvalidDimension(_)
        ));
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Matrix::from_rows(2, 3, vec![vec![1, 2, 3], vec![4, 5]]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedRow(_)));
    }

    #[test]
    fn from_rows_rejects_wrong_row_count() {
        let err = Matrix::from_rows(3, 2, vec![vec![1, 2], vec![3, 4]]).unwrap_err();
        assert!(matches!(err, EngineError::MalformedRow(_)));
    }

    #[test]
    fn deserialization_goes_through_shape_checks() {
        assert!(serde_json::from_str::<Matrix>("[]").is_err());
        assert!(serde_json::from_str::<Matrix>("[[1,2],[3]]").is_err());
        assert!(serde_json::from_str::<Matrix>("[[]]").is_err());

        let m: Matrix = serde_json::from_str("[[1,2],[3,4]]").unwrap();
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 2);
    }

    #[test]
    fn serialization_round_trips_as_rows() {
        let m = Matrix::from_rows(2, 2, vec![vec![1, 2], vec![3, 4]]).unwrap();
        let encoded = serde_json::to_string(&m).unwrap();
        assert_eq!(encoded, "[[1,2],[3,4]]");
        let decoded: Matrix = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, m);
    }
}
