use crate::algebra::Matrix;
use crate::prelude::{EngineError, EngineResult, Slot};
use crate::telemetry::{LogManager, MetricsRecorder, OpSnapshot};

/// Explicit session state: the two matrix slots a user fills and
/// operates on across menu turns.
///
/// Slots start unset and are only ever mutated by full replacement
/// after a successful engine call, so a failed operation leaves both
/// slots exactly as they were.
pub struct Session {
    a: Option<Matrix>,
    b: Option<Matrix>,
    logger: LogManager,
    metrics: MetricsRecorder,
}

impl Session {
    pub fn new() -> Self {
        Self {
            a: None,
            b: None,
            logger: LogManager::new(),
            metrics: MetricsRecorder::new(),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&Matrix> {
        match slot {
            Slot::A => self.a.as_ref(),
            Slot::B => self.b.as_ref(),
        }
    }

    /// Stores a freshly constructed matrix, replacing any previous value.
    pub fn set(&mut self, slot: Slot, matrix: Matrix) {
        self.logger.record_op(
            "fill",
            &format!("{} <- {}x{}", slot, matrix.height(), matrix.width()),
        );
        self.metrics.record_fill();
        match slot {
            Slot::A => self.a = Some(matrix),
            Slot::B => self.b = Some(matrix),
        }
    }

    /// Replaces the stored matrix with its transpose and returns a
    /// borrow of the new value.
    pub fn transpose(&mut self, slot: Slot) -> EngineResult<&Matrix> {
        let transposed = match self.get(slot) {
            Some(matrix) => matrix.transpose(),
            None => {
                self.logger
                    .record_rejection("transpose", &format!("slot {} unset", slot));
                self.metrics.record_rejection();
                return Err(EngineError::UnsetMatrix(slot));
            }
        };

        self.logger.record_op(
            "transpose",
            &format!("{} -> {}x{}", slot, transposed.height(), transposed.width()),
        );
        self.metrics.record_transpose();
        let stored = match slot {
            Slot::A => self.a.insert(transposed),
            Slot::B => self.b.insert(transposed),
        };
        Ok(stored)
    }

    /// Multiplies the stored matrices in exactly the order given.
    ///
    /// Both operands stay in their slots untouched; the product is
    /// returned to the caller to print or discard.
    pub fn multiply(&self, first: Slot, second: Slot) -> EngineResult<Matrix> {
        let lhs = self.require(first)?;
        let rhs = self.require(second)?;

        if !lhs.can_multiply(rhs) {
            self.logger.record_rejection(
                "multiply",
                &format!("{}x{} * {}x{}", lhs.height(), lhs.width(), rhs.height(), rhs.width()),
            );
            self.metrics.record_rejection();
            return Err(EngineError::DimensionMismatch(
                lhs.height(),
                lhs.width(),
                rhs.height(),
                rhs.width(),
            ));
        }

        let product = lhs.multiply(rhs)?;
        self.logger.record_op(
            "multiply",
            &format!(
                "{}*{} -> {}x{}",
                first,
                second,
                product.height(),
                product.width()
            ),
        );
        self.metrics.record_multiply();
        Ok(product)
    }

    pub fn metrics(&self) -> OpSnapshot {
        self.metrics.snapshot()
    }

    fn require(&self, slot: Slot) -> EngineResult<&Matrix> {
        self.get(slot).ok_or_else(|| {
            self.logger
                .record_rejection("multiply", &format!("slot {} unset", slot));
            self.metrics.record_rejection();
            EngineError::UnsetMatrix(slot)
        })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<i64>>) -> Matrix {
        let height = rows.len();
        let width = rows[0].len();
        Matrix::from_rows(height, width, rows).unwrap()
    }

    #[test]
    fn slots_start_unset() {
        let session = Session::new();
        assert!(session.get(Slot::A).is_none());
        assert!(session.get(Slot::B).is_none());
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut session = Session::new();
        session.set(Slot::A, matrix(vec![vec![1]]));
        session.set(Slot::A, matrix(vec![vec![2, 3]]));
        assert_eq!(session.get(Slot::A).unwrap().width(), 2);
    }

    #[test]
    fn transpose_of_unset_slot_is_reported() {
        let mut session = Session::new();
        let err = session.transpose(Slot::B).unwrap_err();
        assert_eq!(err, EngineError::UnsetMatrix(Slot::B));
        assert!(session.get(Slot::B).is_none());
    }

    #[test]
    fn transpose_replaces_slot_in_place() {
        let mut session = Session::new();
        session.set(Slot::A, matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        let transposed = session.transpose(Slot::A).unwrap();
        assert_eq!(transposed.height(), 3);
        assert_eq!(session.get(Slot::A).unwrap().width(), 2);
    }

    #[test]
    fn multiply_reports_first_unset_operand() {
        let mut session = Session::new();
        session.set(Slot::B, matrix(vec![vec![1]]));
        let err = session.multiply(Slot::A, Slot::B).unwrap_err();
        assert_eq!(err, EngineError::UnsetMatrix(Slot::A));
    }

    #[test]
    fn multiply_leaves_operands_unchanged() {
        let mut session = Session::new();
        session.set(Slot::A, matrix(vec![vec![1, 2], vec![3, 4]]));
        session.set(Slot::B, matrix(vec![vec![5, 6], vec![7, 8]]));

        let product = session.multiply(Slot::A, Slot::B).unwrap();
        assert_eq!(product.rows(), &[vec![19, 22], vec![43, 50]]);
        assert_eq!(session.get(Slot::A).unwrap().get(0, 0), 1);
        assert_eq!(session.get(Slot::B).unwrap().get(1, 1), 8);
    }

    #[test]
    fn multiply_order_is_exactly_as_presented() {
        let mut session = Session::new();
        session.set(Slot::A, matrix(vec![vec![1, 2, 3], vec![4, 5, 6]]));
        session.set(Slot::B, matrix(vec![vec![1, 2], vec![3, 4], vec![5, 6]]));

        assert!(session.multiply(Slot::A, Slot::B).is_ok());
        // B*A is also valid here (3x2 * 2x3), but with different shape.
        let reversed = session.multiply(Slot::B, Slot::A).unwrap();
        assert_eq!(reversed.height(), 3);
        assert_eq!(reversed.width(), 3);
    }

    #[test]
    fn multiply_mismatch_is_rejected_without_state_change() {
        let mut session = Session::new();
        session.set(Slot::A, matrix(vec![vec![1, 2]]));
        session.set(Slot::B, matrix(vec![vec![1, 2]]));

        let err = session.multiply(Slot::A, Slot::B).unwrap_err();
        assert_eq!(err, EngineError::DimensionMismatch(1, 2, 1, 2));
        assert_eq!(session.get(Slot::A).unwrap().height(), 1);
        assert_eq!(session.metrics().rejections, 1);
    }
}
