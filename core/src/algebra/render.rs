use crate::algebra::matrix::Matrix;

/// Line printed in place of a matrix that was never filled.
pub const UNSET_NOTICE: &str = "matrix has not been input";

/// Renders a matrix slot as a lazy sequence of text lines, one per row,
/// values joined by `delimiter`.
///
/// An unset slot (`None`) yields exactly one diagnostic line rather than
/// an empty sequence, so callers always have something to print.
pub fn render<'a>(
    matrix: Option<&'a Matrix>,
    delimiter: &'a str,
) -> Box<dyn Iterator<Item = String> + 'a> {
    match matrix {
        Some(m) => Box::new(m.rows().iter().map(move |row| {
            row.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(delimiter)
        })),
        None => Box::new(std::iter::once(UNSET_NOTICE.to_string())),
    }
}
