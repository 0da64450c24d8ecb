use matcore::prelude::{EngineError, EngineResult, Slot};
use matcore::Row;

/// Parses a single integer token: an optional leading `-` followed by
/// ASCII digits only. An explicit `+`, embedded whitespace, or any
/// other character rejects the token.
pub fn parse_integer(token: &str) -> Option<i64> {
    let digits = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

/// Parses one matrix row from a line of whitespace-separated tokens.
///
/// The row is accepted or rejected as a unit: a wrong token count or a
/// single bad token rejects the whole line with no partial result.
pub fn parse_row(line: &str, width: usize) -> EngineResult<Row> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != width {
        return Err(EngineError::MalformedRow(format!(
            "expected {} values, got {}",
            width,
            tokens.len()
        )));
    }
    tokens
        .iter()
        .map(|token| {
            parse_integer(token)
                .ok_or_else(|| EngineError::MalformedRow(format!("'{}' is not an integer", token)))
        })
        .collect()
}

/// Parses a matrix dimension: a positive integer no larger than the
/// configured cap. The cap is driver policy; the engine itself only
/// requires dimensions of at least one.
pub fn parse_dimension(line: &str, max_dimension: usize) -> EngineResult<usize> {
    let trimmed = line.trim();
    match parse_integer(trimmed) {
        Some(value) if value >= 1 && (value as usize) <= max_dimension => Ok(value as usize),
        _ => Err(EngineError::InvalidDimension(format!(
            "'{}' (must be 1..={})",
            trimmed, max_dimension
        ))),
    }
}

/// Parses a slot choice: exactly one character, `A`/`a` or `B`/`b`.
pub fn parse_slot(line: &str) -> Option<Slot> {
    let trimmed = line.trim();
    if trimmed.len() != 1 {
        return None;
    }
    match trimmed.chars().next()? {
        'a' | 'A' => Some(Slot::A),
        'b' | 'B' => Some(Slot::B),
        _ => None,
    }
}
