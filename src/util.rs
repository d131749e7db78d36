/// Integer helpers.
///
/// This module provides the integer routines the evaluator needs beyond what
/// `i64` offers directly: floor division that reports overflow instead of
/// panicking, and the lenient parsing applied to values supplied by the host.
///
/// Both functions return an `Option`, which is `None` when the operation has
/// no valid `i64` result.
pub mod num;
