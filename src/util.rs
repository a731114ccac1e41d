/// Numeric conversion helpers.
///
/// This module provides checked conversions from arbitrary-precision integers
/// into the machine-sized integers some operations require. Use these helpers
/// whenever a value has to leave `IBig` so that an out-of-range value becomes
/// an error instead of a silent truncation.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range.
pub mod num;
