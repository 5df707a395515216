#![forbid(unsafe_code)]

use natureal_footprint::coerce_number;

use crate::types::{FieldUpdate, FormField};
use crate::FormError;

/// InputGuard: turns raw form text into something the calculators accept.
/// Numeric junk is never an error; only structurally broken input is.
pub struct InputGuard;

impl InputGuard {
    /// Empty or non-numeric text counts as 0.
    pub fn number(raw: &str) -> f64 {
        coerce_number(raw)
    }

    /// Parses a `field=value` line. The value may be empty and may itself
    /// contain `=`.
    pub fn parse_update<F: FormField>(line: &str) -> Result<FieldUpdate<F>, FormError> {
        let line = line.trim();
        let (name, value) = line
            .split_once('=')
            .ok_or_else(|| FormError::MalformedLine(line.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(FormError::MalformedLine(line.to_string()));
        }
        let field = F::resolve(name)?;
        Ok(FieldUpdate::new(field, value.trim()))
    }
}
