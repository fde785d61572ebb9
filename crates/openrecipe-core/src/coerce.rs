//! Numeric coercion tiers shared by yield amounts and ingredient amounts.

use serde_yaml::Value;

use crate::types::Amount;

/// Coerce a raw scalar toward a number.
///
/// Priority is fixed: exact integer, then float, then the original value kept
/// verbatim. Callers decide which tiers warrant a diagnostic in their
/// context; a compound fraction like `"1 1/2"` is a normal ingredient amount
/// but a malformed yield.
pub fn coerce_numeric(raw: &Value) -> Amount {
    match raw {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Amount::Int(i)
            } else if let Some(f) = n.as_f64() {
                Amount::Float(f)
            } else {
                Amount::Raw(raw.clone())
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Amount::Int(i)
            } else if let Ok(f) = trimmed.parse::<f64>() {
                Amount::Float(f)
            } else {
                Amount::Raw(raw.clone())
            }
        }
        other => Amount::Raw(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_integer_parse() {
        assert_eq!(coerce_numeric(&Value::from(12)), Amount::Int(12));
        assert_eq!(coerce_numeric(&Value::String("12".into())), Amount::Int(12));
        assert_eq!(
            coerce_numeric(&Value::String(" 12 ".into())),
            Amount::Int(12)
        );
    }

    #[test]
    fn test_degrades_to_float() {
        assert_eq!(coerce_numeric(&Value::from(12.5)), Amount::Float(12.5));
        assert_eq!(
            coerce_numeric(&Value::String("12.5".into())),
            Amount::Float(12.5)
        );
        assert_eq!(
            coerce_numeric(&Value::String("1e3".into())),
            Amount::Float(1000.0)
        );
    }

    #[test]
    fn test_keeps_non_numeric_text_verbatim() {
        let compound = Value::String("1 1/2".into());
        assert_eq!(coerce_numeric(&compound), Amount::Raw(compound.clone()));

        let empty = Value::String(String::new());
        assert_eq!(coerce_numeric(&empty), Amount::Raw(empty.clone()));
    }

    #[test]
    fn test_non_scalar_kept_verbatim() {
        let seq = Value::Sequence(vec![Value::from(1)]);
        assert_eq!(coerce_numeric(&seq), Amount::Raw(seq.clone()));
    }
}
