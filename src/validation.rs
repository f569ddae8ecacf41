//! Field validators shared by the request payloads, plus the lenient coercions
//! applied to primary-key and integer fields.

use std::borrow::Cow;

use rust_decimal::Decimal;
use sea_orm::DbBackend;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::ValidationError;

pub const REQUIRED: &str = "This field is required.";
pub const BLANK: &str = "This field may not be blank.";
pub const INVALID_INTEGER: &str = "A valid integer is required.";
pub const NULL: &str = "This field may not be null.";

const NAME_MAX_CHARS: usize = 255;
const USERNAME_MAX_CHARS: usize = 150;
const PRICE_DECIMAL_PLACES: u32 = 2;
const PRICE_WHOLE_DIGITS: usize = 20;
/// Significant digits a SQLite REAL column hands back unchanged.
const SQLITE_PRICE_DIGITS: usize = 15;

pub fn default_message(code: &str) -> &'static str {
    match code {
        "required" => REQUIRED,
        "blank" => BLANK,
        "null" => NULL,
        _ => "Invalid value.",
    }
}

fn invalid(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn max_length(value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(invalid("blank", BLANK));
    }
    if value.trim().chars().count() > max {
        return Err(invalid(
            "max_length",
            format!("Ensure this field has no more than {max} characters."),
        ));
    }
    Ok(())
}

/// Non-blank string of at most 255 characters once surrounding whitespace is trimmed.
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    max_length(value, NAME_MAX_CHARS)
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    max_length(value, USERNAME_MAX_CHARS)
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("blank", BLANK))
    } else {
        Ok(())
    }
}

pub fn validate_price(value: &Decimal) -> Result<(), ValidationError> {
    let normalized = value.normalize();
    if normalized.scale() > PRICE_DECIMAL_PLACES {
        return Err(invalid(
            "max_decimal_places",
            format!("Ensure that there are no more than {PRICE_DECIMAL_PLACES} decimal places."),
        ));
    }
    let whole_digits = normalized.trunc().abs().to_string().trim_start_matches('0').len();
    if whole_digits > PRICE_WHOLE_DIGITS {
        return Err(invalid(
            "max_whole_digits",
            format!(
                "Ensure that there are no more than {PRICE_WHOLE_DIGITS} digits before the decimal point."
            ),
        ));
    }
    Ok(())
}

/// Deserialize a field so that an explicit `null` stays distinguishable from an
/// absent field: absent is `None`, `null` is `Some(Value::Null)`.
pub fn keep_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Prices the storage backend can hold exactly. SQLite keeps them as REAL.
pub fn price_fits_backend(value: &Decimal, backend: DbBackend) -> Result<(), String> {
    if backend != DbBackend::Sqlite {
        return Ok(());
    }
    let digits = value
        .normalize()
        .mantissa()
        .unsigned_abs()
        .to_string()
        .len();
    if digits > SQLITE_PRICE_DIGITS {
        return Err(format!(
            "Ensure that there are no more than {SQLITE_PRICE_DIGITS} digits in total."
        ));
    }
    Ok(())
}

pub fn validate_pk(value: &Value) -> Result<(), ValidationError> {
    let accepted = match value {
        Value::Null => return Err(invalid("null", NULL)),
        Value::Number(n) => n.is_i64() || n.is_u64(),
        Value::String(s) => s.trim().parse::<i64>().is_ok(),
        _ => false,
    };
    if accepted {
        Ok(())
    } else {
        Err(invalid(
            "incorrect_type",
            format!(
                "Incorrect type. Expected pk value, received {}.",
                json_type_name(value)
            ),
        ))
    }
}

pub fn validate_quantity(value: &Value) -> Result<(), ValidationError> {
    match integer_value(value) {
        None if value.is_null() => Err(invalid("null", NULL)),
        None => Err(invalid("invalid", INVALID_INTEGER)),
        Some(n) if n < 0 => Err(invalid(
            "min_value",
            "Ensure this value is greater than or equal to 0.",
        )),
        Some(n) if n > i64::from(i32::MAX) => Err(invalid(
            "max_value",
            format!("Ensure this value is less than or equal to {}.", i32::MAX),
        )),
        Some(_) => Ok(()),
    }
}

/// Primary key carried by a JSON number or numeric string; `None` when it cannot
/// address a row.
pub fn pk_value(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    }
}

/// Integer carried by a JSON number without a fractional part, or by a string
/// such as `"3"` or `"3.00"`.
pub fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let s = s.trim();
            let digits = match s.split_once('.') {
                Some((whole, fraction)) if fraction.chars().all(|c| c == '0') => whole,
                Some(_) => return None,
                None => s,
            };
            digits.parse::<i64>().ok()
        }
        _ => None,
    }
}

pub fn does_not_exist(value: &Value) -> String {
    let shown = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!("Invalid pk \"{shown}\" - object does not exist.")
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(_) => "float",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}
