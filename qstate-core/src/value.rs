//! Logical parameter values as callers see them
//!
//! A parameter is either absent, a single scalar, or an ordered list of
//! scalars. Scalars come in three flavours (text, number, boolean) but the
//! address only stores text, so everything read back is `Scalar::Str`.

use std::fmt;

/// A single logical value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Scalar {
    /// Falsy scalars: empty string, zero (either sign), NaN, and `false`.
    pub fn is_falsy(&self) -> bool {
        match self {
            Scalar::Str(s) => s.is_empty(),
            Scalar::Num(n) => *n == 0.0 || n.is_nan(),
            Scalar::Bool(b) => !b,
        }
    }

    /// The text this scalar contributes to an address, before percent-encoding.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Num(n) if n.is_infinite() => {
                f.write_str(if *n > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0 renders as "0"
            Scalar::Num(n) if *n == 0.0 => f.write_str("0"),
            Scalar::Num(n) if n.abs() >= 1e21 || n.abs() < 1e-6 => {
                // 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
                let text = format!("{:e}", n);
                match text.split_once('e') {
                    Some((mantissa, exp)) if !exp.starts_with('-') => {
                        write!(f, "{}e+{}", mantissa, exp)
                    }
                    _ => f.write_str(&text),
                }
            }
            Scalar::Num(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Str(value.to_string())
    }
}

impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Scalar::Str(value.clone())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Str(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Num(value)
    }
}

impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Scalar::Num(value as f64)
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Scalar::Num(value as f64)
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// The value(s) associated with a parameter name
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ParamValue {
    #[default]
    Absent,
    Single(Scalar),
    Multiple(Vec<Scalar>),
}

impl ParamValue {
    /// Whether setting this value should be treated as deleting the parameter.
    ///
    /// Zero and `false` count as "no value" here, so a filter for the literal
    /// value `0` cannot be expressed through `set_param`.
    pub fn is_falsy(&self) -> bool {
        match self {
            ParamValue::Absent => true,
            ParamValue::Single(s) => s.is_falsy(),
            ParamValue::Multiple(items) => items.is_empty(),
        }
    }

    /// The scalar, if this is a single value
    pub fn as_single(&self) -> Option<&Scalar> {
        match self {
            ParamValue::Single(s) => Some(s),
            _ => None,
        }
    }

    /// Textual view of every contained scalar, in order.
    pub fn values(&self) -> Vec<String> {
        match self {
            ParamValue::Absent => Vec::new(),
            ParamValue::Single(s) => vec![s.to_text()],
            ParamValue::Multiple(items) => items.iter().map(Scalar::to_text).collect(),
        }
    }

    /// Order-independent membership test against the textual form.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            ParamValue::Absent => false,
            ParamValue::Single(s) => s.to_text() == candidate,
            ParamValue::Multiple(items) => items.iter().any(|s| s.to_text() == candidate),
        }
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Single(value)
    }
}

macro_rules! param_value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(value: $t) -> Self {
                    ParamValue::Single(value.into())
                }
            }
        )*
    };
}

param_value_from_scalar!(
    &str, &String, String, bool, f32, f64, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize
);

impl<T: Into<Scalar>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => ParamValue::Single(v.into()),
            None => ParamValue::Absent,
        }
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        ParamValue::Multiple(values.into_iter().map(Into::into).collect())
    }
}
