use crate::{MarshalError, value::Value};

///
/// Scalar
///
/// Leaf value copied as-is between a property and a container slot.
/// There is no coercion beyond what the Rust type forces: a value of the
/// wrong shape or out of range is a `Mismatch`.
///

pub trait Scalar: Sized {
    /// Name of the expected value kind, used in `Mismatch` errors.
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Result<Self, MarshalError>;

    fn to_value(&self) -> Value;
}

impl Scalar for String {
    const EXPECTED: &'static str = "text";

    fn from_value(value: &Value) -> Result<Self, MarshalError> {
        match value {
            Value::Text(s) => Ok(s.clone()),
            other => Err(MarshalError::mismatch(Self::EXPECTED, other.kind_name())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Scalar for bool {
    const EXPECTED: &'static str = "bool";

    fn from_value(value: &Value) -> Result<Self, MarshalError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(MarshalError::mismatch(Self::EXPECTED, other.kind_name())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

// signed integers are stored as Int, unsigned as Uint
macro_rules! impl_scalar_int {
    ( $( $ty:ty => $variant:ident as $wide:ty ),* $(,)? ) => {
        $(
            impl Scalar for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                fn from_value(value: &Value) -> Result<Self, MarshalError> {
                    let converted = match value {
                        Value::Int(i) => <$ty>::try_from(*i).ok(),
                        Value::Uint(u) => <$ty>::try_from(*u).ok(),
                        other => {
                            return Err(MarshalError::mismatch(Self::EXPECTED, other.kind_name()));
                        }
                    };

                    converted.ok_or_else(|| MarshalError::mismatch(Self::EXPECTED, value.kind_name()))
                }

                fn to_value(&self) -> Value {
                    Value::$variant(<$wide>::from(*self))
                }
            }
        )*
    };
}

impl_scalar_int!(
    i8 => Int as i64,
    i16 => Int as i64,
    i32 => Int as i64,
    i64 => Int as i64,
    u8 => Uint as u64,
    u16 => Uint as u64,
    u32 => Uint as u64,
    u64 => Uint as u64,
);

impl Scalar for f64 {
    const EXPECTED: &'static str = "f64";

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Result<Self, MarshalError> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as Self),
            Value::Uint(u) => Ok(*u as Self),
            other => Err(MarshalError::mismatch(Self::EXPECTED, other.kind_name())),
        }
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Scalar for f32 {
    const EXPECTED: &'static str = "f32";

    #[allow(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Result<Self, MarshalError> {
        f64::from_value(value)
            .map(|f| f as Self)
            .map_err(|_| MarshalError::mismatch(Self::EXPECTED, value.kind_name()))
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_accept_both_signed_and_unsigned_storage() {
        assert_eq!(u8::from_value(&Value::Int(7)), Ok(7));
        assert_eq!(i32::from_value(&Value::Uint(7)), Ok(7));
        assert_eq!(u64::from_value(&Value::Uint(u64::MAX)), Ok(u64::MAX));
    }

    #[test]
    fn out_of_range_integer_is_a_mismatch() {
        assert_eq!(
            u8::from_value(&Value::Int(300)),
            Err(MarshalError::mismatch("u8", "int"))
        );
        assert_eq!(
            u32::from_value(&Value::Int(-1)),
            Err(MarshalError::mismatch("u32", "int"))
        );
    }

    #[test]
    fn text_is_never_coerced() {
        assert_eq!(
            i64::from_value(&Value::Text("12".into())),
            Err(MarshalError::mismatch("i64", "text"))
        );
        assert_eq!(
            String::from_value(&Value::Int(12)),
            Err(MarshalError::mismatch("text", "int"))
        );
    }

    #[test]
    fn floats_accept_integral_values() {
        assert_eq!(f64::from_value(&Value::Int(2)), Ok(2.0));
        assert_eq!(f32::from_value(&Value::Float(0.5)), Ok(0.5));
        assert_eq!(1.5f32.to_value(), Value::Float(1.5));
    }

    #[test]
    fn scalars_write_their_canonical_variant() {
        assert_eq!(3u16.to_value(), Value::Uint(3));
        assert_eq!((-3i8).to_value(), Value::Int(-3));
        assert_eq!(true.to_value(), Value::Bool(true));
    }
}
