//! Conversion of caller data into [`Value`]s.

use super::value::{Map, Record, Value};
use std::collections::{BTreeMap, HashMap};

/// Composite is implemented by record types the comparator should walk
/// field by field.
///
/// Field names and identity markings are declared once per type.
///
/// ```
/// use audit_diff::value::{Composite, Diffable, Value};
///
/// struct Vehicle {
///     id: i64,
///     display_name: String,
/// }
///
/// impl Composite for Vehicle {
///     const TYPE_NAME: &'static str = "Vehicle";
///     const FIELD_NAMES: &'static [&'static str] = &["id", "display_name"];
///     const IDENTITY_FIELDS: &'static [&'static str] = &["id"];
///
///     fn field_value(&self, name: &str) -> Value {
///         match name {
///             "id" => self.id.to_value(),
///             "display_name" => self.display_name.to_value(),
///             _ => Value::Null,
///         }
///     }
/// }
/// ```
pub trait Composite {
    /// Name used in errors and logs.
    const TYPE_NAME: &'static str;

    /// Every field the type exposes.
    const FIELD_NAMES: &'static [&'static str];

    /// Fields explicitly marked as the identity source. At most one entry
    /// is valid; a field literally named `id` needs no marking.
    const IDENTITY_FIELDS: &'static [&'static str] = &[];

    /// Returns the value of the named field, or `Value::Null` for names the
    /// type does not have.
    fn field_value(&self, name: &str) -> Value;

    /// Snapshots the composite into a [`Record`].
    fn to_record(&self) -> Record {
        let record = Self::FIELD_NAMES
            .iter()
            .fold(Record::new(Self::TYPE_NAME), |record, name| {
                record.with_field(*name, self.field_value(name))
            });
        Self::IDENTITY_FIELDS
            .iter()
            .fold(record, |record, name| record.with_identity_field(*name))
    }
}

/// Diffable is implemented by anything that can be compared.
pub trait Diffable {
    fn to_value(&self) -> Value;
}

impl<T: Composite> Diffable for T {
    fn to_value(&self) -> Value {
        Value::Record(self.to_record())
    }
}

impl Diffable for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl Diffable for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! int_to_value {
    ($($ty:ty),*) => {
        $(
            impl Diffable for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

int_to_value!(i8, i16, i32, i64, u8, u16, u32);

// Values outside the i64 range keep their exact digits as a string.
macro_rules! wide_int_to_value {
    ($($ty:ty),*) => {
        $(
            impl Diffable for $ty {
                fn to_value(&self) -> Value {
                    i64::try_from(*self)
                        .map(Value::Int)
                        .unwrap_or_else(|_| Value::String(self.to_string()))
                }
            }
        )*
    };
}

wide_int_to_value!(i128, isize, u64, u128, usize);

impl Diffable for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Diffable for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Diffable for char {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Diffable for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Diffable for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Diffable> Diffable for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: Diffable> Diffable for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Diffable::to_value).collect())
    }
}

impl<T: Diffable> Diffable for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: Diffable> Diffable for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect::<Map>())
    }
}

impl<T: Diffable, S> Diffable for HashMap<String, T, S> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.clone(), v.to_value())).collect::<Map>())
    }
}
