use crate::value::{Composite, Diffable, Value};

/// A vehicle on an account, matched across versions by its id.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub display_name: String,
}

impl Vehicle {
    pub fn new(id: i64, display_name: impl Into<String>) -> Self {
        Vehicle {
            id,
            display_name: display_name.into(),
        }
    }
}

impl Composite for Vehicle {
    const TYPE_NAME: &'static str = "Vehicle";
    const FIELD_NAMES: &'static [&'static str] = &["id", "display_name"];
    const IDENTITY_FIELDS: &'static [&'static str] = &["id"];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "id" => self.id.to_value(),
            "display_name" => self.display_name.to_value(),
            _ => Value::Null,
        }
    }
}
