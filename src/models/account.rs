//! Account aggregate.

use super::vehicle::Vehicle;
use crate::value::{Composite, Diffable, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: i64,
    pub person: Person,
    pub subscription: Option<Subscription>,
    pub vehicles: Vec<Vehicle>,
    pub services: Vec<String>,
    pub metadata: Option<BTreeMap<String, Metadata>>,
    pub notes: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub status: String,
    pub start_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    pub last_sign_in: String,
}

impl Composite for Account {
    const TYPE_NAME: &'static str = "Account";
    const FIELD_NAMES: &'static [&'static str] = &[
        "id",
        "person",
        "subscription",
        "vehicles",
        "services",
        "metadata",
        "notes",
    ];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "id" => self.id.to_value(),
            "person" => self.person.to_value(),
            "subscription" => self.subscription.to_value(),
            "vehicles" => self.vehicles.to_value(),
            "services" => self.services.to_value(),
            "metadata" => self.metadata.to_value(),
            "notes" => self.notes.to_value(),
            _ => Value::Null,
        }
    }
}

impl Composite for Person {
    const TYPE_NAME: &'static str = "Person";
    const FIELD_NAMES: &'static [&'static str] = &["id", "first_name", "last_name"];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "id" => self.id.to_value(),
            "first_name" => self.first_name.to_value(),
            "last_name" => self.last_name.to_value(),
            _ => Value::Null,
        }
    }
}

impl Composite for Subscription {
    const TYPE_NAME: &'static str = "Subscription";
    const FIELD_NAMES: &'static [&'static str] = &["status", "start_date"];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "status" => self.status.to_value(),
            "start_date" => self.start_date.to_value(),
            _ => Value::Null,
        }
    }
}

impl Composite for Metadata {
    const TYPE_NAME: &'static str = "Metadata";
    const FIELD_NAMES: &'static [&'static str] = &["last_sign_in"];

    fn field_value(&self, name: &str) -> Value {
        match name {
            "last_sign_in" => self.last_sign_in.to_value(),
            _ => Value::Null,
        }
    }
}
