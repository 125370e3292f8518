//! Models module - Sample account data used by the `demo` command and tests.

mod account;
mod vehicle;

pub use account::*;
pub use vehicle::*;

use std::collections::BTreeMap;

/// The account as it was first recorded.
pub fn previous_account() -> Account {
    Account {
        id: 1,
        person: Person {
            id: 1,
            first_name: "James".into(),
            last_name: "Smith".into(),
        },
        subscription: Some(Subscription {
            status: "ACTIVE".into(),
            start_date: "2022-01-01".into(),
        }),
        vehicles: vec![Vehicle::new(1, "My Car"), Vehicle::new(2, "My Bike")],
        services: vec!["General".into(), "Interior/Exterior Wash".into()],
        metadata: None,
        notes: None,
    }
}

/// The same account after a round of edits.
pub fn current_account() -> Account {
    Account {
        id: 1,
        person: Person {
            id: 1,
            first_name: "Jim".into(),
            last_name: "Smith".into(),
        },
        subscription: Some(Subscription {
            status: "EXPIRED".into(),
            start_date: "2022-02-01".into(),
        }),
        vehicles: vec![
            Vehicle::new(1, "23 Ferrari 296 GTS"),
            Vehicle::new(2, "Honda CBR 1000RR"),
            Vehicle::new(3, "Ford F-150"),
        ],
        services: vec!["General".into(), "Oil Change".into()],
        metadata: Some(BTreeMap::from([(
            "signIn".to_string(),
            Metadata {
                last_sign_in: "2021-09-01".into(),
            },
        )])),
        notes: Some(BTreeMap::from([
            ("note1".to_string(), "This is a note".to_string()),
            ("note2".to_string(), "This is another note".to_string()),
        ])),
    }
}
