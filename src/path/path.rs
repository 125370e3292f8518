//! Path element and path types.

use crate::value::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// PathElement represents one level of path navigation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum PathElement {
    /// Field name of a record.
    FieldName(String),
    /// Key of a map entry.
    Key(String),
    /// Identity of a matched sequence item.
    Identity(Value),
}

impl PathElement {
    /// Creates a new field name path element.
    pub fn field_name(name: impl Into<String>) -> Self {
        PathElement::FieldName(name.into())
    }

    /// Creates a new map key path element.
    pub fn key(key: impl Into<String>) -> Self {
        PathElement::Key(key.into())
    }

    /// Creates a new identity path element.
    pub fn identity(v: Value) -> Self {
        PathElement::Identity(v)
    }
}

/// Path is the location of a change, rendered as dot-separated segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Creates a new empty (root) path.
    pub fn new() -> Self {
        Path {
            elements: Vec::new(),
        }
    }

    /// Creates a path from a vector of elements.
    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Path { elements }
    }

    /// Returns the number of elements in the path.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the last path element.
    pub fn last(&self) -> Option<&PathElement> {
        self.elements.last()
    }

    /// Creates a new path with the given element appended.
    pub fn with(&self, element: PathElement) -> Self {
        let mut elements = Vec::with_capacity(self.elements.len() + 1);
        elements.extend_from_slice(&self.elements);
        elements.push(element);
        Path { elements }
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<T: IntoIterator<Item = PathElement>>(iter: T) -> Self {
        Path {
            elements: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::FieldName(name) => write!(f, "{}", name),
            PathElement::Key(key) => write!(f, "{}", key),
            PathElement::Identity(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl PartialEq<str> for Path {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for Path {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_renders_empty() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.to_string(), "");
    }

    #[test]
    fn test_path_with() {
        let root = Path::new();
        let person = root.with(PathElement::field_name("person"));
        let name = person.with(PathElement::field_name("first_name"));

        assert!(root.is_empty());
        assert_eq!(person.len(), 1);
        assert_eq!(name.len(), 2);
        assert_eq!(
            name.last(),
            Some(&PathElement::FieldName("first_name".to_string()))
        );
    }

    #[test]
    fn test_path_display() {
        let path = Path::from_elements(vec![
            PathElement::field_name("vehicles"),
            PathElement::identity(Value::Int(3)),
            PathElement::field_name("display_name"),
        ]);
        assert_eq!(format!("{}", path), "vehicles.3.display_name");
        assert_eq!(path, "vehicles.3.display_name");

        let keyed: Path = vec![PathElement::key("note1")].into_iter().collect();
        assert_eq!(keyed.to_string(), "note1");
    }

    #[test]
    fn test_path_serializes_as_string() {
        let path = Path::from_elements(vec![
            PathElement::field_name("notes"),
            PathElement::key("note2"),
        ]);
        assert_eq!(serde_json::to_string(&path).unwrap(), r#""notes.note2""#);
    }
}
