//! Recursive comparison of two values.

use super::change::Change;
use super::error::DiffError;
use super::identity::resolve_identity;
use super::options::DiffOptions;
use crate::path::{Path, PathElement};
use crate::value::{Diffable, Map, Record, Value};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace, warn};

static NULL: Value = Value::Null;

/// Compares two values and returns every change between them.
///
/// ```
/// use audit_diff::{diff, Value};
///
/// let changes = diff(&Value::Int(1), &Value::Int(2)).unwrap();
/// assert_eq!(changes.len(), 1);
/// ```
pub fn diff(previous: &Value, current: &Value) -> Result<Vec<Change>, DiffError> {
    diff_with_options(previous, current, &DiffOptions::default())
}

/// Compares two values using the given options.
pub fn diff_with_options(
    previous: &Value,
    current: &Value,
    options: &DiffOptions,
) -> Result<Vec<Change>, DiffError> {
    debug!(
        previous = previous.kind(),
        current = current.kind(),
        "diff started"
    );

    let mut comparator = Comparator::new(options);
    if let Err(err) = comparator.compare(&Path::new(), previous, current) {
        debug!(error = %err, "diff aborted");
        return Err(err);
    }

    let changes = comparator.into_changes();
    debug!(changes = changes.len(), "diff finished");
    Ok(changes)
}

/// Converts two caller values and compares them.
pub fn diff_values<T: Diffable + ?Sized>(
    previous: &T,
    current: &T,
) -> Result<Vec<Change>, DiffError> {
    diff(&previous.to_value(), &current.to_value())
}

/// Shape of a sequence's elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Empty,
    Scalars,
    Composites,
}

/// Comparator walks both values depth first and accumulates changes.
struct Comparator<'o> {
    options: &'o DiffOptions,
    changes: Vec<Change>,
}

impl<'o> Comparator<'o> {
    fn new(options: &'o DiffOptions) -> Self {
        Comparator {
            options,
            changes: Vec::new(),
        }
    }

    fn into_changes(self) -> Vec<Change> {
        self.changes
    }

    fn compare(&mut self, path: &Path, previous: &Value, current: &Value) -> Result<(), DiffError> {
        if previous == current {
            return Ok(());
        }

        // A null side takes the shape of the other side.
        match (previous, current) {
            (Value::List(p), Value::List(c)) => self.compare_sequence(path, p, c),
            (Value::List(p), Value::Null) => self.compare_sequence(path, p, &[]),
            (Value::Null, Value::List(c)) => self.compare_sequence(path, &[], c),
            (Value::Map(p), Value::Map(c)) => self.compare_map(path, Some(p), Some(c)),
            (Value::Map(p), Value::Null) => self.compare_map(path, Some(p), None),
            (Value::Null, Value::Map(c)) => self.compare_map(path, None, Some(c)),
            (Value::Record(p), Value::Record(c)) => self.compare_record(path, Some(p), Some(c)),
            (Value::Record(p), Value::Null) => self.compare_record(path, Some(p), None),
            (Value::Null, Value::Record(c)) => self.compare_record(path, None, Some(c)),
            _ => {
                trace!(path = %path, previous = previous.kind(), current = current.kind(), "value updated");
                self.changes.push(Change::value_update(
                    path.clone(),
                    previous.clone(),
                    current.clone(),
                ));
                Ok(())
            }
        }
    }

    fn compare_map(
        &mut self,
        path: &Path,
        previous: Option<&Map>,
        current: Option<&Map>,
    ) -> Result<(), DiffError> {
        trace!(path = %path, "comparing map");
        let keys: BTreeSet<&String> = previous
            .into_iter()
            .flat_map(Map::keys)
            .chain(current.into_iter().flat_map(Map::keys))
            .collect();

        for key in keys {
            let child = path.with(PathElement::key(key.as_str()));
            let p = previous.and_then(|m| m.get(key)).unwrap_or(&NULL);
            let c = current.and_then(|m| m.get(key)).unwrap_or(&NULL);
            self.compare(&child, p, c)?;
        }
        Ok(())
    }

    fn compare_record(
        &mut self,
        path: &Path,
        previous: Option<&Record>,
        current: Option<&Record>,
    ) -> Result<(), DiffError> {
        trace!(path = %path, "comparing record");
        let names: BTreeSet<&String> = previous
            .into_iter()
            .flat_map(Record::field_names)
            .chain(current.into_iter().flat_map(Record::field_names))
            .collect();

        for name in names {
            let child = path.with(PathElement::field_name(name.as_str()));
            let p = previous.and_then(|r| r.get(name)).unwrap_or(&NULL);
            let c = current.and_then(|r| r.get(name)).unwrap_or(&NULL);
            self.compare(&child, p, c)?;
        }
        Ok(())
    }

    fn compare_sequence(
        &mut self,
        path: &Path,
        previous: &[Value],
        current: &[Value],
    ) -> Result<(), DiffError> {
        match (classify(path, previous)?, classify(path, current)?) {
            (Shape::Scalars, Shape::Composites) | (Shape::Composites, Shape::Scalars) => {
                Err(DiffError::mixed_sequence_shape(path.to_string()))
            }
            (Shape::Composites, _) | (_, Shape::Composites) => {
                self.compare_identified(path, previous, current)
            }
            _ => {
                self.compare_scalar_set(path, previous, current);
                Ok(())
            }
        }
    }

    fn compare_scalar_set(&mut self, path: &Path, previous: &[Value], current: &[Value]) {
        trace!(path = %path, "comparing scalar set");
        let removed: Vec<Value> = previous
            .iter()
            .filter(|v| !current.contains(v))
            .cloned()
            .collect();
        let added: Vec<Value> = current
            .iter()
            .filter(|v| !previous.contains(v))
            .cloned()
            .collect();

        if !removed.is_empty() || !added.is_empty() {
            self.changes
                .push(Change::collection_delta(path.clone(), removed, added));
        }
    }

    /// Matches items of both sides by identity and compares each pair.
    fn compare_identified(
        &mut self,
        path: &Path,
        previous: &[Value],
        current: &[Value],
    ) -> Result<(), DiffError> {
        trace!(path = %path, "comparing identified items");
        let previous = self.index_by_identity(path, previous)?;
        let current = self.index_by_identity(path, current)?;

        let ids: BTreeSet<&Value> = previous.keys().chain(current.keys()).collect();
        for id in ids {
            let child = path.with(PathElement::identity(id.clone()));
            let p = previous.get(id).copied().unwrap_or(&NULL);
            let c = current.get(id).copied().unwrap_or(&NULL);
            self.compare(&child, p, c)?;
        }
        Ok(())
    }

    fn index_by_identity<'v>(
        &self,
        path: &Path,
        items: &'v [Value],
    ) -> Result<BTreeMap<Value, &'v Value>, DiffError> {
        let mut index = BTreeMap::new();
        for item in items {
            let id = resolve_identity(path, item, self.options)?;
            if index.insert(id, item).is_some() {
                warn!(path = %path, "duplicate identity in sequence, keeping the later item");
            }
        }
        Ok(index)
    }
}

/// Classifies a sequence. Anything that is not a scalar, null included,
/// counts as a composite slot.
fn classify(path: &Path, items: &[Value]) -> Result<Shape, DiffError> {
    let scalars = items.iter().filter(|v| v.is_scalar()).count();
    if items.is_empty() {
        Ok(Shape::Empty)
    } else if scalars == items.len() {
        Ok(Shape::Scalars)
    } else if scalars == 0 {
        Ok(Shape::Composites)
    } else {
        Err(DiffError::mixed_sequence_shape(path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Value {
        Value::List(values.iter().map(|v| Value::Int(*v)).collect())
    }

    #[test]
    fn test_classify() {
        let root = Path::new();
        assert_eq!(classify(&root, &[]), Ok(Shape::Empty));
        assert_eq!(
            classify(&root, &[Value::Int(1), Value::String("a".into())]),
            Ok(Shape::Scalars)
        );
        assert_eq!(
            classify(&root, &[Value::Null, Value::Record(Record::new("Item"))]),
            Ok(Shape::Composites)
        );
        assert_eq!(
            classify(&root, &[Value::Int(1), Value::Null]),
            Err(DiffError::mixed_sequence_shape(""))
        );
    }

    #[test]
    fn test_equal_values_short_circuit() {
        assert!(diff(&ints(&[1, 2]), &ints(&[1, 2])).unwrap().is_empty());
        assert!(diff(&Value::Null, &Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_null_list_is_empty_list() {
        let changes = diff(&Value::Null, &ints(&[1])).unwrap();
        assert_eq!(
            changes,
            vec![Change::collection_delta(Path::new(), vec![], vec![Value::Int(1)])]
        );
    }

    #[test]
    fn test_shape_mismatch_is_single_update() {
        let changes = diff(&ints(&[1]), &Value::Int(1)).unwrap();
        assert_eq!(
            changes,
            vec![Change::value_update(Path::new(), ints(&[1]), Value::Int(1))]
        );
    }

    #[test]
    fn test_duplicate_counts_are_ignored() {
        assert!(diff(&ints(&[1, 1, 2]), &ints(&[2, 1])).unwrap().is_empty());
    }

    #[test]
    fn test_diff_values_on_caller_types() {
        let changes = diff_values(&vec!["a".to_string()], &vec!["b".to_string()]).unwrap();
        assert_eq!(
            changes,
            vec![Change::collection_delta(
                Path::new(),
                vec![Value::String("a".into())],
                vec![Value::String("b".into())],
            )]
        );
    }
}
