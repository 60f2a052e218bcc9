//! Deep conversions between container shapes.

use crate::bag::DataBag;
use crate::container::{Key, Mapping, Record, Value};
use crate::merge;

/// Converts any value into a [`Mapping`], recursively.
///
/// Records become mappings keyed by their field names, and every nested
/// container is converted the same way. A scalar is wrapped as a one-element
/// list.
///
/// ```
/// use dotbag::build::build_mapping;
/// use dotbag::{mapping, record};
///
/// let tree = record! { "a" => record! { "b" => 1 } };
/// assert_eq!(build_mapping(tree), mapping! { "a" => mapping! { "b" => 1 } });
/// assert_eq!(build_mapping(5), mapping![5]);
/// ```
pub fn build_mapping(value: impl Into<Value>) -> Mapping {
    match value.into() {
        Value::Mapping(mapping) => mapping
            .into_iter()
            .map(|(key, child)| (key, convert_child(child)))
            .collect(),
        Value::Record(record) => record
            .into_iter()
            .map(|(name, child)| (Key::parse(&name), convert_child(child)))
            .collect(),
        scalar => Mapping::from_values([scalar]),
    }
}

fn convert_child(child: Value) -> Value {
    if child.is_container() {
        Value::Mapping(build_mapping(child))
    } else {
        child
    }
}

/// Builds a [`DataBag`] from a mapping or a record.
///
/// The source is merged into an empty bag, so mapping keys become field
/// names. Scalars fail with
/// [`ContainerError::UnsupportedType`](crate::container::ContainerError::UnsupportedType).
pub fn build_bag(value: impl Into<Value>) -> crate::Result<DataBag> {
    let mut root = Value::from(DataBag::new());
    merge::merge_value(&mut root, value)?;
    Ok(DataBag::from(Record::try_from(root)?))
}
