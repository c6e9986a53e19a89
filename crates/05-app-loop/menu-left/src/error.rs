use menu_abi::TypeCode;
use thiserror::Error;

/// Failure to classify an entry.
///
/// Not escalated by population: the slot keeps its generic binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no left rule matches {label:?} (type {type_code})")]
    NoRule { type_code: TypeCode, label: String },
}
