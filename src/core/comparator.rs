//! Record ordering policies
//!
//! Both policies compare names case-insensitively: each name is folded to
//! lowercase one character at a time and the folded sequences are compared
//! by code point. Folding is a pure function of the name, so two names with
//! the same folded form always compare Equal and the order stays a total
//! order.

use crate::types::Record;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Total order over records used by the sorter
///
/// Implementations must be consistent: `compare(a, b)` and `compare(b, a)`
/// are reverses of each other and the relation is transitive.
pub trait RecordComparator {
    /// Compare two records
    fn compare(&self, a: &Record, b: &Record) -> Ordering;
}

/// Order by folded name only
///
/// Records with folded-equal names compare Equal and keep their input
/// order under a stable sort.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameOrder;

impl RecordComparator for NameOrder {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        compare_names(&a.name, &b.name)
    }
}

/// Order by folded name, then by age ascending
#[derive(Debug, Clone, Copy, Default)]
pub struct NameAgeOrder;

impl RecordComparator for NameAgeOrder {
    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        compare_names(&a.name, &b.name).then_with(|| a.age.cmp(&b.age))
    }
}

/// Case-insensitive name comparison
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a).cmp(fold(b))
}

fn fold(name: &str) -> impl Iterator<Item = char> + '_ {
    name.chars().flat_map(char::to_lowercase)
}

/// Available ordering policies
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortPolicy {
    /// Case-insensitive name only
    Name,
    /// Case-insensitive name, then age ascending
    #[default]
    NameAge,
}

/// Create the comparator for a policy
pub fn create_comparator(policy: SortPolicy) -> Box<dyn RecordComparator> {
    match policy {
        SortPolicy::Name => Box::new(NameOrder),
        SortPolicy::NameAge => Box::new(NameAgeOrder),
    }
}
