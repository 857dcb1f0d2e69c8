//! Stable in-memory sort
//!
//! Records are only permuted: none are added, dropped or changed. Records
//! the comparator treats as equal keep their input order, so identical
//! input always produces identical output.

use crate::core::comparator::RecordComparator;
use crate::types::Record;

/// Sort records in place with a stable sort
///
/// Empty and single-element slices are left untouched.
pub fn sort_records(records: &mut [Record], comparator: &dyn RecordComparator) {
    records.sort_by(|a, b| comparator.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparator::{NameAgeOrder, NameOrder};
    use rstest::rstest;

    fn names(records: &[Record]) -> Vec<(&str, i64, i64)> {
        records
            .iter()
            .map(|r| (r.name.as_str(), r.age, r.score))
            .collect()
    }

    fn sample() -> Vec<Record> {
        vec![
            Record::new("carol", 40, 10),
            Record::new("Bob", 25, 88),
            Record::new("alice", 30, 99),
            Record::new("bob", 22, 77),
        ]
    }

    #[test]
    fn test_name_age_order_example() {
        let mut records = sample();
        sort_records(&mut records, &NameAgeOrder);

        assert_eq!(
            names(&records),
            vec![
                ("alice", 30, 99),
                ("bob", 22, 77),
                ("Bob", 25, 88),
                ("carol", 40, 10)
            ]
        );
    }

    #[test]
    fn test_name_order_keeps_ties_in_input_order() {
        let mut records = sample();
        sort_records(&mut records, &NameOrder);

        assert_eq!(
            names(&records),
            vec![
                ("alice", 30, 99),
                ("Bob", 25, 88),
                ("bob", 22, 77),
                ("carol", 40, 10)
            ]
        );
    }

    #[test]
    fn test_name_age_order_is_stable_on_full_ties() {
        let mut records = vec![
            Record::new("dan", 20, 3),
            Record::new("Dan", 20, 1),
            Record::new("DAN", 20, 2),
            Record::new("amy", 1, 1),
        ];
        sort_records(&mut records, &NameAgeOrder);

        assert_eq!(
            names(&records),
            vec![("amy", 1, 1), ("dan", 20, 3), ("Dan", 20, 1), ("DAN", 20, 2)]
        );
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::single(vec![Record::new("solo", 1, 1)])]
    fn test_trivial_inputs_are_noops(#[case] records: Vec<Record>) {
        let mut sorted = records.clone();
        sort_records(&mut sorted, &NameAgeOrder);
        assert_eq!(sorted, records);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut once = sample();
        sort_records(&mut once, &NameAgeOrder);
        let mut twice = once.clone();
        sort_records(&mut twice, &NameAgeOrder);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let mut sorted = sample();
        sort_records(&mut sorted, &NameOrder);

        let mut expected = sample();
        expected.sort_by(|a, b| a.name.cmp(&b.name).then(a.age.cmp(&b.age)));
        sorted.sort_by(|a, b| a.name.cmp(&b.name).then(a.age.cmp(&b.age)));
        assert_eq!(sorted, expected);
    }
}
