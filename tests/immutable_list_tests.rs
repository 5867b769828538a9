//! Integration tests for ImmutableList.
//!
//! These tests exercise the public surface end to end: construction,
//! element access, the fold-derived queries and chained transformations.

use idealist::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn numbers() -> ImmutableList<i32> {
    immutable_list![1, 2, 3]
}

// =============================================================================
// Construction and Access
// =============================================================================

#[rstest]
fn test_empty_list_accessors() {
    let empty: ImmutableList<i32> = ImmutableList::empty();
    assert!(empty.is_empty());
    assert!(empty.has_none());
    assert_eq!(empty.last_index(), -1);
    assert!(empty.indices().is_empty());
    assert_eq!(empty.first(), Err(ListError::IndexOutOfBounds { index: 0, length: 0 }));
    assert_eq!(empty.single(), Err(ListError::NotSingle { length: 0 }));
}

#[rstest]
fn test_accessors(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.len(), 3);
    assert!(numbers.has_any());
    assert_eq!(numbers.first(), Ok(&1));
    assert_eq!(numbers.last(), Ok(&3));
    assert_eq!(numbers.get(3), Err(ListError::IndexOutOfBounds { index: 3, length: 3 }));
    assert_eq!(numbers.last_index(), 2);
    assert_eq!(numbers.indices(), immutable_list![0, 1, 2]);
}

#[rstest]
fn test_find_returns_explicit_absence() {
    let maybe: ImmutableList<Option<i32>> = immutable_list![Some(1), None];
    assert_eq!(maybe.find(Option::is_none), Some(&None));
    assert_eq!(maybe.find(|element| *element == Some(5)), None);
}

#[rstest]
fn test_index_queries(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.index_of(&2), Some(1));
    assert_eq!(numbers.index_of(&7), None);
    assert_eq!(numbers.index_of_first(|element| element % 2 == 1), Some(0));
    assert!(numbers.contains_all(&immutable_list![3, 1]));
    assert!(!numbers.contains_all([&1, &4]));
}

// =============================================================================
// Fold-derived Queries
// =============================================================================

#[rstest]
fn test_sum_and_extremes(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.sum_of(|element| i64::from(*element)), 6);
    assert!((numbers.sum_of_f64(|element| f64::from(*element) / 2.0) - 3.0).abs() < f64::EPSILON);
    assert_eq!(numbers.max_by(|element| *element), Ok(&3));
    assert_eq!(numbers.min_by(|element| *element), Ok(&1));
}

#[rstest]
fn test_extremes_keep_first_encountered() {
    let words = immutable_list!["bb", "aa", "c", "dd"];
    assert_eq!(words.max_by(|word| word.len()), Ok(&"bb"));
    assert_eq!(words.min_by(|word| word.len()), Ok(&"c"));
}

#[rstest]
fn test_join(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.join(","), Ok("1,2,3".to_string()));
    assert_eq!(numbers.join_with("<", " | ", ">"), Ok("<1 | 2 | 3>".to_string()));

    let empty: ImmutableList<i32> = ImmutableList::new();
    assert_eq!(empty.join(","), Err(ListError::EmptyList { operation: "join_with" }));
}

#[rstest]
fn test_reduce_first_on_empty_list_fails() {
    let empty: ImmutableList<String> = ImmutableList::new();
    let result = empty.reduce_first(|accumulator, element| accumulator + element);
    assert!(matches!(result, Err(ListError::EmptyList { .. })));
}

#[rstest]
fn test_quantifiers(numbers: ImmutableList<i32>) {
    assert!(numbers.all(|element| *element > 0));
    assert!(numbers.any(|element| *element == 2));
    assert!(numbers.none(|element| *element > 3));
    assert_eq!(numbers.count(|element| *element >= 2), 2);
}

// =============================================================================
// Transformations
// =============================================================================

#[rstest]
fn test_unique_keeps_first_occurrence() {
    assert_eq!(immutable_list![1, 2, 2, 3, 1].unique(), immutable_list![1, 2, 3]);
}

#[rstest]
fn test_insert_preserves_order(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.insert(1, [8, 9]), Ok(immutable_list![1, 8, 9, 2, 3]));
    assert_eq!(numbers.insert(3, [4]), Ok(immutable_list![1, 2, 3, 4]));
    assert_eq!(
        numbers.insert(4, [4]),
        Err(ListError::IndexOutOfBounds { index: 4, length: 3 })
    );
}

#[rstest]
fn test_remove_variants() {
    let list = immutable_list![1, 2, 1, 3];
    assert_eq!(list.remove(&1), immutable_list![2, 3]);
    assert_eq!(list.remove_at(2), immutable_list![1, 2, 3]);
    assert_eq!(list.remove_at(10), list);
}

#[rstest]
fn test_flatten_nested_and_flat() {
    let nested = immutable_list![immutable_list![1, 2], immutable_list![3], immutable_list![4, 5]];
    assert_eq!(nested.flatten(), immutable_list![1, 2, 3, 4, 5]);

    let flat = NestedList::Flat(immutable_list![1, 2, 3]);
    assert_eq!(flat.flatten(), immutable_list![1, 2, 3]);
}

#[rstest]
fn test_zip_truncates_to_shortest() {
    let letters = immutable_list!['a', 'b', 'c'];
    let flags = immutable_list![true, false];

    let zipped = immutable_list![1, 2, 3, 4].zip3(letters.iter().copied(), flags.iter().copied());
    assert_eq!(
        zipped,
        immutable_list![Triplet::new(1, 'a', true), Triplet::new(2, 'b', false)]
    );
}

#[rstest]
fn test_chained_pipeline_leaves_source_untouched() {
    let source = immutable_list![5, 3, 8, 3, 1];

    let result = source
        .filter(|element| *element > 1)
        .unique()
        .sort_by(|element| *element)
        .map(|element| element * 10);

    assert_eq!(result, immutable_list![30, 50, 80]);
    assert_eq!(source, immutable_list![5, 3, 8, 3, 1]);
}

#[rstest]
fn test_sort_by_is_stable() {
    let people = immutable_list![("ann", 30), ("bob", 25), ("cid", 30), ("dee", 25)];
    let sorted = people.sort_by(|(_, age)| *age).map(|(name, _)| *name);
    assert_eq!(sorted, immutable_list!["bob", "dee", "ann", "cid"]);
}

// =============================================================================
// Equality, Ordering and Display
// =============================================================================

#[rstest]
fn test_structural_equality_and_hash() {
    use std::collections::HashSet;

    let set: HashSet<ImmutableList<i32>> =
        [immutable_list![1, 2], ImmutableList::of(vec![1, 2]), immutable_list![2, 1]]
            .into_iter()
            .collect();
    assert_eq!(set.len(), 2);
}

#[rstest]
fn test_shortlex_ordering() {
    assert!(immutable_list![9] < immutable_list![1, 1]);
    assert!(immutable_list![1, 2] < immutable_list![1, 3]);
}

#[rstest]
fn test_display(numbers: ImmutableList<i32>) {
    assert_eq!(numbers.to_string(), "[1, 2, 3]");
    assert_eq!(ImmutableList::<i32>::new().to_string(), "[]");
}
