//! Construction macro.

/// Creates an [`ImmutableList`](crate::ImmutableList) from its elements,
/// like `vec!`.
///
/// # Examples
///
/// ```rust
/// use idealist::{ImmutableList, immutable_list};
///
/// let list = immutable_list![1, 2, 3];
/// assert_eq!(list, ImmutableList::of([1, 2, 3]));
///
/// let repeated = immutable_list!["x"; 2];
/// assert_eq!(repeated, ImmutableList::of(["x", "x"]));
///
/// let empty: ImmutableList<u8> = immutable_list![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! immutable_list {
    () => {
        $crate::ImmutableList::new()
    };
    ($element:expr; $count:expr) => {
        $crate::ImmutableList::from_vec(::std::vec![$element; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::ImmutableList::of([$($element),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::ImmutableList;
    use rstest::rstest;

    #[rstest]
    fn test_immutable_list_macro_trailing_comma() {
        let list = immutable_list![1, 2,];
        assert_eq!(list, ImmutableList::of([1, 2]));
    }

    #[rstest]
    fn test_immutable_list_macro_nested() {
        let nested = immutable_list![immutable_list![1], immutable_list![2, 3]];
        assert_eq!(nested.len(), 2);
        assert_eq!(nested.flatten(), immutable_list![1, 2, 3]);
    }
}
