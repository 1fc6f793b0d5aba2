//! String and first-non-empty helpers.

/// Checks if two strings are equal, treating an empty string as a
/// wildcard: the comparison only counts when both sides are set.
pub fn equal_if_set(a: &str, b: &str) -> bool {
	a.is_empty() || b.is_empty() || a == b
}

/// Returns the first value that is not the default, or the default
/// when every value is.
pub fn first_non_empty<T>(values: impl IntoIterator<Item = T>) -> T
where
	T: Default + PartialEq,
{
	let empty = T::default();
	values.into_iter().find(|v| *v != empty).unwrap_or(empty)
}

/// Lazy variant of [`first_non_empty`], a value is only produced when
/// all the previous ones were empty.
pub fn first_non_empty_with<T, F>(fns: impl IntoIterator<Item = F>) -> T
where
	T: Default + PartialEq,
	F: FnOnce() -> T,
{
	let empty = T::default();
	fns.into_iter()
		.map(|f| f())
		.find(|v| *v != empty)
		.unwrap_or(empty)
}
