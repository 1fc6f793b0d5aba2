//! Order preserving, set style helpers for slices.

/// Returns every non empty subset of `items`.
///
/// Each subset preserves the order of the input, an input of length
/// `n` yields `2^n - 1` subsets. The order of the subsets themselves
/// is unspecified.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
	let mut out: Vec<Vec<T>> = Vec::new();
	for item in items {
		let mut extended: Vec<Vec<T>> = out
			.iter()
			.cloned()
			.map(|mut subset| {
				subset.push(item.clone());
				subset
			})
			.collect();
		out.append(&mut extended);
		out.push(vec![item.clone()]);
	}
	out
}

/// Returns the elements of `items` that do not appear in `other`.
///
/// Order and duplicates of `items` are preserved.
pub fn difference<T: PartialEq + Clone>(items: &[T], other: &[T]) -> Vec<T> {
	items
		.iter()
		.filter(|&v| !other.contains(v))
		.cloned()
		.collect()
}

/// Returns a copy of `items` without any occurrence of `value`.
pub fn remove<T: PartialEq + Clone>(items: &[T], value: &T) -> Vec<T> {
	items.iter().filter(|v| *v != value).cloned().collect()
}

/// Checks that `of` contains every element of `subset`.
pub fn is_subset_of<T: PartialEq>(subset: &[T], of: &[T]) -> bool {
	subset.iter().all(|v| of.contains(v))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn contains_subset<T: PartialEq>(subs: &[Vec<T>], target: &[T]) -> bool {
		subs.iter().any(|s| s == target)
	}

	#[test]
	fn subsets_empty() {
		assert!(subsets::<i32>(&[]).is_empty());
	}

	#[test]
	fn subsets_singleton() {
		assert_eq!(subsets(&[1]), vec![vec![1]]);
	}

	#[test]
	fn subsets_two_elements() {
		let out = subsets(&[1, 2]);
		assert_eq!(out.len(), 3);
		for expected in [&[1][..], &[2], &[1, 2]] {
			assert!(
				contains_subset(&out, expected),
				"missing {:?} in {:?}",
				expected,
				out
			);
		}
		assert!(!contains_subset(&out, &[]));
	}

	#[test]
	fn subsets_keep_input_order() {
		let out = subsets(&[1, 2, 3]);
		assert_eq!(out.len(), 7);
		for subset in &out {
			let mut sorted = subset.clone();
			sorted.sort();
			assert_eq!(*subset, sorted, "subset out of order: {:?}", subset);
		}
		assert!(contains_subset(&out, &[1, 3]));
		assert!(contains_subset(&out, &[1, 2, 3]));
	}

	#[test]
	fn difference_keeps_order_and_duplicates() {
		assert_eq!(difference(&[1, 2, 1, 3], &[2]), vec![1, 1, 3]);
		assert_eq!(difference(&[1, 2], &[]), vec![1, 2]);
		assert_eq!(difference::<i32>(&[], &[1]), Vec::<i32>::new());
	}

	#[test]
	fn remove_all_occurrences() {
		assert_eq!(remove(&["a", "b", "a"], &"a"), vec!["b"]);
		assert_eq!(remove(&[1, 2, 3], &4), vec![1, 2, 3]);
	}

	#[test]
	fn subset_check() {
		assert!(is_subset_of(&[1, 2], &[3, 2, 1]));
		assert!(is_subset_of::<i32>(&[], &[1]));
		assert!(!is_subset_of(&[1, 4], &[1, 2, 3]));
	}
}
