//! Map helpers.

use std::collections::HashMap;
use std::hash::Hash;

/// Returns the keys of the map.
///
/// The order of the keys is not deterministic.
pub fn keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
	map.keys().cloned().collect()
}

/// Merges any number of maps into one.
///
/// With `overwrite` the last map wins on duplicate keys, otherwise
/// the first one does.
pub fn merge<K, V>(
	overwrite: bool,
	maps: impl IntoIterator<Item = HashMap<K, V>>,
) -> HashMap<K, V>
where
	K: Eq + Hash,
{
	let mut all = HashMap::new();
	for map in maps {
		for (k, v) in map {
			if overwrite {
				all.insert(k, v);
			} else {
				all.entry(k).or_insert(v);
			}
		}
	}
	all
}
