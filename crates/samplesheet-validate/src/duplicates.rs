//! Repeated-key detection.

use std::collections::HashMap;
use std::hash::Hash;

/// Find every key that occurs more than once, with its occurrence count.
///
/// Results are ordered by each key's first appearance in `keys`.
pub fn find_duplicates<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        if let Some(&pos) = positions.get(&key) {
            counts[pos].1 += 1;
        } else {
            positions.insert(key.clone(), counts.len());
            counts.push((key, 1));
        }
    }
    counts.retain(|(_, count)| *count > 1);
    counts
}
