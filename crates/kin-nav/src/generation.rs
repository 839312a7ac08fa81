//! Generation distance: signed parent/child depth between two people.

use kin_core::tree::Tree;
use std::collections::HashSet;

/// Signed generation offset of `to` relative to `from`.
///
/// Breadth-first layer expansion over parent-like and child-like edges
/// only: +1 per parent step, -1 per child step, so ancestors have larger
/// offsets and descendants smaller, while siblings and spouses land on 0.
/// Each person gets the offset recorded the first time they are reached.
/// Returns `None` when no parent/child chain connects the two.
pub fn generation(tree: &Tree, from: &str, to: &str) -> Option<i32> {
    tree.get(from)?;
    tree.get(to)?;

    let mut level: Vec<(String, i32)> = vec![(from.to_string(), 0)];
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(from.to_string());

    while !level.is_empty() {
        for (id, offset) in &level {
            if id == to {
                return Some(*offset);
            }
        }
        let mut next: Vec<(String, i32)> = Vec::new();
        for (id, offset) in &level {
            let Some(person) = tree.get(id) else { continue };
            for edge in &person.family {
                let step = if edge.relation.is_parent() {
                    1
                } else if edge.relation.is_child() {
                    -1
                } else {
                    continue;
                };
                if visited.insert(edge.person_id.clone()) {
                    next.push((edge.person_id.clone(), offset + step));
                }
            }
        }
        level = next;
    }
    None
}
