//! Connecting-path search with per-pair memoization.

use kin_core::person::Person;
use kin_core::tree::Tree;
use std::cell::RefCell;
use std::collections::HashMap;

/// A read-only query view over a [`Tree`].
///
/// Owns the path memo. Because the navigator borrows the tree, mutating
/// the tree first requires dropping the navigator, which discards any
/// memo entries the mutation would have invalidated.
pub struct Navigator<'a> {
    tree: &'a Tree,
    path_memo: RefCell<HashMap<(String, String), Option<Vec<String>>>>,
}

impl<'a> Navigator<'a> {
    pub fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            path_memo: RefCell::new(HashMap::new()),
        }
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    /// A connecting path from `from` to `to` walking only parent-like and
    /// child-like edges.
    ///
    /// Found by iterative deepening: depth 1, 2, 3, ... up to the
    /// population size, returning the first success at the smallest depth
    /// tried. `path(a, a)` is `[a]`. Results are memoized per unordered
    /// pair; the reverse query replays the stored path backwards.
    pub fn path(&self, from: &str, to: &str) -> Option<Vec<&'a Person>> {
        let ids = self.path_ids(from, to)?;
        ids.iter().map(|id| self.tree.get(id)).collect()
    }

    fn path_ids(&self, from: &str, to: &str) -> Option<Vec<String>> {
        self.tree.get(from)?;
        self.tree.get(to)?;

        let (key, forward) = if from <= to {
            ((from.to_string(), to.to_string()), true)
        } else {
            ((to.to_string(), from.to_string()), false)
        };

        if let Some(cached) = self.path_memo.borrow().get(&key) {
            return orient(cached.clone(), forward);
        }

        let mut found = None;
        for depth in 1..=self.tree.len() {
            let mut on_path = Vec::new();
            if let Some(path) = dfs(self.tree, &key.0, &key.1, depth, &mut on_path) {
                found = Some(path);
                break;
            }
        }
        self.path_memo.borrow_mut().insert(key, found.clone());
        orient(found, forward)
    }
}

fn orient(ids: Option<Vec<String>>, forward: bool) -> Option<Vec<String>> {
    ids.map(|mut ids| {
        if !forward {
            ids.reverse();
        }
        ids
    })
}

/// Depth-bounded DFS over parent/child edges. `budget` counts the people
/// still allowed on the path, including `current`. `on_path` holds the
/// people already committed to the path so no identifier repeats.
fn dfs(
    tree: &Tree,
    current: &str,
    target: &str,
    budget: usize,
    on_path: &mut Vec<String>,
) -> Option<Vec<String>> {
    if current == target {
        return Some(vec![current.to_string()]);
    }
    if budget <= 1 {
        return None;
    }
    let person = tree.get(current)?;
    on_path.push(current.to_string());
    for edge in &person.family {
        if !(edge.relation.is_parent() || edge.relation.is_child()) {
            continue;
        }
        if on_path.iter().any(|id| id == &edge.person_id) {
            continue;
        }
        if let Some(mut rest) = dfs(tree, &edge.person_id, target, budget - 1, on_path) {
            let mut path = vec![current.to_string()];
            path.append(&mut rest);
            on_path.pop();
            return Some(path);
        }
    }
    on_path.pop();
    None
}
