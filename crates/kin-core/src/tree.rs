//! The family tree container: ownership, lookup, and mutation.

use crate::consistency;
use crate::error::TreeError;
use crate::person::Person;
use std::collections::BTreeMap;

/// A family tree: people keyed by identifier plus a designated head used
/// as the reference point for generation and layout queries.
///
/// Construction saturates one-sided edges exactly once; [`add`](Tree::add)
/// and [`rename`](Tree::rename) re-run saturation before returning.
/// Scalar-field edits via [`get_mut`](Tree::get_mut) do not require
/// re-saturation. The identifier index doubles as the uniqueness
/// registry, so independent trees never collide with each other.
#[derive(Debug, Clone)]
pub struct Tree {
    people: BTreeMap<String, Person>,
    head_id: Option<String>,
}

impl Tree {
    /// Build a tree from people whose edges may still be one-sided.
    ///
    /// The first supplied person becomes the default head. An empty
    /// person identifier is replaced by the person's name. Fails on a
    /// duplicate identifier, a relation to an unknown identifier, or a
    /// person ending up with more than two parents.
    pub fn new(people: Vec<Person>) -> Result<Self, TreeError> {
        let mut map = BTreeMap::new();
        let mut head_id = None;
        for mut person in people {
            if person.id.is_empty() {
                person.id = person.name.clone();
            }
            if head_id.is_none() {
                head_id = Some(person.id.clone());
            }
            if map.contains_key(&person.id) {
                return Err(TreeError::DuplicateId(person.id));
            }
            map.insert(person.id.clone(), person);
        }
        consistency::saturate(&mut map)?;
        Ok(Self {
            people: map,
            head_id,
        })
    }

    /// The designated head, or `None` for an empty tree.
    pub fn head(&self) -> Option<&Person> {
        self.head_id.as_deref().and_then(|id| self.people.get(id))
    }

    /// Designate a new head. Fails if the identifier is unknown.
    pub fn set_head(&mut self, id: &str) -> Result<(), TreeError> {
        if !self.people.contains_key(id) {
            return Err(TreeError::UnknownId(id.to_string()));
        }
        self.head_id = Some(id.to_string());
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    /// Mutable access for scalar-field edits (name, dates, notes).
    /// Identifier and edge changes must go through
    /// [`rename`](Tree::rename) and [`add`](Tree::add) instead.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.people.get_mut(id)
    }

    /// People whose name contains `text`, in identifier order.
    pub fn search_names(&self, text: &str) -> Vec<&Person> {
        self.people
            .values()
            .filter(|p| p.name.contains(text))
            .collect()
    }

    /// Add a person and re-saturate. All-or-nothing: on error the tree is
    /// unchanged.
    pub fn add(&mut self, mut person: Person) -> Result<(), TreeError> {
        if person.id.is_empty() {
            person.id = person.name.clone();
        }
        if self.people.contains_key(&person.id) {
            return Err(TreeError::DuplicateId(person.id));
        }
        let id = person.id.clone();
        let mut next = self.people.clone();
        next.insert(id.clone(), person);
        consistency::saturate(&mut next)?;
        self.people = next;
        if self.head_id.is_none() {
            self.head_id = Some(id);
        }
        Ok(())
    }

    /// Rename `old` to `new`, rewriting every edge in the tree that
    /// references `old`, then re-saturate. All-or-nothing: on error the
    /// tree is unchanged.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), TreeError> {
        if old == new {
            return Ok(());
        }
        if self.people.contains_key(new) {
            return Err(TreeError::DuplicateId(new.to_string()));
        }
        let mut next = self.people.clone();
        let Some(mut person) = next.remove(old) else {
            return Err(TreeError::UnknownId(old.to_string()));
        };
        person.id = new.to_string();
        next.insert(new.to_string(), person);
        for p in next.values_mut() {
            for edge in &mut p.family {
                if edge.person_id == old {
                    edge.person_id = new.to_string();
                }
            }
        }
        consistency::saturate(&mut next)?;
        self.people = next;
        if self.head_id.as_deref() == Some(old) {
            self.head_id = Some(new.to_string());
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate people in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }
}
