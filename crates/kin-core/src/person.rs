//! People and the typed family relations between them.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Maximum number of parent-like edges a person may carry.
pub const MAX_PARENTS: usize = 2;

/// Sex recorded for a person. Drives relation specialization
/// (`parent` → `father`/`mother`) and chart placement conventions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
    Other,
    #[default]
    Unknown,
}

/// The kind of relation the holder of an edge has to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Parent,
    Child,
    Spouse,
    Partner,
    Sibling,
    StepSibling,
    AdoptedChild,
    AdoptedParent,
    Father,
    Mother,
    Son,
    Daughter,
}

impl Relation {
    /// True for relations pointing at a parent of the holder.
    pub fn is_parent(self) -> bool {
        matches!(
            self,
            Relation::Parent | Relation::AdoptedParent | Relation::Father | Relation::Mother
        )
    }

    /// True for relations pointing at a child of the holder.
    pub fn is_child(self) -> bool {
        matches!(
            self,
            Relation::Child | Relation::AdoptedChild | Relation::Son | Relation::Daughter
        )
    }

    /// True for relations pointing at a spouse or partner.
    pub fn is_spouse(self) -> bool {
        matches!(self, Relation::Spouse | Relation::Partner)
    }
}

/// A directed family edge: what relation the holder has to `person_id`.
///
/// Edges store only the target identifier. Resolution goes through the
/// owning [`Tree`](crate::tree::Tree)'s identifier index, so a rename can
/// never leave a stale reference behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyEdge {
    pub relation: Relation,
    pub person_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl FamilyEdge {
    pub fn new(relation: Relation, person_id: impl Into<String>) -> Self {
        Self {
            relation,
            person_id: person_id.into(),
            notes: String::new(),
        }
    }
}

/// A person as seen inside a family tree.
///
/// Identity and equality are solely by identifier: two values with the
/// same `id` are the same entity regardless of other field differences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Unique identifier within the owning tree. An empty identifier is
    /// replaced by `name` when the tree is built.
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
    #[serde(default)]
    pub family: Vec<FamilyEdge>,
    /// Date of birth as an opaque, lexicographically comparable string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Date of death.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dod: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    /// Whether every child of this person has been recorded.
    /// Maintained by data entry tooling, not by the engine.
    #[serde(default)]
    pub child_complete: bool,
    /// Whether every spouse of this person has been recorded.
    #[serde(default)]
    pub spouse_complete: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
}

impl Person {
    /// Create a person whose identifier defaults to their name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            sources: Vec::new(),
            family: Vec::new(),
            dob: None,
            dod: None,
            sex: Sex::Unknown,
            child_complete: false,
            spouse_complete: false,
            notes: String::new(),
        }
    }

    /// Create a person with an explicit identifier distinct from the name.
    pub fn with_id(name: impl Into<String>, id: impl Into<String>) -> Self {
        let mut person = Self::new(name);
        person.id = id.into();
        person
    }

    /// The relation this person holds toward `other_id`, if any edge exists.
    pub fn relation_to(&self, other_id: &str) -> Option<Relation> {
        self.family
            .iter()
            .find(|f| f.person_id == other_id)
            .map(|f| f.relation)
    }

    /// Outgoing parent-like edges.
    pub fn parents(&self) -> Vec<&FamilyEdge> {
        self.family.iter().filter(|f| f.relation.is_parent()).collect()
    }

    /// Outgoing child-like edges.
    pub fn children(&self) -> Vec<&FamilyEdge> {
        self.family.iter().filter(|f| f.relation.is_child()).collect()
    }

    /// Outgoing spouse-like edges.
    pub fn spouses(&self) -> Vec<&FamilyEdge> {
        self.family.iter().filter(|f| f.relation.is_spouse()).collect()
    }

    /// Outgoing full-sibling edges.
    pub fn siblings(&self) -> Vec<&FamilyEdge> {
        self.family
            .iter()
            .filter(|f| f.relation == Relation::Sibling)
            .collect()
    }

    /// True once both parents are recorded.
    pub fn parent_complete(&self) -> bool {
        self.parents().len() == MAX_PARENTS
    }

    /// True once both parents and all children are recorded.
    pub fn complete(&self) -> bool {
        self.parent_complete() && self.child_complete
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
