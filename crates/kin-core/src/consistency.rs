//! Saturation of one-sided relation edges into a consistent multigraph.
//!
//! Input people may hold edges their counterparts do not know about yet.
//! Saturation derives every implied mirror edge, re-infers sibling edges
//! from shared parents, and specializes generic `parent` edges by the
//! referenced person's sex.

use crate::error::TreeError;
use crate::person::{FamilyEdge, MAX_PARENTS, Person, Relation, Sex};
use std::collections::{BTreeMap, HashMap};

/// Saturate the edge set in place. Idempotent: a second run adds nothing.
///
/// Fails on an edge whose target identifier is absent from the set, or on
/// a person ending up with more than [`MAX_PARENTS`] parent-like edges.
pub fn saturate(people: &mut BTreeMap<String, Person>) -> Result<(), TreeError> {
    mirror_edges(people)?;
    infer_siblings(people);
    specialize_parents(people);
    validate(people)
}

/// Ensure every relation implies its complement on the other endpoint.
fn mirror_edges(people: &mut BTreeMap<String, Person>) -> Result<(), TreeError> {
    let ids: Vec<String> = people.keys().cloned().collect();
    for id in &ids {
        let edges = people[id].family.clone();
        for edge in edges {
            let Some(other) = people.get_mut(&edge.person_id) else {
                return Err(TreeError::UnresolvedReference {
                    person: id.clone(),
                    target: edge.person_id,
                });
            };
            if edge.relation.is_spouse()
                && !other
                    .family
                    .iter()
                    .any(|f| f.person_id == *id && f.relation.is_spouse())
            {
                other.family.push(FamilyEdge::new(edge.relation, id.clone()));
            }
            if edge.relation.is_parent() && !has_edge_to(other, id) {
                other.family.push(FamilyEdge::new(Relation::Child, id.clone()));
            }
            if edge.relation == Relation::Child && !has_edge_to(other, id) {
                other.family.push(FamilyEdge::new(Relation::Parent, id.clone()));
            }
            if edge.relation == Relation::AdoptedParent && !has_edge_to(other, id) {
                other
                    .family
                    .push(FamilyEdge::new(Relation::AdoptedChild, id.clone()));
            }
            if edge.relation == Relation::AdoptedChild && !has_edge_to(other, id) {
                other
                    .family
                    .push(FamilyEdge::new(Relation::AdoptedParent, id.clone()));
            }
            // a spouse edge may still face a person with no edge of any
            // kind back to the holder
            if edge.relation.is_spouse() && !has_edge_to(other, id) {
                other.family.push(FamilyEdge::new(Relation::Spouse, id.clone()));
            }
        }
    }
    Ok(())
}

fn has_edge_to(person: &Person, id: &str) -> bool {
    person.family.iter().any(|f| f.person_id == id)
}

/// Recompute sibling and step-sibling edges from shared-parent overlap.
///
/// Existing sibling edges are dropped first and the whole pairwise scan
/// runs from scratch: two shared parents make a sibling, one makes a
/// step-sibling. Quadratic in population size, fine at record scale.
fn infer_siblings(people: &mut BTreeMap<String, Person>) {
    for person in people.values_mut() {
        person
            .family
            .retain(|f| !matches!(f.relation, Relation::Sibling | Relation::StepSibling));
    }

    let parent_ids: BTreeMap<String, Vec<String>> = people
        .iter()
        .map(|(id, p)| {
            let parents = p.parents().iter().map(|f| f.person_id.clone()).collect();
            (id.clone(), parents)
        })
        .collect();

    for (id, person) in people.iter_mut() {
        let mine = &parent_ids[id];
        for (other_id, theirs) in &parent_ids {
            if other_id == id {
                continue;
            }
            let shared = mine.iter().filter(|p| theirs.contains(*p)).count();
            match shared {
                2 => person
                    .family
                    .push(FamilyEdge::new(Relation::Sibling, other_id.clone())),
                1 => person
                    .family
                    .push(FamilyEdge::new(Relation::StepSibling, other_id.clone())),
                _ => {}
            }
        }
    }
}

/// Rewrite generic `parent` edges to `father`/`mother` from the target's
/// sex. Unknown or other sex leaves the edge generic.
fn specialize_parents(people: &mut BTreeMap<String, Person>) {
    let sexes: HashMap<String, Sex> = people.iter().map(|(id, p)| (id.clone(), p.sex)).collect();
    for person in people.values_mut() {
        for edge in &mut person.family {
            if edge.relation == Relation::Parent {
                match sexes.get(&edge.person_id) {
                    Some(Sex::Male) => edge.relation = Relation::Father,
                    Some(Sex::Female) => edge.relation = Relation::Mother,
                    _ => {}
                }
            }
        }
    }
}

fn validate(people: &BTreeMap<String, Person>) -> Result<(), TreeError> {
    for (id, person) in people {
        let count = person.parents().len();
        if count > MAX_PARENTS {
            return Err(TreeError::TooManyParents {
                person: id.clone(),
                count,
            });
        }
    }
    Ok(())
}
