//! Left-to-right ordering of people within a generation row.
//!
//! The convention is father-left/mother-right on the ancestor side and
//! birth order (oldest left) on the descendant side. Genuine ties fall
//! back to lexical identifier order so the result is a total order and
//! identical across runs.

use crate::generation::generation;
use crate::path::Navigator;
use kin_core::person::{Person, Relation, Sex};
use std::cmp::Ordering;

/// Compare two people occupying the same generation row relative to
/// `head`, for use with a stable sort.
///
/// Precondition: both people are reachable from `head` and share the same
/// generation offset. Unreachable input is reported with a diagnostic and
/// ordered by identifier so a sort can still complete.
pub fn chart_order(nav: &Navigator<'_>, head: &Person, p1: &Person, p2: &Person) -> Ordering {
    if p1.id == p2.id {
        return Ordering::Equal;
    }
    let tree = nav.tree();
    let Some(g) = generation(tree, &head.id, &p1.id) else {
        tracing::warn!(head = %head.id, person = %p1.id, "ordering a person not connected to the head");
        return tie_break(p1, p2);
    };
    debug_assert_eq!(Some(g), generation(tree, &head.id, &p2.id));

    let (Some(path1), Some(path2)) = (nav.path(&head.id, &p1.id), nav.path(&head.id, &p2.id))
    else {
        tracing::warn!(head = %head.id, "no connecting path for a person in the generation row");
        return tie_break(p1, p2);
    };

    if g > 0 {
        ancestor_order(&path1, &path2, p1, p2)
    } else if g < 0 {
        descendant_order(&path1, &path2)
    } else {
        tie_break(p1, p2)
    }
}

/// Ancestor side: the branch through the father sorts left of the branch
/// through the mother at the first divergence. When one lineage is a
/// prefix of the other, the deeper person is placed beside the nearer one
/// by the other person's sex, males left.
fn ancestor_order(path1: &[&Person], path2: &[&Person], p1: &Person, p2: &Person) -> Ordering {
    for i in 1..path1.len().min(path2.len()) {
        if path1[i].id != path2[i].id {
            return match path1[i - 1].relation_to(&path1[i].id) {
                Some(Relation::Father) => Ordering::Less,
                _ => Ordering::Greater,
            };
        }
    }
    if path1.len() > path2.len() {
        if p2.sex == Sex::Male {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    } else if path1.len() < path2.len() {
        if p1.sex == Sex::Male {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    } else {
        Ordering::Equal
    }
}

/// Descendant side: diverging lineage steps compare by birth date, then
/// case-insensitive name. When the lockstep walk decides nothing, a
/// spouse pair puts the male left; siblings compare by birth date and
/// name again before the final identifier tie-break.
fn descendant_order(path1: &[&Person], path2: &[&Person]) -> Ordering {
    for i in 0..path1.len().min(path2.len()) {
        let (s1, s2) = (path1[i], path2[i]);
        if s1.id == s2.id {
            continue;
        }
        if let (Some(d1), Some(d2)) = (&s1.dob, &s2.dob) {
            match d1.cmp(d2) {
                Ordering::Equal => {}
                decided => return decided,
            }
        } else {
            match name_order(s1, s2) {
                Ordering::Equal => {
                    tracing::warn!(left = %s1.id, right = %s2.id, "name tie while ordering descendants");
                }
                decided => return decided,
            }
        }
    }

    let end1 = path1[path1.len() - 1];
    let end2 = path2[path2.len() - 1];
    if end1
        .relation_to(&end2.id)
        .is_some_and(Relation::is_spouse)
    {
        return if end1.sex == Sex::Male {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    if let (Some(d1), Some(d2)) = (&end1.dob, &end2.dob) {
        match d1.cmp(d2) {
            Ordering::Equal => {}
            decided => return decided,
        }
    } else {
        match name_order(end1, end2) {
            Ordering::Equal => {
                tracing::warn!(left = %end1.id, right = %end2.id, "name tie while ordering siblings");
            }
            decided => return decided,
        }
    }
    tie_break(end1, end2)
}

fn name_order(a: &Person, b: &Person) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Deterministic final tie-break: lexical identifier order.
fn tie_break(a: &Person, b: &Person) -> Ordering {
    a.id.cmp(&b.id)
}
