//! Chart row layout: generation grouping, ordering, and positioning.

use crate::explore::{Budget, explore};
use crate::generation::generation;
use crate::order::chart_order;
use crate::path::Navigator;
use kin_core::config::LayoutConfig;
use kin_core::person::Person;
use kin_core::tree::Tree;
use serde::Serialize;
use std::collections::BTreeMap;

/// A positioned chart node with the in-chart links a renderer needs.
#[derive(Debug, Clone, Serialize)]
pub struct ChartNode {
    pub id: String,
    pub name: String,
    pub generation: i32,
    pub x: f32,
    pub y: f32,
    /// Parents of this node that are present in the chart.
    pub parents: Vec<String>,
    /// Spouses of this node that are present in the chart.
    pub spouses: Vec<String>,
}

/// A laid-out chart: one ordered row per generation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Chart {
    /// Generation → identifiers in left-to-right order. Larger
    /// generations are older, so renderers draw rows top-down in reverse
    /// key order.
    pub rows: BTreeMap<i32, Vec<String>>,
    /// Node data keyed by identifier.
    pub nodes: BTreeMap<String, ChartNode>,
}

/// Lay out the family around `head_id`: explore bounded by `lookback`,
/// group by generation, order each row with
/// [`chart_order`](crate::order::chart_order), then place nodes on the
/// configured grid. Returns `None` when the head is unknown.
pub fn layout(
    tree: &Tree,
    head_id: &str,
    lookback: Budget,
    config: &LayoutConfig,
) -> Option<Chart> {
    let head = tree.get(head_id)?;
    let nav = Navigator::new(tree);

    let mut rows: BTreeMap<i32, Vec<&Person>> = BTreeMap::new();
    for person in explore(tree, head, lookback) {
        match generation(tree, head_id, &person.id) {
            Some(g) => rows.entry(g).or_default().push(person),
            None => {
                tracing::warn!(person = %person.id, "explored person has no generation relative to the head");
            }
        }
    }

    let max_gen = rows.keys().next_back().copied().unwrap_or(0);
    let mut chart = Chart::default();
    for (g, row) in &mut rows {
        row.sort_by(|a, b| chart_order(&nav, head, *a, *b));
        let count = row.len();
        for (i, person) in row.iter().enumerate() {
            chart.rows.entry(*g).or_default().push(person.id.clone());
            chart.nodes.insert(
                person.id.clone(),
                ChartNode {
                    id: person.id.clone(),
                    name: person.name.clone(),
                    generation: *g,
                    x: (i as f32 - count as f32 / 2.0) * config.col_spacing,
                    y: (max_gen - g) as f32 * config.row_spacing,
                    parents: Vec::new(),
                    spouses: Vec::new(),
                },
            );
        }
    }

    // connecting lines only run between nodes that made it into the chart
    let shown: Vec<String> = chart.nodes.keys().cloned().collect();
    for id in &shown {
        let Some(person) = tree.get(id) else { continue };
        let parents: Vec<String> = person
            .parents()
            .iter()
            .filter(|e| chart.nodes.contains_key(&e.person_id))
            .map(|e| e.person_id.clone())
            .collect();
        let spouses: Vec<String> = person
            .spouses()
            .iter()
            .filter(|e| chart.nodes.contains_key(&e.person_id))
            .map(|e| e.person_id.clone())
            .collect();
        if let Some(node) = chart.nodes.get_mut(id) {
            node.parents = parents;
            node.spouses = spouses;
        }
    }

    Some(chart)
}
