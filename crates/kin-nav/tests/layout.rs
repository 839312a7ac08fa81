use kin_core::config::LayoutConfig;
use kin_core::person::{FamilyEdge, Person, Relation, Sex};
use kin_core::tree::Tree;
use kin_nav::layout::layout;

fn person(name: &str, sex: Sex, dob: Option<&str>) -> Person {
    let mut p = Person::new(name);
    p.sex = sex;
    p.dob = dob.map(str::to_string);
    p
}

fn parent_edge(target: &str) -> FamilyEdge {
    FamilyEdge::new(Relation::Parent, target)
}

fn family() -> Tree {
    let mut george = person("George", Sex::Male, Some("1930-05-01"));
    george.family.push(FamilyEdge::new(Relation::Spouse, "Mary"));
    let mary = person("Mary", Sex::Female, Some("1932-11-20"));

    let mut frank = person("Frank", Sex::Male, Some("1960-04-02"));
    frank.family.push(parent_edge("George"));
    frank.family.push(parent_edge("Mary"));
    frank.family.push(FamilyEdge::new(Relation::Spouse, "Helen"));
    let mut alice = person("Alice", Sex::Female, Some("1962-07-15"));
    alice.family.push(parent_edge("George"));
    alice.family.push(parent_edge("Mary"));
    let helen = person("Helen", Sex::Female, Some("1961-01-30"));

    let mut ann = person("Ann", Sex::Female, Some("1990-03-12"));
    ann.family.push(parent_edge("Frank"));
    ann.family.push(parent_edge("Helen"));
    let mut bob = person("Bob", Sex::Male, Some("1992-09-01"));
    bob.family.push(parent_edge("Frank"));
    bob.family.push(parent_edge("Helen"));

    Tree::new(vec![george, mary, frank, alice, helen, ann, bob]).unwrap()
}

#[test]
fn test_rows_are_grouped_and_ordered() {
    let tree = family();
    let chart = layout(&tree, "George", None, &LayoutConfig::default()).unwrap();

    assert_eq!(chart.rows.len(), 3);
    assert_eq!(chart.rows[&0], ["George", "Mary"]);
    assert_eq!(chart.rows[&-1], ["Frank", "Helen", "Alice"]);
    assert_eq!(chart.rows[&-2], ["Ann", "Bob"]);
}

#[test]
fn test_grid_positions() {
    let tree = family();
    let config = LayoutConfig::default();
    let chart = layout(&tree, "George", None, &config).unwrap();

    // oldest generation at the top, one row_spacing per step down
    assert_eq!(chart.nodes["George"].y, 0.0);
    assert_eq!(chart.nodes["Frank"].y, config.row_spacing);
    assert_eq!(chart.nodes["Ann"].y, 2.0 * config.row_spacing);

    // slots centred on the row
    let ann = &chart.nodes["Ann"];
    let bob = &chart.nodes["Bob"];
    assert_eq!(bob.x - ann.x, config.col_spacing);
    assert_eq!(ann.x, -config.col_spacing);
    assert_eq!(bob.x, 0.0);
}

#[test]
fn test_node_links_stay_inside_the_chart() {
    let tree = family();
    let chart = layout(&tree, "George", None, &LayoutConfig::default()).unwrap();

    let ann = &chart.nodes["Ann"];
    assert_eq!(ann.parents, ["Frank", "Helen"]);
    assert!(ann.spouses.is_empty());

    let frank = &chart.nodes["Frank"];
    assert_eq!(frank.spouses, ["Helen"]);
    assert_eq!(frank.parents, ["George", "Mary"]);
}

#[test]
fn test_lookback_limits_the_chart() {
    let tree = family();
    let chart = layout(&tree, "George", Some(1), &LayoutConfig::default()).unwrap();

    assert_eq!(chart.rows[&0], ["George", "Mary"]);
    assert_eq!(chart.rows[&-1], ["Frank", "Alice"]);
    assert!(!chart.rows.contains_key(&-2));
    assert!(!chart.nodes.contains_key("Ann"));
}

#[test]
fn test_unknown_head_is_none() {
    let tree = family();
    assert!(layout(&tree, "nobody", None, &LayoutConfig::default()).is_none());
}

#[test]
fn test_chart_serializes() {
    let tree = family();
    let chart = layout(&tree, "George", None, &LayoutConfig::default()).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    assert!(json.contains("\"rows\""));
    assert!(json.contains("\"George\""));
}
