use kin_core::person::{FamilyEdge, Person, Relation, Sex};
use kin_core::tree::Tree;
use kin_nav::explore::{explore, explore_down, explore_up, incomplete};
use kin_nav::generation::generation;
use kin_nav::path::Navigator;

fn person(name: &str, sex: Sex, dob: Option<&str>) -> Person {
    let mut p = Person::new(name);
    p.sex = sex;
    p.dob = dob.map(str::to_string);
    p
}

fn parent_edge(target: &str) -> FamilyEdge {
    FamilyEdge::new(Relation::Parent, target)
}

/// Three generations plus one isolated person:
///
/// George + Mary
///   Frank (m. Helen), Alice
///     Ann, Bob
/// Zed (not connected to anyone)
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

    let zed = person("Zed", Sex::Male, None);

    Tree::new(vec![george, mary, frank, alice, helen, ann, bob, zed]).unwrap()
}

#[test]
fn test_generation_of_self_is_zero() {
    let tree = family();
    for id in ["George", "Frank", "Ann", "Zed"] {
        assert_eq!(generation(&tree, id, id), Some(0));
    }
}

#[test]
fn test_generation_signs() {
    let tree = family();
    // parents are above (+), children below (-)
    assert_eq!(generation(&tree, "Ann", "Frank"), Some(1));
    assert_eq!(generation(&tree, "Frank", "Ann"), Some(-1));
    assert_eq!(generation(&tree, "Ann", "George"), Some(2));
    assert_eq!(generation(&tree, "George", "Ann"), Some(-2));
}

#[test]
fn test_generation_antisymmetry() {
    let tree = family();
    for (a, b) in [("Ann", "George"), ("Frank", "Bob"), ("Mary", "Helen")] {
        let forward = generation(&tree, a, b).unwrap();
        let backward = generation(&tree, b, a).unwrap();
        assert_eq!(forward, -backward, "{a} <-> {b}");
    }
}

#[test]
fn test_siblings_and_spouses_share_a_generation() {
    let tree = family();
    assert_eq!(generation(&tree, "Frank", "Alice"), Some(0));
    assert_eq!(generation(&tree, "Frank", "Helen"), Some(0));
    assert_eq!(generation(&tree, "George", "Mary"), Some(0));
}

#[test]
fn test_generation_disconnected_is_none() {
    let tree = family();
    assert_eq!(generation(&tree, "Ann", "Zed"), None);
    assert_eq!(generation(&tree, "Zed", "Ann"), None);
    assert_eq!(generation(&tree, "Ann", "nobody"), None);
}

#[test]
fn test_path_to_self_is_single_element() {
    let tree = family();
    let nav = Navigator::new(&tree);
    let path = nav.path("Ann", "Ann").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path[0].id, "Ann");
}

#[test]
fn test_path_endpoints_and_connectivity() {
    let tree = family();
    let nav = Navigator::new(&tree);
    let path = nav.path("Ann", "George").unwrap();

    assert_eq!(path.first().unwrap().id, "Ann");
    assert_eq!(path.last().unwrap().id, "George");
    for pair in path.windows(2) {
        let relation = pair[0].relation_to(&pair[1].id).unwrap();
        assert!(relation.is_parent() || relation.is_child());
    }
    // no identifier repeats
    let mut ids: Vec<&str> = path.iter().map(|p| p.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), path.len());
}

#[test]
fn test_path_disconnected_is_none() {
    let tree = family();
    let nav = Navigator::new(&tree);
    assert!(nav.path("Ann", "Zed").is_none());
    assert!(nav.path("Zed", "George").is_none());
}

#[test]
fn test_path_memo_serves_the_reverse_query() {
    let tree = family();
    let nav = Navigator::new(&tree);
    let forward: Vec<String> = nav
        .path("George", "Ann")
        .unwrap()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    let mut backward: Vec<String> = nav
        .path("Ann", "George")
        .unwrap()
        .iter()
        .map(|p| p.id.clone())
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_explore_up_one_level() {
    let tree = family();
    let ann = tree.get("Ann").unwrap();
    let nodes = explore_up(&tree, ann, Some(1));
    let ids: Vec<&str> = {
        let mut v: Vec<&str> = nodes.iter().map(|p| p.id.as_str()).collect();
        v.sort_unstable();
        v
    };
    // parents plus the parents' other children, one layer early
    assert_eq!(ids, ["Ann", "Bob", "Frank", "Helen"]);
}

#[test]
fn test_explore_up_unbounded_reaches_grandparents() {
    let tree = family();
    let ann = tree.get("Ann").unwrap();
    let nodes = explore_up(&tree, ann, None);
    for id in ["George", "Mary", "Alice"] {
        assert!(nodes.contains(tree.get(id).unwrap()), "missing {id}");
    }
    assert!(!nodes.contains(tree.get("Zed").unwrap()));
}

#[test]
fn test_explore_down_one_level() {
    let tree = family();
    let george = tree.get("George").unwrap();
    let nodes = explore_down(&tree, george, Some(1));
    let ids: Vec<&str> = {
        let mut v: Vec<&str> = nodes.iter().map(|p| p.id.as_str()).collect();
        v.sort_unstable();
        v
    };
    // children plus each child's other parent
    assert_eq!(ids, ["Alice", "Frank", "George", "Mary"]);
}

#[test]
fn test_explore_zero_budget_is_only_the_head() {
    let tree = family();
    let ann = tree.get("Ann").unwrap();
    assert!(explore_up(&tree, ann, Some(0)).is_empty());
    assert!(explore_down(&tree, ann, Some(0)).is_empty());
    let nodes = explore(&tree, ann, Some(0));
    assert_eq!(nodes.len(), 1);
    assert!(nodes.contains(ann));
}

#[test]
fn test_explore_unbounded_covers_the_connected_component() {
    let tree = family();
    let ann = tree.get("Ann").unwrap();
    let nodes = explore(&tree, ann, None);
    assert_eq!(nodes.len(), 7);
    assert!(!nodes.contains(tree.get("Zed").unwrap()));
}

#[test]
fn test_incomplete_skips_fully_recorded_people() {
    let mut tree = family();
    tree.get_mut("Frank").unwrap().child_complete = true;
    let ann = tree.get("Ann").unwrap();
    let nodes = incomplete(&tree, ann, None);
    // Frank has both parents and confirmed children
    assert!(!nodes.contains(tree.get("Frank").unwrap()));
    // Ann has parents but unconfirmed children
    assert!(nodes.contains(tree.get("Ann").unwrap()));
    // George has no recorded parents at all
    assert!(nodes.contains(tree.get("George").unwrap()));
}
