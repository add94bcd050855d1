#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use super::palette::*;
use super::theme::BAR_COLORS;

#[test]
fn test_fnv1a_known_vectors() {
    assert_eq!(fnv1a(b""), 0xcbf2_9ce4_8422_2325);
    assert_eq!(fnv1a(b"a"), 0xaf63_dc4c_8601_ec8c);
}

#[test]
fn test_color_for_is_stable() {
    assert_eq!(color_for("Food"), color_for("Food"));
    assert!(BAR_COLORS.contains(&color_for("Rent")));
}

#[test]
fn test_unassigned_falls_back_to_hash() {
    let palette = Palette::default();
    assert_eq!(palette.get("Travel"), color_for("Travel"));
}

#[test]
fn test_first_category_gets_hash_color() {
    let mut palette = Palette::default();
    palette.assign(["Food"]);
    assert_eq!(palette.get("Food"), color_for("Food"));
}

#[test]
fn test_assignment_never_changes() {
    let mut palette = Palette::default();
    palette.assign(["Food", "Rent"]);
    let food = palette.get("Food");
    let rent = palette.get("Rent");

    palette.assign(["Rent", "Travel", "Food", "Utilities"]);
    assert_eq!(palette.get("Food"), food);
    assert_eq!(palette.get("Rent"), rent);
}

#[test]
fn test_same_order_same_colors_across_palettes() {
    let cats = ["Food", "Rent", "Travel", "Health", "Fun"];
    let mut a = Palette::default();
    let mut b = Palette::default();
    a.assign(cats);
    b.assign(cats);
    for cat in cats {
        assert_eq!(a.get(cat), b.get(cat));
    }
}

#[test]
fn test_hash_collision_resolved_by_first_seen_order() {
    let other = (1..)
        .map(|i| format!("c{i}"))
        .find(|name| color_for(name) == color_for("c0"))
        .unwrap();

    let mut first = Palette::default();
    first.assign(["c0", other.as_str()]);
    assert_eq!(first.get("c0"), color_for("c0"));
    assert_ne!(first.get(&other), first.get("c0"));

    let mut second = Palette::default();
    second.assign([other.as_str(), "c0"]);
    assert_eq!(second.get(&other), color_for("c0"));
    assert_ne!(second.get("c0"), color_for("c0"));
}

#[test]
fn test_distinct_while_palette_has_room() {
    let cats: Vec<String> = (0..BAR_COLORS.len()).map(|i| format!("cat-{i}")).collect();
    let mut palette = Palette::default();
    palette.assign(cats.iter().map(String::as_str));

    let colors: HashSet<String> = cats
        .iter()
        .map(|c| format!("{:?}", palette.get(c)))
        .collect();
    assert_eq!(colors.len(), BAR_COLORS.len());
}

#[test]
fn test_overflow_still_assigns() {
    let mut palette = Palette::default();
    let cats: Vec<String> = (0..BAR_COLORS.len() + 3).map(|i| format!("c{i}")).collect();
    palette.assign(cats.iter().map(String::as_str));
    for cat in &cats {
        assert!(BAR_COLORS.contains(&palette.get(cat)));
    }
}
