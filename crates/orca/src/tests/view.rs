use std::sync::Arc;

use crate::swarm::SwarmConfig;
use crate::view::{Grouping, SwarmFilter, SwarmView};
use orca_core::{CategoryDomain, Stat};

fn view() -> SwarmView {
    let records = super::draft();
    let domain = CategoryDomain::from_records(&records, 7);
    SwarmView::new(records, domain, SwarmConfig::default())
}

#[test]
fn grouped_snapshots_are_cached_until_the_filter_changes() {
    let mut view = view();
    let a = view.snapshot(Grouping::Nationality).expect("layout");
    let b = view.snapshot(Grouping::Nationality).expect("layout");
    assert!(Arc::ptr_eq(&a, &b), "second request should not re-simulate");

    view.set_filter(SwarmFilter {
        year: Some(2001),
        stat: Stat::Points,
    });
    let c = view.snapshot(Grouping::Nationality).expect("layout");
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(c.len(), 8);
}

#[test]
fn setting_an_identical_filter_keeps_the_cache() {
    let mut view = view();
    let a = view.snapshot(Grouping::Spread).expect("layout");
    view.set_filter(SwarmFilter::default());
    let b = view.snapshot(Grouping::Spread).expect("layout");
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn reentering_spread_replays_the_cached_snapshot() {
    let mut view = view();
    let first = view.activate(Grouping::Nationality).expect("scene");
    let second = view.activate(Grouping::Spread).expect("scene");

    assert!(Arc::ptr_eq(&second.to, &first.from));
    assert!(Arc::ptr_eq(&second.from, &first.to));
    assert_eq!(view.grouping(), Grouping::Spread);
}

#[test]
fn identical_views_simulate_identical_coordinates() {
    let a = view().snapshot(Grouping::Nationality).expect("layout");
    let b = view().snapshot(Grouping::Nationality).expect("layout");
    assert_eq!(a, b);
}

#[test]
fn role_grouping_excludes_records_without_a_role() {
    let mut view = view();
    let scene = view.activate(Grouping::Role).expect("scene");

    // 5 of the 32 fixture records carry position "F".
    assert_eq!(scene.to.len(), 27);
    assert_eq!(scene.particles.len(), 32);
    assert!(scene.to.get(5).is_none(), "id 5 has no role");
    assert!(scene.from.get(5).is_some(), "spread keeps every record");
}

#[test]
fn nationality_lanes_follow_domain_order() {
    let mut view = view();
    let scene = view.activate(Grouping::Nationality).expect("scene");

    let labels: Vec<&str> = scene.lanes.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(
        labels,
        ["CA", "US", "SE", "FI", "RU", "CZ", "SK", "Others"]
    );
    assert!(scene.lanes.windows(2).all(|w| w[0].y < w[1].y));
}

#[test]
fn role_lanes_follow_the_fixed_role_order() {
    let mut view = view();
    let scene = view.activate(Grouping::Role).expect("scene");

    let labels: Vec<&str> = scene.lanes.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, ["forward", "defensemen", "goalie"]);
    assert_eq!(scene.lanes[1].y, 230.0);
}

#[test]
fn spread_scenes_carry_no_lanes() {
    let mut view = view();
    let scene = view.activate(Grouping::Spread).expect("scene");
    assert!(scene.lanes.is_empty());
    assert!(Arc::ptr_eq(&scene.from, &scene.to));
}

#[test]
fn the_year_filter_restricts_the_particle_set() {
    let mut view = view();
    view.set_filter(SwarmFilter {
        year: Some(2001),
        stat: Stat::Points,
    });
    let scene = view.activate(Grouping::Spread).expect("scene");

    assert_eq!(scene.particles.len(), 8);
    assert_eq!(scene.to.len(), 8);
    // Particle ids are dataset ordinals, so the 2001 class is every fourth.
    assert!(scene.particles.iter().all(|p| p.id % 4 == 1));
}

#[test]
fn scene_particles_carry_domain_categories_and_visible_radii() {
    let mut view = view();
    let scene = view.activate(Grouping::Nationality).expect("scene");

    for p in &scene.particles {
        assert!(scene.domain.contains(&p.category), "{}", p.category);
        assert!(p.radius >= 1.0);
    }
    let zero = scene
        .particles
        .iter()
        .find(|p| p.id == 0)
        .expect("fixture id 0");
    assert_eq!(zero.radius, 1.0, "zero points still gets a visible dot");
}
