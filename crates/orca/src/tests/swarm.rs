use crate::swarm::{ParticleScales, SwarmConfig};
use orca_core::{Record, Stat};

fn rec(pick: u32, points: u32, goals: u32) -> Record {
    Record {
        overall_pick: pick,
        year: 2000,
        player: format!("P{pick}"),
        nationality: "CA".to_string(),
        position: "C".to_string(),
        goals,
        assists: points.saturating_sub(goals),
        points,
        games_played: 82,
    }
}

fn keyed(records: &[Record]) -> Vec<(u32, &Record)> {
    records
        .iter()
        .enumerate()
        .map(|(i, r)| (i as u32, r))
        .collect()
}

#[test]
fn particles_span_the_padded_width() {
    let records = vec![rec(1, 10, 5), rec(112, 50, 20), rec(224, 100, 40)];
    let config = SwarmConfig::default();
    let scales = ParticleScales::new(&keyed(&records), Stat::Points, &config);

    let first = scales.particle(0, &records[0], 230.0);
    let last = scales.particle(2, &records[2], 230.0);
    assert_eq!(first.x_target, config.padding);
    assert_eq!(last.x_target, config.width - config.padding);
}

#[test]
fn a_single_pick_lands_on_the_axis_midpoint() {
    let records = vec![rec(57, 30, 10)];
    let config = SwarmConfig::default();
    let scales = ParticleScales::new(&keyed(&records), Stat::Points, &config);

    let p = scales.particle(0, &records[0], 230.0);
    assert_eq!(p.x_target, (config.padding + config.width - config.padding) / 2.0);
}

#[test]
fn zero_stat_players_sit_on_the_radius_floor() {
    let records = vec![rec(1, 0, 0), rec(2, 100, 40)];
    let config = SwarmConfig::default();
    let scales = ParticleScales::new(&keyed(&records), Stat::Points, &config);

    assert_eq!(scales.radius(&records[0]), config.radius_range.0);
    assert_eq!(scales.radius(&records[1]), config.radius_range.1);
}

#[test]
fn the_selected_stat_drives_the_size_scale() {
    let records = vec![rec(1, 100, 10), rec(2, 50, 50)];
    let config = SwarmConfig::default();
    let by_points = ParticleScales::new(&keyed(&records), Stat::Points, &config);
    let by_goals = ParticleScales::new(&keyed(&records), Stat::Goals, &config);

    // Record 2 leads in goals but trails in points, so its radius flips
    // between the two scales.
    assert!(by_goals.radius(&records[1]) > by_points.radius(&records[1]));
    assert!(by_goals.radius(&records[0]) < by_points.radius(&records[0]));
}

#[test]
fn an_empty_dataset_still_yields_usable_scales() {
    let config = SwarmConfig::default();
    let scales = ParticleScales::new(&[], Stat::Points, &config);
    let r = rec(10, 30, 10);
    assert_eq!(scales.radius(&r), config.radius_range.0);
}
