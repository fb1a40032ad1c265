mod swarm;
mod view;

use orca_core::Record;

const NATIONS: [&str; 8] = ["CA", "US", "SE", "FI", "RU", "CZ", "SK", "DE"];
const POSITIONS: [&str; 6] = ["C", "LW", "RW", "D", "G", "F"];

/// 32 synthetic draftees cycling through eight nationalities, six position
/// codes, and four draft classes. Position "F" maps to no role, so role
/// groupings always have a few sit-outs to exercise.
fn draft() -> Vec<Record> {
    (0..32u32)
        .map(|i| {
            let goals = i * 3 % 40;
            let assists = i * 5 % 60;
            Record {
                overall_pick: i + 1,
                year: 2000 + (i as i32 % 4),
                player: format!("Player {i}"),
                nationality: NATIONS[i as usize % NATIONS.len()].to_string(),
                position: POSITIONS[i as usize % POSITIONS.len()].to_string(),
                goals,
                assists,
                points: goals + assists,
                games_played: 82,
            }
        })
        .collect()
}
