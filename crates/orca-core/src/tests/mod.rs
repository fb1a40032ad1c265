mod charts;

use crate::record::Record;

/// Minimal record builder for pipeline tests; stats other than points stay
/// fixed so assertions read off the inputs directly.
fn rec(year: i32, pick: u32, nationality: &str, position: &str, points: u32) -> Record {
    Record {
        overall_pick: pick,
        year,
        player: format!("{nationality} {pick}"),
        nationality: nationality.to_string(),
        position: position.to_string(),
        goals: 0,
        assists: 0,
        points,
        games_played: 82,
    }
}
