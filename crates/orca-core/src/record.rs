use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One draftee entry. Fields are fixed; the upstream dataset's extra columns
/// (team, age, amateur club) are dropped at ingestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub overall_pick: u32,
    pub year: i32,
    pub player: String,
    pub nationality: String,
    pub position: String,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub games_played: u32,
}

/// Career stat selectable as the particle/bubble size measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Goals,
    Assists,
    #[default]
    Points,
    GamesPlayed,
}

impl Stat {
    pub fn of(self, record: &Record) -> u32 {
        match self {
            Stat::Goals => record.goals,
            Stat::Assists => record.assists,
            Stat::Points => record.points,
            Stat::GamesPlayed => record.games_played,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stat::Goals => "goals",
            Stat::Assists => "assists",
            Stat::Points => "points",
            Stat::GamesPlayed => "games_played",
        }
    }
}

impl FromStr for Stat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "goals" => Ok(Self::Goals),
            "assists" => Ok(Self::Assists),
            "points" => Ok(Self::Points),
            "games-played" | "games_played" => Ok(Self::GamesPlayed),
            _ => Err(()),
        }
    }
}

/// Coarse position bucket used by the secondary swarm grouping.
///
/// The mapping is exact on the dataset's position codes: composite entries
/// like `"C/LW"` carry no role and are excluded from role-grouped views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Forward,
    Defensemen,
    Goalie,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Forward, Role::Defensemen, Role::Goalie];

    pub fn from_position(position: &str) -> Option<Role> {
        match position.trim() {
            "LW" | "C" | "RW" => Some(Role::Forward),
            "D" => Some(Role::Defensemen),
            "G" => Some(Role::Goalie),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Forward => "forward",
            Role::Defensemen => "defensemen",
            Role::Goalie => "goalie",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forward" | "forwards" => Ok(Self::Forward),
            "defensemen" | "defense" => Ok(Self::Defensemen),
            "goalie" | "goalies" => Ok(Self::Goalie),
            _ => Err(()),
        }
    }
}
