use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};
use std::str::FromStr;

/// Roster position as reported by the league and valuation sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Defense,
    Kicker,
}

/// Positions that carry market value and take part in lineup math.
pub const VALUED_POSITIONS: [Position; 4] = [
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
];

impl Position {
    pub fn get_short_name(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Defense => "DST",
            Position::Kicker => "K",
        }
    }

    pub fn is_valued(&self) -> bool {
        VALUED_POSITIONS.contains(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPosition(pub String);

impl Display for UnknownPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "unknown position '{}'", self.0)
    }
}

impl std::error::Error for UnknownPosition {}

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "QB" => Ok(Position::Quarterback),
            "RB" => Ok(Position::RunningBack),
            "WR" => Ok(Position::WideReceiver),
            "TE" => Ok(Position::TightEnd),
            "DST" | "DEF" | "D/ST" => Ok(Position::Defense),
            "K" | "PK" => Ok(Position::Kicker),
            _ => Err(UnknownPosition(s.to_string())),
        }
    }
}

impl TryFrom<String> for Position {
    type Error = UnknownPosition;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.get_short_name().to_string()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_source_aliases() {
        assert_eq!("qb".parse::<Position>(), Ok(Position::Quarterback));
        assert_eq!(" WR ".parse::<Position>(), Ok(Position::WideReceiver));
        assert_eq!("DEF".parse::<Position>(), Ok(Position::Defense));
        assert_eq!("PK".parse::<Position>(), Ok(Position::Kicker));
        assert!("PICK".parse::<Position>().is_err());
    }

    #[test]
    fn only_offensive_skill_positions_are_valued() {
        assert!(Position::TightEnd.is_valued());
        assert!(!Position::Defense.is_valued());
        assert!(!Position::Kicker.is_valued());
    }
}
