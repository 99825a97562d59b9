//! The three offering variants a gym sells.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Which family of offering a subscription, booking or access record belongs to.
///
/// Each kind is persisted in its own set of tables; records of different
/// kinds never reference each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    /// Open gym access for a single member.
    Personal,
    /// Scheduled class with a capacity limit.
    Group,
    /// One-to-one sessions with a coach.
    Coach,
}

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Personal, PlanKind::Group, PlanKind::Coach];

    /// Lowercase name used in routes and table names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanKind::Personal => "personal",
            PlanKind::Group => "group",
            PlanKind::Coach => "coach",
        }
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "personal" => Ok(PlanKind::Personal),
            "group" => Ok(PlanKind::Group),
            "coach" => Ok(PlanKind::Coach),
            other => Err(ValidationError::invalid_format(
                "kind",
                format!("expected personal, group or coach, got '{}'", other),
            )),
        }
    }
}
