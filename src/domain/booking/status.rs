//! Access status of a booking.
//!
//! A booking starts out pending. An authorization step outside this service
//! moves it to granted, revoked or denied by updating the booking.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Whether a booking currently entitles its holder to physical access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStatus {
    /// Awaiting authorization. Does not occupy a capacity slot.
    #[default]
    Pending,

    /// Authorized. The only status that admits entry.
    Granted,

    /// Was granted, then withdrawn.
    Revoked,

    /// Authorization refused.
    Denied,
}

impl AccessStatus {
    /// Returns true if a booking in this status may be used to enter a facility.
    pub fn permits_entry(&self) -> bool {
        match self {
            AccessStatus::Granted => true,
            AccessStatus::Pending | AccessStatus::Revoked | AccessStatus::Denied => false,
        }
    }

    /// Storage and wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessStatus::Pending => "pending",
            AccessStatus::Granted => "granted",
            AccessStatus::Revoked => "revoked",
            AccessStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for AccessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(AccessStatus::Pending),
            "granted" => Ok(AccessStatus::Granted),
            "revoked" => Ok(AccessStatus::Revoked),
            "denied" => Ok(AccessStatus::Denied),
            other => Err(ValidationError::invalid_format(
                "access_status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_granted_permits_entry() {
        assert!(AccessStatus::Granted.permits_entry());
        assert!(!AccessStatus::Pending.permits_entry());
        assert!(!AccessStatus::Revoked.permits_entry());
        assert!(!AccessStatus::Denied.permits_entry());
    }

    #[test]
    fn parse_accepts_any_case() {
        assert_eq!("GRANTED".parse::<AccessStatus>().unwrap(), AccessStatus::Granted);
        assert_eq!(" pending ".parse::<AccessStatus>().unwrap(), AccessStatus::Pending);
    }

    #[test]
    fn parse_rejects_typos() {
        let err = "grantd".parse::<AccessStatus>().unwrap_err();
        assert_eq!(err.field(), "access_status");
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(AccessStatus::default(), AccessStatus::Pending);
    }

    #[test]
    fn serde_uses_storage_names() {
        let json = serde_json::to_string(&AccessStatus::Revoked).unwrap();
        assert_eq!(json, "\"revoked\"");
        let parsed: AccessStatus = serde_json::from_str("\"granted\"").unwrap();
        assert_eq!(parsed, AccessStatus::Granted);
    }
}
