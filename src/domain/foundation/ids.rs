//! Strongly-typed identifier value objects.
//!
//! Every entity in the booking domain is keyed by a UUID v4 generated at
//! creation time. The newtypes keep a booking id from being passed where a
//! subscription id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            #[doc = concat!("Creates a new random ", stringify!($name), ".")]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            #[doc = concat!("Creates a ", stringify!($name), " from an existing UUID.")]
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parses an identifier received at a transport boundary.
            pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
                raw.parse().map_err(|e: uuid::Error| {
                    ValidationError::invalid_format(field, e.to_string())
                })
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a subscription offering (any variant).
    SubscriptionId
);

uuid_id!(
    /// Unique identifier for a booking (any variant).
    BookingId
);

uuid_id!(
    /// Identifier of the member holding a booking.
    UserId
);

uuid_id!(
    /// Identifier of the gym or sport hall an offering belongs to.
    FacilityId
);

uuid_id!(
    /// Identifier of the coach leading a group or coach offering.
    CoachId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = BookingId::new();
        let b = BookingId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn id_displays_as_uuid() {
        let uuid = Uuid::new_v4();
        let id = SubscriptionId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn id_parses_from_string() {
        let id: UserId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn parse_reports_field_on_invalid_input() {
        let err = FacilityId::parse("facility_id", "not-a-uuid").unwrap_err();
        assert!(err.to_string().contains("facility_id"));
    }

    #[test]
    fn id_serializes_transparently() {
        let id = CoachId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"00000000-0000-0000-0000-000000000000\"");
    }
}
