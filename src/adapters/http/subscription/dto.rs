//! HTTP DTOs for subscription endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CoachId, FacilityId, PlanKind, Timestamp, ValidationError,
};
use crate::domain::subscription::{Offering, Subscription, SubscriptionTerms};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
///
/// Which of the optional fields are required depends on the kind in the path:
/// personal needs `count`; group needs `coach_id`, `capacity`, `time` and
/// `count`; coach needs `coach_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubscriptionRequest {
    pub facility_id: String,
    #[serde(alias = "type")]
    pub plan_type: String,
    #[serde(default)]
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub duration_hours: i32,
    #[serde(default)]
    pub coach_id: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    /// RFC 3339 start of the class window.
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub count: Option<i32>,
}

impl SubscriptionRequest {
    /// Parses ids and times and assembles the variant for `kind`.
    pub fn into_terms(self, kind: PlanKind) -> Result<SubscriptionTerms, ValidationError> {
        let offering = match kind {
            PlanKind::Personal => Offering::Personal {
                count: required(self.count, "count")?,
            },
            PlanKind::Group => Offering::Group {
                coach_id: parse_coach(self.coach_id.as_deref())?,
                capacity: required(self.capacity, "capacity")?,
                time: Timestamp::parse_rfc3339("time", required(self.time.as_deref(), "time")?)?,
                count: required(self.count, "count")?,
            },
            PlanKind::Coach => Offering::Coach {
                coach_id: parse_coach(self.coach_id.as_deref())?,
            },
        };

        Ok(SubscriptionTerms {
            facility_id: FacilityId::parse("facility_id", &self.facility_id)?,
            plan_type: self.plan_type,
            description: self.description,
            price: self.price,
            duration_hours: self.duration_hours,
            offering,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ValidationError> {
    value.ok_or_else(|| ValidationError::empty_field(field))
}

fn parse_coach(raw: Option<&str>) -> Result<CoachId, ValidationError> {
    CoachId::parse("coach_id", required(raw, "coach_id")?)
}

/// Query string of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSubscriptionsParams {
    #[serde(default)]
    pub facility_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A subscription as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubscriptionResponse {
    pub id: String,
    pub kind: PlanKind,
    pub facility_id: String,
    pub plan_type: String,
    pub description: String,
    pub price: i64,
    pub duration_hours: i32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub coach_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub count: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Subscription> for SubscriptionResponse {
    fn from(s: Subscription) -> Self {
        let kind = s.kind();
        let (coach_id, capacity, time, count) = match s.offering {
            Offering::Personal { count } => (None, None, None, Some(count)),
            Offering::Group {
                coach_id,
                capacity,
                time,
                count,
            } => (
                Some(coach_id.to_string()),
                Some(capacity),
                Some(time.to_rfc3339()),
                Some(count),
            ),
            Offering::Coach { coach_id } => (Some(coach_id.to_string()), None, None, None),
        };

        Self {
            id: s.id.to_string(),
            kind,
            facility_id: s.facility_id.to_string(),
            plan_type: s.plan_type,
            description: s.description,
            price: s.price,
            duration_hours: s.duration_hours,
            coach_id,
            capacity,
            time,
            count,
            created_at: s.created_at.to_rfc3339(),
            updated_at: s.updated_at.to_rfc3339(),
        }
    }
}

/// Body of the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionListResponse {
    pub subscriptions: Vec<SubscriptionResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SubscriptionId;

    fn request() -> SubscriptionRequest {
        SubscriptionRequest {
            facility_id: FacilityId::new().to_string(),
            plan_type: "spin".to_string(),
            description: String::new(),
            price: 1500,
            duration_hours: 1,
            coach_id: Some(CoachId::new().to_string()),
            capacity: Some(12),
            time: Some("2026-03-01T18:00:00Z".to_string()),
            count: Some(8),
        }
    }

    #[test]
    fn accepts_type_as_alias_for_plan_type() {
        let json = serde_json::json!({
            "facility_id": FacilityId::new().to_string(),
            "type": "monthly",
            "price": 4900,
            "duration_hours": 720,
            "count": 30
        });
        let req: SubscriptionRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.plan_type, "monthly");
        assert!(req.into_terms(PlanKind::Personal).is_ok());
    }

    #[test]
    fn group_terms_need_capacity() {
        let mut req = request();
        req.capacity = None;
        let err = req.into_terms(PlanKind::Group).unwrap_err();
        assert_eq!(err.field(), "capacity");
    }

    #[test]
    fn coach_terms_ignore_group_fields() {
        let terms = request().into_terms(PlanKind::Coach).unwrap();
        assert!(matches!(terms.offering, Offering::Coach { .. }));
    }

    #[test]
    fn malformed_facility_id_is_rejected() {
        let mut req = request();
        req.facility_id = "gym-7".to_string();
        let err = req.into_terms(PlanKind::Group).unwrap_err();
        assert_eq!(err.field(), "facility_id");
    }

    #[test]
    fn response_omits_fields_the_variant_lacks() {
        let terms = request().into_terms(PlanKind::Coach).unwrap();
        let mut subscription = Subscription::create(terms, Timestamp::now()).unwrap();
        subscription.id = SubscriptionId::new();

        let json = serde_json::to_value(SubscriptionResponse::from(subscription)).unwrap();
        assert_eq!(json["kind"], "coach");
        assert!(json.get("coach_id").is_some());
        assert!(json.get("capacity").is_none());
        assert!(json.get("count").is_none());
    }
}
