//! Subscription aggregate.
//!
//! A subscription is an offering a gym sells. The three variants share most
//! fields; what differs lives in [`Offering`].

use crate::domain::booking::CapacityWindow;
use crate::domain::foundation::{
    CoachId, FacilityId, PlanKind, SubscriptionId, Timestamp, ValidationError,
};

/// Variant-specific terms of an offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offering {
    Personal {
        /// Number of visits included.
        count: i32,
    },
    Group {
        coach_id: CoachId,
        /// Maximum number of concurrently active granted bookings.
        capacity: i32,
        /// Canonical start of the class window.
        time: Timestamp,
        count: i32,
    },
    Coach {
        coach_id: CoachId,
    },
}

impl Offering {
    pub fn kind(&self) -> PlanKind {
        match self {
            Offering::Personal { .. } => PlanKind::Personal,
            Offering::Group { .. } => PlanKind::Group,
            Offering::Coach { .. } => PlanKind::Coach,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match self {
            Offering::Personal { count } => non_negative("count", i64::from(*count)),
            Offering::Group {
                capacity, count, ..
            } => {
                if *capacity < 1 {
                    return Err(ValidationError::below_minimum(
                        "capacity",
                        1,
                        i64::from(*capacity),
                    ));
                }
                non_negative("count", i64::from(*count))
            }
            Offering::Coach { .. } => Ok(()),
        }
    }
}

/// Caller-supplied fields for creating or replacing a subscription.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionTerms {
    pub facility_id: FacilityId,
    pub plan_type: String,
    pub description: String,
    /// Price in minor currency units.
    pub price: i64,
    pub duration_hours: i32,
    pub offering: Offering,
}

impl SubscriptionTerms {
    /// Checks field-level constraints shared by every variant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.plan_type.trim().is_empty() {
            return Err(ValidationError::empty_field("type"));
        }
        non_negative("price", self.price)?;
        if self.duration_hours < 1 {
            return Err(ValidationError::below_minimum(
                "duration",
                1,
                i64::from(self.duration_hours),
            ));
        }
        self.offering.validate()
    }
}

/// A persisted subscription offering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub facility_id: FacilityId,
    pub plan_type: String,
    pub description: String,
    pub price: i64,
    pub duration_hours: i32,
    pub offering: Offering,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Subscription {
    /// Creates a new subscription with a fresh id.
    pub fn create(terms: SubscriptionTerms, now: Timestamp) -> Result<Self, ValidationError> {
        terms.validate()?;
        Ok(Self {
            id: SubscriptionId::new(),
            facility_id: terms.facility_id,
            plan_type: terms.plan_type,
            description: terms.description,
            price: terms.price,
            duration_hours: terms.duration_hours,
            offering: terms.offering,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replaces every mutable field, keeping id and creation time.
    ///
    /// The variant cannot change: a group offering stays a group offering.
    pub fn replace_terms(
        &mut self,
        terms: SubscriptionTerms,
        now: Timestamp,
    ) -> Result<(), ValidationError> {
        terms.validate()?;
        if terms.offering.kind() != self.kind() {
            return Err(ValidationError::invalid_format(
                "kind",
                format!(
                    "cannot turn a {} subscription into a {} one",
                    self.kind(),
                    terms.offering.kind()
                ),
            ));
        }
        self.facility_id = terms.facility_id;
        self.plan_type = terms.plan_type;
        self.description = terms.description;
        self.price = terms.price;
        self.duration_hours = terms.duration_hours;
        self.offering = terms.offering;
        self.updated_at = now;
        Ok(())
    }

    pub fn kind(&self) -> PlanKind {
        self.offering.kind()
    }

    /// Capacity rule for group offerings; `None` for the other variants.
    pub fn capacity_window(&self) -> Option<CapacityWindow> {
        match self.offering {
            Offering::Group { capacity, .. } => {
                Some(CapacityWindow::new(capacity, self.duration_hours))
            }
            _ => None,
        }
    }
}

fn non_negative(field: &str, value: i64) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::below_minimum(field, 0, value));
    }
    Ok(())
}
