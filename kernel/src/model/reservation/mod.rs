use crate::model::id::{ReservationId, SpotId, UserId};
use chrono::{DateTime, Utc};
use strum::{AsRefStr, EnumString};

pub mod event;

/// Lifecycle of a reservation: `active` until cancelled, `cancelled` is
/// terminal. Cancellation never deletes the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

#[derive(Debug)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub spot_id: SpotId,
    pub reserved_by: UserId,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_representation() {
        assert_eq!(ReservationStatus::Active.as_ref(), "active");
        assert_eq!(ReservationStatus::Cancelled.as_ref(), "cancelled");
        assert_eq!(
            "active".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Active
        );
        assert_eq!(
            "cancelled".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert!("pending".parse::<ReservationStatus>().is_err());
    }
}
