use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ReservationId, SpotId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatusName {
    Active,
    Cancelled,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Active => Self::Active,
            ReservationStatus::Cancelled => Self::Cancelled,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub parking_spot_id: SpotId,
    pub user_id: UserId,
    pub status: ReservationStatusName,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            spot_id,
            reserved_by,
            status,
            created_at,
            cancelled_at,
        } = value;
        Self {
            id: reservation_id,
            parking_spot_id: spot_id,
            user_id: reserved_by,
            status: status.into(),
            created_at,
            cancelled_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelReservationResponse {
    pub reservation_id: ReservationId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn response_mirrors_the_reservation_record() {
        let reservation = Reservation {
            reservation_id: ReservationId::new(),
            spot_id: SpotId::new(),
            reserved_by: UserId::new(),
            status: ReservationStatus::Active,
            created_at: Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap(),
            cancelled_at: None,
        };
        let reservation_id = reservation.reservation_id;
        let spot_id = reservation.spot_id;

        let res = ReservationResponse::from(reservation);
        assert_eq!(res.id, reservation_id);
        assert_eq!(res.parking_spot_id, spot_id);
        assert_eq!(res.status, ReservationStatusName::Active);
        assert!(res.cancelled_at.is_none());
    }
}
