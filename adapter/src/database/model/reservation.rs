use chrono::{DateTime, Utc};
use kernel::model::{
    id::{ReservationId, SpotId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use shared::error::AppError;
use sqlx::FromRow;
use std::str::FromStr;

#[derive(FromRow)]
pub struct ReservationRow {
    pub reservation_id: ReservationId,
    pub parking_spot_id: SpotId,
    pub user_id: UserId,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(value: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            reservation_id,
            parking_spot_id,
            user_id,
            status,
            created_at,
            cancelled_at,
        } = value;
        Ok(Reservation {
            reservation_id,
            spot_id: parking_spot_id,
            reserved_by: user_id,
            status: ReservationStatus::from_str(&status)
                .map_err(|e| AppError::ConversionEntityError(e.to_string()))?,
            created_at,
            cancelled_at,
        })
    }
}
