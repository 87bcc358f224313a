use crate::model::{
    id::{ReservationId, SpotId, UserId},
    reservation::{
        event::{CancelReservation, ReserveSpot},
        Reservation,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

/// The reservation workflow. Both mutating operations run inside a single
/// transaction that locks the spot row, so that for any one spot all
/// reserve/cancel attempts serialize and the availability flag always
/// mirrors the existence of an active reservation.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Books a spot for the requesting user. Fails with `EntityNotFound`
    /// when the spot does not exist, `ReservationConflict` when it is
    /// unavailable or already holds an active reservation, and
    /// `LockTimeout` when the row lock cannot be acquired in time.
    async fn reserve(&self, event: ReserveSpot) -> AppResult<Reservation>;

    /// Cancels the active reservation on a spot. Only the user who holds
    /// the reservation may cancel it; the row is kept with status
    /// `cancelled` as a historical record.
    async fn cancel(&self, event: CancelReservation) -> AppResult<ReservationId>;

    async fn find_active_by_spot_id(&self, spot_id: SpotId) -> AppResult<Option<Reservation>>;
    async fn find_history_by_spot_id(&self, spot_id: SpotId) -> AppResult<Vec<Reservation>>;
    async fn find_all_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Reservation>>;
}
