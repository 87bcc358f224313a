use crate::model::id::{SpotId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct ReserveSpot {
    pub spot_id: SpotId,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct CancelReservation {
    pub spot_id: SpotId,
    pub requested_user: UserId,
}
