use crate::model::id::{SpotId, UserId};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateSpot {
    pub location: String,
    pub owned_by: UserId,
}

/// Owner edit of a spot. The availability flag is deliberately absent:
/// it is written only by the reservation workflow.
#[derive(Debug, new)]
pub struct UpdateSpotLocation {
    pub spot_id: SpotId,
    pub location: String,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct DeleteSpot {
    pub spot_id: SpotId,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct SpotListOptions {
    pub limit: i64,
    pub offset: i64,
}
