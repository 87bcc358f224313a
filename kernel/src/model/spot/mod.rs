use crate::model::{id::SpotId, user::SpotOwner};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Spot {
    pub spot_id: SpotId,
    pub location: String,
    pub is_available: bool,
    pub owner: SpotOwner,
    pub created_at: DateTime<Utc>,
}
