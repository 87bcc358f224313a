pub mod event;

/// Opaque bearer token handed to clients at login and resolved back to a
/// user id by the token store.
pub struct AccessToken(pub String);
