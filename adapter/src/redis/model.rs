use crate::redis::{RedisKey, RedisValue};
use derive_new::new;
use kernel::model::{auth::AccessToken, id::UserId};
use shared::error::AppError;
use std::str::FromStr;
use uuid::Uuid;

pub struct AuthorizationKey(String);

#[derive(new)]
pub struct AuthorizedUserId(UserId);

impl AuthorizationKey {
    /// Mints a fresh opaque token.
    pub fn gen() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl AuthorizedUserId {
    pub fn into_inner(self) -> UserId {
        self.0
    }
}

impl From<AuthorizationKey> for AccessToken {
    fn from(key: AuthorizationKey) -> Self {
        AccessToken(key.0)
    }
}

impl From<AccessToken> for AuthorizationKey {
    fn from(token: AccessToken) -> Self {
        Self(token.0)
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(token: &AccessToken) -> Self {
        Self(token.0.to_string())
    }
}

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl RedisValue for AuthorizedUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ok(Self(UserId::from_str(&value)?))
    }
}
