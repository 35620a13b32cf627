use crate::{entities::prelude::UserModel, enums::common::Role};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserModel,
    pub token: String,
    /// Expiry as a unix timestamp in seconds.
    pub expires: i64,
}

/// Access token payload.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub jti: String,
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub nbf: i64,
    pub iat: i64,
    pub user_id: String,
    pub role: Role,
}

impl Claims {
    pub fn new(iss: String, user_id: String, role: Role, access_token_expire: i64) -> Self {
        let jti = Uuid::new_v4().into();
        let now = Utc::now();
        Self {
            jti,
            sub: user_id.clone(),
            iss,
            exp: now.timestamp() + access_token_expire,
            nbf: now.timestamp(),
            iat: now.timestamp(),
            user_id,
            role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
