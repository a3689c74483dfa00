//! User identity model, JWT claims and authentication DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{config::AuthConfig, error::AppError};

/// Persisted user identity. Created via registration only; never updated or
/// deleted through this API.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Hashed password (argon2 PHC string)
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// JWT claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's email
    pub sub: String,
    /// Unique token id
    pub jti: String,
    pub user_id: i32,
    pub roles: Vec<String>,
    pub iss: String,
    pub aud: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Assemble the claim set for a verified identity. Issuer and audience
    /// carry the same configured value; expiry is `iat` plus the configured
    /// window.
    pub fn new(email: &str, user_id: i32, roles: Vec<String>, config: &AuthConfig) -> Self {
        let now = Utc::now().timestamp();
        Claims {
            sub: email.to_string(),
            jti: Uuid::new_v4().to_string(),
            user_id,
            roles,
            iss: config.jwt_issuer.clone(),
            aud: config.jwt_audience.clone(),
            exp: now + (config.jwt_expiration_hours as i64 * 3600),
            iat: now,
        }
    }

    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and validate a JWT token against the signing key, issuer and
    /// audience it was issued with.
    pub fn from_token(token: &str, config: &AuthConfig) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let mut validation = Validation::default();
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Require the admin role
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.has_role("admin") {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Administrator role required".to_string(),
            ))
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

/// Registration response
#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub succeeded: bool,
}

/// Login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub password: String,
}

/// Login response carrying the issued bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
}

/// Decoded identity of the calling user
#[derive(Debug, Serialize, ToSchema)]
pub struct UserInfo {
    pub user_id: i32,
    pub email: String,
    pub roles: Vec<String>,
}
