//! Authentication service: registration and token issuance

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{Claims, RegisterRequest},
    repository::Repository,
};

/// Minimum accepted password length, enforced by the credential store.
const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new identity with the email as login name.
    ///
    /// Credential-store failures (weak password, duplicate email) are logged
    /// but answered with a generic failure; the reason is not surfaced.
    pub async fn register(&self, request: &RegisterRequest) -> AppResult<()> {
        if request.password.len() < MIN_PASSWORD_LEN {
            tracing::warn!("Registration rejected: password below minimum length");
            return Err(AppError::Internal("Registration failed".to_string()));
        }

        if self.repository.users.email_exists(&request.email).await? {
            tracing::warn!("Registration rejected: email already registered");
            return Err(AppError::Internal("Registration failed".to_string()));
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .repository
            .users
            .create(&request.email, &password_hash)
            .await?;

        tracing::info!(user_id = user.id, "Registered new identity");
        Ok(())
    }

    /// Verify credentials and issue a signed bearer token.
    ///
    /// The failure message is deliberately generic; submitted credentials
    /// never appear in the response.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let user = self
            .repository
            .users
            .get_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !verify_password(&user.password_hash, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let roles = self.repository.users.get_roles(user.id).await?;
        let claims = Claims::new(&user.email, user.id, roles, &self.config);

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        tracing::info!(user_id = user.id, jti = %claims.jti, "Issued token");
        Ok(token)
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored Argon2 hash
pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
