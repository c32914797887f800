//! HS256 access tokens.
//!
//! Only access tokens are issued; a client whose token expired logs in
//! again.

use chrono::Utc;
use go_core::types::DbId;
use jsonwebtoken::errors::Error as JwtError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;

/// Payload of an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// `users.id` of the holder.
    pub sub: DbId,
    /// `admin`, `editor` or `viewer`.
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    /// Random token id, logged on login.
    pub jti: String,
}

impl Claims {
    fn issue(user_id: DbId, role: &str, lifetime_mins: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: user_id,
            role: role.to_owned(),
            exp: iat + lifetime_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared HMAC secret.
    pub secret: String,
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60).
    ///
    /// # Panics
    ///
    /// On a missing or empty secret or an unparseable expiry.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a whole number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }

    /// Token lifetime in seconds, as reported by the login response.
    pub fn expires_in_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// Sign a new access token for `user_id` with `role`.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, JwtError> {
    let claims = Claims::issue(user_id, role, config.access_token_expiry_mins);
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify signature and expiry and return the claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, JwtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 60,
        }
    }

    #[test]
    fn issued_token_carries_user_and_role() {
        let config = config("go-test-secret-long-enough-for-hmac");
        let token = generate_access_token(42, "editor", &config).unwrap();

        let claims = validate_token(&token, &config).unwrap();
        assert_eq!((claims.sub, claims.role.as_str()), (42, "editor"));
        assert_eq!(claims.exp - claims.iat, config.expires_in_secs());
        assert!(Uuid::parse_str(&claims.jti).is_ok());
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = config("go-test-secret-long-enough-for-hmac");
        // Five minutes past expiry, beyond the default leeway.
        let claims = Claims::issue(1, "viewer", -5);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn token_from_another_secret_is_rejected() {
        let token = generate_access_token(1, "admin", &config("secret-one")).unwrap();
        assert!(validate_token(&token, &config("secret-two")).is_err());
    }
}
