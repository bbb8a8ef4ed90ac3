use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::models::auth::Claims;
use estate_database::models::AdminUser;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Failed to issue token")]
    TokenCreation,
}

pub struct AuthService {
    jwt_secret: String,
    expiry_hours: i64,
}

impl AuthService {
    pub fn new(jwt_secret: String, expiry_hours: i64) -> Self {
        Self {
            jwt_secret,
            expiry_hours,
        }
    }

    pub fn issue_token(&self, user: &AdminUser) -> Result<(String, DateTime<Utc>), AuthError> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiry_hours);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|_| AuthError::TokenCreation)?;

        Ok((token, expires_at))
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn admin() -> AdminUser {
        AdminUser {
            id: Uuid::new_v4(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            name: "Admin".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn issued_token_round_trips() {
        let service = AuthService::new("test-secret".to_string(), 24);
        let user = admin();
        let (token, expires_at) = service.issue_token(&user).unwrap();
        assert!(expires_at > Utc::now());

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let issuer = AuthService::new("secret-a".to_string(), 24);
        let verifier = AuthService::new("secret-b".to_string(), 24);
        let (token, _) = issuer.issue_token(&admin()).unwrap();
        assert!(matches!(
            verifier.verify_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = AuthService::new("test-secret".to_string(), -2);
        let (token, _) = service.issue_token(&admin()).unwrap();
        assert!(matches!(
            service.verify_token(&token),
            Err(AuthError::TokenExpired)
        ));
    }
}
