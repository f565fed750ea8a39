use crate::auth::models::{Claims, UserContext};
use crate::error::HttpAppError;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use medley_core::AppError;
use std::sync::Arc;

/// Verifier for identity-provider tokens, built once at startup.
#[derive(Clone)]
pub struct AuthState {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthState {
    pub fn new(token_secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(token_secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Resolve a bearer token to the identity provider's user id.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;
        if data.claims.sub.is_empty() {
            return Err(AppError::Unauthorized(
                "Token has no subject claim".to_string(),
            ));
        }
        Ok(data.claims)
    }
}

pub async fn auth_middleware(
    State(auth_state): State<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
    {
        Some(h) => h,
        None => {
            return HttpAppError(AppError::Unauthorized(
                "Missing authorization header".to_string(),
            ))
            .into_response();
        }
    };

    if !auth_header.starts_with("Bearer ") {
        return HttpAppError(AppError::Unauthorized(
            "Invalid authorization header format".to_string(),
        ))
        .into_response();
    }

    let token = &auth_header[7..]; // Remove "Bearer " prefix

    match auth_state.verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(UserContext {
                user_id: claims.sub,
            });
            next.run(request).await
        }
        Err(e) => HttpAppError(e).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-key-min-32-characters-long!!";

    fn token(sub: &str, exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: sub.to_string(),
            exp: now + exp_offset_secs,
            iat: now,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("encode token")
    }

    #[test]
    fn test_verify_resolves_subject() {
        let auth = AuthState::new(SECRET);
        let claims = auth.verify(&token("user_42", 3600)).unwrap();
        assert_eq!(claims.sub, "user_42");
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let auth = AuthState::new(SECRET);
        let err = auth.verify(&token("user_42", -3600)).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let auth = AuthState::new("another-secret-key-32-characters-min!!!!");
        assert!(auth.verify(&token("user_42", 3600)).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let auth = AuthState::new(SECRET);
        assert!(auth.verify("not-a-token").is_err());
    }
}
