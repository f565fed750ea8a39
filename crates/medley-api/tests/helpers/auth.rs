use jsonwebtoken::{encode, EncodingKey, Header};
use medley_api::auth::models::Claims;

/// Mint a bearer token for `user_id`, signed with the test secret.
pub fn token_for(user_id: &str) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + 3600,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(super::TEST_TOKEN_SECRET.as_bytes()),
    )
    .expect("Failed to encode test token")
}

/// Authorization header value for `user_id`.
pub fn bearer_for(user_id: &str) -> String {
    format!("Bearer {}", token_for(user_id))
}
