/// API path prefix for all media routes.
pub const API_PREFIX: &str = "/api/v0";

/// Slack added on top of the largest configured upload limit so that the
/// request-body layer passes multipart overhead through to the size
/// validator, which produces the JSON error envelope.
pub const BODY_LIMIT_SLACK_BYTES: usize = 1024 * 1024;
