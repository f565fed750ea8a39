pub mod middleware;
pub mod models;

pub use middleware::{auth_middleware, AuthState};
pub use models::{Claims, UserContext};
