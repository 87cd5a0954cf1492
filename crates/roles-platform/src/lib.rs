//! Roles Platform
//!
//! In-memory role registry exposed over a small REST API:
//! - `role` - entity, insertion-ordered store, use cases and endpoints
//! - `shared` - response envelope, error mapping, health checks, router assembly

pub mod role;
pub mod shared;

pub use shared::error::{PlatformError, Result};
pub use shared::api_common::{NoPayload, ResponseEnvelope};
pub use shared::app::{build_app, AppOptions, CorsPolicy};
pub use role::{Role, RoleRepository, RolesState};
