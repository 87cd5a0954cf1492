//! Role Aggregate

pub mod entity;
pub mod repository;
pub mod api;
pub mod operations;

// Re-export main types
pub use entity::Role;
pub use repository::RoleRepository;
pub use api::{RolesState, RoleDto, RoleViewModel, roles_router};
