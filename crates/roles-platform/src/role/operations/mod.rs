//! Role Operations
//!
//! Use cases for role mutations. Reads go straight to the repository.

pub mod create;
pub mod update;
pub mod delete;

pub use create::{CreateRoleCommand, CreateRoleUseCase};
pub use update::{UpdateRoleCommand, UpdateRoleUseCase};
pub use delete::{DeleteRoleCommand, DeleteRoleUseCase};
