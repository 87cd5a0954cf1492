//! Create Role Use Case

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::role::entity::Role;
use crate::role::repository::RoleRepository;
use crate::shared::error::{PlatformError, Result};

/// Command for creating a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoleCommand {
    pub name: String,
}

/// Use case for creating a new role.
pub struct CreateRoleUseCase {
    role_repo: Arc<RoleRepository>,
}

impl CreateRoleUseCase {
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    pub fn execute(&self, command: CreateRoleCommand) -> Result<Role> {
        if command.name.is_empty() {
            return Err(PlatformError::missing_parameter("The name cannot be empty."));
        }

        let role = Role::new(command.name);
        self.role_repo.insert(role.clone())?;

        info!(role_id = %role.id, name = %role.name, "Role created");
        Ok(role)
    }
}
