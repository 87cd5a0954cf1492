//! Update Role Use Case

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::role::entity::Role;
use crate::role::repository::RoleRepository;
use crate::shared::error::{PlatformError, Result};

/// Command for renaming a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleCommand {
    pub role_id: String,
    pub name: String,
}

/// Use case for renaming a role.
pub struct UpdateRoleUseCase {
    role_repo: Arc<RoleRepository>,
}

impl UpdateRoleUseCase {
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    /// An empty or unknown id is reported as NotFound.
    pub fn ensure_exists(&self, role_id: &str) -> Result<()> {
        if role_id.is_empty() || self.role_repo.find_by_id(role_id).is_none() {
            return Err(PlatformError::not_found("role", role_id));
        }
        Ok(())
    }

    /// Checks run in order: id present, role exists, name present, name free.
    pub fn execute(&self, command: UpdateRoleCommand) -> Result<Role> {
        self.ensure_exists(&command.role_id)?;

        if command.name.is_empty() {
            return Err(PlatformError::missing_parameter("The name cannot be empty."));
        }

        // The repository re-checks existence under its write lock
        let role = self.role_repo.rename(&command.role_id, &command.name)?;

        info!(role_id = %role.id, name = %role.name, "Role updated");
        Ok(role)
    }
}
