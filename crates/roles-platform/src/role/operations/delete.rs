//! Delete Role Use Case

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::role::entity::Role;
use crate::role::repository::RoleRepository;
use crate::shared::error::{PlatformError, Result};

/// Command for deleting a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRoleCommand {
    pub role_id: String,
}

/// Use case for deleting a role.
pub struct DeleteRoleUseCase {
    role_repo: Arc<RoleRepository>,
}

impl DeleteRoleUseCase {
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self { role_repo }
    }

    pub fn execute(&self, command: DeleteRoleCommand) -> Result<Role> {
        if command.role_id.is_empty() {
            return Err(PlatformError::not_found("role", ""));
        }

        let role = self.role_repo.delete(&command.role_id)?;

        info!(role_id = %role.id, name = %role.name, "Role deleted");
        Ok(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> (Arc<RoleRepository>, DeleteRoleUseCase) {
        let repo = Arc::new(RoleRepository::with_seed(["Admin", "Root", "Client"]).unwrap());
        (repo.clone(), DeleteRoleUseCase::new(repo))
    }

    #[test]
    fn test_delete_removes_only_target() {
        let (repo, uc) = use_case();
        let admin = repo.find_by_name("Admin").unwrap();

        uc.execute(DeleteRoleCommand { role_id: admin.id.clone() }).unwrap();

        let remaining: Vec<String> = repo.find_all().into_iter().map(|r| r.name).collect();
        assert_eq!(remaining, vec!["Root", "Client"]);
    }

    #[test]
    fn test_delete_twice() {
        let (repo, uc) = use_case();
        let admin = repo.find_by_name("Admin").unwrap();

        assert!(uc.execute(DeleteRoleCommand { role_id: admin.id.clone() }).is_ok());
        let err = uc.execute(DeleteRoleCommand { role_id: admin.id }).unwrap_err();

        assert!(matches!(err, PlatformError::NotFound { .. }));
        assert_eq!(repo.count(), 2);
    }

    #[test]
    fn test_delete_empty_id() {
        let (repo, uc) = use_case();
        let err = uc.execute(DeleteRoleCommand { role_id: String::new() }).unwrap_err();
        assert!(matches!(err, PlatformError::NotFound { .. }));
        assert_eq!(repo.count(), 3);
    }
}
