//! Role Repository
//!
//! In-memory, insertion-ordered role store. Every mutation that has to check
//! the name uniqueness rule runs its check and its write under the same
//! write lock.

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::role::entity::Role;
use crate::shared::error::{PlatformError, Result};

pub struct RoleRepository {
    roles: RwLock<IndexMap<String, Role>>,
}

impl RoleRepository {
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(IndexMap::new()),
        }
    }

    /// Build a repository holding one role per name, in the given order.
    pub fn with_seed<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let repo = Self::new();
        for name in names {
            repo.insert(Role::new(name))?;
        }
        Ok(repo)
    }

    pub fn find_all(&self) -> Vec<Role> {
        self.roles.read().values().cloned().collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Role> {
        self.roles.read().get(id).cloned()
    }

    pub fn find_by_name(&self, name: &str) -> Option<Role> {
        self.roles.read().values().find(|r| r.has_name(name)).cloned()
    }

    pub fn count(&self) -> usize {
        self.roles.read().len()
    }

    /// Append a role unless another role already uses its name.
    pub fn insert(&self, role: Role) -> Result<()> {
        let mut roles = self.roles.write();

        if name_taken(&roles, &role.name, None) {
            return Err(PlatformError::duplicate_name(role.name));
        }

        roles.insert(role.id.clone(), role);
        Ok(())
    }

    /// Rename a role in place. The role's own current name does not count
    /// as a collision.
    pub fn rename(&self, id: &str, name: &str) -> Result<Role> {
        let mut roles = self.roles.write();

        if !roles.contains_key(id) {
            return Err(PlatformError::not_found("role", id));
        }
        if name_taken(&roles, name, Some(id)) {
            return Err(PlatformError::duplicate_name(name));
        }

        let role = roles
            .get_mut(id)
            .ok_or_else(|| PlatformError::not_found("role", id))?;
        role.rename(name);
        Ok(role.clone())
    }

    /// Remove a role, keeping the order of the remaining ones.
    pub fn delete(&self, id: &str) -> Result<Role> {
        self.roles
            .write()
            .shift_remove(id)
            .ok_or_else(|| PlatformError::not_found("role", id))
    }
}

impl Default for RoleRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn name_taken(roles: &IndexMap<String, Role>, name: &str, exclude_id: Option<&str>) -> bool {
    roles
        .values()
        .filter(|r| Some(r.id.as_str()) != exclude_id)
        .any(|r| r.has_name(name))
}
