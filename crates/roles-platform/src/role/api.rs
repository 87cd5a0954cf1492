//! Roles API
//!
//! REST endpoints for role management. Every response, success or failure,
//! is a [`ResponseEnvelope`].

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::role::entity::Role;
use crate::role::operations::{
    CreateRoleCommand, CreateRoleUseCase, DeleteRoleCommand, DeleteRoleUseCase,
    UpdateRoleCommand, UpdateRoleUseCase,
};
use crate::role::repository::RoleRepository;
use crate::shared::api_common::{NoPayload, ResponseEnvelope};
use crate::shared::error::PlatformError;

/// Create/update role request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RoleDto {
    /// Role name; absent or null is treated as empty
    #[serde(default)]
    pub name: Option<String>,
}

impl RoleDto {
    fn into_name(self) -> String {
        self.name.unwrap_or_default()
    }
}

/// Role as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RoleViewModel {
    pub id: String,
    pub name: String,
}

impl From<Role> for RoleViewModel {
    fn from(r: Role) -> Self {
        Self { id: r.id, name: r.name }
    }
}

/// Roles service state
#[derive(Clone)]
pub struct RolesState {
    pub role_repo: Arc<RoleRepository>,
    pub create_use_case: Arc<CreateRoleUseCase>,
    pub update_use_case: Arc<UpdateRoleUseCase>,
    pub delete_use_case: Arc<DeleteRoleUseCase>,
}

impl RolesState {
    pub fn new(role_repo: Arc<RoleRepository>) -> Self {
        Self {
            create_use_case: Arc::new(CreateRoleUseCase::new(role_repo.clone())),
            update_use_case: Arc::new(UpdateRoleUseCase::new(role_repo.clone())),
            delete_use_case: Arc::new(DeleteRoleUseCase::new(role_repo.clone())),
            role_repo,
        }
    }
}

/// List roles
///
/// Returns every role in insertion order.
#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    operation_id = "getRoles",
    responses(
        (status = 200, description = "List of roles", body = ResponseEnvelope<Vec<RoleViewModel>>)
    )
)]
pub async fn list_roles(
    State(state): State<RolesState>,
) -> Json<ResponseEnvelope<Vec<RoleViewModel>>> {
    let roles: Vec<RoleViewModel> = state
        .role_repo
        .find_all()
        .into_iter()
        .map(RoleViewModel::from)
        .collect();

    Json(ResponseEnvelope::success(roles))
}

/// Get role by ID
#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "Roles",
    operation_id = "getRoleById",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role found", body = ResponseEnvelope<RoleViewModel>),
        (status = 400, description = "Missing or undecodable id", body = ResponseEnvelope<NoPayload>),
        (status = 404, description = "Role not found", body = ResponseEnvelope<NoPayload>)
    )
)]
pub async fn get_role(
    State(state): State<RolesState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResponseEnvelope<RoleViewModel>>, PlatformError> {
    let Path(id) = path?;
    if id.is_empty() {
        return Err(PlatformError::missing_parameter("The id parameter is required."));
    }

    let role = state
        .role_repo
        .find_by_id(&id)
        .ok_or_else(|| PlatformError::not_found("role", &id))?;

    Ok(Json(ResponseEnvelope::success(role.into())))
}

/// Create a new role
#[utoipa::path(
    post,
    path = "/roles",
    tag = "Roles",
    operation_id = "createRole",
    request_body = RoleDto,
    responses(
        (status = 201, description = "Role created", body = ResponseEnvelope<NoPayload>),
        (status = 400, description = "Empty or duplicate name", body = ResponseEnvelope<NoPayload>)
    )
)]
pub async fn create_role(
    State(state): State<RolesState>,
    body: Result<Json<RoleDto>, JsonRejection>,
) -> Result<(StatusCode, Json<ResponseEnvelope<NoPayload>>), PlatformError> {
    let Json(dto) = body?;

    state.create_use_case.execute(CreateRoleCommand { name: dto.into_name() })?;

    Ok((
        StatusCode::CREATED,
        Json(ResponseEnvelope::with_message("Role created successfully.")),
    ))
}

/// Update role
#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "Roles",
    operation_id = "updateRole",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    request_body = RoleDto,
    responses(
        (status = 200, description = "Role updated", body = ResponseEnvelope<NoPayload>),
        (status = 400, description = "Empty or duplicate name, or malformed body", body = ResponseEnvelope<NoPayload>),
        (status = 404, description = "Role not found", body = ResponseEnvelope<NoPayload>)
    )
)]
pub async fn update_role(
    State(state): State<RolesState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<RoleDto>, JsonRejection>,
) -> Result<Json<ResponseEnvelope<NoPayload>>, PlatformError> {
    let Path(id) = path?;
    // An unknown id wins over a malformed body
    state.update_use_case.ensure_exists(&id)?;
    let Json(dto) = body?;

    state.update_use_case.execute(UpdateRoleCommand {
        role_id: id,
        name: dto.into_name(),
    })?;

    Ok(Json(ResponseEnvelope::with_message("The role was updated successfully.")))
}

/// Delete role
#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "Roles",
    operation_id = "deleteRole",
    params(
        ("id" = String, Path, description = "Role ID")
    ),
    responses(
        (status = 200, description = "Role deleted", body = ResponseEnvelope<NoPayload>),
        (status = 400, description = "Undecodable id", body = ResponseEnvelope<NoPayload>),
        (status = 404, description = "Role not found", body = ResponseEnvelope<NoPayload>)
    )
)]
pub async fn delete_role(
    State(state): State<RolesState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ResponseEnvelope<NoPayload>>, PlatformError> {
    let Path(id) = path?;
    state.delete_use_case.execute(DeleteRoleCommand { role_id: id })?;

    Ok(Json(ResponseEnvelope::with_message("The role was deleted successfully.")))
}

/// Create roles router
pub fn roles_router(state: RolesState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(list_roles, create_role))
        .routes(routes!(get_role, update_role, delete_role))
        .with_state(state)
}
