//! User endpoints
//!
//! The four operations over the `users` collection: create, list/filter,
//! update-by-id, delete-by-filter.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::db::UserDoc;
use crate::http::error::ApiError;
use crate::http::extractors::{AppJson, AppQuery};
use crate::http::server::AppState;
use crate::models::{NewUser, UserFilter, UserPatch};

/// User response body. The id is a hex string, timestamps RFC 3339.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    // Returned as stored; this service does not hash passwords.
    pub password: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<UserDoc> for UserResponse {
    fn from(user: UserDoc) -> Self {
        Self {
            id: user.id.to_hex(),
            name: user.name,
            email: user.email,
            password: user.password,
            created_at: user.created_at.to_chrono().to_rfc3339(),
            updated_at: user.updated_at.to_chrono().to_rfc3339(),
        }
    }
}

/// Deletion summary for bulk deletes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSummary {
    pub deleted_count: u64,
}

/// POST /users - create a user
async fn create_user(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<NewUser>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate()?;

    let user = state.users.create(req).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /users - list users matching the (possibly empty) equality filter
async fn list_users(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<UserFilter>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.find(filter.into_document()).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// PATCH /users/{id} - replace the supplied fields on one user
///
/// An id that matches no user yields a 200 with a `null` body; the empty
/// result is the caller's not-found signal.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    AppJson(patch): AppJson<UserPatch>,
) -> Result<Json<Option<UserResponse>>, ApiError> {
    let id = ObjectId::parse_str(&id)
        .map_err(|_| ApiError::BadRequest(format!("invalid user id: '{id}'")))?;
    let fields = patch.into_set_document()?;

    let updated = state.users.update_by_id(id, fields).await?;
    Ok(Json(updated.map(UserResponse::from)))
}

/// DELETE /users - delete every user matching the filter
///
/// An empty filter deletes all users. Intentional; there is no confirmation
/// step.
async fn delete_users(
    State(state): State<Arc<AppState>>,
    AppQuery(filter): AppQuery<UserFilter>,
) -> Result<Json<DeleteSummary>, ApiError> {
    let deleted_count = state.users.delete_many(filter.into_document()).await?;
    Ok(Json(DeleteSummary { deleted_count }))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).delete(delete_users),
        )
        .route("/users/{id}", patch(update_user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    #[test]
    fn response_renders_id_and_timestamps_as_strings() {
        let doc = UserDoc {
            id: ObjectId::new(),
            name: "Bob".into(),
            email: "bob@x.com".into(),
            password: "pw".into(),
            created_at: DateTime::now(),
            updated_at: DateTime::now(),
        };
        let id = doc.id.to_hex();

        let response = UserResponse::from(doc);
        assert_eq!(response.id, id);
        assert_eq!(response.id.len(), 24);
        assert!(response.created_at.contains('T'));
    }

    #[test]
    fn delete_summary_serializes_camel_case() {
        let summary = DeleteSummary { deleted_count: 3 };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json, serde_json::json!({ "deletedCount": 3 }));
    }
}
