use actix_web::{HttpResponse, Responder, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::store::{MySqlStore, Store, StoreError};

#[derive(Deserialize, ToSchema)]
pub struct CreateUser {
    #[schema(example = "bob")]
    pub username: String,

    #[schema(example = false)]
    #[serde(default)]
    pub is_admin: bool,
}

/// Create a staff member. Usernames are unique.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 409, description = "Username already taken", body = Object, example = json!({
            "message": "Username already taken"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn create_user(
    store: web::Data<MySqlStore>,
    payload: web::Json<CreateUser>,
) -> actix_web::Result<impl Responder> {
    match store.insert_user(&payload.username, payload.is_admin).await {
        Ok(user) => Ok(HttpResponse::Created().json(user)),
        Err(StoreError::Duplicate) => Ok(HttpResponse::Conflict().json(serde_json::json!({
            "message": "Username already taken"
        }))),
        Err(e) => {
            tracing::error!(error = %e, username = %payload.username, "Create user failed");
            Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ))
        }
    }
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(
        ("id" = u64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = Object, example = json!({
            "message": "User not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Users"
)]
pub async fn get_user(
    store: web::Data<MySqlStore>,
    path: web::Path<u64>,
) -> actix_web::Result<impl Responder> {
    let id = path.into_inner();

    let user = store.user_by_id(id).await.map_err(|e| {
        tracing::error!(error = %e, id, "Fetch user failed");
        actix_web::error::ErrorInternalServerError("Internal Server Error")
    })?;

    match user {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "message": "User not found"
        }))),
    }
}
