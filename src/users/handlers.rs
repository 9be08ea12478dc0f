use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::state::AppState;
use crate::users::{
    dto::{Envelope, UserPayload, UserResponse},
    error::{ApiError, Op},
};

type ApiResult<T> = Result<(StatusCode, Json<Envelope<T>>), ApiError>;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/", post(create_user))
        .route("/users/list", get(list_users))
        .route(
            "/users/:user_id",
            get(get_user).patch(update_user).delete(delete_user),
        )
}

/// Binds the body as JSON whatever `Content-Type` says; only shape errors reject.
fn decode_payload(body: &[u8]) -> Result<UserPayload, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Validation(e.to_string()))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Bytes,
) -> ApiResult<UserResponse> {
    let payload = decode_payload(&payload)?;
    let user = state
        .users
        .create(payload.into())
        .await
        .map_err(ApiError::persistence(Op::Create))?;

    info!(user_id = %user.user_id, "user created");
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(
            StatusCode::CREATED.as_u16(),
            "user Account Created successfully.",
            user.into(),
        )),
    ))
}

#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<UserResponse>> {
    let users = state
        .users
        .list()
        .await
        .map_err(ApiError::persistence(Op::List))?;
    let items = users.into_iter().map(UserResponse::from).collect();
    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            StatusCode::OK.as_u16(),
            "userList fetched successfully.",
            items,
        )),
    ))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<UserResponse> {
    let user = state
        .users
        .get_by_user_id(&user_id)
        .await
        .map_err(ApiError::persistence(Op::Get))?;
    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            StatusCode::OK.as_u16(),
            "userDetails fetched successfully.",
            user.into(),
        )),
    ))
}

/// Echoes the patch back; an unknown `user_id` is a silent no-op.
#[instrument(skip(state, payload))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    payload: Bytes,
) -> ApiResult<UserPayload> {
    let patch = decode_payload(&payload)?;
    let patch = state
        .users
        .update_by_user_id(&user_id, patch)
        .await
        .map_err(ApiError::persistence(Op::Update))?;
    Ok((
        StatusCode::OK,
        Json(Envelope::with_data(
            StatusCode::OK.as_u16(),
            "user Account updated successfully.",
            patch,
        )),
    ))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<()> {
    state
        .users
        .delete_by_user_id(&user_id)
        .await
        .map_err(ApiError::persistence(Op::Delete))?;
    Ok((
        StatusCode::OK,
        Json(Envelope::message(
            StatusCode::OK.as_u16(),
            "user Account deleted successfully.",
        )),
    ))
}
