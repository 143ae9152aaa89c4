use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::events::core::input::EventInput;
use crate::modules::events::event_store::EventStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerParams {
    pub owner_id: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn status_of(error: &EventStoreError) -> StatusCode {
    match error {
        EventStoreError::InvalidId(_)
        | EventStoreError::InvalidOwnerId(_)
        | EventStoreError::InvalidStatus(_)
        | EventStoreError::IncompleteInput => StatusCode::BAD_REQUEST,
        EventStoreError::NotFound(_) => StatusCode::NOT_FOUND,
        EventStoreError::Forbidden { .. } => StatusCode::FORBIDDEN,
        EventStoreError::AlreadyEnded(_) => StatusCode::CONFLICT,
        EventStoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn respond<T: Serialize>(success: StatusCode, result: Result<T, EventStoreError>) -> Response {
    match result {
        Ok(value) => (success, Json(value)).into_response(),
        Err(error) => error_response(status_of(&error), error.to_string()),
    }
}

fn body_or_422(body: Result<Json<EventInput>, JsonRejection>) -> Result<EventInput, Response> {
    body.map(|Json(input)| input)
        .map_err(|rejection| error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()))
}

fn owner_or_400(params: Result<Query<OwnerParams>, QueryRejection>) -> Result<String, Response> {
    params
        .map(|Query(params)| params.owner_id)
        .map_err(|rejection| error_response(StatusCode::BAD_REQUEST, rejection.body_text()))
}

pub async fn list_all(State(state): State<AppState>) -> Response {
    respond(StatusCode::OK, state.events.get_all_events().await)
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    respond(StatusCode::OK, state.events.get_event_by_id(&id).await)
}

pub async fn list_by_owner(
    State(state): State<AppState>,
    Path(owner_id): Path<String>,
) -> Response {
    respond(StatusCode::OK, state.events.get_owners_events(&owner_id).await)
}

pub async fn list_by_status(State(state): State<AppState>, Path(status): Path<String>) -> Response {
    respond(StatusCode::OK, state.events.get_events_by_status(&status).await)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Response {
    let input = match body_or_422(body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    respond(StatusCode::CREATED, state.events.create_event(input).await)
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<OwnerParams>, QueryRejection>,
    body: Result<Json<EventInput>, JsonRejection>,
) -> Response {
    let owner_id = match owner_or_400(params) {
        Ok(owner_id) => owner_id,
        Err(response) => return response,
    };
    let input = match body_or_422(body) {
        Ok(input) => input,
        Err(response) => return response,
    };
    respond(
        StatusCode::OK,
        state.events.update_event(&id, &owner_id, input).await,
    )
}

pub async fn end(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<OwnerParams>, QueryRejection>,
) -> Response {
    let owner_id = match owner_or_400(params) {
        Ok(owner_id) => owner_id,
        Err(response) => return response,
    };
    respond(StatusCode::OK, state.events.end_event(&id, &owner_id).await)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    params: Result<Query<OwnerParams>, QueryRejection>,
) -> Response {
    let owner_id = match owner_or_400(params) {
        Ok(owner_id) => owner_id,
        Err(response) => return response,
    };
    respond(
        StatusCode::OK,
        state.events.delete_event(&id, &owner_id).await,
    )
}
