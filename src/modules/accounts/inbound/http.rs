use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::accounts::core::commands::AccountCommand;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::primitives::{NO_STREAM, Version};
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateAccountBody {
    pub account_name: String,
}

#[derive(Serialize)]
pub struct CreateAccountResponse {
    pub account_id: String,
}

#[derive(Deserialize)]
pub struct MakeDepositBody {
    pub amount: i64,
}

#[derive(Serialize)]
pub struct AccountView {
    pub account_id: String,
    pub account_name: String,
    pub balance: i64,
    pub version: Version,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn create_account(
    State(state): State<AppState>,
    body: Result<Json<CreateAccountBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let account_id = format!("Account-{}", Uuid::now_v7());
    let command = AccountCommand::create_online_account(body.account_name);

    match state
        .accounts
        .handle_command_with_retry(&account_id, &command, state.retry_policy)
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(CreateAccountResponse { account_id }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn make_deposit(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    body: Result<Json<MakeDepositBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = AccountCommand::make_deposit(body.amount);

    match state
        .accounts
        .handle_command_with_retry(&account_id, &command, state.retry_policy)
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn get_account(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Response {
    match state.accounts.query(&account_id).await {
        Ok(current) if current.version == NO_STREAM => StatusCode::NOT_FOUND.into_response(),
        Ok(current) => Json(AccountView {
            account_id,
            account_name: current.state.account_name,
            balance: current.state.balance,
            version: current.version,
        })
        .into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Domain(_) => StatusCode::BAD_REQUEST,
        ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::EventStore(EventStoreError::Backend(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    tracing::warn!(%error, status = status.as_u16(), "account request failed");
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}
