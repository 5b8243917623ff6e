//! Password hashing, validation, and generation endpoints.
//!
//! Every response carries the HTTP status and a message alongside its
//! payload field, including on failure, so clients can read a single shape.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::state::AppState;
use passwd_common::constants::messages;
use passwd_common::{
    EncryptRequest, EncryptResponse, GenerateResponse, GenerationRequest, PasswdError,
    ValidateRequest, ValidateResponse,
};

/// Hash a plaintext password with bcrypt
pub async fn encrypt(
    State(state): State<AppState>,
    payload: Result<Json<EncryptRequest>, JsonRejection>,
) -> (StatusCode, Json<EncryptResponse>) {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!(
                error = %rejection,
                "Error parsing json input while encrypting the password"
            );
            return encrypt_reply(
                StatusCode::BAD_REQUEST,
                messages::BAD_REQUEST_BODY.to_string(),
                String::new(),
            );
        }
    };

    let hasher = state.hasher.clone();
    let result = tokio::task::spawn_blocking(move || hasher.hash(&input.password))
        .await
        .unwrap_or_else(|e| Err(PasswdError::Internal(e.to_string())));

    state.stats.record_hash(result.is_ok());

    match result {
        Ok(digest) => {
            tracing::info!("password encrypted successfully");
            encrypt_reply(StatusCode::OK, messages::ENCRYPTED.to_string(), digest)
        }
        Err(err) => {
            tracing::error!(error = %err, "Error while encrypting the password");
            encrypt_reply(
                status_of(&err),
                messages::ENCRYPT_FAILED.to_string(),
                String::new(),
            )
        }
    }
}

/// Check a plaintext password against a stored bcrypt digest
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> (StatusCode, Json<ValidateResponse>) {
    let Json(input) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!(
                error = %rejection,
                "Error parsing json input while validating the password"
            );
            return validate_reply(
                StatusCode::BAD_REQUEST,
                messages::BAD_REQUEST_BODY.to_string(),
                false,
            );
        }
    };

    let hasher = state.hasher.clone();
    let result = tokio::task::spawn_blocking(move || {
        hasher.verify(&input.password, &input.stored_password)
    })
    .await;

    match result {
        Ok(is_valid) => {
            state.stats.record_verification();
            tracing::info!(is_valid, "password validated successfully");
            validate_reply(StatusCode::OK, messages::VALIDATED.to_string(), is_valid)
        }
        Err(e) => {
            let err = PasswdError::Internal(e.to_string());
            tracing::error!(error = %err, "Password validation task failed");
            validate_reply(status_of(&err), err.to_string(), false)
        }
    }
}

/// Generate a random password under the requested class constraints
pub async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerationRequest>, JsonRejection>,
) -> (StatusCode, Json<GenerateResponse>) {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            tracing::error!(
                error = %rejection,
                "Error parsing json input while generating random password"
            );
            return generate_reply(
                StatusCode::BAD_REQUEST,
                messages::BAD_REQUEST_BODY.to_string(),
                String::new(),
            );
        }
    };

    let result = state.generator.generate(&request);
    state.stats.record_generation(result.is_ok());

    match result {
        Ok(password) => {
            tracing::info!(
                length = request.length,
                uppercase = request.include_uppercase,
                digits = request.include_digits,
                symbols = request.include_symbols,
                "random password generated"
            );
            generate_reply(StatusCode::OK, messages::GENERATED.to_string(), password)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Error while generating random password");
            generate_reply(status_of(&err), err.to_string(), String::new())
        }
    }
}

fn status_of(err: &PasswdError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn encrypt_reply(
    status: StatusCode,
    message: String,
    encrypted_password: String,
) -> (StatusCode, Json<EncryptResponse>) {
    (
        status,
        Json(EncryptResponse {
            status: status.as_u16(),
            message,
            encrypted_password,
        }),
    )
}

fn validate_reply(
    status: StatusCode,
    message: String,
    is_valid: bool,
) -> (StatusCode, Json<ValidateResponse>) {
    (
        status,
        Json(ValidateResponse {
            status: status.as_u16(),
            message,
            is_valid,
        }),
    )
}

fn generate_reply(
    status: StatusCode,
    message: String,
    random_password: String,
) -> (StatusCode, Json<GenerateResponse>) {
    (
        status,
        Json(GenerateResponse {
            status: status.as_u16(),
            message,
            random_password,
        }),
    )
}
