// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use super::PageResult;

/// Envelope for single-object responses.
///
/// `data` is always present on the wire (`null` when there is nothing to
/// return) so clients can rely on `{success, data, msg}`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: Option<T>,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T, msg: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            msg: msg.to_string(),
            error: None,
        })
    }

    pub fn created(data: T, msg: &str) -> HttpResponse {
        HttpResponse::Created().json(ApiResponse {
            success: true,
            data: Some(data),
            msg: msg.to_string(),
            error: None,
        })
    }

    /// 400 carrying structured field errors in `data`.
    pub fn validation_failed(errors: T, msg: &str) -> HttpResponse {
        HttpResponse::BadRequest().json(ApiResponse {
            success: false,
            data: Some(errors),
            msg: msg.to_string(),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    /// 200 with `data: null`.
    pub fn empty(msg: &str) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse::<()> {
            success: true,
            data: None,
            msg: msg.to_string(),
            error: None,
        })
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            msg: message.to_string(),
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}

/// Envelope for paginated listings: `{success, data, msg, total, page, per_page, user?}`.
#[derive(Serialize)]
pub struct PaginatedResponse<T: Serialize, U: Serialize = ()> {
    pub success: bool,
    pub data: Vec<T>,
    pub msg: String,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<U>,
}

impl<T: Serialize> PaginatedResponse<T, ()> {
    pub fn page(result: PageResult<T>, msg: &str) -> HttpResponse {
        HttpResponse::Ok().json(PaginatedResponse::<T, ()> {
            success: true,
            data: result.items,
            msg: msg.to_string(),
            total: result.total,
            page: result.page,
            per_page: result.per_page,
            user: None,
        })
    }
}

impl<T: Serialize, U: Serialize> PaginatedResponse<T, U> {
    pub fn page_with_user(result: PageResult<T>, msg: &str, user: U) -> HttpResponse {
        HttpResponse::Ok().json(PaginatedResponse {
            success: true,
            data: result.items,
            msg: msg.to_string(),
            total: result.total,
            page: result.page,
            per_page: result.per_page,
            user: Some(user),
        })
    }
}
