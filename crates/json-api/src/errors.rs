//! API Errors
//!
//! Every failure leaves the server as `{"message": "..."}`. Handlers return
//! [`ApiError`] directly; statuses raised by salvo itself (unknown routes,
//! unparsable bodies) are rewritten by [`catcher`].

use salvo::{
    catcher::Catcher,
    handler,
    http::{ResBody, StatusCode},
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::{FlowCtrl, Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    /// Human readable description of the failure
    pub message: String,
}

/// An error status paired with the message returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub(crate) fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Storage details never reach the caller.
    pub(crate) fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> StatusCode {
        self.status
    }

    #[cfg(test)]
    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(ErrorResponse {
            message: self.message,
        }));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::CONFLICT, "Conflict"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description)
                    .add_content("application/json", ErrorResponse::to_schema(components)),
            );
        }
    }
}

/// Catcher rendering salvo's own error statuses in the API error shape.
pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(render_uncaught)
}

#[handler]
async fn render_uncaught(res: &mut Response, ctrl: &mut FlowCtrl) {
    if !matches!(res.body, ResBody::None | ResBody::Error(_)) {
        return;
    }

    let status = res.status_code.unwrap_or(StatusCode::NOT_FOUND);

    let brief = match res.replace_body(ResBody::None) {
        ResBody::Error(error) if status.is_client_error() && !error.brief.is_empty() => {
            Some(error.brief)
        }
        _ => None,
    };

    let message = brief.unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("Unexpected Error")
            .to_owned()
    });

    ApiError::new(status, message).render(res);

    ctrl.skip_rest();
}
