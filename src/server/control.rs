use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::action::SystemAction;
use crate::executor;

#[derive(Debug, Serialize, ToSchema)]
pub struct ControlResponse {
    pub success: bool,
}

/// Execute a previously resolved action the frontend submits back.
///
/// Business failures never surface as non-2xx here; the body carries the
/// verdict. Malformed or unknown descriptors and actions the OS rejected at
/// spawn time all report `success: false`.
#[utoipa::path(
    post,
    path = "/system-control",
    tag = "system",
    request_body = SystemAction,
    responses(
        (status = 200, body = ControlResponse),
    )
)]
pub(crate) async fn system_control(Json(payload): Json<serde_json::Value>) -> Json<ControlResponse> {
    let action: SystemAction = match serde_json::from_value(payload) {
        Ok(action) => action,
        Err(error) => {
            tracing::warn!("unrecognized control request: {error}");
            return Json(ControlResponse { success: false });
        }
    };

    match executor::execute(&action) {
        Ok(()) => Json(ControlResponse { success: true }),
        Err(error) => {
            tracing::warn!("action was not submitted: {error}");
            Json(ControlResponse { success: false })
        }
    }
}
