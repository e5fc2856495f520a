use utoipa::OpenApi;

use crate::action::{Direction, SystemAction};
use crate::server::chat::{ChatRequest, ChatResponse};
use crate::server::control::ControlResponse;
use crate::server::error::{ApiErrorBody, ApiErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aura API",
        version = "0.1.0",
        description = "Desktop assistant backend"
    ),
    paths(
        crate::server::chat::chat,
        crate::server::control::system_control,
    ),
    components(schemas(
        ChatRequest,
        ChatResponse,
        ControlResponse,
        SystemAction,
        Direction,
        ApiErrorResponse,
        ApiErrorBody,
    )),
    tags(
        (name = "chat", description = "Conversation with the hosted model"),
        (name = "system", description = "System action execution"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_serializes_and_lists_the_routes() {
        let json = ApiDoc::openapi().to_pretty_json().expect("serialize spec");
        assert!(json.contains("/chat"));
        assert!(json.contains("/system-control"));
    }
}
