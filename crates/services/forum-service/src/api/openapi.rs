//! OpenAPI documentation configuration.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use super::handlers::{admin_handler, answer_handler, profile_handler};
use domain::{AnswerDetails, UserProfile};

/// OpenAPI documentation for the forum service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Service",
        version = "0.1.0",
        description = "Questions, answers and user administration for the forum"
    ),
    paths(
        answer_handler::create_answer,
        answer_handler::edit_answer,
        answer_handler::delete_answer,
        answer_handler::list_answers,
        admin_handler::delete_user,
        profile_handler::get_profile,
    ),
    components(
        schemas(
            AnswerDetails,
            UserProfile,
            answer_handler::AnswerRequest,
            answer_handler::AnswerEditRequest,
            answer_handler::AnswerResponse,
            admin_handler::UserDeleteResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Answers", description = "Post, edit, delete and list answers"),
        (name = "Admin", description = "Administrative user management"),
        (name = "Profiles", description = "User details")
    )
)]
pub struct ApiDoc;

/// Security scheme for the access token header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "access_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "authorization",
                    "Access token issued at sign in, optionally prefixed with `Bearer `",
                ))),
            );
        }
    }
}
