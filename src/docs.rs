use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use storefront_auth::Identity;
use storefront_core::errors::{ErrorResponse, ValidationIssue};
use storefront_models::{LoginCredentials, LoginResponse, NewProductDto, NewUserDto, User};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::login_user,
        crate::modules::users::controller::get_current_user,
        crate::modules::users::controller::get_users,
    ),
    components(
        schemas(
            User,
            NewUserDto,
            LoginCredentials,
            LoginResponse,
            Identity,
            NewProductDto,
            ErrorResponse,
            ValidationIssue,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Users", description = "Registration, login and user listing")
    ),
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Storefront REST API with JWT bearer authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
