//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::http::handlers::user_handler;
use domain::User;

/// OpenAPI documentation for the user service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Service",
        version = "0.1.0",
        description = "User lookup by name and license plate",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::get_user,
        user_handler::get_user_by_license_plate,
    ),
    components(schemas(User)),
    tags(
        (name = "Users", description = "User lookup operations")
    )
)]
pub struct ApiDoc;
