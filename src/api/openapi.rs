//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library API",
        version = "1.0.0",
        description = "A simple Library API",
        contact(name = "API Support", url = "http://www.example.com/support", email = "support@example.com")
    ),
    servers(
        (url = "/", description = "Library API")
    ),
    paths(
        // Health
        health::health_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookInput,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "About books"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router, the interactive UI lives under `/api`
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_book_routes() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert_eq!(doc["info"]["title"], "Library API");
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/books"));
        assert!(paths.contains_key("/books/{id}"));
        assert!(paths.contains_key("/health"));
        assert!(doc["paths"]["/books/{id}"]["delete"].is_object());
        assert!(doc["components"]["schemas"]["Book"].is_object());
    }
}
