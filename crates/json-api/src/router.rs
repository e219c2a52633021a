//! App Router

use salvo::Router;

use crate::{brands, categories, dashboard, expenses, models, products, users};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("brands")
                .get(brands::index::handler)
                .post(brands::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(brands::get::handler)
                        .put(brands::update::handler)
                        .delete(brands::delete::handler),
                ),
        )
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .post(categories::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(categories::get::handler)
                        .put(categories::update::handler)
                        .delete(categories::delete::handler),
                ),
        )
        .push(
            Router::with_path("models")
                .get(models::index::handler)
                .post(models::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(models::get::handler)
                        .put(models::update::handler)
                        .delete(models::delete::handler),
                ),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(Router::with_path("dashboard").get(dashboard::get::handler))
        .push(Router::with_path("expenses").get(expenses::index::handler))
        .push(Router::with_path("users").get(users::index::handler))
}

#[cfg(test)]
mod tests {
    use salvo::oapi::OpenApi;
    use testresult::TestResult;

    use super::app_router;

    #[test]
    fn openapi_document_lists_every_collection() -> TestResult {
        let document = OpenApi::new("Inventory API", "test")
            .merge_router(&app_router())
            .to_json()?;

        for path in [
            "/brands",
            "/brands/{id}",
            "/categories/{id}",
            "/models/{id}",
            "/products/{id}",
            "/dashboard",
            "/expenses",
            "/users",
        ] {
            assert!(
                document.contains(&format!("\"{path}\"")),
                "missing {path} in OpenAPI document"
            );
        }

        Ok(())
    }

    #[test]
    fn list_queries_use_camel_case_parameters() -> TestResult {
        let document = OpenApi::new("Inventory API", "test")
            .merge_router(&app_router())
            .to_json()?;

        assert!(document.contains("\"brandId\""), "expected brandId parameter");
        assert!(document.contains("\"modelId\""), "expected modelId parameter");

        Ok(())
    }
}
