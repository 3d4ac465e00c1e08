use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{product, shopping_list},
    state::AppState,
};

/// OpenAPI document covering every endpoint of the router.
#[derive(OpenApi)]
#[openapi(
    paths(
        product::create_product,
        product::get_products,
        product::update_product,
        product::delete_product,
        shopping_list::create_shopping_list,
        shopping_list::fetch_shopping_lists,
        shopping_list::update_shopping_list,
        shopping_list::delete_shopping_list,
        shopping_list::attach_product,
        shopping_list::remove_product,
    ),
    tags(
        (name = "product", description = "Product management"),
        (name = "shopping_list", description = "Shopping lists and their products")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/product",
            post(product::create_product).get(product::get_products),
        )
        .route(
            "/api/product/{id}",
            put(product::update_product).delete(product::delete_product),
        )
        .route("/api/shoppingList", post(shopping_list::create_shopping_list))
        .route(
            "/api/fetchShoppingList",
            get(shopping_list::fetch_shopping_lists),
        )
        .route(
            "/api/shoppingList/{id}",
            put(shopping_list::update_shopping_list).delete(shopping_list::delete_shopping_list),
        )
        .route(
            "/api/shoppingList/{id}/product/{productID}/attach",
            put(shopping_list::attach_product),
        )
        .route(
            "/api/shoppingList/{id}/product/{productID}/remove",
            put(shopping_list::remove_product),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
