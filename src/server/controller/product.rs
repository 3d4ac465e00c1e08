use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ResponseDto,
        product::{CreateProductDto, ProductDto},
    },
    server::{
        controller::param::{IdParam, UpdateProductQuery},
        error::AppError,
        model::product::{CreateProductParam, PatchProductParam, Product},
        service::product::ProductService,
        state::AppState,
        util::parse::{non_empty, parse_id, parse_optional_i64, parse_query_id},
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

const INVALID_PRODUCT_ID: &str = "Invalid Product Id";
const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Create a new product.
///
/// Every body field is required; an empty string or a zero price counts as missing.
///
/// # Returns
/// - `200 OK` - The created product
/// - `422 Unprocessable Entity` - Body is not valid JSON or a field is missing
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/api/product",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 200, description = "Product created successfully", body = ResponseDto<ProductDto>),
        (status = 422, description = "Malformed body or missing field", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<CreateProductDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateProductParam::from_dto(payload)?;

    let product = ProductService::new(&state.db).create(param).await?;

    Ok(ResponseDto::ok(
        "Product created successfully",
        product.into_dto(),
    ))
}

/// Get one product by id, or every product when the id is omitted or `0`.
///
/// An unknown id yields an empty array rather than an error; a non-numeric id is
/// read as `0`.
///
/// # Returns
/// - `200 OK` - Array of matching products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/product",
    tag = PRODUCT_TAG,
    params(
        ("id" = Option<i32>, Query, description = "Product ID, omit or 0 for all products")
    ),
    responses(
        (status = 200, description = "Product retrieved successfully", body = ResponseDto<Vec<ProductDto>>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    query: Result<Query<IdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let id = parse_query_id(query.id.as_deref());

    let products = ProductService::new(&state.db).get(id).await?;

    Ok(ResponseDto::ok(
        "Product retrieved successfully",
        products
            .into_iter()
            .map(Product::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Update a product from query parameters.
///
/// Supplied non-empty parameters overwrite the stored values, the others are kept.
///
/// # Returns
/// - `200 OK` - The product as written
/// - `404 Not Found` - Invalid id or no such product
/// - `422 Unprocessable Entity` - `price` is not an integer
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    put,
    path = "/api/product/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID"),
        ("name" = Option<String>, Query, description = "New name"),
        ("description" = Option<String>, Query, description = "New description"),
        ("price" = Option<i64>, Query, description = "New price")
    ),
    responses(
        (status = 200, description = "Product updated successfully", body = ResponseDto<ProductDto>),
        (status = 404, description = "Invalid product id or product not found", body = ResponseDto<String>),
        (status = 422, description = "Invalid parameter", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateProductQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(INVALID_PRODUCT_ID.to_string()))?;
    let Query(query) = query?;

    let patch = PatchProductParam {
        name: non_empty(query.name),
        description: non_empty(query.description),
        price: parse_optional_i64("price", query.price)?,
    };

    let product = ProductService::new(&state.db)
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    Ok(ResponseDto::ok(
        "Product updated successfully",
        product.into_dto(),
    ))
}

/// Delete a product.
///
/// The product is soft deleted; its links to shopping lists remain stored.
///
/// # Returns
/// - `200 OK` - Product deleted, `data` is null
/// - `404 Not Found` - Invalid id or no such product
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted successfully", body = ResponseDto<String>),
        (status = 404, description = "Invalid product id or product not found", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id).ok_or_else(|| AppError::NotFound(INVALID_PRODUCT_ID.to_string()))?;

    if !ProductService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(PRODUCT_NOT_FOUND.to_string()));
    }

    Ok(ResponseDto::<ProductDto>::ok_empty(
        "Product deleted successfully",
    ))
}
