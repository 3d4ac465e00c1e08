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
        shopping_list::{CreateShoppingListDto, ShoppingListDto},
    },
    server::{
        controller::param::{IdParam, UpdateShoppingListQuery},
        error::AppError,
        model::shopping_list::{CreateShoppingListParam, PatchShoppingListParam, ShoppingList},
        service::shopping_list::ShoppingListService,
        state::AppState,
        util::parse::{non_empty, parse_id, parse_query_id},
    },
};

/// Tag for grouping shopping list endpoints in OpenAPI documentation
pub static SHOPPING_LIST_TAG: &str = "shopping_list";

const INVALID_SHOPPING_LIST_ID: &str = "Invalid Shopping List Id";
const INVALID_ASSOCIATION_IDS: &str = "Invalid Shopping List Id or Product Id";
const SHOPPING_LIST_NOT_FOUND: &str = "Shopping List not found";

/// Create a new shopping list.
///
/// # Returns
/// - `200 OK` - The created shopping list, without products
/// - `422 Unprocessable Entity` - Body is not valid JSON or a field is missing
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    post,
    path = "/api/shoppingList",
    tag = SHOPPING_LIST_TAG,
    request_body = CreateShoppingListDto,
    responses(
        (status = 200, description = "Added Shopping List successfully", body = ResponseDto<ShoppingListDto>),
        (status = 422, description = "Malformed body or missing field", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn create_shopping_list(
    State(state): State<AppState>,
    payload: Result<Json<CreateShoppingListDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let param = CreateShoppingListParam::from_dto(payload)?;

    let list = ShoppingListService::new(&state.db).create(param).await?;

    Ok(ResponseDto::ok(
        "Added Shopping List successfully",
        list.into_dto(),
    ))
}

/// Get one shopping list by id, or every list when the id is omitted or `0`, each with
/// its products.
///
/// A non-numeric id is read as `0`.
///
/// # Returns
/// - `200 OK` - Array of matching lists with their products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/fetchShoppingList",
    tag = SHOPPING_LIST_TAG,
    params(
        ("id" = Option<i32>, Query, description = "Shopping list ID, omit or 0 for all lists")
    ),
    responses(
        (status = 200, description = "Shopping list Loaded successfully", body = ResponseDto<Vec<ShoppingListDto>>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn fetch_shopping_lists(
    State(state): State<AppState>,
    query: Result<Query<IdParam>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let id = parse_query_id(query.id.as_deref());

    let lists = ShoppingListService::new(&state.db).fetch(id).await?;

    Ok(ResponseDto::ok(
        "Shopping list Loaded successfully",
        lists
            .into_iter()
            .map(ShoppingList::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Update a shopping list from query parameters.
///
/// # Returns
/// - `200 OK` - The list as written, `Products` empty
/// - `404 Not Found` - Invalid id or no such list
/// - `500 Internal Server Error` - Database error, including a duplicate name
#[utoipa::path(
    put,
    path = "/api/shoppingList/{id}",
    tag = SHOPPING_LIST_TAG,
    params(
        ("id" = i32, Path, description = "Shopping list ID"),
        ("name" = Option<String>, Query, description = "New name"),
        ("description" = Option<String>, Query, description = "New description")
    ),
    responses(
        (status = 200, description = "Successfully updated shopping list", body = ResponseDto<ShoppingListDto>),
        (status = 404, description = "Invalid shopping list id or list not found", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn update_shopping_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
    query: Result<Query<UpdateShoppingListQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id =
        parse_id(&id).ok_or_else(|| AppError::NotFound(INVALID_SHOPPING_LIST_ID.to_string()))?;
    let Query(query) = query?;

    let patch = PatchShoppingListParam {
        name: non_empty(query.name),
        description: non_empty(query.description),
    };

    let list = ShoppingListService::new(&state.db)
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(SHOPPING_LIST_NOT_FOUND.to_string()))?;

    Ok(ResponseDto::ok(
        "Successfully updated shopping list",
        list.into_dto(),
    ))
}

/// Delete a shopping list.
///
/// The list is soft deleted; its product links remain stored.
///
/// # Returns
/// - `200 OK` - List deleted, `data` is null
/// - `404 Not Found` - Invalid id or no such list
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/shoppingList/{id}",
    tag = SHOPPING_LIST_TAG,
    params(
        ("id" = i32, Path, description = "Shopping list ID")
    ),
    responses(
        (status = 200, description = "Shopping List deleted successfully", body = ResponseDto<String>),
        (status = 404, description = "Invalid shopping list id or list not found", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn delete_shopping_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id =
        parse_id(&id).ok_or_else(|| AppError::NotFound(INVALID_SHOPPING_LIST_ID.to_string()))?;

    if !ShoppingListService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound(SHOPPING_LIST_NOT_FOUND.to_string()));
    }

    Ok(ResponseDto::<ShoppingListDto>::ok_empty(
        "Shopping List deleted successfully",
    ))
}

/// Link a product to a shopping list.
///
/// Ids are not looked up first; ids without a stored row are rejected by the
/// database. Linking an already linked product is a no-op.
///
/// # Returns
/// - `200 OK` - Product linked, `data` is null
/// - `404 Not Found` - Either id is invalid
/// - `500 Internal Server Error` - Database error, including an unknown id
#[utoipa::path(
    put,
    path = "/api/shoppingList/{id}/product/{productID}/attach",
    tag = SHOPPING_LIST_TAG,
    params(
        ("id" = i32, Path, description = "Shopping list ID"),
        ("productID" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully added to shopping list", body = ResponseDto<String>),
        (status = 404, description = "Invalid shopping list id or product id", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn attach_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (id, product_id) = parse_association_ids(&id, &product_id)?;

    ShoppingListService::new(&state.db)
        .attach_product(id, product_id)
        .await?;

    Ok(ResponseDto::<ShoppingListDto>::ok_empty(
        "Successfully added to shopping list",
    ))
}

/// Unlink a product from a shopping list.
///
/// Unlinking a product that is not linked succeeds without changes.
///
/// # Returns
/// - `200 OK` - Product unlinked, `data` is null
/// - `404 Not Found` - Either id is invalid
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/shoppingList/{id}/product/{productID}/remove",
    tag = SHOPPING_LIST_TAG,
    params(
        ("id" = i32, Path, description = "Shopping list ID"),
        ("productID" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Successfully removed from shopping list", body = ResponseDto<String>),
        (status = 404, description = "Invalid shopping list id or product id", body = ResponseDto<String>),
        (status = 500, description = "Database operation failed", body = ResponseDto<String>)
    ),
)]
pub async fn remove_product(
    State(state): State<AppState>,
    Path((id, product_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let (id, product_id) = parse_association_ids(&id, &product_id)?;

    ShoppingListService::new(&state.db)
        .detach_product(id, product_id)
        .await?;

    Ok(ResponseDto::<ShoppingListDto>::ok_empty(
        "Successfully removed from shopping list",
    ))
}

fn parse_association_ids(id: &str, product_id: &str) -> Result<(i32, i32), AppError> {
    match (parse_id(id), parse_id(product_id)) {
        (Some(id), Some(product_id)) => Ok((id, product_id)),
        _ => Err(AppError::NotFound(INVALID_ASSOCIATION_IDS.to_string())),
    }
}
