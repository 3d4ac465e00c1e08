use serde::Deserialize;

/// Optional `id` query parameter of the read endpoints.
///
/// Kept as a string so a malformed value is reported in the envelope instead of by
/// the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct IdParam {
    pub id: Option<String>,
}

/// Query parameters of `PUT /api/product/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductQuery {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
}

/// Query parameters of `PUT /api/shoppingList/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateShoppingListQuery {
    pub name: Option<String>,
    pub description: Option<String>,
}
