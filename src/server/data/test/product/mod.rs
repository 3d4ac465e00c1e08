use crate::server::{
    data::product::ProductRepository,
    model::product::{CreateProductParam, UpdateProductParam},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;

fn apple() -> CreateProductParam {
    CreateProductParam {
        name: "Apple".to_string(),
        description: "fruit".to_string(),
        image: "Zm9v".to_string(),
        price: 10,
    }
}
