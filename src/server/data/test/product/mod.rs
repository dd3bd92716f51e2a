use crate::server::{data::product::ProductRepository, model::product::CreateProductParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod is_referenced;
