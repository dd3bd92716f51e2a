use crate::server::data::order::OrderRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_all;
mod get_by_id;
mod get_with_items;
mod update_status;
