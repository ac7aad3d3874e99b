use crate::{data::invite::InviteRepository, error::AppError};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod consume;
mod remove;
mod was_invited;
