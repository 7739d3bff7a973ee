mod delete;

use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParam, UpdateStudentParam},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
