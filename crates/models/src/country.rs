use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors;

/// Upper bound shared with the `countries` migration (`varchar(128)`).
pub const MAX_NAME_LEN: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub country_code: i32,
    pub country: String,
    pub city: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_country_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("country name required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("country name longer than {MAX_NAME_LEN} characters")));
    }
    Ok(())
}

pub fn validate_city_name(name: &str) -> Result<(), errors::ModelError> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(errors::ModelError::Validation(format!("city name longer than {MAX_NAME_LEN} characters")));
    }
    Ok(())
}
