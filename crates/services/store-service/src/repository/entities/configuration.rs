//! Configuration database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::ConfigEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "configuration")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key_name: String,
    pub key_value: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ConfigEntry {
    fn from(model: Model) -> Self {
        ConfigEntry::new(model.key_name, model.key_value)
    }
}
