use sea_orm::entity::prelude::*;

/// Fixed classes a ship can be registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ShipCategory {
    #[sea_orm(string_value = "TRANSPORT")]
    Transport,
    #[sea_orm(string_value = "MILITARY")]
    Military,
    #[sea_orm(string_value = "MERCHANT")]
    Merchant,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub planet: String,
    pub category: ShipCategory,
    pub production_date: DateTime,
    pub is_used: bool,
    #[sea_orm(column_type = "Double")]
    pub speed: f64,
    pub crew_size: i32,
    #[sea_orm(column_type = "Double")]
    pub rating: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
