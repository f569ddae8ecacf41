use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "manufacturers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub time_created: DateTimeWithTimeZone,
    pub time_updated: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::watches::Entity")]
    Watches,
}

impl Related<super::watches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Watches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
