//! Tag entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_tag::Entity")]
    ProductTag,
}

impl Related<super::product_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTag.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_tag::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_tag::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Tag.
impl From<Model> for bramble_core::domain::Tag {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            slug: model.slug,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Tag to SeaORM ActiveModel.
impl From<bramble_core::domain::Tag> for ActiveModel {
    fn from(tag: bramble_core::domain::Tag) -> Self {
        Self {
            id: if tag.id == 0 { NotSet } else { Set(tag.id) },
            name: Set(tag.name),
            slug: Set(tag.slug),
            created_at: Set(tag.created_at.into()),
            updated_at: Set(tag.updated_at.into()),
        }
    }
}
