//! Product entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub long_description: String,
    pub category_id: i32,
    pub image: String,
    #[sea_orm(column_type = "Decimal(Some((3, 1)))")]
    pub rating: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub price: Option<Decimal>,
    pub affiliate_url: String,
    pub featured: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub meta_title: Option<String>,
    pub meta_tag: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: String,
    pub og_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::product_tag::Entity")]
    ProductTag,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_tag::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Product.
impl From<Model> for bramble_core::domain::Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            short_description: model.short_description,
            long_description: model.long_description,
            category_id: model.category_id,
            image: model.image,
            rating: model.rating,
            price: model.price,
            affiliate_url: model.affiliate_url,
            featured: model.featured,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            meta_title: model.meta_title,
            meta_tag: model.meta_tag,
            meta_description: model.meta_description,
            og_title: model.og_title,
            og_description: model.og_description,
        }
    }
}

/// Conversion from Domain Product to SeaORM ActiveModel.
impl From<bramble_core::domain::Product> for ActiveModel {
    fn from(product: bramble_core::domain::Product) -> Self {
        Self {
            id: if product.id == 0 {
                NotSet
            } else {
                Set(product.id)
            },
            title: Set(product.title),
            slug: Set(product.slug),
            short_description: Set(product.short_description),
            long_description: Set(product.long_description),
            category_id: Set(product.category_id),
            image: Set(product.image),
            rating: Set(product.rating),
            price: Set(product.price),
            affiliate_url: Set(product.affiliate_url),
            featured: Set(product.featured),
            created_at: Set(product.created_at.into()),
            updated_at: Set(product.updated_at.into()),
            meta_title: Set(product.meta_title),
            meta_tag: Set(product.meta_tag),
            meta_description: Set(product.meta_description),
            og_title: Set(product.og_title),
            og_description: Set(product.og_description),
        }
    }
}
