//! Article entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub short_description: String,
    #[sea_orm(column_type = "Text")]
    pub long_description: String,
    #[sea_orm(unique)]
    pub slug: String,
    pub post_date: Option<Date>,
    pub is_feature: Option<bool>,
    pub is_trending: Option<bool>,
    pub tags_json: Option<String>,
    pub meta_title: Option<String>,
    pub meta_tag: Option<String>,
    pub meta_description: Option<String>,
    pub og_title: String,
    pub og_description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub author_id: Option<Uuid>,
    pub category_id: Option<i32>,
    pub view_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::author::Entity",
        from = "Column::AuthorId",
        to = "super::author::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::author::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Article.
impl From<Model> for bramble_core::domain::Article {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            short_description: model.short_description,
            long_description: model.long_description,
            slug: model.slug,
            post_date: model.post_date,
            is_feature: model.is_feature,
            is_trending: model.is_trending,
            tags_json: model.tags_json,
            meta_title: model.meta_title,
            meta_tag: model.meta_tag,
            meta_description: model.meta_description,
            og_title: model.og_title,
            og_description: model.og_description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            author_id: model.author_id,
            category_id: model.category_id,
            view_count: model.view_count,
        }
    }
}

/// Conversion from Domain Article to SeaORM ActiveModel.
impl From<bramble_core::domain::Article> for ActiveModel {
    fn from(article: bramble_core::domain::Article) -> Self {
        Self {
            id: Set(article.id),
            title: Set(article.title),
            short_description: Set(article.short_description),
            long_description: Set(article.long_description),
            slug: Set(article.slug),
            post_date: Set(article.post_date),
            is_feature: Set(article.is_feature),
            is_trending: Set(article.is_trending),
            tags_json: Set(article.tags_json),
            meta_title: Set(article.meta_title),
            meta_tag: Set(article.meta_tag),
            meta_description: Set(article.meta_description),
            og_title: Set(article.og_title),
            og_description: Set(article.og_description),
            created_at: Set(article.created_at.into()),
            updated_at: Set(article.updated_at.into()),
            author_id: Set(article.author_id),
            category_id: Set(article.category_id),
            view_count: Set(article.view_count),
        }
    }
}
