//! Gallery image entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "galleries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub folder: Option<String>,
    pub image: Option<String>,
    pub alt: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain GalleryImage.
impl From<Model> for bramble_core::domain::GalleryImage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            folder: model.folder,
            image: model.image,
            alt: model.alt,
        }
    }
}

/// Conversion from Domain GalleryImage to SeaORM ActiveModel.
impl From<bramble_core::domain::GalleryImage> for ActiveModel {
    fn from(image: bramble_core::domain::GalleryImage) -> Self {
        Self {
            id: if image.id == 0 { NotSet } else { Set(image.id) },
            title: Set(image.title),
            folder: Set(image.folder),
            image: Set(image.image),
            alt: Set(image.alt),
        }
    }
}
