//! Affiliate shop entity for SeaORM.

use sea_orm::ActiveValue::NotSet;
use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "affiliate_shops")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shop_name: Option<String>,
    pub shop_logo: Option<String>,
    pub reg_id: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain AffiliateShop.
impl From<Model> for bramble_core::domain::AffiliateShop {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            shop_name: model.shop_name,
            shop_logo: model.shop_logo,
            reg_id: model.reg_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain AffiliateShop to SeaORM ActiveModel.
impl From<bramble_core::domain::AffiliateShop> for ActiveModel {
    fn from(shop: bramble_core::domain::AffiliateShop) -> Self {
        Self {
            id: if shop.id == 0 { NotSet } else { Set(shop.id) },
            shop_name: Set(shop.shop_name),
            shop_logo: Set(shop.shop_logo),
            reg_id: Set(shop.reg_id),
            created_at: Set(shop.created_at.into()),
            updated_at: Set(shop.updated_at.into()),
        }
    }
}
