use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tab_route")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub rid: i32,
    pub rname: String,
    pub price: f64,
    pub route_introduce: Option<String>,
    pub rflag: bool,
    pub rdate: Option<time::Date>,
    pub is_theme_tour: bool,
    pub count: i32,
    pub cid: i32,
    pub rimage: Option<String>,
    pub sid: Option<i32>,
    pub source_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::Cid",
        to = "super::category::Column::Cid"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
