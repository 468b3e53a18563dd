use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TabCategory::Table)
                    .col(
                        ColumnDef::new(TabCategory::Cid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TabCategory::Cname).string_len(100).not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TabRoute::Table)
                    .col(
                        ColumnDef::new(TabRoute::Rid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TabRoute::Rname).string_len(500).not_null())
                    .col(ColumnDef::new(TabRoute::Price).double().not_null())
                    .col(ColumnDef::new(TabRoute::RouteIntroduce).string_len(1000))
                    .col(ColumnDef::new(TabRoute::Rflag).boolean().not_null().default(true))
                    .col(ColumnDef::new(TabRoute::Rdate).date())
                    .col(ColumnDef::new(TabRoute::IsThemeTour).boolean().not_null().default(false))
                    .col(ColumnDef::new(TabRoute::Count).integer().not_null().default(0))
                    .col(ColumnDef::new(TabRoute::Cid).integer().not_null())
                    .col(ColumnDef::new(TabRoute::Rimage).string_len(200))
                    .col(ColumnDef::new(TabRoute::Sid).integer())
                    .col(ColumnDef::new(TabRoute::SourceId).string_len(50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tab_route_cid")
                            .from(TabRoute::Table, TabRoute::Cid)
                            .to(TabCategory::Table, TabCategory::Cid),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tab_route_cid_rid")
                    .table(TabRoute::Table)
                    .col(TabRoute::Cid)
                    .col(TabRoute::Rid)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TabRoute::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TabCategory::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum TabCategory {
    Table,
    Cid,
    Cname,
}

#[derive(DeriveIden)]
enum TabRoute {
    Table,
    Rid,
    Rname,
    Price,
    RouteIntroduce,
    Rflag,
    Rdate,
    IsThemeTour,
    Count,
    Cid,
    Rimage,
    Sid,
    SourceId,
}
