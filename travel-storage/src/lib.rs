use sea_orm::{
    AccessMode, ColumnTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, IsolationLevel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use travel_core::repo::RouteRepo;
use travel_core::route::{Category, CategoryId, Route, RouteId};
use travel_core::utils::paging::{PageBean, PageRequest};

mod conv;
mod entity;

#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum Error {
    #[from]
    #[display("database error: {source}")]
    Db { source: sea_orm::DbErr },
    #[display("column {table}.{column} holds out of range value {value}")]
    ValueOutOfRange {
        table: &'static str,
        column: &'static str,
        value: i64,
    },
}

#[derive(Debug, Clone)]
pub struct PostgresDb {
    db: DatabaseConnection,
}

impl PostgresDb {
    pub async fn connect(url: &str, log_statement: bool) -> Result<Self, Error> {
        let mut options = ConnectOptions::new(url);
        options.sqlx_logging(log_statement);
        log::info!("Connecting to route catalog database");
        let db = Database::connect(options).await?;
        log::info!("Connected to route catalog database");
        Ok(Self { db })
    }
}

#[async_trait::async_trait]
impl RouteRepo for PostgresDb {
    type Error = Error;

    async fn get_category(&self, cid: CategoryId) -> Result<Option<Category>, Self::Error> {
        let result = entity::category::Entity::find_by_id(cid.value())
            .one(&self.db)
            .await?
            .map(Category::from);
        Ok(result)
    }

    async fn get_all_categories(&self) -> Result<Vec<Category>, Self::Error> {
        let result = entity::category::Entity::find()
            .order_by_asc(entity::category::Column::Cid)
            .all(&self.db)
            .await?
            .into_iter()
            .map(Category::from)
            .collect();
        Ok(result)
    }

    async fn get_routes_by_category(
        &self,
        cid: CategoryId,
        page: PageRequest,
    ) -> Result<PageBean<Route>, Self::Error> {
        // count and slice must observe the same snapshot
        let tx = self
            .db
            .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
            .await?;

        let select = entity::route::Entity::find().filter(entity::route::Column::Cid.eq(cid.value()));
        let total_items = select.clone().count(&tx).await?;
        if page.is_past_end(total_items) {
            tx.commit().await?;
            log::debug!("Category {} has no routes on page {}", cid, page.page());
            return Ok(PageBean::empty(&page, total_items));
        }
        let models = select
            .order_by_asc(entity::route::Column::Rid)
            .offset(page.offset())
            .limit(page.limit())
            .all(&tx)
            .await?;
        tx.commit().await?;

        let items = models
            .into_iter()
            .map(Route::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Loaded {} of {} routes for category {} page {}",
            items.len(),
            total_items,
            cid,
            page.page()
        );

        Ok(PageBean {
            items,
            current_page: page.page(),
            page_size: page.page_size().get(),
            total_items,
        })
    }

    async fn get_route(&self, rid: RouteId) -> Result<Option<Route>, Self::Error> {
        entity::route::Entity::find_by_id(rid.value())
            .one(&self.db)
            .await?
            .map(Route::try_from)
            .transpose()
    }
}
