use time::Date;

/// Identifier of a route category (`cid`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::From, derive_more::Into, derive_more::Display,
)]
pub struct CategoryId(i32);

impl CategoryId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Identifier of a travel route (`rid`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::From, derive_more::Into, derive_more::Display,
)]
pub struct RouteId(i32);

impl RouteId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub cid: CategoryId,
    pub name: String,
}

/// A single travel route offering as listed in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub rid: RouteId,
    pub name: String,
    pub price: f64,
    pub introduce: Option<String>,
    pub on_sale: bool,
    pub listed_on: Option<Date>,
    pub theme_tour: bool,
    pub favorite_count: u32,
    pub cid: CategoryId,
    pub image: Option<String>,
    pub seller_id: Option<i32>,
    pub source_id: Option<String>,
}

impl Route {
    /// A route with only the mandatory fields set.
    pub fn new(rid: RouteId, cid: CategoryId, name: impl Into<String>, price: f64) -> Self {
        Self {
            rid,
            name: name.into(),
            price,
            introduce: None,
            on_sale: true,
            listed_on: None,
            theme_tour: false,
            favorite_count: 0,
            cid,
            image: None,
            seller_id: None,
            source_id: None,
        }
    }
}
