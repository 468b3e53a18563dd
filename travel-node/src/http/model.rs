use rocket::serde::Serialize;
use travel_core::route::{Category, Route};
use travel_core::utils::paging::PageBean;

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HealthStatus {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct CategoryModel {
    pub cid: i32,
    pub cname: String,
}

impl From<Category> for CategoryModel {
    fn from(value: Category) -> Self {
        Self {
            cid: value.cid.into(),
            cname: value.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct RouteModel {
    pub rid: i32,
    pub rname: String,
    pub price: f64,
    pub route_introduce: Option<String>,
    pub rflag: bool,
    pub rdate: Option<String>,
    pub is_theme_tour: bool,
    pub count: u32,
    pub cid: i32,
    pub rimage: Option<String>,
    pub sid: Option<i32>,
    pub source_id: Option<String>,
}

impl From<Route> for RouteModel {
    fn from(value: Route) -> Self {
        Self {
            rid: value.rid.into(),
            rname: value.name,
            price: value.price,
            route_introduce: value.introduce,
            rflag: value.on_sale,
            rdate: value.listed_on.map(|d| d.to_string()),
            is_theme_tour: value.theme_tour,
            count: value.favorite_count,
            cid: value.cid.into(),
            rimage: value.image,
            sid: value.seller_id,
            source_id: value.source_id,
        }
    }
}

/// Page envelope in the shape the travel front end reads.
#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde", rename_all = "camelCase")]
pub struct PageBeanModel<T> {
    pub total_count: u64,
    pub total_page: u64,
    pub current_page: u64,
    pub page_size: u64,
    pub list: Vec<T>,
}

impl<T, U> From<PageBean<T>> for PageBeanModel<U>
where
    U: From<T>,
{
    fn from(value: PageBean<T>) -> Self {
        let total_page = value.total_pages();
        let page = value.map(U::from);
        Self {
            total_count: page.total_items,
            total_page,
            current_page: page.current_page,
            page_size: page.page_size,
            list: page.items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorBody {
    pub error: String,
}
