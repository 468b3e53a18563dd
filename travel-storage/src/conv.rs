use travel_core::route::{Category, Route};

use crate::{entity, Error};

impl From<entity::category::Model> for Category {
    fn from(model: entity::category::Model) -> Self {
        Category {
            cid: model.cid.into(),
            name: model.cname,
        }
    }
}

impl TryFrom<entity::route::Model> for Route {
    type Error = Error;

    fn try_from(model: entity::route::Model) -> Result<Self, Self::Error> {
        let favorite_count = u32::try_from(model.count).map_err(|_| Error::ValueOutOfRange {
            table: "tab_route",
            column: "count",
            value: model.count.into(),
        })?;
        Ok(Route {
            rid: model.rid.into(),
            name: model.rname,
            price: model.price,
            introduce: model.route_introduce,
            on_sale: model.rflag,
            listed_on: model.rdate,
            theme_tour: model.is_theme_tour,
            favorite_count,
            cid: model.cid.into(),
            image: model.rimage,
            seller_id: model.sid,
            source_id: model.source_id,
        })
    }
}
