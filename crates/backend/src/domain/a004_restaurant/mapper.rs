use crate::shared::format::slugify;
use crate::shared::warehouse::rows::RestaurantRow;
use contracts::domain::a004_restaurant::aggregate::Restaurant;
use contracts::domain::common::{GeoPoint, ParentLink};

/// Проекция основной строки группы адресов во внешнюю форму
///
/// Незаполненные родительские ключи дают `"unlinked"`; координаты
/// опциональны и к этому моменту уже дозаполнены группировкой, если
/// хоть одна строка группы их несла.
pub fn map_restaurant(row: RestaurantRow, all_ids: Vec<String>) -> Restaurant {
    let coordinates = match (row.latitude, row.longitude) {
        (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
        _ => None,
    };

    Restaurant {
        id: row.address_id.to_string(),
        all_ids,
        external_id: row.address_id,
        slug: slugify(&row.street_address),
        company: ParentLink::from_raw_key(row.company_id),
        brand: ParentLink::from_raw_key(row.brand_id),
        area: ParentLink::from_raw_key(row.area_id),
        coordinates,
        name: row.street_address,
    }
}
