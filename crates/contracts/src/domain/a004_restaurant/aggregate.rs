use crate::domain::common::{GeoPoint, ParentLink};
use serde::{Deserialize, Serialize};

/// Ресторан (физический адрес точки)
///
/// Один адрес регистрируется на каждом портале под своим id; после
/// группировки по нормализованному адресному ключу `all_ids` содержит
/// id точки со всех порталов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,

    #[serde(rename = "allIds")]
    pub all_ids: Vec<String>,

    #[serde(rename = "externalId")]
    pub external_id: i64,

    /// Исходный (ненормализованный) адрес основной строки группы
    pub name: String,

    pub slug: String,

    #[serde(rename = "companyId")]
    pub company: ParentLink,

    #[serde(rename = "brandId")]
    pub brand: ParentLink,

    #[serde(rename = "areaId")]
    pub area: ParentLink,

    /// Координаты точки; заполняются из любой строки группы
    pub coordinates: Option<GeoPoint>,
}

impl Restaurant {
    pub fn contains_id(&self, raw_id: &str) -> bool {
        self.all_ids.iter().any(|id| id == raw_id)
    }
}
