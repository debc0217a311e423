use crate::shared::resolution::grouping::GroupRow;
use crate::shared::resolution::snapshot::SnapshotRow;
use contracts::domain::common::GeoPoint;
use serde::{Deserialize, Deserializer};

/// Флаг soft-delete в выгрузках: bool, 0/1 либо отсутствует (активна)
fn de_soft_delete<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Int(i64),
    }

    let value = Option::<RawFlag>::deserialize(deserializer)?;
    Ok(match value {
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(i)) => i != 0,
        None => false,
    })
}

/// Строка снапшота справочника компаний
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyRow {
    pub company_id: i64,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_soft_delete")]
    pub deleted: bool,
    pub snapshot_month: String,
}

/// Строка снапшота справочника брендов; на каждом портале бренд
/// зарегистрирован под своим id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandRow {
    pub brand_id: i64,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_soft_delete")]
    pub deleted: bool,
    pub snapshot_month: String,
}

/// Строка снапшота справочника зон доставки
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaRow {
    pub area_id: i64,
    #[serde(default)]
    pub area_name: String,
    #[serde(default, deserialize_with = "de_soft_delete")]
    pub deleted: bool,
    pub snapshot_month: String,
}

/// Строка снапшота справочника адресов ресторанов
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantRow {
    pub address_id: i64,
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub brand_id: Option<i64>,
    #[serde(default)]
    pub company_id: Option<i64>,
    #[serde(default)]
    pub area_id: Option<i64>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default, deserialize_with = "de_soft_delete")]
    pub deleted: bool,
    pub snapshot_month: String,
}

// ============================================================================
// SnapshotRow
// ============================================================================

impl SnapshotRow for CompanyRow {
    type Key = i64;

    fn snapshot_key(&self) -> i64 {
        self.company_id
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl SnapshotRow for BrandRow {
    type Key = i64;

    fn snapshot_key(&self) -> i64 {
        self.brand_id
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl SnapshotRow for AreaRow {
    type Key = i64;

    fn snapshot_key(&self) -> i64 {
        self.area_id
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl SnapshotRow for RestaurantRow {
    type Key = i64;

    fn snapshot_key(&self) -> i64 {
        self.address_id
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }

    fn is_deleted(&self) -> bool {
        self.deleted
    }
}

// ============================================================================
// GroupRow - только для мультипортальных справочников
// ============================================================================

impl GroupRow for BrandRow {
    fn raw_id(&self) -> String {
        self.brand_id.to_string()
    }

    fn display_text(&self) -> &str {
        &self.brand_name
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }
}

impl GroupRow for RestaurantRow {
    fn raw_id(&self) -> String {
        self.address_id.to_string()
    }

    fn display_text(&self) -> &str {
        &self.street_address
    }

    fn snapshot_period(&self) -> &str {
        &self.snapshot_month
    }

    fn coordinates(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }

    fn set_coordinates(&mut self, point: GeoPoint) {
        self.latitude = Some(point.lat);
        self.longitude = Some(point.lng);
    }
}
