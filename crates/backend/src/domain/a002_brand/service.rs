use super::mapper;
use crate::shared::resolution::grouping::group_by_key;
use crate::shared::resolution::name_key::name_key;
use crate::shared::resolution::snapshot::resolve_current;
use crate::shared::warehouse::rows::BrandRow;
use crate::shared::warehouse::{DimensionSource, WarehouseError};
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::enums::delivery_channel::DeliveryChannel;
use std::collections::HashSet;

/// Разрешённый список брендов
///
/// Один физический бренд зарегистрирован на каждом портале под своим id,
/// поэтому после выбора актуальных снапшотов строки группируются по
/// нормализованному имени; `all_ids` группы сохраняет id всех порталов
/// для соединения с фактовыми таблицами.
pub async fn list_all(source: &dyn DimensionSource) -> Result<Vec<Brand>, WarehouseError> {
    let rows = source.brand_rows().await?;
    let fetched = rows.len();

    let current: Vec<BrandRow> = resolve_current(rows).into_values().collect();
    let channels: HashSet<DeliveryChannel> = current
        .iter()
        .filter_map(|row| row.channel.as_deref().and_then(DeliveryChannel::from_code))
        .collect();

    let groups = group_by_key(current, |row| name_key(&row.brand_name));

    let mut brands: Vec<Brand> = groups
        .into_iter()
        .map(|group| mapper::map_brand(group.primary, group.all_ids))
        .collect();
    brands.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    tracing::debug!(
        "Resolved {} brands from {} snapshot rows across {} delivery channels",
        brands.len(),
        fetched,
        channels.len()
    );
    Ok(brands)
}
