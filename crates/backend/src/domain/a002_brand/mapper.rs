use crate::shared::format::slugify;
use crate::shared::warehouse::rows::BrandRow;
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::domain::common::{EntityStatus, ParentLink};

/// Проекция основной строки группы брендов во внешнюю форму
///
/// Связь с компанией берётся из основной строки; если источник её не
/// заполняет, сущность помечается как `"unlinked"` - штатное состояние,
/// не ошибка.
pub fn map_brand(row: BrandRow, all_ids: Vec<String>) -> Brand {
    Brand {
        id: row.brand_id.to_string(),
        all_ids,
        external_id: row.brand_id,
        slug: slugify(&row.brand_name),
        status: EntityStatus::from_raw(row.status.as_deref()),
        company: ParentLink::from_raw_key(row.company_id),
        name: row.brand_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(company_id: Option<i64>) -> BrandRow {
        BrandRow {
            brand_id: 100,
            brand_name: "La Tagliatella".to_string(),
            company_id,
            channel: Some("glovo".to_string()),
            status: None,
            deleted: false,
            snapshot_month: "2026-01-01".to_string(),
        }
    }

    #[test]
    fn test_map_brand_with_owner() {
        let brand = map_brand(row(Some(7)), vec!["100".to_string()]);
        assert_eq!(brand.company, ParentLink::linked("7"));
        assert_eq!(brand.slug, "la-tagliatella");
    }

    #[test]
    fn test_missing_owner_maps_to_unlinked() {
        let brand = map_brand(row(None), vec!["100".to_string()]);
        assert_eq!(brand.company, ParentLink::unlinked());
    }
}
