use crate::shared::format::slugify;
use crate::shared::warehouse::rows::CompanyRow;
use contracts::domain::a001_company::aggregate::Company;
use contracts::domain::common::EntityStatus;

/// Проекция разрешённой строки компании во внешнюю форму
///
/// Чистая функция без ввода-вывода; отсутствующие опциональные поля
/// заменяются задокументированными значениями по умолчанию.
pub fn map_company(row: CompanyRow, all_ids: Vec<String>) -> Company {
    Company {
        id: row.company_id.to_string(),
        all_ids,
        external_id: row.company_id,
        slug: slugify(&row.company_name),
        status: EntityStatus::from_raw(row.status.as_deref()),
        name: row.company_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_company_defaults() {
        let row = CompanyRow {
            company_id: 11,
            company_name: "Grupo Vips".to_string(),
            status: None,
            deleted: false,
            snapshot_month: "2026-01-01".to_string(),
        };

        let company = map_company(row, vec!["11".to_string()]);
        assert_eq!(company.id, "11");
        assert_eq!(company.external_id, 11);
        assert_eq!(company.slug, "grupo-vips");
        assert_eq!(company.status, EntityStatus::Active);
        assert_eq!(company.all_ids, vec!["11".to_string()]);
    }
}
