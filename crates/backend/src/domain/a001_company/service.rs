use super::mapper;
use crate::shared::resolution::name_key::dedupe_by_name;
use crate::shared::resolution::snapshot::resolve_current;
use crate::shared::warehouse::{DimensionSource, WarehouseError};
use contracts::domain::a001_company::aggregate::Company;

/// Разрешённый список компаний
///
/// Компании не дублируются между порталами, поэтому группировка им не
/// нужна: последний снапшот по ключу, затем дедупликация по
/// нормализованному имени, сортировка по имени.
pub async fn list_all(source: &dyn DimensionSource) -> Result<Vec<Company>, WarehouseError> {
    let rows = source.company_rows().await?;
    let fetched = rows.len();

    let current = resolve_current(rows);
    let deduped = dedupe_by_name(
        current.into_values(),
        |row| row.company_name.as_str(),
        |row| row.snapshot_month.as_str(),
    );

    let mut companies: Vec<Company> = deduped
        .into_iter()
        .map(|row| {
            let id = row.company_id.to_string();
            mapper::map_company(row, vec![id])
        })
        .collect();
    companies.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    tracing::debug!(
        "Resolved {} companies from {} snapshot rows",
        companies.len(),
        fetched
    );
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::warehouse::rows::{AreaRow, BrandRow, CompanyRow, RestaurantRow};

    #[derive(Default)]
    struct StubSource {
        companies: Vec<CompanyRow>,
    }

    #[async_trait::async_trait]
    impl DimensionSource for StubSource {
        async fn company_rows(&self) -> Result<Vec<CompanyRow>, WarehouseError> {
            Ok(self.companies.clone())
        }

        async fn brand_rows(&self) -> Result<Vec<BrandRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn area_rows(&self) -> Result<Vec<AreaRow>, WarehouseError> {
            Ok(vec![])
        }

        async fn restaurant_rows(&self) -> Result<Vec<RestaurantRow>, WarehouseError> {
            Ok(vec![])
        }
    }

    fn row(id: i64, name: &str, month: &str, deleted: bool) -> CompanyRow {
        CompanyRow {
            company_id: id,
            company_name: name.to_string(),
            status: None,
            deleted,
            snapshot_month: month.to_string(),
        }
    }

    #[tokio::test]
    async fn test_company_deleted_in_latest_snapshot_disappears() {
        let source = StubSource {
            companies: vec![
                row(5, "Grupo Sur", "2025-11-01", false),
                row(5, "Grupo Sur", "2025-12-01", false),
                row(5, "Grupo Sur", "2026-01-01", true),
            ],
        };

        let companies = list_all(&source).await.unwrap();
        assert!(companies.is_empty());
    }

    #[tokio::test]
    async fn test_case_variants_collapse_to_most_recent() {
        let source = StubSource {
            companies: vec![
                row(1, "Acme", "2025-11-01", false),
                row(2, "ACME", "2026-01-01", false),
                row(3, "Beta Foods", "2026-01-01", false),
            ],
        };

        let companies = list_all(&source).await.unwrap();
        assert_eq!(companies.len(), 2);
        // сортировка по имени: ACME раньше Beta Foods
        assert_eq!(companies[0].id, "2");
        assert_eq!(companies[1].name, "Beta Foods");
    }

    #[tokio::test]
    async fn test_empty_source_is_a_valid_state() {
        let source = StubSource::default();
        let companies = list_all(&source).await.unwrap();
        assert!(companies.is_empty());
    }
}
