use super::rows::{AreaRow, BrandRow, CompanyRow, RestaurantRow};
use crate::shared::config::WarehouseConfig;
use async_trait::async_trait;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Ошибки запроса к внешнему сервису данных
///
/// Пустой результат ошибкой не является: "ничего не совпало" - штатное
/// состояние и отдаётся как пустой список.
#[derive(Debug, Error)]
pub enum WarehouseError {
    /// Запрос к источнику не выполнился; пробрасывается вызывающему как есть
    #[error("source query failed: {0}")]
    QueryFailed(#[from] reqwest::Error),

    /// Источник вернул полезную нагрузку неожиданной формы
    #[error("source returned malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Источник месячных снапшотов справочных таблиц
///
/// Единственная точка ожидания во всём конвейере разрешения: один
/// запрос-ответ на справочник, без пагинации. Запросы разных
/// справочников можно выполнять параллельно.
#[async_trait]
pub trait DimensionSource: Send + Sync {
    async fn company_rows(&self) -> Result<Vec<CompanyRow>, WarehouseError>;
    async fn brand_rows(&self) -> Result<Vec<BrandRow>, WarehouseError>;
    async fn area_rows(&self) -> Result<Vec<AreaRow>, WarehouseError>;
    async fn restaurant_rows(&self) -> Result<Vec<RestaurantRow>, WarehouseError>;
}

/// HTTP-клиент внешнего сервиса запросов к хранилищу
pub struct WarehouseClient {
    client: reqwest::Client,
    base_url: String,
}

impl WarehouseClient {
    pub fn new(config: &WarehouseConfig) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.url.trim_end_matches('/').to_string(),
        }
    }

    /// Получить все строки одной справочной таблицы
    async fn fetch_table<T: DeserializeOwned>(
        &self,
        table: &str,
    ) -> Result<Vec<T>, WarehouseError> {
        let url = format!("{}/query/{}", self.base_url, urlencoding::encode(table));
        tracing::info!("Fetching dimension table from: {}", url);

        let started = std::time::Instant::now();
        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let rows: Vec<T> = serde_json::from_str(&body)?;

        tracing::info!(
            "Fetched {} rows from {} in {}ms",
            rows.len(),
            table,
            started.elapsed().as_millis()
        );
        Ok(rows)
    }
}

#[async_trait]
impl DimensionSource for WarehouseClient {
    async fn company_rows(&self) -> Result<Vec<CompanyRow>, WarehouseError> {
        self.fetch_table("dim_company").await
    }

    async fn brand_rows(&self) -> Result<Vec<BrandRow>, WarehouseError> {
        self.fetch_table("dim_brand").await
    }

    async fn area_rows(&self) -> Result<Vec<AreaRow>, WarehouseError> {
        self.fetch_table("dim_area").await
    }

    async fn restaurant_rows(&self) -> Result<Vec<RestaurantRow>, WarehouseError> {
        self.fetch_table("dim_restaurant_address").await
    }
}

static CLIENT: OnceCell<WarehouseClient> = OnceCell::new();

/// Инициализировать общий клиент из конфигурации (однократно при старте)
pub fn initialize_client(config: &WarehouseConfig) -> anyhow::Result<()> {
    CLIENT
        .set(WarehouseClient::new(config))
        .map_err(|_| anyhow::anyhow!("Warehouse client already initialized"))?;
    Ok(())
}

pub fn get_client() -> &'static WarehouseClient {
    CLIENT
        .get()
        .expect("Warehouse client has not been initialized")
}
