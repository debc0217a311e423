use crate::domain::common::EntityStatus;
use serde::{Deserialize, Serialize};

/// Компания-владелец (юридическое лицо, управляющее брендами)
///
/// Результат разрешения справочника компаний: одна запись на
/// нормализованное имя среди неудалённых строк всех снапшотов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Строковая форма выбранного первичного ключа источника
    pub id: String,

    /// Все исходные id, свёрнутые в эту сущность (включая `id`)
    ///
    /// Фактовые таблицы ключуются исходными id каналов: соединять
    /// нужно по любому id из этого набора, а не только по `id`.
    #[serde(rename = "allIds")]
    pub all_ids: Vec<String>,

    /// Числовой ключ источника
    #[serde(rename = "externalId")]
    pub external_id: i64,

    pub name: String,

    pub slug: String,

    pub status: EntityStatus,
}

impl Company {
    /// Входит ли исходный id в эту сущность
    pub fn contains_id(&self, raw_id: &str) -> bool {
        self.all_ids.iter().any(|id| id == raw_id)
    }
}
