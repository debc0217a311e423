use crate::domain::common::{EntityStatus, ParentLink};
use serde::{Deserialize, Serialize};

/// Бренд (сеть ресторанов)
///
/// Один физический бренд регистрируется на каждом портале доставки под
/// своим id; после группировки по нормализованному имени `all_ids`
/// содержит id бренда со всех порталов.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,

    #[serde(rename = "allIds")]
    pub all_ids: Vec<String>,

    #[serde(rename = "externalId")]
    pub external_id: i64,

    pub name: String,

    pub slug: String,

    pub status: EntityStatus,

    /// Связь с компанией-владельцем; `"unlinked"`, если источник её
    /// не заполняет для этой строки
    #[serde(rename = "companyId")]
    pub company: ParentLink,
}

impl Brand {
    pub fn contains_id(&self, raw_id: &str) -> bool {
        self.all_ids.iter().any(|id| id == raw_id)
    }
}
