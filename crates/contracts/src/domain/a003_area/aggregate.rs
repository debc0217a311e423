use serde::{Deserialize, Serialize};

/// Географическая зона доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,

    #[serde(rename = "allIds")]
    pub all_ids: Vec<String>,

    #[serde(rename = "externalId")]
    pub external_id: i64,

    pub name: String,

    pub slug: String,
}

impl Area {
    pub fn contains_id(&self, raw_id: &str) -> bool {
        self.all_ids.iter().any(|id| id == raw_id)
    }
}
