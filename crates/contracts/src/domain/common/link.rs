use serde::{Deserialize, Serialize};

/// Строковый маркер отсутствующей связи в JSON-выдаче
pub const UNLINKED: &str = "unlinked";

/// Ссылка на родительскую сущность
///
/// Явный sum-тип вместо "пустой строки по умолчанию": отсутствие связи
/// видно на уровне типа. Сериализуется либо строковым id, либо
/// фиксированным маркером `"unlinked"`; потребители обязаны трактовать
/// маркер как нормальное состояние, а не как ошибку.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParentLink {
    Linked(String),
    Unlinked,
}

impl ParentLink {
    /// Связь с родителем по строковому id
    pub fn linked(id: impl Into<String>) -> Self {
        ParentLink::Linked(id.into())
    }

    /// Именованный конструктор отсутствующей связи
    pub fn unlinked() -> Self {
        ParentLink::Unlinked
    }

    /// Связь из опционального числового ключа источника
    pub fn from_raw_key(key: Option<i64>) -> Self {
        match key {
            Some(k) => ParentLink::Linked(k.to_string()),
            None => ParentLink::Unlinked,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, ParentLink::Linked(_))
    }

    /// Строковый id родителя, если связь установлена
    pub fn id(&self) -> Option<&str> {
        match self {
            ParentLink::Linked(id) => Some(id),
            ParentLink::Unlinked => None,
        }
    }
}

impl From<String> for ParentLink {
    fn from(s: String) -> Self {
        if s.is_empty() || s == UNLINKED {
            ParentLink::Unlinked
        } else {
            ParentLink::Linked(s)
        }
    }
}

impl From<ParentLink> for String {
    fn from(link: ParentLink) -> Self {
        match link {
            ParentLink::Linked(id) => id,
            ParentLink::Unlinked => UNLINKED.to_string(),
        }
    }
}

/// Статус сущности в выдаче
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityStatus {
    Active,
    Inactive,
}

impl EntityStatus {
    /// Разбор статусной колонки источника
    ///
    /// Неизвестные и отсутствующие значения считаются активными: за
    /// жизненный цикл строки отвечает флаг soft-delete, а не статус.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_lowercase()) {
            Some(s) if s == "inactive" || s == "suspended" || s == "0" => EntityStatus::Inactive,
            _ => EntityStatus::Active,
        }
    }
}

/// Географические координаты точки
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_link_serializes_sentinel() {
        let linked = ParentLink::linked("42");
        let unlinked = ParentLink::unlinked();

        assert_eq!(serde_json::to_string(&linked).unwrap(), "\"42\"");
        assert_eq!(serde_json::to_string(&unlinked).unwrap(), "\"unlinked\"");
    }

    #[test]
    fn test_parent_link_round_trip() {
        let linked: ParentLink = serde_json::from_str("\"42\"").unwrap();
        let unlinked: ParentLink = serde_json::from_str("\"unlinked\"").unwrap();
        let empty: ParentLink = serde_json::from_str("\"\"").unwrap();

        assert_eq!(linked, ParentLink::Linked("42".to_string()));
        assert_eq!(unlinked, ParentLink::Unlinked);
        assert_eq!(empty, ParentLink::Unlinked);
    }

    #[test]
    fn test_status_defaults_to_active() {
        assert_eq!(EntityStatus::from_raw(None), EntityStatus::Active);
        assert_eq!(EntityStatus::from_raw(Some("active")), EntityStatus::Active);
        assert_eq!(EntityStatus::from_raw(Some("whatever")), EntityStatus::Active);
        assert_eq!(
            EntityStatus::from_raw(Some("Suspended")),
            EntityStatus::Inactive
        );
        assert_eq!(EntityStatus::from_raw(Some("0")), EntityStatus::Inactive);
    }
}
