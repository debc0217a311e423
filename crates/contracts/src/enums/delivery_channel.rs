use serde::{Deserialize, Serialize};

/// Каналы доставки (порталы)
///
/// Один и тот же физический бренд или адрес регистрируется на каждом
/// портале независимо и получает на каждом свой идентификатор.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryChannel {
    Glovo,
    UberEats,
    JustEat,
    Deliveroo,
}

impl DeliveryChannel {
    /// Получить код канала
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryChannel::Glovo => "ch-glovo",
            DeliveryChannel::UberEats => "ch-ubereats",
            DeliveryChannel::JustEat => "ch-justeat",
            DeliveryChannel::Deliveroo => "ch-deliveroo",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            DeliveryChannel::Glovo => "Glovo",
            DeliveryChannel::UberEats => "Uber Eats",
            DeliveryChannel::JustEat => "Just Eat",
            DeliveryChannel::Deliveroo => "Deliveroo",
        }
    }

    /// Получить все каналы
    pub fn all() -> Vec<DeliveryChannel> {
        vec![
            DeliveryChannel::Glovo,
            DeliveryChannel::UberEats,
            DeliveryChannel::JustEat,
            DeliveryChannel::Deliveroo,
        ]
    }

    /// Парсинг из кода или произвольного обозначения в данных источника
    pub fn from_code(code: &str) -> Option<Self> {
        let code_lower = code.trim().to_lowercase();
        match code_lower.as_str() {
            "ch-glovo" | "glovo" => Some(DeliveryChannel::Glovo),
            "ch-ubereats" | "ubereats" | "uber_eats" | "uber eats" => {
                Some(DeliveryChannel::UberEats)
            }
            "ch-justeat" | "justeat" | "just_eat" | "just eat" => Some(DeliveryChannel::JustEat),
            "ch-deliveroo" | "deliveroo" => Some(DeliveryChannel::Deliveroo),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_accepts_raw_portal_names() {
        assert_eq!(
            DeliveryChannel::from_code("Uber Eats"),
            Some(DeliveryChannel::UberEats)
        );
        assert_eq!(
            DeliveryChannel::from_code("ch-glovo"),
            Some(DeliveryChannel::Glovo)
        );
        assert_eq!(DeliveryChannel::from_code("unknown-portal"), None);
    }
}
