use std::collections::HashSet;

/// Фильтр по набору id
///
/// Отсутствующий фильтр и фильтр с пустым набором - разные состояния:
/// первый не ограничивает выборку, второй означает "ничего не совпало"
/// и даёт пустой результат, а не ошибку.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdFilter {
    Unrestricted,
    Only(HashSet<String>),
}

impl IdFilter {
    /// Фильтр из опционального списка параметров запроса
    pub fn from_params(ids: Option<Vec<String>>) -> Self {
        match ids {
            None => IdFilter::Unrestricted,
            Some(list) => IdFilter::Only(list.into_iter().collect()),
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, IdFilter::Unrestricted)
    }

    /// Пропускает ли фильтр данный id
    pub fn allows(&self, id: &str) -> bool {
        match self {
            IdFilter::Unrestricted => true,
            IdFilter::Only(set) => set.contains(id),
        }
    }

    /// Пропускает ли фильтр хотя бы один id из набора
    pub fn allows_any<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> bool {
        match self {
            IdFilter::Unrestricted => true,
            IdFilter::Only(set) => ids.into_iter().any(|id| set.contains(id)),
        }
    }
}
