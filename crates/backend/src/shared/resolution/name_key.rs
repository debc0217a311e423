use crate::shared::format::strip_diacritics;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Нормализованный ключ имени
///
/// Без регистра и диакритики, внутренние пробелы схлопнуты. Пустое или
/// отсутствующее имя даёт пустой ключ и группируется с такими же.
pub fn name_key(name: &str) -> String {
    let folded = strip_diacritics(&name.to_lowercase());
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Одна строка на нормализованное имя, побеждает самый свежий период
///
/// Для справочников без мультипортальной дупликации id (компании, зоны):
/// повторная регистрация под другим регистром имени схлопывается, id
/// проигравших строк не сохраняются.
pub fn dedupe_by_name<R>(
    rows: impl IntoIterator<Item = R>,
    name_of: impl Fn(&R) -> &str,
    period_of: impl Fn(&R) -> &str,
) -> Vec<R> {
    let mut by_name: HashMap<String, R> = HashMap::new();

    for row in rows {
        let key = name_key(name_of(&row));
        match by_name.entry(key) {
            Entry::Occupied(mut entry) => {
                if period_of(&row) > period_of(entry.get()) {
                    entry.insert(row);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
        }
    }

    by_name.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named {
        name: &'static str,
        period: &'static str,
    }

    #[test]
    fn test_name_key_folds_case_and_diacritics() {
        assert_eq!(name_key("ACME"), "acme");
        assert_eq!(name_key("  Café   Martín "), "cafe martin");
        assert_eq!(name_key(""), "");
    }

    #[test]
    fn test_dedup_keeps_most_recent_period() {
        let rows = vec![
            Named {
                name: "Acme",
                period: "2025-11-01",
            },
            Named {
                name: "ACME",
                period: "2026-01-01",
            },
        ];

        let deduped = dedupe_by_name(rows, |r| r.name, |r| r.period);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].period, "2026-01-01");
    }

    #[test]
    fn test_distinct_names_stay_separate() {
        let rows = vec![
            Named {
                name: "Acme",
                period: "2026-01-01",
            },
            Named {
                name: "Beta",
                period: "2026-01-01",
            },
        ];

        let deduped = dedupe_by_name(rows, |r| r.name, |r| r.period);
        assert_eq!(deduped.len(), 2);
    }
}
