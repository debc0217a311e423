use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Строка месячного снапшота справочной таблицы
///
/// Источник хранит полные месячные выгрузки без инкрементов; удалённые
/// строки помечаются флагом, но физически остаются в выгрузке.
pub trait SnapshotRow {
    type Key: Eq + Hash + Clone;

    /// Первичный ключ строки в источнике
    fn snapshot_key(&self) -> Self::Key;

    /// Период снапшота, лексически сортируемая строка вида "YYYY-MM-01"
    fn snapshot_period(&self) -> &str;

    /// Флаг soft-delete
    fn is_deleted(&self) -> bool;
}

/// Свернуть повторяющиеся месячные снапшоты в одну актуальную строку на ключ
///
/// Порядок обязателен: сначала выбор последнего снапшота по ключу, и только
/// затем отбрасывание строк с флагом удаления. Фильтрация до выбора
/// последнего либо оставляет устаревшую активную строку для ключа,
/// удалённого позже, либо теряет ключ, у которого флаг стоял лишь в старом
/// снапшоте.
///
/// Ключ, встречающийся только в удалённых снапшотах, в выдаче отсутствует;
/// это не ошибка. При равных периодах побеждает первая встреченная строка.
pub fn resolve_current<R: SnapshotRow>(rows: Vec<R>) -> HashMap<R::Key, R> {
    let mut latest: HashMap<R::Key, R> = HashMap::with_capacity(rows.len());

    for row in rows {
        match latest.entry(row.snapshot_key()) {
            Entry::Occupied(mut entry) => {
                if row.snapshot_period() > entry.get().snapshot_period() {
                    entry.insert(row);
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(row);
            }
        }
    }

    latest.retain(|_, row| !row.is_deleted());
    latest
}
