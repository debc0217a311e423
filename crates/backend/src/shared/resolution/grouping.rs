use contracts::domain::common::GeoPoint;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Строка, участвующая в группировке мультипортальных дублей
pub trait GroupRow {
    /// Исходный id строки в строковой форме
    fn raw_id(&self) -> String;

    /// Ненормализованный отображаемый текст (имя или адрес)
    fn display_text(&self) -> &str;

    /// Период снапшота строки
    fn snapshot_period(&self) -> &str;

    /// Координаты, если справочник их несёт
    fn coordinates(&self) -> Option<GeoPoint> {
        None
    }

    fn set_coordinates(&mut self, _point: GeoPoint) {}
}

/// Группа строк, свёрнутых в одну реальную сущность
#[derive(Debug, Clone)]
pub struct EntityGroup<R> {
    /// Основная строка группы
    pub primary: R,

    /// Дедуплицированное объединение id всех строк группы;
    /// всегда содержит id основной строки
    pub all_ids: Vec<String>,
}

/// Сгруппировать строки по нормализованному ключу
///
/// Внутри ведра основная строка выбирается по длине исходного текста
/// (длиннее - полнее, меньше шансов усечения), при равенстве - по
/// свежести снапшота. Недостающие координаты основной строки
/// заполняются первым ненулевым значением соседей в исходном порядке
/// входа, независимо от ранжирования.
///
/// Свойство разбиения: id каждой входной строки попадает ровно в одну
/// группу. Порядок входа влияет только на документированное стабильное
/// заполнение координат.
pub fn group_by_key<R, K>(rows: Vec<R>, key_of: K) -> Vec<EntityGroup<R>>
where
    R: GroupRow,
    K: Fn(&R) -> String,
{
    // вёдра в порядке первого появления ключа, выдача детерминирована
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<R>> = HashMap::new();

    for row in rows {
        let key = key_of(&row);
        match buckets.entry(key) {
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(vec![row]);
            }
            Entry::Occupied(mut entry) => entry.get_mut().push(row),
        }
    }

    order
        .into_iter()
        .filter_map(|key| buckets.remove(&key))
        .map(build_group)
        .collect()
}

fn build_group<R: GroupRow>(mut members: Vec<R>) -> EntityGroup<R> {
    let primary_idx = select_primary(&members);

    let mut all_ids: Vec<String> = Vec::with_capacity(members.len());
    for member in &members {
        let id = member.raw_id();
        if !all_ids.contains(&id) {
            all_ids.push(id);
        }
    }

    let fill = if members[primary_idx].coordinates().is_none() {
        members
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != primary_idx)
            .find_map(|(_, member)| member.coordinates())
    } else {
        None
    };

    let mut primary = members.swap_remove(primary_idx);
    if let Some(point) = fill {
        primary.set_coordinates(point);
    }

    EntityGroup { primary, all_ids }
}

fn select_primary<R: GroupRow>(members: &[R]) -> usize {
    let mut best = 0;
    for (i, member) in members.iter().enumerate().skip(1) {
        let candidate = (
            member.display_text().chars().count(),
            member.snapshot_period(),
        );
        let current = (
            members[best].display_text().chars().count(),
            members[best].snapshot_period(),
        );
        if candidate > current {
            best = i;
        }
    }
    best
}
