use crate::shared::format::slugify;
use crate::shared::warehouse::rows::AreaRow;
use contracts::domain::a003_area::aggregate::Area;

/// Проекция разрешённой строки зоны во внешнюю форму
pub fn map_area(row: AreaRow, all_ids: Vec<String>) -> Area {
    Area {
        id: row.area_id.to_string(),
        all_ids,
        external_id: row.area_id,
        slug: slugify(&row.area_name),
        name: row.area_name,
    }
}
