use crate::errors::AppResult;
use crate::taxonomy::Taxonomy;
use crate::ui::names::english_name;
use crate::utils::table::{Column, Table};
use crate::wheel::sector_center_angle;

pub fn handle() -> AppResult<()> {
    let taxonomy = Taxonomy::plutchik();
    taxonomy.self_check()?;

    let mut table = Table::new(vec![
        Column::new("SECTOR", 12),
        Column::new("RING", 4),
        Column::new("CATEGORY", 12),
        Column::new("INTENSITY", 9),
        Column::new("NAME", 12),
        Column::new("KEY", 30),
    ]);

    for entry in taxonomy.entries() {
        let sector = entry.category.as_index();
        table.add_row(vec![
            format!("{} ({:.1}°)", sector, sector_center_angle(sector).to_degrees()),
            entry.intensity.ring().to_string(),
            entry.category.to_string(),
            entry.intensity.to_string(),
            english_name(entry.key).to_string(),
            entry.key.to_string(),
        ]);
    }

    print!("{}", table.render());
    Ok(())
}
