use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use favspot_core::Favorites;

pub fn run(favorites: &Favorites) -> Result<()> {
    let labels = favorites.labels()?;
    if labels.is_empty() {
        println!("No labels in use.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new("Label"), Cell::new("Items")]);
    for label in &labels {
        table.add_row(vec![label.name.clone(), label.ref_count.to_string()]);
    }

    println!("{table}");
    Ok(())
}
