use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use favspot_core::Favorites;

pub fn run(favorites: &Favorites, json: bool) -> Result<()> {
    let items = favorites.items()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No favorites yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id"),
        Cell::new("Title"),
        Cell::new("Author"),
        Cell::new("Label"),
        Cell::new("Location"),
        Cell::new("Thumb"),
    ]);

    for item in &items {
        let label = favorites
            .display_label(item.id)?
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            item.id.to_string(),
            item.title.clone(),
            item.author.clone(),
            label,
            format!("{:.4}, {:.4}", item.latitude, item.longitude),
            if item.thumb_data.is_some() { "yes" } else { "-" }.to_string(),
        ]);
    }

    println!("{table}");
    println!(
        "{} favorite(s) of {} max",
        items.len(),
        favspot_core::domain::MAX_ITEMS
    );
    Ok(())
}
