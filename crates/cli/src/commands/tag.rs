use anyhow::Result;
use favspot_core::Favorites;

pub fn run(favorites: &Favorites, id: i64, label: &str) -> Result<()> {
    favorites.retag_item(id, label)?;
    println!("Tagged favorite #{id} as '{label}'");
    Ok(())
}
