use anyhow::Result;
use favspot_core::Favorites;

pub fn run(favorites: &Favorites, id: i64) -> Result<()> {
    favorites.delete_item(id)?;
    println!("Removed favorite #{id}");
    Ok(())
}
