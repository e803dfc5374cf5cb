use std::path::PathBuf;

use anyhow::Result;
use favspot_core::domain::NewItem;
use favspot_core::Favorites;

pub fn run(favorites: &Favorites, item: &NewItem, thumb: Option<PathBuf>) -> Result<()> {
    let thumbnail = thumb.map(image::open).transpose()?;
    let id = favorites.add_item(item, thumbnail.as_ref())?;
    println!("Added favorite #{id}");
    Ok(())
}
