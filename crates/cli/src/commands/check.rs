use anyhow::Result;
use favspot_core::Favorites;

pub fn run(favorites: &Favorites) -> Result<()> {
    favorites.verify_integrity()?;
    println!(
        "OK: {} item(s), {} label(s), all reference counts consistent",
        favorites.count()?,
        favorites.labels()?.len()
    );
    Ok(())
}
