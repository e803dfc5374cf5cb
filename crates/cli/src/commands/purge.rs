use anyhow::Result;
use favspot_core::Favorites;

pub fn run(favorites: &Favorites, yes: bool) -> Result<()> {
    if !yes {
        let count = favorites.count()?;
        println!("This would remove {count} favorite(s). Re-run with --yes to confirm.");
        return Ok(());
    }
    favorites.purge_all()?;
    println!("Catalog purged.");
    Ok(())
}
