use crate::config::Config;
use anyhow::Result;

pub fn run(force: bool) -> Result<()> {
    if let Some(path) = Config::path() {
        if path.exists() && !force {
            anyhow::bail!(
                "Config file already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
    }

    let path = Config::default().save()?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
