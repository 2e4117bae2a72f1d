use anyhow::Result;
use hush_config::Config;

pub fn handle(config: &Config, path: bool) -> Result<()> {
    if path {
        println!("{}", Config::config_path().display());
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
