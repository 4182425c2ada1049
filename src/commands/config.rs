use anyhow::Result;
use owo_colors::OwoColorize;
use secondbrain_core::config::SecondBrainConfig;

pub fn run(config: &SecondBrainConfig) -> Result<()> {
    let path = SecondBrainConfig::config_path()?;
    println!("{}", format!("# {}", path.display()).dimmed());
    print!("{}", config.to_toml()?);
    Ok(())
}
