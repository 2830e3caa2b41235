use clap::Subcommand;
use muezzin_core::{CalculationMethod, Config};

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the current configuration as TOML
    Show,
    /// Set a configuration value (location, method, timezone, refresh-secs)
    Set { key: String, value: String },
    /// Print the config file path
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "location" => config.location = value.clone(),
                "method" => config.method = value.parse::<CalculationMethod>()?,
                "timezone" => {
                    if value.eq_ignore_ascii_case("none") {
                        config.timezone = None;
                    } else {
                        // Validate before storing.
                        value
                            .parse::<chrono_tz::Tz>()
                            .map_err(|_| format!("unknown timezone '{value}'"))?;
                        config.timezone = Some(value.clone());
                    }
                }
                "refresh-secs" => {
                    config.refresh_secs = value
                        .parse()
                        .map_err(|_| format!("invalid refresh-secs '{value}'"))?;
                }
                other => return Err(format!("unknown config key '{other}'").into()),
            }
            config.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
    }
    Ok(())
}
