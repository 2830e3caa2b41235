pub mod config;
pub mod next;
pub mod times;
pub mod watch;

use chrono::{Local, NaiveDate, NaiveTime};
use chrono_tz::Tz;
use clap::Args;
use muezzin_core::{CalculationMethod, Config, CoreError, Settings, ValidationError};

/// Flags shared by the fetching commands. Unset flags fall back to the
/// stored configuration.
#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Free-text location, e.g. "Douglasville, GA"
    #[arg(long)]
    pub location: Option<String>,
    /// Calculation method: isna, karachi, mwl, umm-al-qura, or an AlAdhan id
    #[arg(long)]
    pub method: Option<String>,
    /// IANA timezone override, e.g. Europe/London
    #[arg(long)]
    pub timezone: Option<String>,
    /// Date override in DD-MM-YYYY (defaults to today)
    #[arg(long)]
    pub date: Option<String>,
}

impl FetchArgs {
    /// Stored config merged with command-line overrides.
    pub fn settings(&self) -> Result<Settings, CoreError> {
        let mut settings = Config::load()?.settings()?;
        if let Some(location) = &self.location {
            settings.location = location.clone();
        }
        if let Some(method) = &self.method {
            settings.method = method.parse::<CalculationMethod>()?;
        }
        if let Some(name) = &self.timezone {
            let tz = name
                .parse::<Tz>()
                .map_err(|_| ValidationError::UnknownTimezone(name.clone()))?;
            settings.timezone = Some(tz);
        }
        Ok(settings)
    }

    /// Date override, or today on the machine-local clock.
    pub fn date(&self) -> Result<NaiveDate, CoreError> {
        match &self.date {
            Some(raw) => NaiveDate::parse_from_str(raw, "%d-%m-%Y")
                .map_err(|_| ValidationError::BadDate(raw.clone()).into()),
            None => Ok(Local::now().date_naive()),
        }
    }
}

/// 12-hour clock rendering, matching the original UI.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}
