use chrono::Utc;
use clap::Args;
use muezzin_core::{find_next, ProviderClient, Session};

use super::{times, FetchArgs};

#[derive(Args, Debug)]
pub struct NextArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,
    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: NextArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.fetch.settings()?;
    let date = args.fetch.date()?;
    let client = ProviderClient::new()?;

    let mut session = Session::new(settings);
    session.refresh(&client, date).await?;
    let schedule = session.schedule().ok_or("no schedule fetched")?;

    let now = Utc::now().with_timezone(&schedule.timezone);
    let next = find_next(&schedule.event_set(), now)?;

    if args.json {
        let payload = serde_json::json!({
            "found": next.is_some(),
            "next": next,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("{}", times::countdown_line(schedule, next.as_ref()));
    Ok(())
}
