use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::Args;
use muezzin_core::{find_next, CoreError, DaySchedule, ProviderClient, Session};

use super::{times, FetchArgs};

/// Floor for the re-fetch cadence so the loop cannot hammer the providers.
const MIN_REFRESH_SECS: u64 = 30;

#[derive(Args, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,
    /// Schedule re-fetch interval in seconds (overrides config)
    #[arg(long)]
    pub interval: Option<u64>,
}

pub async fn run(args: WatchArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = args.fetch.settings()?;
    let refresh_secs = args
        .interval
        .unwrap_or(settings.refresh_secs)
        .max(MIN_REFRESH_SECS);
    let client = ProviderClient::new()?;
    let mut session = Session::new(settings);

    // A --date override pins the viewed day; otherwise the loop follows the
    // clock and looks ahead to tomorrow once today's events are exhausted.
    let pinned = args.fetch.date.is_some();
    let mut date = args.fetch.date()?;
    refresh_and_render(&mut session, &client, date).await?;

    let mut refetch = tokio::time::interval(Duration::from_secs(refresh_secs));
    refetch.tick().await; // the first tick completes immediately
    let mut second = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
            _ = refetch.tick() => {
                if !pinned {
                    let tz = session.schedule().map(|s| s.timezone).unwrap_or(Tz::UTC);
                    let now = Utc::now().with_timezone(&tz);
                    date = next_fetch_date(session.schedule(), now, date)?;
                }
                // A transient failure keeps the previous schedule on screen.
                if let Err(e) = refresh_and_render(&mut session, &client, date).await {
                    eprintln!("error: {e}");
                }
            }
            _ = second.tick() => {
                if let Some(schedule) = session.schedule() {
                    let now = Utc::now().with_timezone(&schedule.timezone);
                    let next = find_next(&schedule.event_set(), now)?;
                    print!("\r\x1b[2K{}", times::countdown_line(schedule, next.as_ref()));
                    std::io::stdout().flush()?;
                }
            }
        }
    }
    Ok(())
}

async fn refresh_and_render(
    session: &mut Session,
    client: &ProviderClient,
    date: NaiveDate,
) -> Result<(), Box<dyn std::error::Error>> {
    session.refresh(client, date).await?;
    let schedule = session.schedule().ok_or("no schedule fetched")?;
    let now = Utc::now().with_timezone(&schedule.timezone);
    let next = find_next(&schedule.event_set(), now)?;
    println!();
    times::render(session, schedule, next.as_ref());
    Ok(())
}

/// The date the next re-fetch should request: today in the reference
/// timezone, or tomorrow once today's events have all passed. Without a
/// fetched schedule the fallback date is kept.
fn next_fetch_date(
    schedule: Option<&DaySchedule>,
    now: DateTime<Tz>,
    fallback: NaiveDate,
) -> Result<NaiveDate, CoreError> {
    let Some(schedule) = schedule else {
        return Ok(fallback);
    };
    let today = now.date_naive();
    if schedule.date == today && find_next(&schedule.event_set(), now)?.is_none() {
        Ok(today.checked_add_days(Days::new(1)).unwrap_or(today))
    } else {
        Ok(today)
    }
}
