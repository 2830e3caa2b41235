use chrono::Utc;
use clap::Args;
use muezzin_core::{find_next, DaySchedule, NextEvent, ProviderClient, Session};

use super::{format_12h, FetchArgs};

#[derive(Args, Debug)]
pub struct TimesArgs {
    #[command(flatten)]
    pub fetch: FetchArgs,
    /// Emit the structured payload as JSON instead of the rendered view
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: TimesArgs) -> Result<(), Box<dyn std::error::Error>> {
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
            "date": {
                "gregorian": schedule.readable_date,
                "hijri": schedule.hijri,
            },
            "location": session.location(),
            "timezone": schedule.timezone.name(),
            "timings": schedule.timings,
            "next": next,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    render(&session, schedule, next.as_ref());
    Ok(())
}

/// Full-page rendering, shared with watch mode.
pub fn render(session: &Session, schedule: &DaySchedule, next: Option<&NextEvent>) {
    println!("🌙 Ramadan Prayer Times");
    println!();
    println!(
        "🗓️  {} | {} | {} {} Hijri",
        schedule.readable_date, schedule.hijri.date, schedule.hijri.month, schedule.hijri.year
    );
    if let Some(location) = session.location() {
        println!(
            "📍 {} ({})",
            location.display_name,
            schedule.timezone.name()
        );
    }
    println!("Method: {}", session.settings.method.label());
    println!();
    println!("Suhoor ends (Fajr)   {}", format_12h(schedule.timings.fajr));
    println!("Iftar (Maghrib)      {}", format_12h(schedule.timings.maghrib));
    println!();
    for event in schedule.event_set().events() {
        println!("  {:<9}{}", event.name, format_12h(event.time));
    }
    println!();
    println!("{}", countdown_line(schedule, next));
}

/// One-line countdown summary, or the end-of-day message.
pub fn countdown_line(schedule: &DaySchedule, next: Option<&NextEvent>) -> String {
    match next {
        Some(next) => format!(
            "⏳ Next prayer: {} in {} (at {})",
            next.event.name,
            next.remaining,
            format_12h(next.event.time)
        ),
        None => format!(
            "🎉 All prayers completed for {}. Check back tomorrow.",
            schedule.readable_date
        ),
    }
}
