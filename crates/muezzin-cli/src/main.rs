use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "muezzin", version, about = "Prayer times and next-prayer countdown")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and display the day's prayer times
    Times(commands::times::TimesArgs),
    /// Countdown to the next prayer
    Next(commands::next::NextArgs),
    /// Live auto-refreshing countdown view
    Watch(commands::watch::WatchArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Times(args) => commands::times::run(args).await,
        Commands::Next(args) => commands::next::run(args).await,
        Commands::Watch(args) => commands::watch::run(args).await,
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
