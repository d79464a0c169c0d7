mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use daygrid_core::CalendarDate;
use daygrid_core::config::DaygridConfig;
use daygrid_core::store::EventStore;

#[derive(Parser)]
#[command(name = "daygrid")]
#[command(about = "Lay out month grids and browse your events")]
struct Cli {
    /// Whose events to operate on
    #[arg(short, long, global = true, default_value = "local")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid around a date
    Grid {
        /// Any date in the month to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List events grouped for a week, month or year view
    Events {
        /// View granularity: week, month or year
        #[arg(short, long, default_value = "week")]
        view: String,

        /// Date the view is centred on (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Override the start of the range (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Override the end of the range (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Search event titles
    Search {
        /// Case-insensitive title keyword (empty matches everything)
        #[arg(default_value = "")]
        keyword: String,

        #[arg(short, long, default_value_t = 1)]
        page: i64,

        /// Results per page (defaults to page_size from config)
        #[arg(short, long)]
        limit: Option<i64>,
    },
    /// Create a new event
    New {
        title: String,

        /// Event date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Time slot label or index, e.g. "9:00 AM - 10:00 AM" or 9
        #[arg(short, long)]
        time: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Remove { id: String },
    /// Mark an event completed
    Done {
        id: String,

        /// Mark it not completed instead
        #[arg(long)]
        undo: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DaygridConfig::load()?;
    let user = cli.user.as_str();

    match cli.command {
        Commands::Grid { date } => {
            let store = load_store(&config)?;
            commands::grid::run(&store, user, parse_date_or_today(date.as_deref())?)
        }
        Commands::Events {
            view,
            date,
            from,
            to,
        } => {
            let store = load_store(&config)?;
            let around = parse_date_or_today(date.as_deref())?;
            commands::events::run(&store, user, &view, around, from.as_deref(), to.as_deref())
        }
        Commands::Search {
            keyword,
            page,
            limit,
        } => {
            let store = load_store(&config)?;
            let limit = limit.unwrap_or(config.page_size);
            commands::search::run(&store, user, &keyword, page, limit)
        }
        Commands::New {
            title,
            date,
            time,
            description,
        } => {
            let mut store = load_store(&config)?;
            commands::new::run(&mut store, user, title, &date, time.as_deref(), description)
        }
        Commands::Remove { id } => {
            let mut store = load_store(&config)?;
            commands::remove::run(&mut store, user, &id)
        }
        Commands::Done { id, undo } => {
            let mut store = load_store(&config)?;
            commands::done::run(&mut store, user, &id, !undo)
        }
    }
}

fn load_store(config: &DaygridConfig) -> Result<EventStore> {
    Ok(EventStore::load(&config.events_path())?)
}

fn parse_date_or_today(date: Option<&str>) -> Result<CalendarDate> {
    match date {
        Some(s) => Ok(CalendarDate::parse(s)?),
        None => Ok(CalendarDate::today()),
    }
}
