//! eventfeed CLI entry point.

use std::fmt::Display;

use anyhow::Result;
use chrono::{Local, TimeZone, Utc};
use clap::Parser;
use eventfeed_client::cli::{Cli, Commands, OutputFormat};
use eventfeed_client::output::{format_json, pretty};
use eventfeed_client::{session, views, Config};
use eventfeed_core::events::SortCriterion;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet {
        "eventfeed=warn,eventfeed_client=warn,eventfeed_core=warn"
    } else {
        "eventfeed=info,eventfeed_client=info,eventfeed_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_cli(&cli);
    tracing::debug!(
        today = %config.today(),
        utc = config.utc,
        seed_count = ?config.seed_count,
        "Resolved configuration"
    );

    if config.utc {
        run(cli, &config, Utc).await
    } else {
        run(cli, &config, Local).await
    }
}

/// Seeds the store and renders the requested view, all in `tz`.
async fn run<Tz>(cli: Cli, config: &Config, tz: Tz) -> Result<()>
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Display + Send + Sync,
{
    // Built once and passed to each view.
    let store = session::load_store(&session::seed_source(config, tz.clone())).await?;

    match cli.command {
        Commands::Map => {
            let pins = views::map_pins(&store);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&pins)?),
                OutputFormat::Pretty => println!("{}", pretty::format_pins(&pins)),
            }
        }
        Commands::Calendar => {
            let days = views::calendar_days(&store, &tz);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&days)?),
                OutputFormat::Pretty => println!("{}", pretty::format_days(&days)),
            }
        }
        Commands::Feed(feed_cmd) => {
            let criterion = feed_cmd
                .sort
                .map(SortCriterion::from)
                .unwrap_or(config.default_sort);
            let feed = store.feed(criterion);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&feed.events())?),
                OutputFormat::Pretty => {
                    println!("{}", pretty::format_feed(feed.events(), feed.criterion(), &tz))
                }
            }
        }
        Commands::Show(show_cmd) => {
            let criterion = show_cmd
                .sort
                .map(SortCriterion::from)
                .unwrap_or(config.default_sort);
            let event = views::resolve_event(&store, &show_cmd.target, criterion)?;
            let detail = views::event_detail(&event);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&detail)?),
                OutputFormat::Pretty => println!("{}", pretty::format_detail(&detail, &tz)),
            }
        }
        Commands::Sorts => {
            let options = views::sort_options(config.default_sort);
            match cli.format {
                OutputFormat::Json => println!("{}", format_json(&options)?),
                OutputFormat::Pretty => println!("{}", pretty::format_sort_options(&options)),
            }
        }
    }

    Ok(())
}
