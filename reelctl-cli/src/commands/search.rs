//! Search-as-you-type over a profile's favorites.
//!
//! Each stdin line is one keystroke's worth of input. Lines are debounced
//! exactly like the web search box, so a burst of input only searches the
//! final value.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use reelctl_core::{filter_titles, MovieSummary, ReelConfig, SearchDebouncer, SearchEvent};
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tracing::debug;

use super::lists::load_profile;

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Profile export whose favorites are searched
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Debounce delay in milliseconds (default from config)
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

fn print_event(event: &SearchEvent, favorites: &[MovieSummary]) {
    match event {
        SearchEvent::Query(query) => {
            let hits = filter_titles(favorites, query);
            let noun = if hits.len() == 1 { "match" } else { "matches" };
            println!("{query}: {} {noun}", hits.len());
            for movie in hits {
                println!("  [{}] {}", movie.id, movie.title);
            }
        }
        SearchEvent::Cleared => println!("(cleared)"),
    }
}

pub async fn run_search(args: SearchArgs) -> Result<()> {
    let config = ReelConfig::load()?;
    let profile = load_profile(&args.input)?;
    let delay = args
        .delay_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.search.debounce());

    let (mut debouncer, mut events) = SearchDebouncer::new(delay);
    let mut lines = BufReader::new(io::stdin()).lines();
    debug!(delay_ms = delay.as_millis() as u64, "search started");

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => debouncer.push(line),
                None => break,
            },
            Some(event) = events.recv() => print_event(&event, &profile.favorite_movies),
        }
    }

    // Input closed: let the last query land before exiting.
    debouncer.settle().await;
    while let Ok(event) = events.try_recv() {
        print_event(&event, &profile.favorite_movies);
    }

    Ok(())
}
