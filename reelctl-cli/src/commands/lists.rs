//! Paged favorites/comments views over a profile export.
//!
//! `page` renders one page of a list; `remove` performs the optimistic delete
//! the web client does (drop the item, then resettle onto a page that still
//! exists) and optionally writes the profile back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use reelctl_core::catalog::{poster_url, Identified};
use reelctl_core::{Comment, MovieSummary, PageSnapshot, PagedList, ReelConfig, ReelError, UserProfile};
use serde::Serialize;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Favorites,
    Comments,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
pub struct PageArgs {
    /// Profile export (JSON, as returned by the profile endpoint)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Which list to page through
    #[arg(long, value_enum, default_value = "favorites")]
    pub list: ListKind,

    /// Page to show (1-based, clamped into range)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page (default from config)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Profile export (JSON, as returned by the profile endpoint)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Which list to remove from
    #[arg(long, value_enum, default_value = "favorites")]
    pub list: ListKind,

    /// Movie id (favorites) or comment id (comments) to remove
    #[arg(long)]
    pub id: i64,

    /// Page the user was viewing when removing
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Items per page (default from config)
    #[arg(long)]
    pub per_page: Option<usize>,

    /// Write the updated profile back to --in
    #[arg(long)]
    pub write: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// One line of text output per record.
trait ListLine {
    fn line(&self, config: &ReelConfig) -> String;
}

impl ListLine for MovieSummary {
    fn line(&self, config: &ReelConfig) -> String {
        let year = self
            .release_year
            .map(|y| format!(" ({y})"))
            .unwrap_or_default();
        let poster = poster_url(
            self.poster_url.as_deref(),
            &config.images.base_url,
            &config.images.poster_size,
        )
        .map(|url| format!("  <{url}>"))
        .unwrap_or_default();
        format!("[{}] {}{}{}", self.id, self.title, year, poster)
    }
}

impl ListLine for Comment {
    fn line(&self, _config: &ReelConfig) -> String {
        format!(
            "[{}] {} ({}): {}",
            self.id,
            self.movie_title,
            self.timestamp.format("%Y-%m-%d"),
            self.content
        )
    }
}

#[derive(Serialize)]
struct PageOutput<'a, T> {
    list: &'static str,
    #[serde(flatten)]
    snapshot: PageSnapshot,
    items: &'a [T],
}

impl ListKind {
    fn label(self) -> &'static str {
        match self {
            Self::Favorites => "favorites",
            Self::Comments => "comments",
        }
    }

    /// `--per-page` wins over config; zero is rejected when the list is built.
    fn page_size(self, config: &ReelConfig, explicit: Option<usize>) -> Result<usize> {
        if let Some(size) = explicit {
            return Ok(size);
        }
        let size = match self {
            Self::Favorites => config.pagination.favorites_page_size()?,
            Self::Comments => config.pagination.comments_page_size()?,
        };
        Ok(size.get())
    }
}

pub fn load_profile(path: &Path) -> Result<UserProfile> {
    let raw = fs::read_to_string(path)
        .context(format!("Failed to read profile: {}", path.display()))?;
    UserProfile::from_json(&raw).context(format!("Failed to parse profile: {}", path.display()))
}

pub fn save_profile(path: &Path, profile: &UserProfile) -> Result<()> {
    fs::write(path, profile.to_json_pretty()?)
        .context(format!("Failed to write profile: {}", path.display()))?;
    info!(path = %path.display(), "profile updated");
    Ok(())
}

fn render<T: ListLine + Serialize>(
    kind: ListKind,
    list: &PagedList<T>,
    format: OutputFormat,
    config: &ReelConfig,
) -> Result<String> {
    let snapshot = list.snapshot();
    match format {
        OutputFormat::Json => {
            let output = PageOutput {
                list: kind.label(),
                snapshot,
                items: list.current_items(),
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Text => {
            if list.is_empty() {
                return Ok(format!("No {} yet.", kind.label()));
            }
            let mut out = format!(
                "{}: page {}/{} ({} total)\n",
                kind.label(),
                snapshot.page,
                snapshot.total_pages,
                snapshot.total_items
            );
            for item in list.current_items() {
                out.push_str("  ");
                out.push_str(&item.line(config));
                out.push('\n');
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn show<T: ListLine + Serialize>(
    kind: ListKind,
    items: Vec<T>,
    page: i64,
    page_size: usize,
    format: OutputFormat,
    config: &ReelConfig,
) -> Result<()> {
    let mut list = PagedList::try_new(items, page_size)?;
    list.go_to_page(page);
    println!("{}", render(kind, &list, format, config)?);
    Ok(())
}

pub fn run_page(args: PageArgs) -> Result<()> {
    let config = ReelConfig::load()?;
    let profile = load_profile(&args.input)?;
    let page_size = args.list.page_size(&config, args.per_page)?;

    match args.list {
        ListKind::Favorites => show(
            args.list,
            profile.favorite_movies,
            args.page,
            page_size,
            args.format,
            &config,
        ),
        ListKind::Comments => show(
            args.list,
            profile.recent_comments,
            args.page,
            page_size,
            args.format,
            &config,
        ),
    }
}

/// Remove `id` from a list viewed at `page`, returning the resettled list.
fn remove_from<T: Identified>(
    items: Vec<T>,
    id: i64,
    page: i64,
    page_size: usize,
) -> Result<PagedList<T>> {
    let mut list = PagedList::try_new(items, page_size)?;
    list.go_to_page(page);
    let before = list.snapshot().page;
    list.remove_where(|item| item.id() == id)
        .ok_or_else(|| ReelError::item_not_found(id))?;
    info!(id, from_page = before, to_page = list.snapshot().page, "removed item");
    Ok(list)
}

pub fn run_remove(args: RemoveArgs) -> Result<()> {
    let config = ReelConfig::load()?;
    let mut profile = load_profile(&args.input)?;
    let page_size = args.list.page_size(&config, args.per_page)?;

    let output = match args.list {
        ListKind::Favorites => {
            let list = remove_from(profile.favorite_movies, args.id, args.page, page_size)?;
            let output = render(args.list, &list, args.format, &config)?;
            profile.favorite_movies = list.into_items();
            profile.total_favorites = profile.total_favorites.saturating_sub(1);
            output
        }
        ListKind::Comments => {
            let list = remove_from(profile.recent_comments, args.id, args.page, page_size)?;
            let output = render(args.list, &list, args.format, &config)?;
            profile.recent_comments = list.into_items();
            profile.total_comments = profile.total_comments.saturating_sub(1);
            output
        }
    };

    if args.write {
        save_profile(&args.input, &profile)?;
    }

    println!("{output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies(n: i64) -> Vec<MovieSummary> {
        (1..=n)
            .map(|id| MovieSummary {
                id,
                title: format!("Movie {id}"),
                release_year: Some(2000 + id as i32),
                poster_url: None,
            })
            .collect()
    }

    #[test]
    fn remove_from_last_page_resettles() {
        let list = remove_from(movies(9), 9, 5, 4).unwrap();
        assert_eq!(list.snapshot().page, 2);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn remove_unknown_id_fails() {
        let err = remove_from(movies(3), 42, 1, 4).unwrap_err();
        assert!(err.to_string().contains("No item with id 42"));
    }

    #[test]
    fn text_render_lists_current_page() {
        let config = ReelConfig::default();
        let mut list = PagedList::try_new(movies(5), 2).unwrap();
        list.go_to_page(3);
        let out = render(ListKind::Favorites, &list, OutputFormat::Text, &config).unwrap();
        assert_eq!(out, "favorites: page 3/3 (5 total)\n  [5] Movie 5 (2005)");
    }

    #[test]
    fn json_render_flattens_snapshot() {
        let config = ReelConfig::default();
        let list = PagedList::try_new(movies(3), 2).unwrap();
        let out = render(ListKind::Favorites, &list, OutputFormat::Json, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["list"], "favorites");
        assert_eq!(value["total_pages"], 2);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["items"][0]["releaseYear"], 2001);
    }

    #[test]
    fn empty_list_text() {
        let config = ReelConfig::default();
        let list: PagedList<Comment> = PagedList::try_new(Vec::new(), 5).unwrap();
        let out = render(ListKind::Comments, &list, OutputFormat::Text, &config).unwrap();
        assert_eq!(out, "No comments yet.");
    }
}
