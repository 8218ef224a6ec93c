//! Change the profile's username, with the same local check the web client
//! runs before it sends the request.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use reelctl_core::catalog::validate_username;
use tracing::info;

use super::lists::{load_profile, save_profile};

#[derive(Parser, Debug)]
pub struct RenameArgs {
    /// Profile export (JSON, as returned by the profile endpoint)
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// New username (trimmed; at least 3 characters)
    #[arg(long)]
    pub username: String,

    /// Write the updated profile back to --in
    #[arg(long)]
    pub write: bool,
}

/// Outcome of applying a candidate username.
#[derive(Debug, PartialEq, Eq)]
enum Rename {
    Unchanged(String),
    Renamed { from: String, to: String },
}

fn apply(current: &str, candidate: &str) -> Result<Rename> {
    let next = validate_username(candidate)?;
    if next == current {
        return Ok(Rename::Unchanged(next.to_string()));
    }
    Ok(Rename::Renamed {
        from: current.to_string(),
        to: next.to_string(),
    })
}

pub fn run_rename(args: RenameArgs) -> Result<()> {
    let mut profile = load_profile(&args.input)?;

    match apply(&profile.username, &args.username)? {
        Rename::Unchanged(name) => println!("username unchanged: {name}"),
        Rename::Renamed { from, to } => {
            info!(%from, %to, "username changed");
            println!("renamed {from} -> {to}");
            profile.username = to;
            if args.write {
                save_profile(&args.input, &profile)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_new_name_is_applied() {
        assert_eq!(
            apply("cinephile", "  neo ").unwrap(),
            Rename::Renamed {
                from: "cinephile".into(),
                to: "neo".into()
            }
        );
    }

    #[test]
    fn same_name_is_a_no_op() {
        assert_eq!(
            apply("cinephile", " cinephile").unwrap(),
            Rename::Unchanged("cinephile".into())
        );
    }

    #[test]
    fn short_name_is_rejected() {
        let err = apply("cinephile", " ab ").unwrap_err();
        assert!(err.to_string().contains("at least 3 characters"));
    }
}
