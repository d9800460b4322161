//! Console commands

use crate::features::track_menu::{Album, Artist};
use crate::features::{MenuOptions, Track, TrackPermissions};

pub const HELP: &str = "\
commands:
  delete <track_id>...                  delete tracks (asks first)
  remove <playlist_id> <track_id>...    remove tracks from a playlist
  menu <track_id>... [--mobile] [--radio] [--no-queue] [--edit] [--delete]
       [--artist <id>] [--album <id>]   list context menu entries
  share <link> [name]                   share a link
  quit | quit!                          close (quit! skips the exit dialog)
  help";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit {
        /// Exit without consulting the close behavior
        force: bool,
    },
    Delete {
        track_ids: Vec<u64>,
    },
    Remove {
        playlist_id: u64,
        track_ids: Vec<u64>,
    },
    Menu {
        tracks: Vec<Track>,
        permissions: TrackPermissions,
        options: MenuOptions,
    },
    Share {
        link: String,
        name: Option<String>,
    },
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match name {
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit { force: false },
            "quit!" | "exit!" => Command::Quit { force: true },
            "delete" => Command::Delete {
                track_ids: parse_ids(&args)?,
            },
            "remove" => {
                let (playlist, tracks) = args
                    .split_first()
                    .ok_or("usage: remove <playlist_id> <track_id>...")?;
                Command::Remove {
                    playlist_id: parse_id(playlist)?,
                    track_ids: parse_ids(tracks)?,
                }
            }
            "menu" => parse_menu(&args)?,
            "share" => {
                let (link, name) = args.split_first().ok_or("usage: share <link> [name]")?;
                Command::Share {
                    link: link.to_string(),
                    name: (!name.is_empty()).then(|| name.join(" ")),
                }
            }
            other => return Err(format!("unknown command: {} (try `help`)", other)),
        };

        Ok(Some(command))
    }
}

fn parse_menu(args: &[&str]) -> Result<Command, String> {
    let mut permissions = TrackPermissions::default();
    let mut options = MenuOptions::default();
    let mut ids = Vec::new();
    let mut artist_id = None;
    let mut album_id = None;

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match *arg {
            "--mobile" => options.is_mobile = true,
            "--radio" => options.show_radio = true,
            "--no-queue" => options.show_add_to_queue = false,
            "--edit" => permissions.can_edit = true,
            "--delete" => permissions.can_delete = true,
            "--artist" => artist_id = Some(parse_id(args.next().ok_or("--artist needs an id")?)?),
            "--album" => album_id = Some(parse_id(args.next().ok_or("--album needs an id")?)?),
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {}", flag)),
            id => ids.push(id),
        }
    }

    let mut tracks: Vec<Track> = parse_ids(&ids)?.into_iter().map(Track::from_id).collect();
    if artist_id.is_some() || album_id.is_some() {
        let [track] = tracks.as_mut_slice() else {
            return Err("--artist and --album need a single track".to_string());
        };
        track.artists = artist_id
            .map(|id| Artist {
                id,
                name: String::new(),
            })
            .into_iter()
            .collect();
        track.album = album_id.map(|id| Album {
            id,
            name: String::new(),
        });
    }

    Ok(Command::Menu {
        tracks,
        permissions,
        options,
    })
}

fn parse_id(arg: &str) -> Result<u64, String> {
    arg.parse()
        .map_err(|_| format!("not a valid id: {}", arg))
}

/// At least one id
fn parse_ids(args: &[&str]) -> Result<Vec<u64>, String> {
    if args.is_empty() {
        return Err("expected at least one track id".to_string());
    }
    args.iter().map(|arg| parse_id(arg)).collect()
}
