use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info};

use super::error::{CliError, CliResult};
use crate::pointer::{PointerPosition, PointerTracker, SimulatedSurface};
use crate::view::{Gradient, GreetingView, RenderedSurface};

/// Output format for rendered surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Html,
    Json,
}

/// Result of replaying pointer moves through a tracker.
#[derive(Debug)]
pub struct Replay {
    /// Positions passed to the change callback, one per move.
    pub notifications: Vec<PointerPosition>,
    /// Surface rendered from the tracker's final position.
    pub surface: RenderedSurface,
    /// Listeners still registered after the tracker stopped.
    pub leaked_listeners: usize,
}

/// One line of `replay` output.
#[derive(Debug, Serialize)]
struct ReplayLine<'a> {
    x: i32,
    y: i32,
    background: &'a str,
}

/// Mount a tracker on a simulated surface, dispatch `moves`, then unmount.
pub fn replay(moves: &[PointerPosition]) -> Replay {
    let surface = SimulatedSurface::new();
    let mut tracker = PointerTracker::new(surface.clone());

    let notifications = Rc::new(RefCell::new(Vec::with_capacity(moves.len())));
    let sink = Rc::clone(&notifications);
    tracker.start(move |position| sink.borrow_mut().push(position));

    for position in moves {
        surface.dispatch(*position);
    }

    let rendered = GreetingView.render(tracker.position());
    tracker.stop();

    let leaked_listeners = surface.listener_count();
    debug!(moves = moves.len(), leaked_listeners, "replay finished");

    let notifications = notifications.borrow().clone();
    Replay {
        notifications,
        surface: rendered,
        leaked_listeners,
    }
}

/// Format a rendered surface.
pub fn format_surface(surface: &RenderedSurface, format: Format) -> CliResult<String> {
    match format {
        Format::Html => Ok(surface.to_html()),
        Format::Json => {
            let mut json = serde_json::to_string_pretty(surface)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// One JSON line per notification, each with the glow background it produced.
pub fn format_notifications(notifications: &[PointerPosition]) -> CliResult<String> {
    let mut out = String::new();
    for position in notifications {
        let background = Gradient::at(*position).css();
        let line = ReplayLine {
            x: position.x,
            y: position.y,
            background: &background,
        };
        out.push_str(&serde_json::to_string(&line)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write `contents` to `path`, or to stdout when no path is given.
pub fn write_output(contents: &str, path: Option<&Path>) -> CliResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!("Wrote {} bytes to {}", contents.len(), path.display());
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Stdout { source })
        }
    }
}
