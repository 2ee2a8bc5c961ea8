// ABOUTME: Headless demo host for resizable-grid.
// ABOUTME: Loads config, replays a pointer trace through the grid, and prints the result.

mod preview;
mod trace;

use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grid_core::{ContainerRect, GridConfig};
use grid_drag::{GridProps, PointerDelta, ResizableGrid, TrackUpdate};
use grid_layout::{Orientation, SplitDescriptor, SplitKey};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use trace::TraceEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Ascii,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "resizable-grid",
    about = "Replay pointer traces against a resizable grid",
    version
)]
struct Cli {
    /// Config file (defaults to ~/.config/resizable-grid/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON array of pointer events to replay
    #[arg(long)]
    trace: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Format::Ascii)]
    format: Format,

    /// Preview width in characters
    #[arg(long, default_value_t = 60)]
    cols: usize,

    /// Preview height in characters
    #[arg(long, default_value_t = 20)]
    lines: usize,

    /// Container width in pixels, used when the trace does not mount one
    #[arg(long, default_value_t = 1200.0)]
    container_width: f64,

    /// Container height in pixels, used when the trace does not mount one
    #[arg(long, default_value_t = 800.0)]
    container_height: f64,

    /// Without a trace, drag the first split by a few steps instead
    #[arg(long, conflicts_with = "trace")]
    demo: bool,

    /// Write the effective config to the default path and exit
    #[arg(long)]
    write_config: bool,
}

/// Track state owned by the host, updated from the grid's change reports
#[derive(Debug)]
struct Host {
    rows: Vec<f64>,
    cols: Vec<f64>,
    changes: usize,
}

impl Host {
    fn apply(&mut self, update: TrackUpdate) {
        tracing::info!(
            "Tracks changed: rows={:?} cols={:?}",
            update.rows.as_deref(),
            update.cols.as_deref()
        );
        update.merge_into(&mut self.rows, &mut self.cols);
        self.changes += 1;
    }
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    rows: &'a [f64],
    cols: &'a [f64],
    template: String,
    changes: usize,
    splits: &'a [SplitDescriptor],
}

fn load_config(path: Option<&PathBuf>) -> Result<GridConfig> {
    match path {
        Some(path) => GridConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GridConfig::load_or_default()),
    }
}

fn replay<F>(
    grid: &mut ResizableGrid<F>,
    updates: &mpsc::Receiver<TrackUpdate>,
    host: &mut Host,
    events: &[TraceEvent],
) where
    F: FnMut(TrackUpdate),
{
    let start = Instant::now();

    for event in events {
        match *event {
            TraceEvent::Mount(rect) => grid.mount(rect),
            TraceEvent::Rect(rect) => grid.recompute_rect(rect),
            TraceEvent::Down { orientation, index } => {
                let key = SplitKey { orientation, index };
                if !grid.pointer_down(key) {
                    tracing::warn!("No draggable split {} in this layout", key);
                }
            }
            TraceEvent::Move { dx, dy, at_ms } => {
                grid.pointer_move(PointerDelta::new(dx, dy), start + Duration::from_millis(at_ms));
            }
            TraceEvent::Up => {
                grid.pointer_up();
            }
            TraceEvent::Unmount => grid.unmount(),
        }

        let before = host.changes;
        for update in updates.try_iter() {
            host.apply(update);
        }
        if host.changes != before {
            grid.set_tracks(host.rows.clone(), host.cols.clone());
        }
    }
}

/// Four 20px steps on the first draggable split, one throttle window apart
fn demo_events(props: &GridProps, config: &GridConfig) -> Vec<TraceEvent> {
    let layout = grid_layout::derive_layout(&props.rows, &props.cols, &props.splits, &config.handle);
    let Some(first) = layout.descriptors.first() else {
        tracing::warn!("Layout has no draggable splits, nothing to demo");
        return Vec::new();
    };

    let (dx, dy) = match first.orientation {
        Orientation::Horizontal => (0.0, 20.0),
        Orientation::Vertical => (20.0, 0.0),
    };
    trace::drag(first.key(), dx, dy, 4, config.resize.throttle_ms.max(1))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    if cli.write_config {
        let path = config.save_to_default().context("writing default config")?;
        println!("{}", path.display());
        return Ok(());
    }

    let props = GridProps::from(&config.layout);

    let events = match &cli.trace {
        Some(path) => {
            trace::load(path).with_context(|| format!("loading trace from {}", path.display()))?
        }
        None if cli.demo => demo_events(&props, &config),
        None => Vec::new(),
    };
    tracing::info!("Replaying {} pointer events", events.len());

    let mut host = Host {
        rows: props.rows.clone(),
        cols: props.cols.clone(),
        changes: 0,
    };

    let (tx, rx) = mpsc::channel();
    let mut grid = ResizableGrid::new(props, &config, move |update| {
        if tx.send(update).is_err() {
            tracing::warn!("Host stopped listening for track changes");
        }
    });

    if !events.iter().any(|e| matches!(e, TraceEvent::Mount(_))) {
        grid.mount(ContainerRect::sized(cli.container_width, cli.container_height));
    }

    replay(&mut grid, &rx, &mut host, &events);

    let frame = grid.render();
    match cli.format {
        Format::Json => {
            let report = Report {
                rows: &host.rows,
                cols: &host.cols,
                template: frame.layout.template.to_string(),
                changes: host.changes,
                splits: &frame.layout.descriptors,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Format::Ascii => {
            println!("grid-template: {}", frame.layout.template);
            println!("size: {} x {}", frame.width, frame.height);
            println!(
                "{}",
                preview::render_ascii(frame.layout, &host.rows, &host.cols, cli.cols, cli.lines)
            );
            for descriptor in &frame.layout.descriptors {
                println!("{}: {}", descriptor.key(), descriptor.css());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(events: &[TraceEvent]) -> Host {
        let config = GridConfig::default();
        let props = GridProps::from(&config.layout);
        let mut host = Host {
            rows: props.rows.clone(),
            cols: props.cols.clone(),
            changes: 0,
        };
        let (tx, rx) = mpsc::channel();
        let mut grid = ResizableGrid::new(props, &config, move |update| {
            tx.send(update).unwrap();
        });
        replay(&mut grid, &rx, &mut host, events);
        host
    }

    #[test]
    fn replay_merges_changes_into_host() {
        let mut events = vec![TraceEvent::Mount(ContainerRect::sized(1000.0, 1000.0))];
        events.extend(trace::drag(
            SplitKey {
                orientation: Orientation::Vertical,
                index: 2,
            },
            20.0,
            0.0,
            3,
            30,
        ));

        let host = run(&events);
        assert_eq!(host.changes, 3);
        assert_eq!(host.cols, vec![36.0, 44.0, 20.0]);
        assert_eq!(host.rows, vec![30.0, 30.0, 40.0]);
    }

    #[test]
    fn demo_drags_first_split() {
        let config = GridConfig::default();
        let events = demo_events(&GridProps::from(&config.layout), &config);

        assert_eq!(
            events.first(),
            Some(&TraceEvent::Down {
                orientation: Orientation::Vertical,
                index: 2
            })
        );

        let mut mounted = vec![TraceEvent::Mount(ContainerRect::sized(1000.0, 1000.0))];
        mounted.extend(events);
        let host = run(&mounted);
        assert_eq!(host.changes, 4);
        assert_eq!(host.cols, vec![38.0, 42.0, 20.0]);
    }

    #[test]
    fn unknown_split_is_skipped() {
        let events = vec![
            TraceEvent::Mount(ContainerRect::sized(1000.0, 1000.0)),
            TraceEvent::Down {
                orientation: Orientation::Horizontal,
                index: 4,
            },
            TraceEvent::Move {
                dx: 0.0,
                dy: 50.0,
                at_ms: 0,
            },
            TraceEvent::Up,
        ];

        let host = run(&events);
        assert_eq!(host.changes, 0);
    }
}
