//! Land Cover Viewer CLI
//!
//! Command-line entry point for running a bbox analysis against a
//! classification backend and printing the resulting statistics tabs.
//!
//! # Usage
//!
//! ```bash
//! landcover-cli --bbox 19.0,51.0,19.2,51.1 --zoom 10
//!
//! # Override the configured backend and save the stats next to the images
//! landcover-cli --bbox 19.0,51.0,19.2,51.1 --server http://localhost:8000 --out results/
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use landcover_rust::api::AnalysisClient;
use landcover_rust::config::ViewerConfig;
use landcover_rust::models::{BoundingBox, ImageView, Selection};
use landcover_rust::services::export::{download_active_image, download_stats};
use landcover_rust::services::presenter::{ResultsPresenter, TabView, ViewMsg};
use landcover_rust::services::{RequestCoordinator, RunOutcome};

struct Args {
    bbox: BoundingBox,
    zoom: Option<u8>,
    model: Option<String>,
    server: Option<String>,
    config: Option<PathBuf>,
    out: Option<PathBuf>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut bbox = None;
    let mut zoom = None;
    let mut model = None;
    let mut server = None;
    let mut config = None;
    let mut out = None;

    let mut args = env::args().skip(1);
    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .with_context(|| format!("missing value for {}", flag))
        };
        match flag.as_str() {
            "--bbox" => {
                let raw = value()?;
                let coords: Vec<f64> = raw
                    .split(',')
                    .map(|c| c.trim().parse::<f64>())
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("invalid --bbox value '{}'", raw))?;
                if coords.len() != 4 {
                    bail!("--bbox expects west,south,east,north");
                }
                bbox = Some(BoundingBox::new(coords[0], coords[1], coords[2], coords[3]));
            }
            "--zoom" => zoom = Some(value()?.parse().context("invalid --zoom value")?),
            "--model" => model = Some(value()?),
            "--server" => server = Some(value()?),
            "--config" => config = Some(PathBuf::from(value()?)),
            "--out" => out = Some(PathBuf::from(value()?)),
            other => bail!("unknown argument '{}'", other),
        }
    }

    let bbox = bbox.context("--bbox west,south,east,north is required")?;
    Ok(Args {
        bbox,
        zoom,
        model,
        server,
        config,
        out,
    })
}

fn print_tabs(presenter: &mut ResultsPresenter) {
    let kinds: Vec<_> = presenter.tabs().iter().map(|t| (t.kind, t.label.clone())).collect();
    for (kind, label) in kinds {
        presenter.apply(ViewMsg::TabSelected(kind));
        println!("\n== {} ==", label);
        match presenter.render() {
            TabView::Percentage(bars) => {
                for bar in bars {
                    println!("  {}", bar.label());
                }
            }
            TabView::Area(view) => {
                for entry in view.all() {
                    println!("  {}. {}: {:.3} km2", entry.rank, entry.class_name, entry.area_km2);
                }
            }
            TabView::Density(view) => {
                println!("  {} ({})", view.pct_text(), view.bucket.label());
            }
            TabView::Adjacency(view) => {
                println!("  classes: {}", view.classes.join(", "));
                for (row, class) in view.classes.iter().enumerate() {
                    let cells: Vec<String> = (0..view.size())
                        .map(|col| match view.cell(row, col) {
                            Some(cell) => cell.pct_text(),
                            None => "-".to_string(),
                        })
                        .collect();
                    println!("  {:<14} {}", class, cells.join("  "));
                }
            }
            TabView::Fragmentation(entries) => {
                for entry in entries {
                    println!("  {}: {}", entry.class_name, entry.display_value());
                }
            }
            TabView::Empty => println!("  (no data)"),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_file(path)?,
        None => ViewerConfig::from_default_location()?,
    };
    if let Some(server) = args.server {
        config.server.base_url = server;
    }

    let client = AnalysisClient::new(&config.server.base_url, config.request_timeout())?;
    info!("Using backend at {}", client.base_url());

    let coordinator = RequestCoordinator::new(client, config.size_bounds());
    let selection = Selection::new(args.bbox, args.zoom.unwrap_or(config.analysis.zoom));
    let model_path = args.model.unwrap_or_else(|| config.analysis.model_path.clone());

    let outcome = coordinator
        .run_bbox(&selection, &model_path, &config.analysis_params())
        .await;

    let result = match outcome {
        RunOutcome::Completed(result) => result,
        RunOutcome::Rejected(e) => bail!("selection rejected: {}", e),
        RunOutcome::Failed(message) => bail!("analysis failed: {}", message),
        RunOutcome::Superseded => bail!("analysis superseded"),
    };

    if let Some(id) = result.analysis_id {
        info!("Analysis stored with id {}", id);
    }

    let mut presenter = ResultsPresenter::new();
    presenter.apply(ViewMsg::ResultLoaded(result));
    print_tabs(&mut presenter);

    if let Some(dir) = args.out {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
        if let Some(path) = download_stats(&presenter, &dir)? {
            info!("Wrote {}", path.display());
        }
        for view in ImageView::ALL {
            presenter.apply(ViewMsg::ImageSelected(view));
            if presenter.active_image() != view {
                continue;
            }
            if let Some(path) =
                download_active_image(&presenter, coordinator.client(), &dir).await?
            {
                info!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}
