//! Patient Dashboard CLI
//!
//! Command-line tools for the dashboard model:
//! - Inspect themes and the organ catalog
//! - Replay interactions and print the resulting frame
//! - Check an asset directory
//! - Generate a config file

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use patient_dashboard::assets::{expected_files, missing_files};
use patient_dashboard::config::{generate_default_config, Config};
use patient_dashboard::dashboard::{DashboardFrame, Interaction, RightPanel};
use patient_dashboard::logging;
use patient_dashboard::{ThemeId, ViewMode};

#[derive(Parser)]
#[command(name = "dashboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and exercise the patient health dashboard model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List theme palettes and asset paths
    Themes,

    /// List catalog organs with placement and health metric
    Organs,

    /// Replay interactions from the initial state and print the frame
    Frame {
        /// Starting theme (default: from config)
        #[arg(long)]
        theme: Option<ThemeId>,
        /// Starting view mode (default: from config)
        #[arg(long)]
        mode: Option<ViewMode>,
        /// Interactions in order: toggle-theme, mode:<body|organs>,
        /// enter:<organ>, leave:<organ>, click:<organ>
        #[arg(short, long = "event")]
        events: Vec<Interaction>,
        /// Date used to compute the patient's age (default: today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Report expected images missing from an asset directory
    CheckAssets {
        /// Directory to check (default: assets.dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    logging::init(&config.logging);

    let dashboard = config.dashboard();

    match cli.command {
        Commands::Themes => {
            let bundles: Vec<_> = dashboard.registry().iter().collect();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bundles)?),
                OutputFormat::Table => {
                    for bundle in bundles {
                        println!("{}", bundle.id);
                        for (name, value) in bundle.palette.tokens() {
                            println!("  {:<16} {}", name, value);
                        }
                        println!("  {:<16} {}", "body_skin", bundle.body_skin_image);
                        println!("  {:<16} {}", "body_plain", bundle.body_plain_image);
                        println!("  {:<16} {}", "lungs_overlay", bundle.lungs_overlay_image);
                    }
                }
            }
        }

        Commands::Organs => {
            let catalog = dashboard.catalog();
            match cli.format {
                OutputFormat::Json => {
                    let organs: Vec<_> = catalog
                        .iter()
                        .map(|organ| {
                            serde_json::json!({
                                "organ": organ,
                                "metric": organ.metric(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&organs)?);
                }
                OutputFormat::Table => {
                    println!(
                        "{:<10} {:<10} {:>6} {:>6} {:>6} {:>6} {:<9} {:>5} {:<6}",
                        "ID", "NAME", "TOP", "LEFT", "WIDTH", "HEIGHT", "STATUS", "VALUE", "COLOR"
                    );
                    for organ in catalog.iter() {
                        let metric = organ.metric();
                        println!(
                            "{:<10} {:<10} {:>5}% {:>5}% {:>5}% {:>5}% {:<9} {:>5} {:<6}",
                            organ.id,
                            organ.name,
                            organ.position.top,
                            organ.position.left,
                            organ.size.width,
                            organ.size.height,
                            organ.status.label(),
                            metric.value,
                            metric.color
                        );
                    }
                }
            }
        }

        Commands::Frame {
            theme,
            mode,
            events,
            today,
        } => {
            let mut state = config.initial_state();
            if let Some(theme) = theme {
                if theme != state.active_theme() {
                    state.apply(Interaction::ToggleTheme);
                }
            }
            if let Some(mode) = mode {
                state.apply(Interaction::SelectViewMode(mode));
            }

            for event in events {
                let changed = state.apply(event.clone());
                tracing::debug!(%event, changed, "Applied interaction");
            }

            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let frame = dashboard.frame(&state, today);

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&frame)?),
                OutputFormat::Table => print_frame(&frame),
            }
        }

        Commands::CheckAssets { dir } => {
            let dir = dir.unwrap_or_else(|| config.assets.dir.clone());
            let missing = missing_files(&dir, dashboard.catalog())
                .with_context(|| format!("cannot read asset directory {}", dir.display()))?;

            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "dir": dir,
                        "expected": expected_files(dashboard.catalog()),
                        "missing": missing,
                    }))?
                ),
                OutputFormat::Table => {
                    if missing.is_empty() {
                        println!("All images present in {}", dir.display());
                    } else {
                        println!("Missing from {}:", dir.display());
                        for file in &missing {
                            println!("  {}", file);
                        }
                    }
                }
            }

            if !missing.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_frame(frame: &DashboardFrame) {
    println!("{}", frame.header.title);
    println!("  {}", frame.header.patient_details);
    println!("  [{}]", frame.header.toggle_label);
    println!("  container: {}", frame.container_class);
    println!();

    println!("View Mode:");
    for button in &frame.left.modes {
        let marker = if button.class.is_empty() { " " } else { "*" };
        println!("  {} {}", marker, button.label);
    }
    if let Some(rows) = &frame.left.organ_list {
        println!("Organs (Interactive):");
        for row in rows {
            let marker = if row.class.is_empty() { " " } else { "*" };
            println!("  {} {}", marker, row.name);
        }
    }
    println!();

    println!("Body: {} ({})", frame.middle.base_image.src, frame.middle.base_image.alt);
    for overlay in &frame.middle.overlays {
        println!(
            "  overlay {} [{}] {}",
            overlay.src,
            overlay.class,
            overlay.style.css()
        );
    }
    println!();

    println!("Organ Health Metrics:");
    match &frame.right {
        RightPanel::Meter(meter) => {
            println!("  {}", meter.heading);
            println!("  [{:<20}] {}% {}", "#".repeat(meter.value as usize / 5), meter.value, meter.color);
            println!("  {}", meter.status_text());
        }
        RightPanel::Prompt { text } => println!("  {}", text),
    }
}
