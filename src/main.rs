//! # News Compare
//!
//! Fetches one section of a news site, ranks the articles by recency and
//! prints a listing, article text, tone tallies, a draft report or a
//! two-article comparison.
//!
//! ## Usage
//!
//! ```sh
//! news_compare --section Health --search "vaccine" --action draft
//! ```
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`; reports go to stdout.

use clap::Parser;
use news_compare::analysis::{compare, generate_draft};
use news_compare::outputs::{json, text};
use news_compare::{analyze_tone, load_config, Article, Pipeline, SearchTerms};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::error::Error;
use std::path::Path;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod cli;

use cli::{Action, Cli};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_compare starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let mut config = load_config(args.config.as_deref()).await?;
    if let Some(policy) = args.match_policy {
        config.match_policy = policy;
    }
    info!(
        section = %args.section,
        policy = ?config.match_policy,
        sections = ?config.section_names(),
        "Configuration ready"
    );

    // ---- Fetch cycle ----
    let pipeline = Pipeline::new(config)?;
    let terms = SearchTerms::parse(&args.search);
    let selection = match pipeline.fetch(&args.section, &terms).await {
        Ok(selection) => selection,
        Err(e) => {
            error!(section = %args.section, error = %e, "Error fetching articles");
            return Err(e.into());
        }
    };
    println!("Fetched {} articles\n", selection.len());

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = json::write_selection(&selection, Path::new(dir), &args.section).await {
            error!(path = %dir, error = %e, "Failed to write selection JSON");
        }
    }

    // ---- Action on the picked articles ----
    let picked: Vec<&Article> = if args.pick.is_empty() {
        selection.articles().iter().collect()
    } else {
        selection.pick(&args.pick)
    };
    if picked.len() < args.pick.len() {
        warn!(
            requested = ?args.pick,
            available = selection.len(),
            "Ignored out-of-range or repeated article indices"
        );
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match args.action {
        Action::List => print!("{}", text::render_listing(&selection)),
        Action::View => print!("{}", text::render_view(&picked)),
        Action::Tone => {
            let report = analyze_tone(pipeline.scorer(), picked.iter().copied());
            print!("{}", text::render_tone_report(&report));
        }
        Action::Draft => println!("{}", generate_draft(picked.iter().copied(), &mut rng)),
        Action::Compare => match picked.as_slice() {
            [first, second] => println!("{}", compare(first, second)),
            _ => {
                error!(picked = picked.len(), "Comparison needs exactly two articles");
                return Err(format!(
                    "compare needs exactly two picked articles, got {}",
                    picked.len()
                )
                .into());
            }
        },
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        action = ?args.action,
        articles = picked.len(),
        "Execution complete"
    );
    Ok(())
}
