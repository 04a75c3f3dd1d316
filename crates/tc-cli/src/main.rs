//! Tool Compare CLI

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tc_core::{
    report::{self, ReportFormat},
    routes::{self, Route},
    seo, sitemap,
    validation::validate_catalog,
    verdict::comparison_verdict,
    Catalog, Clock, CoreError, CoreResult, MissingScorePolicy, Severity, SiteConfig, SystemClock,
};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "tc")]
#[command(about = "Review & comparison catalog tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content directory (defaults to $CONTENT_DIR or ./content)
    #[arg(short, long, global = true)]
    content: Option<PathBuf>,

    /// Site origin for canonical URLs (defaults to $SITE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every page for content mistakes
    Validate,

    /// Print averages and winners for a comparison
    Scores {
        /// Comparison slug or path
        page: String,

        /// How missing scores are averaged (zero, exclude)
        #[arg(short, long)]
        missing: Option<String>,
    },

    /// Print the JSON-LD blocks of a page
    Schema {
        /// Review or comparison slug or path
        page: String,
    },

    /// Write a score report for a comparison
    Report {
        /// Comparison slug or path
        page: String,

        /// Output format (json, markdown)
        #[arg(short, long, default_value = "markdown")]
        output: String,

        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,

        /// How missing scores are averaged (zero, exclude)
        #[arg(short, long)]
        missing: Option<String>,
    },

    /// Generate sitemap.xml
    Sitemap {
        /// Output file (defaults to stdout)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// List every page path
    Routes,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set subscriber: {}", e);
    }

    let mut config = SiteConfig::default();
    if let Some(dir) = cli.content {
        config.content_dir = dir;
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let catalog = match Catalog::load(&config.content_dir) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Validate => cmd_validate(&catalog),
        Commands::Scores { page, missing } => {
            with_policy(&mut config, missing).and_then(|_| cmd_scores(&catalog, &config, &page))
        }
        Commands::Schema { page } => cmd_schema(&catalog, &config, &page),
        Commands::Report { page, output, output_file, missing } => with_policy(&mut config, missing)
            .and_then(|_| cmd_report(&catalog, &config, &page, &output, output_file)),
        Commands::Sitemap { output_file } => cmd_sitemap(&catalog, &config, output_file),
        Commands::Routes => {
            cmd_routes(&catalog);
            Ok(())
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn with_policy(config: &mut SiteConfig, missing: Option<String>) -> CoreResult<()> {
    if let Some(policy) = missing {
        config.missing_scores = policy
            .parse::<MissingScorePolicy>()
            .map_err(CoreError::Config)?;
    }
    Ok(())
}

/// Accept either a bare slug or a site path
fn resolve_slug(page: &str) -> String {
    if !page.starts_with('/') {
        return page.to_string();
    }
    match Route::parse(page) {
        Route::Tool(slug) | Route::Comparison(slug) => slug,
        _ => page.to_string(),
    }
}

fn parse_format(output: &str) -> ReportFormat {
    match output.to_lowercase().as_str() {
        "json" => ReportFormat::Json,
        _ => ReportFormat::Markdown,
    }
}

fn write_output(content: &str, output_file: Option<PathBuf>) -> CoreResult<()> {
    match output_file {
        Some(path) => {
            std::fs::write(&path, content)?;
            info!("Written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn cmd_validate(catalog: &Catalog) -> CoreResult<()> {
    info!(
        "Validating {} reviews and {} comparisons",
        catalog.review_count(),
        catalog.comparison_count()
    );

    let report = validate_catalog(catalog);

    println!("\nCatalog Validation\n{}", "=".repeat(50));
    for issue in &report.issues {
        println!("{}", issue);
    }
    println!("\n{}", "=".repeat(50));
    println!(
        "{} errors, {} warnings, {} notes",
        report.count(Severity::Error),
        report.count(Severity::Warning),
        report.count(Severity::Info)
    );

    if report.has_errors() {
        return Err(CoreError::Content("catalog has validation errors".to_string()));
    }
    Ok(())
}

fn cmd_scores(catalog: &Catalog, config: &SiteConfig, page: &str) -> CoreResult<()> {
    let slug = resolve_slug(page);
    let page = catalog
        .comparison(&slug)
        .ok_or_else(|| CoreError::Content(format!("no comparison '{}'", slug)))?;

    let aggregate = config.aggregator().aggregate(&page.contenders, &page.scores);

    println!("\n{}\n{}", page.title, "=".repeat(50));
    for (row, result) in page.scores.iter().zip(&aggregate.rows) {
        let winner = match result.winner.key() {
            Some(key) => page.display_name(key).to_string(),
            None => result.winner.to_string(),
        };
        println!("{:<30} {}", row.label, winner);
    }

    println!("\nAverages ({:?} for missing scores):", aggregate.policy);
    for average in &aggregate.averages {
        let marker = if aggregate.is_overall_winner(&average.key) { "*" } else { " " };
        let value = average
            .average
            .map(|v| format!("{:.1}", v))
            .unwrap_or_else(|| "n/a".to_string());
        println!("  {} {:<26} {}", marker, page.display_name(&average.key), value);
    }

    let year = SystemClock.current_year();
    println!("\n{}", comparison_verdict(page, &aggregate, year));

    Ok(())
}

fn cmd_schema(catalog: &Catalog, config: &SiteConfig, page: &str) -> CoreResult<()> {
    let slug = resolve_slug(page);

    let meta = if let Some(review) = catalog.review(&slug) {
        seo::review_meta(review, config)?
    } else if let Some(comparison) = catalog.comparison(&slug) {
        let aggregate = config
            .aggregator()
            .aggregate(&comparison.contenders, &comparison.scores);
        seo::comparison_meta(comparison, &aggregate, config)?
    } else {
        return Err(CoreError::Content(format!("no page '{}'", slug)));
    };

    let json = serde_json::to_string_pretty(&meta.schemas)
        .map_err(|e| CoreError::Report(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn cmd_report(
    catalog: &Catalog,
    config: &SiteConfig,
    page: &str,
    output: &str,
    output_file: Option<PathBuf>,
) -> CoreResult<()> {
    let slug = resolve_slug(page);
    let page = catalog
        .comparison(&slug)
        .ok_or_else(|| CoreError::Content(format!("no comparison '{}'", slug)))?;

    let aggregate = config.aggregator().aggregate(&page.contenders, &page.scores);
    let content = report::generate_report(page, &aggregate, parse_format(output))?;
    write_output(&content, output_file)
}

fn cmd_sitemap(catalog: &Catalog, config: &SiteConfig, output_file: Option<PathBuf>) -> CoreResult<()> {
    let xml = sitemap::render_sitemap(catalog, config)?;
    write_output(&xml, output_file)
}

fn cmd_routes(catalog: &Catalog) {
    println!("/");
    println!("{}", routes::TOOLS_PREFIX);
    println!("{}", routes::COMPARE_PREFIX);
    for page in catalog.reviews() {
        println!("{}", routes::tool_path(&page.slug));
    }
    for page in catalog.comparisons() {
        println!("{}", routes::comparison_path(&page.slug));
    }
}
