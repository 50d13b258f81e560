use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{load_shared, ContentType, Dataset};
use pipeline::{search, DashboardViews, FilterOptions, FilterSelection};
use std::io;
use std::path::PathBuf;
use std::time::Instant;

mod report;

/// Catalog Insights - explore a movie & TV catalog from the terminal
#[derive(Parser)]
#[command(name = "catalog-insights")]
#[command(about = "Filter, aggregate and search a movie & TV title catalog", long_about = None)]
struct Cli {
    /// Path to the catalog CSV file
    #[arg(short, long, default_value = "netflix_titles.csv")]
    data_file: PathBuf,

    #[command(flatten)]
    filters: FilterArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Filter selection shared by every subcommand
#[derive(Args, Debug)]
struct FilterArgs {
    /// Content types to include (repeatable; default: every type in the catalog)
    #[arg(long = "type", value_enum, global = true)]
    types: Vec<TypeArg>,

    /// Earliest release year to include
    #[arg(long, global = true)]
    year_min: Option<i32>,

    /// Latest release year to include
    #[arg(long, global = true)]
    year_max: Option<i32>,

    /// Exact country strings to include (repeatable; default: no country filter)
    #[arg(long = "country", global = true)]
    countries: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    Movie,
    TvShow,
}

impl From<TypeArg> for ContentType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Movie => ContentType::Movie,
            TypeArg::TvShow => ContentType::TvShow,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print every dashboard view for the current selection
    Report {
        /// Emit the views as JSON instead of charts
        #[arg(long)]
        json: bool,
    },

    /// Search the filtered catalog by title
    Search {
        /// Part of a title (case-insensitive substring match)
        #[arg(long)]
        title: String,

        /// Maximum number of result cards to print
        #[arg(long, default_value = "9")]
        cards: usize,
    },

    /// Show the first rows of the filtered catalog
    Preview {
        /// Number of rows to show
        #[arg(long, default_value = "20")]
        rows: usize,
    },

    /// Write the filtered catalog to a CSV file
    Export {
        /// Output file
        #[arg(short, long, default_value = "filtered_netflix_data.csv")]
        output: PathBuf,
    },

    /// List the values the filters can take
    Options,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Load the catalog once for the whole process
    let start = Instant::now();
    let dataset = load_shared(&cli.data_file)
        .with_context(|| format!("Failed to load catalog from {}", cli.data_file.display()))?;
    println!(
        "{} Loaded {} titles in {:?}",
        "✓".green(),
        dataset.len(),
        start.elapsed()
    );

    let selection = build_selection(dataset, &cli.filters);
    tracing::debug!("Filter selection: {:?}", selection);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Report { json } => handle_report(dataset, &selection, json)?,
        Commands::Search { title, cards } => handle_search(dataset, &selection, &title, cards)?,
        Commands::Preview { rows } => handle_preview(dataset, &selection, rows)?,
        Commands::Export { output } => handle_export(dataset, &selection, output)?,
        Commands::Options => handle_options(dataset),
    }

    Ok(())
}

/// Turn command-line flags into a FilterSelection.
///
/// Flags that are left out keep the session defaults: every observed type,
/// the default year range, no country filter.
fn build_selection(dataset: &Dataset, args: &FilterArgs) -> FilterSelection {
    let mut selection = FilterSelection::defaults_for(dataset);
    if !args.types.is_empty() {
        selection = selection.with_types(args.types.iter().copied().map(ContentType::from));
    }
    let (default_min, default_max) = selection.year_range;
    selection = selection.with_year_range(
        args.year_min.unwrap_or(default_min),
        args.year_max.unwrap_or(default_max),
    );
    selection.with_countries(args.countries.iter().cloned())
}

/// Handle the 'report' command
fn handle_report(dataset: &Dataset, selection: &FilterSelection, json: bool) -> Result<()> {
    let filtered = selection.apply(dataset)?;
    let views = DashboardViews::compute(dataset, &filtered);

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        report::dashboard(&mut io::stdout().lock(), &views)?;
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(
    dataset: &Dataset,
    selection: &FilterSelection,
    title: &str,
    cards: usize,
) -> Result<()> {
    let filtered = selection.apply(dataset)?;
    let results = search(&filtered, title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    println!("Found {} result(s)", results.len());

    if results.is_empty() {
        println!("{}", "No matching titles found.".yellow());
        return Ok(());
    }
    let mut out = io::stdout().lock();
    for record in results.iter().take(cards) {
        report::card(&mut out, record)?;
    }
    Ok(())
}

/// Handle the 'preview' command
fn handle_preview(dataset: &Dataset, selection: &FilterSelection, rows: usize) -> Result<()> {
    let filtered = selection.apply(dataset)?;

    println!(
        "{}",
        format!("Filtered Dataset ({} of {} titles)", filtered.len(), dataset.len())
            .bold()
            .blue()
    );
    if filtered.is_empty() {
        println!("{}", report::NO_FILTERED_DATA.yellow());
        return Ok(());
    }
    report::table(&mut io::stdout().lock(), filtered.head(rows))?;
    Ok(())
}

/// Handle the 'export' command
fn handle_export(dataset: &Dataset, selection: &FilterSelection, output: PathBuf) -> Result<()> {
    let filtered = selection.apply(dataset)?;
    filtered
        .write_csv_file(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} Wrote {} titles to {}",
        "✓".green(),
        filtered.len(),
        output.display()
    );
    Ok(())
}

/// Handle the 'options' command
fn handle_options(dataset: &Dataset) {
    let options = FilterOptions::from_dataset(dataset);

    println!("{}", "Filter options:".bold().blue());
    let types: Vec<&str> = options.types.iter().map(|t| t.as_str()).collect();
    println!("{}Types: {}", "• ".green(), types.join(", "));
    match options.year_bounds {
        Some((min, max)) => println!("{}Release years: {} - {}", "• ".green(), min, max),
        None => println!("{}Release years: none", "• ".green()),
    }
    println!("{}Countries:", "• ".green());
    for country in &options.countries {
        println!("  - {}", country);
    }
}
