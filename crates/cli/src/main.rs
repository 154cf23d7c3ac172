use anyhow::{anyhow, bail, Context, Result};
use catalog::{Catalog, Facet, FacetSelection, SearchField};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{FacetProfile, SeedRating};
use recommender::Recommender;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// FlickRecs - content-based movie recommendations
#[derive(Parser)]
#[command(name = "flick-recs")]
#[command(about = "Movie recommendations from content similarity (genre, director, actor)", long_about = None)]
struct Cli {
    /// Path to the movie catalog CSV
    #[arg(short, long, default_value = "data/movies.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies from a list of rated seed titles
    Recommend {
        /// Facet to profile the seeds on
        #[arg(long, value_enum, default_value = "all")]
        facet: FacetArg,

        /// Seed title, repeatable; pairs up with --rating by position
        #[arg(long = "movie")]
        movies: Vec<String>,

        /// Rating for the movie at the same position (defaults to 5.0)
        #[arg(long = "rating")]
        ratings: Vec<f64>,

        /// Read seeds from a JSON file ([{"title": ..., "rating": ...}, ...])
        /// instead of --movie/--rating
        #[arg(long)]
        seeds_json: Option<PathBuf>,

        /// Show the facet profile behind the recommendations
        #[arg(long)]
        explain: bool,
    },

    /// Search the catalog for titles
    Search {
        /// Term to search for (case-insensitive substring match)
        #[arg(long)]
        term: String,

        /// Field to match the term against
        #[arg(long, value_enum, default_value = "title")]
        filter: FilterArg,
    },

    /// Show catalog statistics
    Stats,

    /// Run a recommendation throughput benchmark
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,

        /// Seed titles sampled per request
        #[arg(long, default_value = "3")]
        seeds_per_request: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FacetArg {
    Genre,
    Director,
    Actor,
    All,
}

impl From<FacetArg> for FacetSelection {
    fn from(arg: FacetArg) -> Self {
        match arg {
            FacetArg::Genre => FacetSelection::Single(Facet::Genre),
            FacetArg::Director => FacetSelection::Single(Facet::Director),
            FacetArg::Actor => FacetSelection::Single(Facet::Actor),
            FacetArg::All => FacetSelection::All,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FilterArg {
    Genre,
    Director,
    Actor,
    Title,
}

impl From<FilterArg> for SearchField {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::Genre => SearchField::Genre,
            FilterArg::Director => SearchField::Director,
            FilterArg::Actor => SearchField::Actor,
            FilterArg::Title => SearchField::Title,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // The catalog is a startup precondition: without it, nothing below
    // can run, so a load failure aborts here with context.
    println!("Loading movie catalog from {}...", cli.data.display());
    let start = Instant::now();
    let catalog = Arc::new(
        Catalog::load_from_csv(&cli.data).context("Failed to load movie catalog")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            facet,
            movies,
            ratings,
            seeds_json,
            explain,
        } => handle_recommend(catalog, facet, movies, ratings, seeds_json, explain).await?,
        Commands::Search { term, filter } => handle_search(catalog, term, filter)?,
        Commands::Stats => handle_stats(catalog)?,
        Commands::Benchmark {
            requests,
            seeds_per_request,
        } => handle_benchmark(catalog, requests, seeds_per_request).await?,
    }

    Ok(())
}

/// Assemble the seed list from the command line or a JSON file.
///
/// Ratings pair with movies by position and default to 5.0, the same
/// weight the rating form assigns when the user only picks titles.
/// An empty seed list is rejected here at the boundary; the engine
/// itself tolerates one, but `recommend` with no seeds is a mistake.
fn collect_seeds(
    movies: Vec<String>,
    ratings: Vec<f64>,
    seeds_json: Option<PathBuf>,
) -> Result<Vec<SeedRating>> {
    if let Some(path) = seeds_json {
        if !movies.is_empty() || !ratings.is_empty() {
            bail!("--seeds-json cannot be combined with --movie/--rating");
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        let seeds: Vec<SeedRating> = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse seed file {}", path.display()))?;
        if seeds.is_empty() {
            bail!("seed file {} contains no entries", path.display());
        }
        return Ok(seeds);
    }

    if movies.is_empty() {
        bail!("no seed movies provided; use --movie (repeatable) or --seeds-json");
    }
    if ratings.len() > movies.len() {
        bail!(
            "{} ratings given for {} movies",
            ratings.len(),
            movies.len()
        );
    }

    Ok(movies
        .into_iter()
        .enumerate()
        .map(|(i, title)| SeedRating::new(title, ratings.get(i).copied().unwrap_or(5.0)))
        .collect())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    facet: FacetArg,
    movies: Vec<String>,
    ratings: Vec<f64>,
    seeds_json: Option<PathBuf>,
    explain: bool,
) -> Result<()> {
    let seeds = collect_seeds(movies, ratings, seeds_json)?;
    let selection: FacetSelection = facet.into();

    let recommender = Recommender::new(catalog.clone());
    let start = Instant::now();
    let payload = recommender.recommend(selection, &seeds).await?;
    let elapsed = start.elapsed();

    println!(
        "{}",
        format!("Top {} recommendations ({selection}):", payload.len())
            .bold()
            .blue()
    );
    for (i, title) in payload.titles.iter().enumerate() {
        let genres = payload.genres[i].join(", ");
        let imdb = if payload.imdb_ids[i].is_empty() {
            "-".to_string()
        } else {
            payload.imdb_ids[i].clone()
        };
        println!(
            "{}. {} [{}] (imdb: {})",
            (i + 1).to_string().green(),
            title,
            genres,
            imdb
        );
    }
    if payload.is_empty() {
        println!("  (no candidates matched)");
    }
    println!("Computed in {elapsed:?}");

    if explain {
        print_profiles(&catalog, &seeds, selection);
    }
    Ok(())
}

/// Show the facet weights the ranking was derived from.
fn print_profiles(catalog: &Catalog, seeds: &[SeedRating], selection: FacetSelection) {
    let facets: Vec<Facet> = match selection {
        FacetSelection::Single(facet) => vec![facet],
        FacetSelection::All => Facet::ALL.to_vec(),
    };

    for facet in facets {
        let profile = FacetProfile::build(catalog, seeds, facet);
        println!("{}", format!("{facet} profile:").bold());
        if profile.is_empty() {
            println!("  (empty - no seed title matched the catalog)");
            continue;
        }
        for (value, weight) in profile.top_values(5) {
            println!("  {weight:>5.1}  {value}");
        }
    }
}

/// Handle the 'search' command
fn handle_search(catalog: Arc<Catalog>, term: String, filter: FilterArg) -> Result<()> {
    let results = catalog::search_top_ten(&catalog, &term, filter.into());

    println!(
        "{}",
        format!("Search results for '{term}':").bold().blue()
    );
    if results.is_empty() {
        println!("  (no matches)");
        return Ok(());
    }
    for title in &results {
        let (_, movie) = catalog
            .get_by_title(title)
            .ok_or_else(|| anyhow!("search returned unknown title {title:?}"))?;
        println!(
            "  {} [{}]",
            title,
            movie.genres.join(", ")
        );
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: Arc<Catalog>) -> Result<()> {
    let mut genres: HashSet<&str> = HashSet::new();
    let mut directors: HashSet<&str> = HashSet::new();
    let mut actors: HashSet<&str> = HashSet::new();
    let mut missing_imdb = 0usize;

    for movie in catalog.iter() {
        genres.extend(movie.genres.iter().map(String::as_str));
        directors.extend(movie.directors.iter().map(String::as_str));
        actors.extend(movie.actors.iter().map(String::as_str));
        if movie.imdb_id.is_none() {
            missing_imdb += 1;
        }
    }

    println!("{}", "Catalog statistics:".bold().blue());
    println!("  {} movies", catalog.len());
    println!("  {} distinct genres", genres.len());
    println!("  {} distinct directors", directors.len());
    println!("  {} distinct actors", actors.len());
    println!("  {} movies without an IMDB id", missing_imdb);
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<Catalog>,
    requests: usize,
    seeds_per_request: usize,
) -> Result<()> {
    if requests == 0 {
        bail!("benchmark needs at least one request");
    }
    let recommender = Recommender::new(catalog.clone());

    // Sample random seed lists up front so the timed section is pure
    // recommendation work.
    let seed_lists: Vec<Vec<SeedRating>> = (0..requests)
        .map(|_| {
            (0..seeds_per_request)
                .map(|_| {
                    let row = rand::random::<u32>() as usize % catalog.len();
                    SeedRating::new(catalog.records()[row].title.clone(), 5.0)
                })
                .collect()
        })
        .collect();

    let bench_start = Instant::now();
    let mut handles = vec![];
    for seeds in seed_lists {
        let recommender = recommender.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            recommender.recommend(FacetSelection::All, &seeds).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = bench_start.elapsed();

    timings.sort();
    let total: std::time::Duration = timings.iter().sum();
    let avg = total / (timings.len() as u32);
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("  Requests: {requests} ({seeds_per_request} seeds each)");
    println!("  Wall time: {wall_time:?}");
    println!("  Average latency: {avg:?}");
    println!("  P50 latency: {p50:?}");
    println!("  P95 latency: {p95:?}");
    println!("  P99 latency: {p99:?}");
    println!("  Throughput: {throughput:.2} requests/second");
    Ok(())
}
