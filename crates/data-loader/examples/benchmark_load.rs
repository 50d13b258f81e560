use data_loader::DatasetCache;
use std::time::Instant;

fn main() {
    let cache = DatasetCache::new("netflix_titles.csv");

    println!("Loading title catalog from {:?}...\n", cache.path());

    let start = Instant::now();
    let dataset = cache.get().expect("Failed to load catalog");
    let cold = start.elapsed();

    let start = Instant::now();
    for _ in 0..1_000 {
        let _ = cache.get().expect("Cached catalog vanished");
    }
    let warm = start.elapsed() / 1_000;

    let undated = dataset.iter().filter(|r| r.date_added.is_none()).count();

    println!("=== Load Complete ===");
    println!("Cold load: {:?}", cold);
    println!("Cached get: {:?}", warm);
    println!("Titles: {}", dataset.len());
    println!("Columns: {}", dataset.columns().join(", "));
    println!("Without date_added: {}", undated);
    println!("Release years: {:?}", dataset.release_year_bounds());
    println!("\nPerformance: {:.0} titles/second",
             dataset.len() as f64 / cold.as_secs_f64());
}
