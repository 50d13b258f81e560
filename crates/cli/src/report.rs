//! Terminal rendering for dashboard views, search cards and previews.
//!
//! Everything writes to a caller-supplied `Write` so the same code serves
//! stdout and tests.

use colored::Colorize;
use data_loader::TitleRecord;
use pipeline::{DashboardViews, LabelCount, ViewResult};
use std::io::{self, Write};

const BAR_WIDTH: usize = 40;
const IMDB_SEARCH_URL: &str = "https://www.imdb.com/find?q=";
const TRAILER_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Shown when a view over the filtered catalog has no rows
pub const NO_FILTERED_DATA: &str = "No data for the current filters.";
/// Shown when a whole-catalog view has no rows
pub const NO_CATALOG_DATA: &str = "No data in the catalog.";

/// Write every dashboard section in display order.
pub fn dashboard<W: Write>(out: &mut W, views: &DashboardViews) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "Catalog Dashboard ({} of {} titles selected)",
            views.filtered_titles, views.total_titles
        )
        .bold()
        .blue()
    )?;

    section(out, "Titles by Type")?;
    bars(out, &views.titles_by_type, NO_FILTERED_DATA)?;

    section(out, "Titles Added per Year")?;
    let by_year: Vec<LabelCount> = views
        .titles_by_year_added
        .iter()
        .map(|y| LabelCount::new(y.year.to_string(), y.count))
        .collect();
    bars(out, &by_year, NO_FILTERED_DATA)?;

    section(out, "Monthly Additions")?;
    let by_month: Vec<LabelCount> = views
        .monthly_trend
        .iter()
        .map(|m| LabelCount::new(m.label(), m.count))
        .collect();
    bars(out, &by_month, NO_FILTERED_DATA)?;

    section(out, "Top 10 Genres")?;
    bars(out, &views.top_genres, NO_FILTERED_DATA)?;

    section(out, "Genres by Type")?;
    let by_genre_type: Vec<LabelCount> = views
        .genre_by_type
        .iter()
        .map(|g| LabelCount::new(format!("{} ({})", g.genre, g.content_type), g.count))
        .collect();
    bars(out, &by_genre_type, NO_FILTERED_DATA)?;

    section(out, "Top 10 Countries")?;
    bars(out, &views.top_countries, NO_FILTERED_DATA)?;

    section(out, "Ratings")?;
    bars(out, &views.ratings, NO_FILTERED_DATA)?;

    section(out, "Top 10 Directors (full catalog)")?;
    global(out, &views.top_directors)?;

    section(out, "Top 10 Actors (full catalog)")?;
    global(out, &views.top_actors)?;

    section(out, "Top 10 Countries (full catalog)")?;
    global(out, &views.top_countries_global)
}

/// Write one search result as a card with lookup links.
pub fn card<W: Write>(out: &mut W, record: &TitleRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title_case(&record.title).bold())?;
    writeln!(out, "{}Type: {}", "• ".green(), record.content_type)?;
    writeln!(out, "{}Genre: {}", "• ".green(), record.listed_in)?;
    writeln!(out, "{}Release Year: {}", "• ".green(), record.release_year)?;
    writeln!(out, "{}Rating: {}", "• ".green(), record.rating.as_deref().unwrap_or("-"))?;
    writeln!(out, "{}Country: {}", "• ".green(), record.country)?;
    writeln!(out, "{}IMDb: {}", "• ".cyan(), imdb_link(&record.title))?;
    writeln!(out, "{}Trailer: {}", "• ".cyan(), trailer_link(&record.title))
}

/// Write rows as a fixed-width table.
pub fn table<W: Write>(out: &mut W, rows: &[TitleRecord]) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!(
            "{:<8} {:<8} {:<40} {:<6} {:<10} {:<30}",
            "ID", "Type", "Title", "Year", "Rating", "Country"
        )
        .bold()
    )?;
    for record in rows {
        writeln!(
            out,
            "{:<8} {:<8} {:<40} {:<6} {:<10} {:<30}",
            truncate(record.show_id.as_deref().unwrap_or("-"), 8),
            truncate(record.content_type.as_str(), 8),
            truncate(&record.title, 40),
            record.release_year,
            truncate(record.rating.as_deref().unwrap_or("-"), 10),
            truncate(&record.country, 30),
        )?;
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", heading.bold().blue())
}

fn global<W: Write>(out: &mut W, view: &ViewResult) -> io::Result<()> {
    match view {
        ViewResult::Available { counts } => bars(out, counts, NO_CATALOG_DATA),
        ViewResult::Unavailable { column } => writeln!(
            out,
            "{}",
            format!("Column '{}' is not present in the catalog.", column).yellow()
        ),
    }
}

fn bars<W: Write>(out: &mut W, counts: &[LabelCount], empty_message: &str) -> io::Result<()> {
    if counts.is_empty() {
        return writeln!(out, "{}", empty_message.yellow());
    }
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1);
    let width = counts
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0)
        .min(40);

    for entry in counts {
        writeln!(
            out,
            "{:<width$} {} {}",
            truncate(&entry.label, 40),
            bar(entry.count, max).green(),
            entry.count,
            width = width
        )?;
    }
    Ok(())
}

fn bar(count: usize, max: usize) -> String {
    let len = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(len)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Capitalize the first letter of every word and lowercase the rest.
///
/// A word starts after any character that is not a letter.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn imdb_link(title: &str) -> String {
    format!("{}{}", IMDB_SEARCH_URL, title.replace(' ', "+"))
}

fn trailer_link(title: &str) -> String {
    format!("{}{}+trailer", TRAILER_SEARCH_URL, title.replace(' ', "+"))
}
