use gourmand::domain::{fixed_half_up, Cuisine};
use gourmand::search::{SearchCriteria, SearchResult};
use std::io::{self, Write};
use std::sync::Arc;

const MIN_NAME_WIDTH: usize = 20;

pub(crate) const BANNER: &str = "\
##########################################
#                                        #
#             GOURMAND CLI               #
#                                        #
#   Find your next favorite restaurant   #
#                                        #
##########################################
";

pub(crate) fn render_criteria<W: Write>(out: &mut W, criteria: &SearchCriteria) -> io::Result<()> {
    write!(out, "Searching for restaurants with criteria:\n\n{criteria}")
}

/// Writes the NAME, RATING, DISTANCE, PRICE, CUISINE table.
pub(crate) fn render_results<W: Write>(out: &mut W, results: &[SearchResult]) -> io::Result<()> {
    if results.is_empty() {
        return writeln!(out, "\nNo restaurants found matching your criteria.");
    }

    writeln!(out, "\nFound {} matching restaurants:\n", results.len())?;

    let name_width = results
        .iter()
        .map(|result| result.name.chars().count())
        .max()
        .unwrap_or(MIN_NAME_WIDTH)
        .max(MIN_NAME_WIDTH);

    writeln!(
        out,
        "{:<name_width$}  {:<7}  {:<8}  {:<6}  CUISINE",
        "NAME", "RATING", "DISTANCE", "PRICE"
    )?;
    writeln!(out, "{}", "-".repeat(name_width + 45))?;

    for result in results {
        writeln!(
            out,
            "{:<name_width$}  {:<7}  {:<8}  {:<6}  {}",
            result.name,
            result.rating,
            format!("{} mi", fixed_half_up(result.distance, 1)),
            format!("${}", fixed_half_up(result.price, 2)),
            result.cuisine
        )?;
    }

    Ok(())
}

pub(crate) fn render_results_json<W: Write>(
    out: &mut W,
    results: &[SearchResult],
) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out).map_err(serde_json::Error::io)
}

pub(crate) fn render_cuisines<W: Write>(out: &mut W, cuisines: &[Arc<Cuisine>]) -> io::Result<()> {
    writeln!(out, "Available cuisines ({}):\n", cuisines.len())?;
    for cuisine in cuisines {
        writeln!(out, "- {cuisine}")?;
    }
    Ok(())
}

pub(crate) fn render_cuisines_json<W: Write>(
    out: &mut W,
    cuisines: &[Arc<Cuisine>],
) -> serde_json::Result<()> {
    let names = cuisines
        .iter()
        .map(|cuisine| cuisine.name())
        .collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *out, &names)?;
    writeln!(out).map_err(serde_json::Error::io)
}
