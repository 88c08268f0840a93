//! Human-readable rendering of API payloads.
//!
//! `render_*` functions build the output as a string so it can be inspected;
//! `print_*` functions write it to stdout. Missing optional fields render as
//! `-`.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate};
use colored::Colorize;
use tabled::Table;

use crate::types::{
    Movie, MovieDetails, MovieList, MovieTableRow, PageEnvelope, Person, PersonDetails,
    PersonTableRow, ReviewPage,
};

const PLACEHOLDER: &str = "-";
const REVIEW_EXCERPT_CHARS: usize = 400;

pub fn render_people(envelope: &PageEnvelope<Person>) -> String {
    let rows: Vec<PersonTableRow> = envelope
        .results
        .iter()
        .map(|p| PersonTableRow {
            id: p.id,
            name: p.name.clone(),
            department: p
                .known_for_department
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            popularity: format!("{:.1}", p.popularity),
        })
        .collect();

    format!(
        "{}\n{}",
        page_heading("Popular people", envelope),
        Table::new(rows)
    )
}

pub fn render_movies(envelope: &PageEnvelope<Movie>, list: MovieList) -> String {
    let rows: Vec<MovieTableRow> = envelope
        .results
        .iter()
        .map(|m| MovieTableRow {
            id: m.id,
            title: m.title.clone(),
            released: display_date(m.release_date.as_deref()),
            rating: m
                .vote_average
                .map(|v| format!("{:.1}", v))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect();

    format!(
        "{}\n{}",
        page_heading(list.title(), envelope),
        Table::new(rows)
    )
}

pub fn render_person(person: &PersonDetails) -> String {
    let mut out = String::new();
    field(&mut out, "Name", &person.name);
    field(&mut out, "Id", &person.id.to_string());
    field(
        &mut out,
        "Birthday",
        &display_date(person.birthday.as_deref()),
    );
    field(
        &mut out,
        "Place of birth",
        or_placeholder(person.place_of_birth.as_deref()),
    );
    field(
        &mut out,
        "Department",
        or_placeholder(person.known_for_department.as_deref()),
    );
    field(&mut out, "Popularity", &format!("{:.1}", person.popularity));
    field(
        &mut out,
        "Biography",
        or_placeholder(person.biography.as_deref()),
    );
    out
}

/// Base movie information. Never includes reviews.
pub fn render_movie(movie: &MovieDetails) -> String {
    let mut out = String::new();
    field(&mut out, "Title", &movie.title);
    field(&mut out, "Id", &movie.id.to_string());
    field(&mut out, "Tagline", or_placeholder(movie.tagline.as_deref()));
    field(
        &mut out,
        "Released",
        &display_date(movie.release_date.as_deref()),
    );
    field(
        &mut out,
        "Runtime",
        &movie
            .runtime
            .map(|r| format!("{} min", r))
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
    );

    let genres = movie
        .genres
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    field(
        &mut out,
        "Genres",
        if genres.is_empty() {
            PLACEHOLDER
        } else {
            genres.as_str()
        },
    );

    let rating = match (movie.vote_average, movie.vote_count) {
        (Some(avg), Some(count)) => format!("{:.1} ({} votes)", avg, count),
        (Some(avg), None) => format!("{:.1}", avg),
        _ => PLACEHOLDER.to_string(),
    };
    field(&mut out, "Rating", &rating);
    field(&mut out, "Overview", or_placeholder(movie.overview.as_deref()));
    out
}

/// Review entries only. Never includes base movie fields.
pub fn render_reviews(page: &ReviewPage) -> String {
    let reviews = &page.reviews;
    let mut out = String::new();

    if reviews.results.is_empty() {
        let _ = writeln!(out, "No reviews yet.");
        return out;
    }

    let _ = writeln!(
        out,
        "{} ({} total)",
        "Reviews".bold(),
        reviews
            .total_results
            .unwrap_or(reviews.results.len() as u64)
    );

    for review in &reviews.results {
        let _ = writeln!(
            out,
            "\n{} {}",
            review.author.cyan().bold(),
            review_date(review.created_at.as_deref()).dimmed()
        );
        let _ = writeln!(out, "{}", excerpt(&review.content, REVIEW_EXCERPT_CHARS));
        if let Some(url) = &review.url {
            let _ = writeln!(out, "{}", url.dimmed());
        }
    }
    out
}

pub fn print_people(envelope: &PageEnvelope<Person>) {
    println!("{}", render_people(envelope));
}

pub fn print_movies(envelope: &PageEnvelope<Movie>, list: MovieList) {
    println!("{}", render_movies(envelope, list));
}

pub fn print_person(person: &PersonDetails) {
    print!("{}", render_person(person));
}

pub fn print_movie(movie: &MovieDetails) {
    print!("{}", render_movie(movie));
}

pub fn print_reviews(page: &ReviewPage) {
    print!("{}", render_reviews(page));
}

fn page_heading<T>(title: &str, envelope: &PageEnvelope<T>) -> String {
    match envelope.total_pages {
        Some(total) => format!("{} - page {} of {}", title.bold(), envelope.page, total),
        None => format!("{} - page {}", title.bold(), envelope.page),
    }
}

fn field(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{} {}", format!("{}:", label).bold(), value);
}

fn or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// Reformats `YYYY-MM-DD` dates for display; anything else is shown as-is.
fn display_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v, "%Y-%m-%d")
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|_| v.to_string()),
        None => PLACEHOLDER.to_string(),
    }
}

fn review_date(value: Option<&str>) -> String {
    match value {
        Some(v) => DateTime::parse_from_rfc3339(v)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| v.to_string()),
        None => String::new(),
    }
}

fn excerpt(content: &str, max_chars: usize) -> String {
    let trimmed = content.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }

    let cut: String = trimmed.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Genre, Review};

    fn movie_details() -> MovieDetails {
        MovieDetails {
            id: 550,
            title: "Fight Club".to_string(),
            tagline: Some("Mischief. Mayhem. Soap.".to_string()),
            release_date: Some("1999-10-15".to_string()),
            runtime: Some(139),
            genres: vec![Genre {
                id: 18,
                name: "Drama".to_string(),
            }],
            vote_average: Some(8.4),
            vote_count: Some(26280),
            overview: Some("An insomniac office worker...".to_string()),
        }
    }

    fn review_page() -> ReviewPage {
        ReviewPage {
            id: 550,
            reviews: PageEnvelope {
                page: 1,
                results: vec![Review {
                    id: "5b1c13b9c3a36848f2026384".to_string(),
                    author: "Goddard".to_string(),
                    content: "Pretty awesome movie.".to_string(),
                    created_at: Some("2018-06-09T17:51:53.359Z".to_string()),
                    url: None,
                }],
                total_pages: Some(1),
                total_results: Some(1),
            },
        }
    }

    #[test]
    fn movie_rendering_has_no_review_content() {
        let out = render_movie(&movie_details());
        assert!(out.contains("Fight Club"));
        assert!(out.contains("Drama"));
        assert!(out.contains("139 min"));
        assert!(!out.contains("Goddard"));
    }

    #[test]
    fn review_rendering_has_no_movie_fields() {
        let out = render_reviews(&review_page());
        assert!(out.contains("Goddard"));
        assert!(out.contains("Pretty awesome movie."));
        assert!(out.contains("2018-06-09"));
        assert!(!out.contains("Fight Club"));
        assert!(!out.contains("Tagline"));
    }

    #[test]
    fn empty_reviews() {
        let mut page = review_page();
        page.reviews.results.clear();
        assert_eq!(render_reviews(&page), "No reviews yet.\n");
    }

    #[test]
    fn movie_list_heading_names_the_listing() {
        let envelope = PageEnvelope {
            page: 2,
            results: vec![Movie {
                id: 1,
                title: "A".to_string(),
                release_date: None,
                vote_average: None,
                popularity: 0.0,
            }],
            total_pages: None,
            total_results: None,
        };

        let now_playing = render_movies(&envelope, MovieList::NowPlaying);
        assert!(now_playing.contains("Now playing movies"));
        assert!(now_playing.contains("page 2"));
        assert!(now_playing.contains(" A "));

        let popular = render_movies(&envelope, MovieList::Popular);
        assert!(popular.contains("Popular movies"));
    }

    #[test]
    fn dates_and_placeholders() {
        assert_eq!(display_date(Some("1999-10-15")), "Oct 15, 1999");
        assert_eq!(display_date(Some("")), PLACEHOLDER);
        assert_eq!(display_date(Some("1999")), "1999");
        assert_eq!(or_placeholder(Some("  ")), PLACEHOLDER);
    }

    #[test]
    fn long_reviews_are_shortened() {
        let long = "a".repeat(500);
        let short = excerpt(&long, 10);
        assert_eq!(short.chars().count(), 11);
        assert!(short.ends_with('…'));
    }
}
