use super::ui;
use anyhow::{Context, Result};
use chrono::Utc;
use console::Style;
use discovery_config::{Config, OutputFormat};
use discovery_core::{Persona, RepositoryProfile};
use discovery_engine::{RankingService, SearchResponse};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn handle_rank(
    config: &Config,
    profiles_path: &Path,
    query: &str,
    persona: Option<&str>,
    top: Option<usize>,
    json: bool,
) -> Result<()> {
    let raw = fs::read_to_string(profiles_path)
        .with_context(|| format!("Failed to read {}", profiles_path.display()))?;
    let profiles: Vec<RepositoryProfile> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid profiles in {}", profiles_path.display()))?;

    let persona = match persona {
        Some(label) => label.parse::<Persona>()?,
        None => {
            let guessed = Persona::fallback_for_query(query);
            debug!(persona = %guessed, "No persona given, using query fallback");
            guessed
        }
    };

    let now = Utc::now();
    let service = RankingService::new(config.clone());
    let ranked = service.rank(&profiles, query, persona, now)?;

    let top_n = top.unwrap_or(config.output.top_n);
    let response = SearchResponse::from_ranked(query, persona, ranked, top_n, now);

    if json || config.output.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_table(&response);
    }

    Ok(())
}

fn print_table(response: &SearchResponse) {
    ui::print_header(&format!("Results for \"{}\"", response.query));
    ui::print_key_value("Persona", response.persona.as_str());
    ui::print_key_value(
        "Ranked",
        &format!(
            "{} (showing {})",
            response.metadata.total_ranked,
            response.repositories.len()
        ),
    );
    println!();

    if response.repositories.is_empty() {
        println!("{}", Style::new().dim().apply_to("No repositories to rank."));
        return;
    }

    let name_width = response
        .repositories
        .iter()
        .map(|r| console::measure_text_width(&r.full_name))
        .max()
        .unwrap_or(0)
        .max(10);

    let dim = Style::new().dim();
    println!(
        "{}",
        dim.apply_to(format!(
            "{:>3}  {:>5}  {}  {:>8}  {:>9}  {:>9}",
            "#",
            "score",
            ui::pad("repository", name_width),
            "stars",
            "relevance",
            "potential"
        ))
    );

    for (i, repo) in response.repositories.iter().enumerate() {
        let score = ui::score_style(repo.score_out_of_10)
            .apply_to(format!("{:>5.2}", repo.score_out_of_10));
        println!(
            "{:>3}  {}  {}  {:>8}  {:>9.4}  {:>9.4}",
            i + 1,
            score,
            ui::pad(&repo.full_name, name_width),
            repo.stars,
            repo.relevance_score,
            repo.potential_score
        );
        if let Some(description) = &repo.description {
            println!("     {}", dim.apply_to(description));
        }
    }
}
