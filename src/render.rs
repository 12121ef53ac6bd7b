use crate::api::placeholder_icon;
use crate::sort::SortDirection;
use crate::state::Phase;
use crate::types::{Hero, HeroSummary};
use colored::Colorize;
use std::fmt::Write;

fn win_rate(rate: f64) -> colored::ColoredString {
    let text = format!("{rate:.2}%");
    if rate >= 52.0 {
        text.green()
    } else if rate >= 48.0 {
        text.yellow()
    } else {
        text.red()
    }
}

fn icon(url: &str, size: u32, label: &str) -> String {
    if url.trim().is_empty() {
        placeholder_icon(size, label)
    } else {
        url.to_string()
    }
}

pub fn render_loading(attempt: u32, max_retries: u32) -> String {
    let mut out = "Loading hero data...".bold().to_string();
    if attempt > 0 {
        let retrying = format!("retrying ({attempt}/{max_retries})...");
        let _ = write!(out, "\n{}", retrying.dimmed());
    }
    out
}

pub fn render_failure(message: &str) -> String {
    format!(
        "{}\n{}\n{}",
        "Load failed".red().bold(),
        message,
        "press r to reload".dimmed()
    )
}

/// Ranked list; `rank` is the 1-based position in the full list.
pub fn render_list<'a>(
    heroes: impl IntoIterator<Item = (usize, &'a Hero)>,
    direction: SortDirection,
) -> String {
    let mut out = format!(
        "{}  {}\n",
        "Hero win rate ranking".bold(),
        format!("[win rate {}]", direction.arrow()).cyan()
    );
    let mut empty = true;
    for (rank, hero) in heroes {
        empty = false;
        let _ = writeln!(
            out,
            "{:>4}. {:<24} {:>8}",
            rank,
            hero.name,
            win_rate(hero.win_rate)
        );
    }
    if empty {
        let _ = writeln!(out, "{}", "no heroes".dimmed());
    }
    out
}

fn render_relations(
    out: &mut String,
    title: colored::ColoredString,
    list: &[HeroSummary],
    label: &str,
    none: &str,
) {
    let _ = writeln!(out, "{title}");
    if list.is_empty() {
        let _ = writeln!(out, "  {}", none.dimmed());
    }
    for h in list {
        let _ = writeln!(out, "  - {} ({})", h.name, icon(&h.icon, 32, label).dimmed());
    }
}

pub fn render_detail(hero: &Hero) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {}  [id {}]",
        hero.name.bold(),
        win_rate(hero.win_rate),
        hero.hero_id
    );
    let _ = writeln!(out, "  icon: {}", icon(&hero.icon, 64, "Hero"));
    render_relations(
        &mut out,
        "Countered by".red().bold(),
        &hero.countered_by,
        "C",
        "no counter data.",
    );
    render_relations(
        &mut out,
        "Synergy".blue().bold(),
        &hero.synergy,
        "S",
        "no synergy data.",
    );
    out
}

/// Whole screen for the interactive viewer.
pub fn render_phase(phase: &Phase) -> String {
    match phase {
        Phase::Idle => String::new(),
        Phase::Fetching {
            attempt,
            max_retries,
        } => render_loading(*attempt, *max_retries),
        Phase::Failed { message, .. } => render_failure(message),
        Phase::Ready {
            heroes, direction, ..
        } => {
            let ranked = heroes.iter().enumerate().map(|(i, h)| (i + 1, h));
            let mut out = render_list(ranked, *direction);
            if let Some(hero) = phase.selected_hero() {
                let _ = write!(out, "\n{}", render_detail(hero));
            }
            let _ = write!(
                out,
                "{}",
                "\n[s] sort  [n] details  [c] close  [r] reload  [q] quit".dimmed()
            );
            out
        }
    }
}
