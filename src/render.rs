//! Markdown rendering of explorer snapshots.
//!
//! This is the explorer's display surface: a status banner, the recipe grid,
//! and the detail overlay. Renderers only ever see an [`ExplorerSnapshot`].

use crate::client::types::{MealDetail, MealSummary};
use crate::explorer::state::{ExplorerSnapshot, UiStatus};

/// Escapes markdown syntax in catalog text so it renders as literal text.
/// Line breaks are folded into spaces unless `keep_newlines` is set.
fn escape_text(text: &str, keep_newlines: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '[' | ']' | '(' | ')' | '*' | '_' | '`' | '!' | '#' => {
                out.push('\\');
                out.push(c);
            }
            '\r' if !keep_newlines => {}
            '\n' if !keep_newlines => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encodes the characters that would end a markdown link target.
fn escape_url(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.trim().chars() {
        match c {
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '<' => out.push_str("%3C"),
            '>' => out.push_str("%3E"),
            ' ' => out.push_str("%20"),
            '\r' | '\n' => {}
            _ => out.push(c),
        }
    }
    out
}

pub fn render_status(status: &UiStatus) -> String {
    match status {
        UiStatus::Idle => String::new(),
        UiStatus::Loading(msg) => format!("⏳ {}", escape_text(msg, false)),
        UiStatus::Error(msg) => format!("⚠️ {}", escape_text(msg, false)),
    }
}

/// One entry per meal. The id in brackets is what `show_recipe` expects.
pub fn render_grid(meals: &[MealSummary]) -> String {
    meals
        .iter()
        .map(|meal| {
            let name = escape_text(&meal.name, false);
            let mut line = format!("- [{}] **{}**", escape_text(&meal.id, false), name);
            if let Some(thumb) = meal.thumbnail.as_deref().filter(|t| !t.trim().is_empty()) {
                line.push_str(&format!(" ![{}]({})", name, escape_url(thumb)));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_detail(meal: &MealDetail) -> String {
    let name = escape_text(&meal.name, false);
    let mut out = format!("## {}\n\n", name);

    if let Some(image) = meal.image.as_deref().filter(|i| !i.trim().is_empty()) {
        out.push_str(&format!("![{}]({})\n\n", name, escape_url(image)));
    }

    out.push_str("### Ingredients\n\n");
    for line in &meal.ingredients {
        out.push_str(&format!("- {}\n", escape_text(&line.to_string(), false)));
    }

    out.push_str("\n### Instructions\n\n");
    out.push_str(&escape_text(meal.instructions.as_deref().unwrap_or_default(), true));
    out.push('\n');

    if let Some(video) = meal.video_link() {
        out.push_str(&format!("\n[Watch Video]({})\n", escape_url(video)));
    }

    out
}

/// Full view: banner, clear-search affordance, grid, then overlay if open.
pub fn render_view(snapshot: &ExplorerSnapshot) -> String {
    let mut sections = Vec::new();

    let status = render_status(&snapshot.status);
    if !status.is_empty() {
        sections.push(status);
    }

    if snapshot.search_mode {
        // The query only describes the grid once its search has succeeded
        let showing_results = snapshot.status == UiStatus::Idle && !snapshot.meals.is_empty();
        match snapshot.query.as_deref() {
            Some(query) if showing_results => sections.push(format!(
                "Showing results for \"{}\" · [Clear Search]",
                escape_text(query, false)
            )),
            _ => sections.push("[Clear Search]".to_string()),
        }
    }

    if !snapshot.meals.is_empty() {
        sections.push(render_grid(&snapshot.meals));
    }

    if let Some(detail) = &snapshot.overlay {
        sections.push(format!("---\n{}", render_detail(detail)));
    }

    sections.join("\n\n")
}
