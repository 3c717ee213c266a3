//! Format catalog, resolution, explanation and override output as text.

use crate::catalog::ProjectRecord;
use crate::resolve::CoverResolution;
use crate::selector::PhotoScore;
use crate::types::ProjectCoverConfig;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

fn table_with_header(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(header);
    table
}

/// Format the project list as a table.
pub fn format_projects_text(records: &[ProjectRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Projects")));
    if records.is_empty() {
        out.push_str("No projects found.\n");
        return out;
    }
    let mut table = table_with_header(vec!["Project", "Photos", "Cover", "Position", "Fit", "Source"]);
    for record in records {
        let cover = record
            .photos
            .first()
            .filter(|_| record.has_cover())
            .map(|p| p.raw_name.clone())
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![
            record.name.clone(),
            record.photos.len().to_string(),
            cover,
            record.cover_position.to_string(),
            record.cover_fit.to_string(),
            record.cover_source.as_str().to_string(),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    let without_cover = records.iter().filter(|r| !r.has_cover()).count();
    if without_cover > 0 {
        out.push_str(&format!(
            "\n{} project(s) have no photos and are skipped from cover displays.\n",
            without_cover
        ));
    }
    out
}

/// Format a single project resolution.
pub fn format_resolution_text(project: &str, resolution: &CoverResolution) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(project)));
    let Some(cover) = resolution.cover() else {
        out.push_str("  No photos: no cover available.\n");
        return out;
    };
    out.push_str(&format!(
        "  Cover: {} ({})\n",
        cover.raw_name,
        resolution.cover_source.as_str()
    ));
    out.push_str(&format!(
        "  Position: {} ({})\n",
        resolution.focal_position,
        resolution.position_source.as_str()
    ));
    out.push_str(&format!("  Fit: {}\n\n", resolution.fit));

    let mut table = table_with_header(vec!["#", "Photo", "Id"]);
    for (i, photo) in resolution.ordered_photos.iter().enumerate() {
        table.add_row(vec![i.to_string(), photo.raw_name.clone(), photo.id.clone()]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format the per-photo score breakdown.
pub fn format_explain_text(project: &str, scores: &[PhotoScore]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Scores: {}", project))
    ));
    if scores.is_empty() {
        out.push_str("No photos.\n");
        return out;
    }
    let mut table = table_with_header(vec!["#", "Photo", "Rules", "Points", "Score", "Position", ""]);
    for score in scores {
        let rules = if score.forced {
            "filename prefix".to_string()
        } else if score.hits.is_empty() {
            "-".to_string()
        } else {
            score
                .hits
                .iter()
                .map(|h| format!("{}:{} ({:+})", h.rule, h.matched, h.delta))
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![
            score.index.to_string(),
            score.name.clone(),
            rules,
            score.points.to_string(),
            format!("{:.1}", score.effective),
            score.focal_position.to_string(),
            if score.selected { "*".to_string() } else { String::new() },
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

/// Format a stored override.
pub fn format_override_text(project: &str, config: Option<&ProjectCoverConfig>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Override: {}", project))
    ));
    let Some(config) = config else {
        out.push_str("  No override stored; computed defaults apply.\n");
        return out;
    };
    let dash = || "-".to_string();
    out.push_str(&format!(
        "  Photo: {}\n",
        config.cover_photo_id.clone().unwrap_or_else(dash)
    ));
    out.push_str(&format!(
        "  Position: {}\n",
        config
            .cover_position
            .map(|p| p.to_string())
            .unwrap_or_else(dash)
    ));
    out.push_str(&format!(
        "  Fit: {}\n",
        config.cover_fit.map(|f| f.to_string()).unwrap_or_else(dash)
    ));
    out
}
