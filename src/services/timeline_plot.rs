use plotters::prelude::*;
use thiserror::Error;

use crate::services::timeline_types::TimelineSummary;

#[derive(Error, Debug)]
pub enum TimelinePlotError {
    #[error("timeline has no entries")]
    EmptyTimeline,
    #[error("failed to render timeline plot: {0}")]
    Render(String),
}

const SKILL_PALETTE: [RGBColor; 8] = [
    RGBColor(30, 122, 204),
    RGBColor(214, 97, 44),
    RGBColor(64, 160, 90),
    RGBColor(186, 66, 66),
    RGBColor(132, 94, 194),
    RGBColor(170, 130, 60),
    RGBColor(70, 160, 170),
    RGBColor(160, 90, 140),
];

/// Render a timeline summary as a PNG chart: one row per skill, each entry
/// drawn as a bar from its start to its end, with downtime windows shaded
/// across the full height.
pub fn write_timeline_png(
    output_path: &str,
    title: &str,
    summary: &TimelineSummary,
) -> Result<(), TimelinePlotError> {
    if summary.entries.is_empty() {
        return Err(TimelinePlotError::EmptyTimeline);
    }

    let skills = skill_rows(summary);
    let rows = skills.len() as i32;
    let max_x = summary.total_duration.max(1.0);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(format!("{title} Timeline"), ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(120)
        .build_cartesian_2d(0.0..max_x, 0..rows)
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Seconds")
        .y_desc("Skill")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .y_labels(skills.len().max(1))
        .y_label_formatter(&|row| {
            if *row < 0 {
                return String::new();
            }
            skills.get(*row as usize).cloned().unwrap_or_default()
        })
        .draw()
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;

    let downtime_color = RGBColor(210, 210, 210);
    let downtime_style = ShapeStyle::from(&downtime_color).filled();
    chart
        .draw_series(summary.downtime_windows.iter().map(|window| {
            Rectangle::new([(window.start, 0), (window.end, rows)], downtime_style)
        }))
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;

    chart
        .draw_series(summary.entries.iter().map(|entry| {
            let row = skills
                .iter()
                .position(|skill| *skill == entry.action.skill_name)
                .unwrap_or(0) as i32;
            let color = entry
                .action
                .color
                .as_deref()
                .and_then(parse_hex_color)
                .unwrap_or(SKILL_PALETTE[row as usize % SKILL_PALETTE.len()]);
            Rectangle::new(
                [(entry.start_time, row), (entry.end_time, row + 1)],
                ShapeStyle::from(&color).filled().stroke_width(1),
            )
        }))
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| TimelinePlotError::Render(e.to_string()))?;
    Ok(())
}

/// Distinct skill names in order of first use; defines the chart rows.
fn skill_rows(summary: &TimelineSummary) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for entry in &summary.entries {
        if !skills.contains(&entry.action.skill_name) {
            skills.push(entry.action.skill_name.clone());
        }
    }
    skills
}

fn parse_hex_color(text: &str) -> Option<RGBColor> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(red, green, blue))
}
