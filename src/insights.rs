//! Report assembly and terminal rendering.
//!
//! `WardrobeReport` is the serializable artifact of an analysis run;
//! `WardrobeInsight` is the prioritized view the terminal renderer works
//! from. Rendering helpers return plain strings so writers decide where
//! the bytes go.

use crate::analysis::completeness::{CoverageMatrix, ESSENTIAL_OCCASIONS, ESSENTIAL_TYPES};
use crate::analysis::{analyze_gaps, calculate_completeness};
use crate::catalog::RecommendationCatalog;
use crate::core::{format_price, MissingItem, Score, WardrobeGap, WardrobeItem};
use chrono::{DateTime, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use im::Vector;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WardrobeReport {
    pub generated_at: DateTime<Utc>,
    pub item_count: usize,
    pub available_count: usize,
    pub completeness: Score,
    pub coverage: CoverageMatrix,
    pub gaps: Vec<WardrobeGap>,
}

/// Run gap analysis and completeness scoring over a collection.
pub fn build_report(items: &[WardrobeItem], catalog: &RecommendationCatalog) -> WardrobeReport {
    WardrobeReport {
        generated_at: Utc::now(),
        item_count: items.len(),
        available_count: items.iter().filter(|i| i.is_available()).count(),
        completeness: calculate_completeness(items),
        coverage: CoverageMatrix::build(items),
        gaps: analyze_gaps(items, catalog),
    }
}

/// Prioritized view over a report: gaps as detected, plus the top
/// recommendations across all gaps ordered by priority.
#[derive(Clone, Debug)]
pub struct WardrobeInsight {
    pub completeness: Score,
    pub gaps: Vector<WardrobeGap>,
    pub top_recommendations: Vector<MissingItem>,
}

pub fn generate_wardrobe_insight(report: &WardrobeReport) -> WardrobeInsight {
    let mut recommendations: Vec<MissingItem> = report
        .gaps
        .iter()
        .flat_map(|g| g.recommendations.iter().cloned())
        .collect();
    recommendations.sort_by_key(|r| r.priority);

    WardrobeInsight {
        completeness: report.completeness,
        gaps: report.gaps.iter().cloned().collect(),
        top_recommendations: recommendations.into_iter().take(5).collect(),
    }
}

pub fn format_coverage_matrix(coverage: &CoverageMatrix) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);

    let mut header: Vec<Cell> = vec![Cell::new("")];
    header.extend(
        ESSENTIAL_OCCASIONS
            .iter()
            .map(|o| Cell::new(o.to_string())),
    );
    table.set_header(header);

    for kind in ESSENTIAL_TYPES {
        let mut row: Vec<Cell> = vec![Cell::new(kind.to_string())];
        for occasion in ESSENTIAL_OCCASIONS {
            row.push(Cell::new(if coverage.is_covered(kind, occasion) {
                "yes"
            } else {
                "-"
            }));
        }
        table.add_row(row);
    }

    format!("{table}\n")
}

pub fn format_completeness_summary(report: &WardrobeReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}\n",
        "WARDROBE COMPLETENESS".bold()
    ));
    output.push_str(&format!(
        "{} of 9 essential cells covered ({}%)\n",
        report.coverage.satisfied_cells(),
        report.completeness
    ));
    output.push_str(&format!(
        "{} items, {} available\n\n",
        report.item_count, report.available_count
    ));
    output
}

pub fn format_gap_summary(gaps: &Vector<WardrobeGap>) -> String {
    let mut output = String::new();

    if gaps.is_empty() {
        output.push_str(&format!("{}\n", "No wardrobe gaps detected".green()));
        return output;
    }

    output.push_str(&format!("{}\n", "DETECTED GAPS".bold()));
    for (i, gap) in gaps.iter().enumerate() {
        let impact = match gap.impact {
            crate::core::Impact::High => gap.impact.to_string().red().to_string(),
            crate::core::Impact::Medium => gap.impact.to_string().yellow().to_string(),
            crate::core::Impact::Low => gap.impact.to_string().normal().to_string(),
        };
        output.push_str(&format!(
            "{}. {} [{} impact, {}% complete]\n",
            i + 1,
            gap.title.bold(),
            impact,
            gap.completion
        ));
        output.push_str(&format!("   {}\n", gap.description));
    }
    output.push('\n');
    output
}

pub fn format_recommendations(recommendations: &Vector<MissingItem>) -> String {
    let mut output = String::new();

    if recommendations.is_empty() {
        return output;
    }

    output.push_str(&format!("{}\n", "RECOMMENDED ADDITIONS".bold()));
    for rec in recommendations {
        output.push_str(&format!(
            "- {} ({}, {} priority, {})\n",
            rec.name.bold(),
            rec.kind,
            rec.priority,
            rec.price.display()
        ));
        output.push_str(&format!("  {}\n", rec.reason));

        if let Some(best) = rec.best_option() {
            output.push_str(&format!(
                "  Best buy: {} at {} for {}\n",
                best.product_name,
                best.retailer,
                format_price(best.price, &best.currency)
            ));
        }
        if let Some(pick) = &rec.stylist_pick {
            output.push_str(&format!(
                "  Stylist {}: {}\n",
                pick.stylist_name, pick.note
            ));
        }
    }
    output.push('\n');
    output
}

pub fn format_variants(variants: &[crate::core::OutfitVariant]) -> String {
    let mut output = String::new();

    if variants.is_empty() {
        output.push_str("No outfit variants could be generated.\n");
        return output;
    }

    for (i, variant) in variants.iter().enumerate() {
        output.push_str(&format!(
            "#{} {} (score {})\n",
            i + 1,
            variant.title.bold(),
            variant.score
        ));
        output.push_str(&format!("   {}\n", variant.description));
        for item in &variant.items {
            output.push_str(&format!("   - [{}] {}\n", item.kind, item.name));
        }
        if !variant.palette.is_empty() {
            output.push_str(&format!("   palette: {}\n", variant.palette.join(", ")));
        }
        for reason in &variant.reasons {
            output.push_str(&format!("   * {reason}\n"));
        }
        if let Some(weather) = &variant.weather {
            output.push_str(&format!(
                "   weather: {:?} suitability {}\n",
                weather.condition, weather.score
            ));
        }
        output.push('\n');
    }

    output
}

pub fn format_swap_options(options: &[crate::core::ItemSwapOption]) -> String {
    let mut output = String::new();

    if options.is_empty() {
        output.push_str("No swap candidates for this slot.\n");
        return output;
    }

    output.push_str(&format!("{}\n", "SWAP CANDIDATES".bold()));
    for (i, option) in options.iter().enumerate() {
        output.push_str(&format!(
            "{}. {} (compatibility {})\n",
            i + 1,
            option.item.name.bold(),
            option.compatibility
        ));
        output.push_str(&format!("   {}\n", option.reason));
    }

    output
}
