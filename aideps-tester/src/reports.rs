use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use crate::inspect::InspectionReport;

pub fn generate_console_report(out: &mut dyn Write, report: &InspectionReport) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Balance Table Summary".bright_cyan().bold())?;
    writeln!(out, "{}", "========================".cyan())?;
    writeln!(out, "Source: {}", report.source)?;
    writeln!(out, "Duplicate policy: {:?}", report.duplicate_policy)?;
    writeln!(out)?;

    let economy = &report.economy;
    writeln!(out, "{}", "💰 Pod Economy".bright_yellow().bold())?;
    writeln!(out, "Colony pod cost: {}", economy.colony_pod_cost)?;
    writeln!(out, "Colony pod upkeep: {}", economy.colony_pod_upkeep)?;
    writeln!(out, "Outpost pod cost: {}", economy.outpost_pod_cost)?;
    writeln!(out, "Ship upkeep: {}", economy.ship_upkeep)?;
    if let Some(projection) = &report.projection {
        writeln!(
            out,
            "With {} colonies: colony pod {:.2}, outpost pod {:.2}",
            projection.colonies, projection.colony_pod_cost, projection.outpost_pod_cost
        )?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "🧬 Metabolism Boosts".bright_yellow().bold())?;
    for summary in &report.metabolisms {
        let listed = if summary.boosts.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            summary.boosts.join(", ")
        };
        writeln!(out, "{:16} {listed}", summary.metabolism.key())?;
    }
    writeln!(
        out,
        "Listed specials: {}, indexed specials: {}",
        report.total_boosts, report.indexed_boosts
    )?;

    if !report.classifications.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "🔎 Classification".bright_yellow().bold())?;
        for entry in &report.classifications {
            match entry.metabolism {
                Some(metabolism) => {
                    writeln!(out, "{} -> {}", entry.special, metabolism.key().green())?;
                }
                None => writeln!(out, "{} -> {}", entry.special, "no metabolism".red())?,
            }
        }
    }

    if !report.conflicts.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "⚠️  Duplicate specials".bright_red().bold())?;
        for conflict in &report.conflicts {
            writeln!(
                out,
                "   • {} listed under {} and {}",
                conflict.boost.red(),
                conflict.first,
                conflict.second
            )?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &InspectionReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(out: &mut dyn Write, report: &InspectionReport) -> Result<()> {
    writeln!(out, "# AI Dependencies Balance Table\n")?;
    writeln!(out, "- **Source**: {}", report.source)?;
    writeln!(out, "- **Duplicate policy**: {:?}\n", report.duplicate_policy)?;

    let economy = &report.economy;
    writeln!(out, "## Pod Economy\n")?;
    writeln!(out, "| Constant | Value |")?;
    writeln!(out, "| --- | --- |")?;
    writeln!(out, "| colony_pod_cost | {} |", economy.colony_pod_cost)?;
    writeln!(out, "| colony_pod_upkeep | {} |", economy.colony_pod_upkeep)?;
    writeln!(out, "| outpost_pod_cost | {} |", economy.outpost_pod_cost)?;
    writeln!(out, "| ship_upkeep | {} |\n", economy.ship_upkeep)?;

    writeln!(out, "## Metabolism Boosts\n")?;
    for summary in &report.metabolisms {
        if summary.boosts.is_empty() {
            writeln!(out, "- **{}**: _none_", summary.metabolism)?;
        } else {
            writeln!(out, "- **{}**: {}", summary.metabolism, summary.boosts.join(", "))?;
        }
    }

    if !report.classifications.is_empty() {
        writeln!(out, "\n## Classification\n")?;
        for entry in &report.classifications {
            let target = entry
                .metabolism
                .map_or_else(|| "_none_".to_string(), |m| m.to_string());
            writeln!(out, "- `{}`: {target}", entry.special)?;
        }
    }

    if !report.conflicts.is_empty() {
        writeln!(out, "\n## Duplicate Specials\n")?;
        for conflict in &report.conflicts {
            writeln!(
                out,
                "- `{}` listed under {} and {}",
                conflict.boost, conflict.first, conflict.second
            )?;
        }
    }
    Ok(())
}
