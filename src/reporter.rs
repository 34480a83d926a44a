use crate::models::{IndexNowOutcome, LinkCheckResult, PageSpeedReport, SeoReport, Severity};
use anyhow::Result;
use colored::*;
use std::fs::File;
use std::io::Write;

pub struct Reporter;

impl Reporter {
    pub fn print_text_report(report: &SeoReport) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "B3ACON - SEO Report".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());
        println!();

        println!("{}: {}", "URL".bright_white().bold(), report.url);
        println!(
            "{}: {}",
            "Analyzed at".bright_white().bold(),
            report.analyzed_at
        );
        println!();

        println!(
            "{}: {}",
            "Score".bright_white().bold(),
            colorize_score(report.score)
        );
        println!();

        println!("{}", "Page".bright_yellow().bold().underline());
        println!(
            "  Title:       {}",
            report
                .title
                .as_deref()
                .map(|t| t.bright_white())
                .unwrap_or_else(|| "(missing)".bright_red())
        );
        println!(
            "  Description: {}",
            report
                .description
                .as_deref()
                .map(|d| d.normal())
                .unwrap_or_else(|| "(missing)".bright_red())
        );
        if let Some(keywords) = &report.keywords {
            println!("  Keywords:    {}", keywords);
        }
        println!();

        println!("{}", "Summary".bright_yellow().bold().underline());
        println!(
            "  Headings:        {}",
            report.headings.len().to_string().bright_green()
        );
        println!(
            "  Images:          {}",
            report.images.len().to_string().bright_green()
        );
        println!(
            "  Internal links:  {}",
            report.links.internal.len().to_string().bright_green()
        );
        println!(
            "  External links:  {}",
            report.links.external.len().to_string().bright_green()
        );

        let broken = report
            .links
            .broken
            .iter()
            .filter(|check| check.status == 0 || check.status >= 400)
            .count();
        if !report.links.broken.is_empty() {
            println!(
                "  Broken links:    {}",
                if broken > 0 {
                    broken.to_string().bright_red()
                } else {
                    broken.to_string().bright_green()
                }
            );
        }
        println!();

        if !report.technical_issues.is_empty() {
            println!("{}", "Technical Issues".bright_yellow().bold().underline());
            for issue in &report.technical_issues {
                let severity_str = match issue.severity {
                    Severity::High => "HIGH".bright_red(),
                    Severity::Medium => "MED ".yellow(),
                    Severity::Low => "LOW ".bright_cyan(),
                };
                println!("  [{}] {}", severity_str, issue.description);
                println!("         {}", issue.solution.dimmed());
            }
            println!();
        }

        if !report.suggestions.is_empty() {
            println!("{}", "Suggestions".bright_yellow().bold().underline());
            for (i, suggestion) in report.suggestions.iter().enumerate() {
                println!("  {}. {}", i + 1, suggestion);
            }
            println!();
        }

        println!("{}", "=".repeat(80).bright_blue());
    }

    pub fn print_pagespeed(pagespeed: &PageSpeedReport) {
        println!();
        println!("{}", "PageSpeed".bright_yellow().bold().underline());
        if !pagespeed.from_api {
            println!("  {}", "(simulated - no API key configured)".dimmed());
        }
        for (label, metrics) in [("Desktop", &pagespeed.desktop), ("Mobile", &pagespeed.mobile)] {
            println!(
                "  {}: score {} | FCP {:.1}s | LCP {:.1}s | CLS {:.2} | TTI {:.1}s",
                label.bright_white().bold(),
                colorize_score(metrics.score),
                metrics.fcp,
                metrics.lcp,
                metrics.cls,
                metrics.tti
            );
        }
        if !pagespeed.opportunities.is_empty() {
            println!("  Opportunities:");
            for opp in &pagespeed.opportunities {
                println!(
                    "    - {} ({:.0}ms)",
                    opp.title,
                    opp.savings_ms
                );
            }
        }
    }

    pub fn print_link_checks(checks: &[LinkCheckResult]) {
        println!();
        println!("{}", "Link Check".bright_yellow().bold().underline());
        for check in checks {
            let status = if check.status == 0 {
                "FAIL".bright_red()
            } else if check.status >= 400 {
                check.status.to_string().bright_red()
            } else if check.status >= 300 {
                check.status.to_string().yellow()
            } else {
                check.status.to_string().bright_green()
            };
            print!("  [{}] {}", status, check.url);
            if let Some(error) = &check.error {
                print!(" {}", format!("({})", error).dimmed());
            }
            println!();
        }
    }

    pub fn print_indexnow(outcome: &IndexNowOutcome) {
        println!();
        let label = if outcome.success {
            "IndexNow:".bright_green().bold()
        } else {
            "IndexNow:".yellow().bold()
        };
        println!("{} {}", label, outcome.message);
    }

    pub fn save_json_report(report: &SeoReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }
}

fn colorize_score(score: u32) -> ColoredString {
    if score >= 80 {
        score.to_string().bright_green()
    } else if score >= 50 {
        score.to_string().yellow()
    } else {
        score.to_string().bright_red()
    }
}
