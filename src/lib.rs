pub mod analyzer;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod headings;
pub mod http_client;
pub mod images;
pub mod indexnow;
pub mod link_checker;
pub mod links;
pub mod minify;
pub mod models;
pub mod pagespeed;
pub mod reporter;
pub mod scoring;
pub mod technical;

use anyhow::Result;
use cli::Cli;
use colored::*;
use config::Config;
use fetcher::{Fetcher, normalize_url};
use indexnow::IndexNowClient;
use link_checker::LinkChecker;
use pagespeed::PageSpeedClient;
use reporter::Reporter;
use scraper::Html;
use url::Url;

pub async fn run(args: Cli, config: Config) -> Result<()> {
    let target = normalize_url(&args.url);

    if args.verbose {
        println!("{}", "B3ACON - SEO Analyzer".bright_cyan().bold());
        println!("{} {}", "Analyzing:".bright_white().bold(), target);
        println!();
    }

    // All clients are constructed once here and passed down; nothing holds
    // module-level state.
    let client = http_client::build_http_client(args.timeout)?;
    let fetcher = Fetcher::new(client.clone());

    let html = fetcher.fetch_html(&target).await?;
    let mut report = analyzer::analyze_html(&html, &target)?;

    if args.check_links {
        if args.verbose {
            println!("{}", "Checking links...".bright_yellow());
        }
        let base_url = Url::parse(&report.url)?;
        let document = Html::parse_document(&html);
        let urls = links::collect_checkable_urls(&document, &base_url);
        let checker = LinkChecker::new(client.clone());
        report.links.broken = checker.check_urls(&urls).await;
    }

    let pagespeed_report = if args.pagespeed {
        if args.verbose {
            println!("{}", "Running PageSpeed analysis...".bright_yellow());
        }
        let ps_client = PageSpeedClient::new(client.clone(), config.pagespeed_api_key.clone());
        Some(ps_client.analyze(&report.url).await?)
    } else {
        None
    };

    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_text_report(&report);
            if !report.links.broken.is_empty() {
                Reporter::print_link_checks(&report.links.broken);
            }
            if let Some(ps) = &pagespeed_report {
                Reporter::print_pagespeed(ps);
            }
        }
    }

    if args.indexnow {
        let in_client = IndexNowClient::new(
            client,
            config.indexnow_api_key.clone(),
            config.indexnow_key_location.clone(),
        );
        let outcome = in_client.submit(&[report.url.clone()]).await?;
        Reporter::print_indexnow(&outcome);
    }

    if let Some(filename) = &args.save {
        Reporter::save_json_report(&report, filename)?;
    }

    Ok(())
}
