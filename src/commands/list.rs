//! List vault content

use anyhow::Result;

use super::load_articles;
use crate::content::{listing, ArticleFilter};
use crate::Vault;

/// List vault content by type
pub async fn run(vault: &Vault, content_type: &str, filter: &ArticleFilter) -> Result<()> {
    let outcome = load_articles(vault).await?;

    match content_type {
        "article" | "articles" | "post" | "posts" => {
            let articles = filter.apply(&outcome.articles);
            if articles.is_empty() {
                println!("No articles match the current filters");
                return Ok(());
            }
            println!("{}", heading(&vault.config.title, "Articles", articles.len()));
            for article in articles {
                println!(
                    "  {} - {} [{}]",
                    article.create_date().unwrap_or("----------"),
                    article.title(),
                    article.slug()
                );
                if let Some(preview) = article.preview_content().filter(|p| !p.is_empty()) {
                    println!("      {}", preview);
                }
            }
        }
        "tag" | "tags" => {
            let tags = listing::tag_counts(&outcome.articles);
            println!("{}", heading(&vault.config.title, "Tags", tags.len()));
            for (tag, count) in tags {
                println!("  {} ({})", tag, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: article, tag",
                content_type
            );
        }
    }

    Ok(())
}

fn heading(site: &str, kind: &str, count: usize) -> String {
    if site.is_empty() {
        format!("{} ({}):", kind, count)
    } else {
        format!("{} - {} ({}):", site, kind, count)
    }
}
