//! Render one article to HTML

use anyhow::Result;

use super::load_articles;
use crate::content::extract_image_refs;
use crate::helpers::{attachment_url, content_type_for};
use crate::Vault;

/// Print the HTML of the article with the given slug
pub async fn run(vault: &Vault, slug: &str, show_attachments: bool) -> Result<()> {
    let outcome = load_articles(vault).await?;

    let Some(article) = outcome.articles.iter().find(|a| a.slug() == slug) else {
        anyhow::bail!("No article with slug: {}", slug);
    };

    if show_attachments {
        for name in extract_image_refs(article.content()) {
            println!(
                "{} -> {} ({})",
                name,
                attachment_url(&vault.config.attachment_route, &name),
                content_type_for(&name)
            );
        }
        return Ok(());
    }

    println!("{}", vault.transformer().to_html(article.content()));
    Ok(())
}
