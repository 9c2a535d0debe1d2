//! Listing helpers: tag collection and article filtering

use std::collections::{BTreeSet, HashMap};

use super::Article;

/// Every tag used by at least one article, deduplicated and sorted
pub fn available_tags(articles: &[Article]) -> Vec<String> {
    articles
        .iter()
        .flat_map(|a| a.tags().iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Tag counts, most used first
pub fn tag_counts(articles: &[Article]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        // an article counts once per tag even if it repeats it
        let unique: BTreeSet<&str> = article.tags().iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }
    let mut counts: Vec<_> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Filter applied to the article list
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    /// Match articles carrying any of these tags; empty matches all
    pub tags: Vec<String>,
    /// Case-insensitive text searched in title and content
    pub search: Option<String>,
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        let tag_match =
            self.tags.is_empty() || article.tags().iter().any(|t| self.tags.contains(t));

        let search_match = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query = query.to_lowercase();
                article.title().to_lowercase().contains(&query)
                    || article.content().to_lowercase().contains(&query)
            }
        };

        tag_match && search_match
    }

    /// Articles passing the filter, in their original order
    pub fn apply<'a>(&self, articles: &'a [Article]) -> Vec<&'a Article> {
        articles.iter().filter(|a| self.matches(a)).collect()
    }
}
