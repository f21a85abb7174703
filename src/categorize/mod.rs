use regex::Regex;
use tracing::{debug, warn};

use crate::models::Category;

/// One entry of the ordered rule table: any keyword hit selects `category`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct KeywordRule {
    pub(crate) category: Category,
    pub(crate) keywords: &'static [&'static str],
}

/// Rule order matters: the first rule with a matching keyword wins.
pub(crate) const DEFAULT_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::FoodAndDrink,
        keywords: &["coffee", "cafe", "restaurant", "food", "groceries"],
    },
    KeywordRule {
        category: Category::Transportation,
        keywords: &["bus", "train", "metro", "transport", "taxi"],
    },
    KeywordRule {
        category: Category::Entertainment,
        keywords: &["movie", "stream", "game", "concert", "entertainment"],
    },
    KeywordRule {
        category: Category::Education,
        keywords: &["book", "tuition", "university", "course", "education"],
    },
    KeywordRule {
        category: Category::Utilities,
        keywords: &["rent", "electric", "water", "internet", "utilities"],
    },
];

#[derive(Debug)]
pub(crate) struct Categorizer {
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    category: Category,
    regex: Regex,
}

impl Categorizer {
    pub(crate) fn new(rules: &[KeywordRule]) -> Self {
        let compiled = rules
            .iter()
            .filter_map(|rule| {
                let alternation = rule
                    .keywords
                    .iter()
                    .filter(|k| !k.is_empty())
                    .map(|k| regex::escape(&k.to_lowercase()))
                    .collect::<Vec<_>>()
                    .join("|");
                // An empty alternation would match every description.
                if alternation.is_empty() {
                    return None;
                }
                match Regex::new(&alternation) {
                    Ok(regex) => Some(CompiledRule {
                        category: rule.category,
                        regex,
                    }),
                    Err(e) => {
                        warn!(category = %rule.category, error = %e, "skipping keyword rule");
                        None
                    }
                }
            })
            .collect();

        Self { rules: compiled }
    }

    pub(crate) fn standard() -> Self {
        Self::new(DEFAULT_RULES)
    }

    /// Map a free-text description to exactly one category.
    pub(crate) fn categorize(&self, description: &str) -> Category {
        self.explain(description)
            .map_or(Category::Other, |(category, _)| category)
    }

    /// Like [`Categorizer::categorize`], but also returns the keyword that
    /// decided it. `None` means the description falls through to `Other`.
    pub(crate) fn explain(&self, description: &str) -> Option<(Category, String)> {
        let desc_lower = description.to_lowercase();

        for rule in &self.rules {
            if let Some(m) = rule.regex.find(&desc_lower) {
                debug!(
                    description,
                    category = %rule.category,
                    keyword = m.as_str(),
                    "categorized"
                );
                return Some((rule.category, m.as_str().to_string()));
            }
        }

        debug!(description, "no keyword matched, using Other");
        None
    }
}

#[cfg(test)]
mod tests;
