use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{category::ResourceCategory, grouping::Categorized};

/// `<Name> (<Category>)`, where the category alternation is generated from
/// [`ResourceCategory::ALL`]. The name is the whole run of name characters
/// in front of the category.
static RECOMMENDATION_RE: Lazy<Regex> = Lazy::new(|| {
    let categories = ResourceCategory::ALL
        .iter()
        .map(|c| regex::escape(c.as_str()))
        .join("|");

    Regex::new(&format!(r"([a-zA-Z0-9\s'-]+)\s\(({})\)", categories))
        .expect("recommendation pattern is valid")
});

/// Words that join one recommendation to the next rather than start a name.
const CONNECTIVES: [&str; 5] = ["and", "or", "then", "also", "plus"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationEntry {
    pub name: String,
    pub category: String,
}

impl Categorized for RecommendationEntry {
    fn category(&self) -> &str {
        &self.category
    }
}

pub fn extract_recommendations(text: Option<&str>) -> Vec<RecommendationEntry> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return vec![],
    };

    RECOMMENDATION_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let name = clean_name(&caps[1]);
            (!name.is_empty()).then(|| RecommendationEntry {
                name,
                category: caps[2].to_string(),
            })
        })
        .collect()
}

/// Drops list markers and a leading connective picked up from the text
/// between two recommendations.
fn clean_name(raw: &str) -> String {
    let mut name = raw.trim_start_matches(|c: char| c == '-' || c.is_whitespace());

    while let Some((first, rest)) = name.split_once(char::is_whitespace) {
        if !CONNECTIVES.contains(&first) {
            break;
        }
        name = rest.trim_start();
    }

    name.trim_end().to_string()
}
