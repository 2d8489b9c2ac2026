use std::collections::{BTreeMap, HashMap};

use crate::store::Article;

/// Aggregates computed over the loaded article sequence.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    pub total: usize,
    pub min_year: i32,
    pub max_year: i32,
    pub by_year: BTreeMap<i32, usize>,
    pub by_country: HashMap<String, usize>,
    pub by_study_type: HashMap<String, usize>,
    pub by_source: HashMap<String, usize>,
}

impl Stats {
    pub fn collect(articles: &[Article]) -> Self {
        let mut stats = Stats::default();
        stats.total = articles.len();
        for article in articles {
            *stats.by_year.entry(article.year).or_insert(0) += 1;
            *stats.by_country.entry(article.country.clone()).or_insert(0) += 1;
            *stats
                .by_study_type
                .entry(article.study_type.clone())
                .or_insert(0) += 1;
            *stats.by_source.entry(article.source.clone()).or_insert(0) += 1;
        }
        stats.min_year = stats.by_year.keys().next().copied().unwrap_or(0);
        stats.max_year = stats.by_year.keys().next_back().copied().unwrap_or(0);
        stats
    }

    pub fn distinct_countries(&self) -> usize {
        self.by_country.len()
    }

    pub fn distinct_study_types(&self) -> usize {
        self.by_study_type.len()
    }

    /// Inclusive width of the publication-year range.
    pub fn year_span(&self) -> i32 {
        if self.by_year.is_empty() {
            0
        } else {
            self.max_year - self.min_year + 1
        }
    }

    pub fn countries_desc(&self) -> Vec<(String, usize)> {
        sorted_desc(&self.by_country)
    }

    pub fn study_types_desc(&self) -> Vec<(String, usize)> {
        sorted_desc(&self.by_study_type)
    }

    pub fn sources_desc(&self) -> Vec<(String, usize)> {
        sorted_desc(&self.by_source)
    }
}

// Descending by count, alphabetical on equal counts so output is stable.
fn sorted_desc(map: &HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = map
        .iter()
        .map(|(key, count)| (key.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}
