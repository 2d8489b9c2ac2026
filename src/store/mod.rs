use std::path::Path;

use colored::Colorize;
use serde::Deserialize;

/// One bibliographic entry from the article store.
///
/// The on-disk JSON uses the original Portuguese keys; both spellings
/// are accepted so older data files keep loading.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Article {
    #[serde(alias = "ano")]
    pub year: i32,
    #[serde(alias = "autores")]
    pub authors: String,
    #[serde(alias = "pais")]
    pub country: String,
    #[serde(rename = "studyType", alias = "tipo_estudo", alias = "study_type")]
    pub study_type: String,
    #[serde(alias = "foco")]
    pub focus: String,
    #[serde(alias = "resultados")]
    pub results: String,
    #[serde(alias = "fonte")]
    pub source: String,
}

/// Loads the article store, preserving file order.
///
/// A missing file or a file that is not a JSON array yields an empty
/// vector and a console diagnostic; the caller always gets a sequence.
/// Records are decoded one by one so a single malformed record is
/// skipped with a diagnostic instead of discarding the whole batch.
pub fn load_articles(path: &Path) -> Vec<Article> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!(
                "{} {}",
                "article store not found ::".bold().red(),
                path.display()
            );
            return Vec::new();
        }
        Err(e) => {
            println!(
                "{} {}: {e}",
                "failed to read article store ::".bold().red(),
                path.display()
            );
            return Vec::new();
        }
    };

    let raw: Vec<serde_json::Value> = match serde_json::from_str(&contents) {
        Ok(raw) => raw,
        Err(e) => {
            println!(
                "{} {}: {e}",
                "invalid article store ::".bold().red(),
                path.display()
            );
            return Vec::new();
        }
    };

    let mut articles: Vec<Article> = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        match serde_json::from_value::<Article>(value) {
            Ok(article) => articles.push(article),
            Err(e) => {
                println!(
                    "{} record {index} skipped: {e}",
                    "invalid article ::".bold().yellow()
                );
            }
        }
    }
    articles
}
