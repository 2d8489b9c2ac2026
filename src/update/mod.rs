use std::path::PathBuf;

use thiserror::Error;

use crate::patch::{self, PatchError};
use crate::render;
use crate::stats::Stats;
use crate::store::{self, Article};

pub const DEFAULT_DATA_PATH: &str = "data/artigos_reais.json";
pub const DEFAULT_HTML_PATH: &str = "index.html";

#[derive(Clone, Debug)]
pub struct Options {
    pub data_path: PathBuf,
    pub html_path: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            html_path: PathBuf::from(DEFAULT_HTML_PATH),
        }
    }
}

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no articles loaded from {path}")]
    NoArticles { path: String },

    #[error("failed to read HTML document {path}: {source}")]
    HtmlRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no <tbody> region found in {path}")]
    TbodyMissing { path: String },

    #[error("failed to write HTML document {path}: {source}")]
    HtmlWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug)]
pub struct UpdateOutcome {
    pub articles: Vec<Article>,
    pub stats: Stats,
}

/// Runs the full regeneration: load the store, render the rows, patch
/// the document, write it back.
///
/// Aborts before the HTML file is even read when no articles load, and
/// before any write when the document has no tbody region; the target
/// file is never touched on a failed run.
pub fn run_update(options: &Options) -> Result<UpdateOutcome, UpdateError> {
    let articles = store::load_articles(&options.data_path);
    if articles.is_empty() {
        return Err(UpdateError::NoArticles {
            path: options.data_path.display().to_string(),
        });
    }

    let html_path = options.html_path.display().to_string();
    let html = std::fs::read_to_string(&options.html_path).map_err(|e| UpdateError::HtmlRead {
        path: html_path.clone(),
        source: e,
    })?;

    let rows = render::render_rows(&articles);
    let stats = Stats::collect(&articles);

    let updated = patch::patch_document(&html, &rows, &stats).map_err(|e| match e {
        PatchError::TbodyMissing => UpdateError::TbodyMissing {
            path: html_path.clone(),
        },
    })?;

    std::fs::write(&options.html_path, updated).map_err(|e| UpdateError::HtmlWrite {
        path: html_path,
        source: e,
    })?;

    Ok(UpdateOutcome { articles, stats })
}
