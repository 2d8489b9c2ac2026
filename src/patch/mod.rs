use regex::{NoExpand, Regex};
use thiserror::Error;

use crate::stats::Stats;

// Closing indentation of the rewrapped tbody, one step left of the rows.
const TBODY_CLOSE_INDENT: &str = "                            ";

#[derive(Debug, Error, PartialEq)]
pub enum PatchError {
    #[error("no <tbody> region found in the document")]
    TbodyMissing,
}

/// Replaces the document's table-body region with the given row blocks
/// and rewrites the summary counters.
///
/// Counters are located by stable `data-stat` markers on the
/// `summary-number` spans rather than by matching whatever literal
/// value the document currently shows; a span whose marker is absent
/// is skipped silently, and only a missing tbody aborts the patch.
pub fn patch_document(html: &str, rows: &[String], stats: &Stats) -> Result<String, PatchError> {
    let tbody = Regex::new(r"(?s)<tbody>.*?</tbody>").unwrap();
    if !tbody.is_match(html) {
        return Err(PatchError::TbodyMissing);
    }

    let rewrapped = format!(
        "<tbody>\n{}\n{}</tbody>",
        rows.join("\n"),
        TBODY_CLOSE_INDENT
    );
    let mut updated = tbody.replace(html, NoExpand(&rewrapped)).into_owned();

    updated = patch_counter(&updated, "articles", &format!("{}+", stats.total));
    updated = patch_counter(
        &updated,
        "countries",
        &stats.distinct_countries().to_string(),
    );
    updated = patch_counter(
        &updated,
        "study-types",
        &stats.distinct_study_types().to_string(),
    );
    updated = patch_counter(&updated, "year-span", &stats.year_span().to_string());

    Ok(updated)
}

fn patch_counter(html: &str, key: &str, value: &str) -> String {
    let pattern = format!(
        r#"(?s)(<span class="summary-number" data-stat="{key}">).*?(</span>)"#
    );
    let re = Regex::new(&pattern).unwrap();
    re.replace(html, |caps: &regex::Captures| {
        format!("{}{}{}", &caps[1], value, &caps[2])
    })
    .into_owned()
}

/// Re-extracts the current table-body contents, without the marker pair.
/// Returns None when the document has no tbody region.
pub fn extract_tbody(html: &str) -> Option<String> {
    let tbody = Regex::new(r"(?s)<tbody>(.*?)</tbody>").unwrap();
    tbody.captures(html).map(|caps| caps[1].to_string())
}
