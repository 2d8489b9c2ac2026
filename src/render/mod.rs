use crate::store::Article;

// Indentation of the table markup inside the page. Rows are inserted
// textually, so these must match the surrounding document.
const ROW_INDENT: &str = "                                ";
const CELL_INDENT: &str = "                                    ";

const RESULTS_MAX_CHARS: usize = 50;
const RESULTS_KEEP_CHARS: usize = 47;

/// First two authors joined by ", " plus " et al." when the list is
/// longer; the verbatim field otherwise.
pub fn abbreviate_authors(authors: &str) -> String {
    let names: Vec<&str> = authors.split(", ").collect();
    if names.len() > 2 {
        format!("{} et al.", names[..2].join(", "))
    } else {
        authors.to_string()
    }
}

/// First two focus terms when the list is longer; verbatim otherwise.
pub fn abbreviate_focus(focus: &str) -> String {
    let terms: Vec<&str> = focus.split(", ").collect();
    if terms.len() > 2 {
        terms[..2].join(", ")
    } else {
        focus.to_string()
    }
}

/// Caps the results text at 50 characters, keeping the first 47 and
/// appending "...". Counts Unicode scalars, not bytes.
pub fn truncate_results(results: &str) -> String {
    if results.chars().count() > RESULTS_MAX_CHARS {
        let mut out: String = results.chars().take(RESULTS_KEEP_CHARS).collect();
        out.push_str("...");
        out
    } else {
        results.to_string()
    }
}

/// Renders one article as a table-row block ready for textual insertion.
pub fn render_row(article: &Article) -> String {
    let authors = format!(
        "{} ({})",
        abbreviate_authors(&article.authors),
        article.country
    );
    let focus = abbreviate_focus(&article.focus);
    let results = truncate_results(&article.results);
    format!(
        "{row}<tr>\n\
         {cell}<td>{year}</td>\n\
         {cell}<td>{authors}</td>\n\
         {cell}<td>{study_type}</td>\n\
         {cell}<td>{focus}</td>\n\
         {cell}<td>{results}</td>\n\
         {row}</tr>",
        row = ROW_INDENT,
        cell = CELL_INDENT,
        year = article.year,
        study_type = article.study_type,
    )
}

pub fn render_rows(articles: &[Article]) -> Vec<String> {
    articles.iter().map(render_row).collect()
}
