use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use crate::stats::Stats;
use crate::store::Article;
use crate::update::{run_update, Options, UpdateError};

fn page_with_empty_tbody() -> String {
    concat!(
        "<!DOCTYPE html>\n<html>\n<body>\n",
        "<span class=\"summary-number\" data-stat=\"articles\">150+</span>\n",
        "<span class=\"summary-number\" data-stat=\"countries\">25</span>\n",
        "<span class=\"summary-number\" data-stat=\"study-types\">3</span>\n",
        "<span class=\"summary-number\" data-stat=\"year-span\">8</span>\n",
        "<table>\n<tbody></tbody>\n</table>\n",
        "</body>\n</html>\n",
    )
    .to_string()
}

fn article(year: i32, country: &str) -> Article {
    Article {
        year,
        authors: "A, B".to_string(),
        country: country.to_string(),
        study_type: "Survey".to_string(),
        focus: "X".to_string(),
        results: "r".to_string(),
        source: "J1".to_string(),
    }
}

#[test]
fn patched_tbody_round_trips_rendered_rows() {
    let articles = vec![article(2020, "BR"), article(2021, "US"), article(2022, "DE")];
    let rows = crate::render::render_rows(&articles);
    let updated = crate::patch::patch_document(
        &page_with_empty_tbody(),
        &rows,
        &Stats::collect(&articles),
    )
    .unwrap();
    let body = crate::patch::extract_tbody(&updated).unwrap();
    assert_eq!(body, format!("\n{}\n{}", rows.join("\n"), " ".repeat(28)));
}

#[test]
fn missing_data_file_performs_no_writes() {
    let dir = TempDir::new().unwrap();
    let html_path = dir.path().join("index.html");
    fs::write(&html_path, page_with_empty_tbody()).unwrap();

    let options = Options {
        data_path: dir.path().join("missing.json"),
        html_path: html_path.clone(),
    };
    let result = run_update(&options);
    assert!(matches!(result, Err(UpdateError::NoArticles { .. })));
    assert_eq!(fs::read_to_string(&html_path).unwrap(), page_with_empty_tbody());
}

#[test]
fn missing_html_file_aborts_before_any_write() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("articles.json");
    fs::write(
        &data_path,
        r#"[{"ano":2021,"autores":"A","pais":"BR","tipo_estudo":"Survey","foco":"X","resultados":"r","fonte":"J1"}]"#,
    )
    .unwrap();

    let html_path: PathBuf = dir.path().join("absent.html");
    let options = Options {
        data_path,
        html_path: html_path.clone(),
    };
    let result = run_update(&options);
    assert!(matches!(result, Err(UpdateError::HtmlRead { .. })));
    assert!(!html_path.exists());
}

#[test]
fn document_without_tbody_is_left_byte_identical() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("articles.json");
    fs::write(
        &data_path,
        r#"[{"ano":2021,"autores":"A","pais":"BR","tipo_estudo":"Survey","foco":"X","resultados":"r","fonte":"J1"}]"#,
    )
    .unwrap();

    let html_path = dir.path().join("index.html");
    let original = "<!DOCTYPE html>\n<html><body>no table here</body></html>\n";
    fs::write(&html_path, original).unwrap();

    let options = Options {
        data_path,
        html_path: html_path.clone(),
    };
    let result = run_update(&options);
    assert!(matches!(result, Err(UpdateError::TbodyMissing { .. })));
    assert_eq!(fs::read(&html_path).unwrap(), original.as_bytes());
}

#[test]
fn end_to_end_update_renders_row_and_counters() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("articles.json");
    fs::write(
        &data_path,
        r#"[{"ano":2021,"autores":"A, B, C","pais":"BR","tipo_estudo":"Survey","foco":"X, Y, Z","resultados":"short result","fonte":"J1"}]"#,
    )
    .unwrap();

    let html_path = dir.path().join("index.html");
    fs::write(&html_path, page_with_empty_tbody()).unwrap();

    let options = Options {
        data_path,
        html_path: html_path.clone(),
    };
    let outcome = run_update(&options).unwrap();
    assert_eq!(outcome.stats.total, 1);

    let updated = fs::read_to_string(&html_path).unwrap();
    assert!(updated.contains("<td>2021</td>"));
    assert!(updated.contains("<td>A, B et al. (BR)</td>"));
    assert!(updated.contains("<td>Survey</td>"));
    assert!(updated.contains("<td>X, Y</td>"));
    assert!(updated.contains("<td>short result</td>"));

    assert!(updated.contains(r#"data-stat="articles">1+</span>"#));
    assert!(updated.contains(r#"data-stat="countries">1</span>"#));
    assert!(updated.contains(r#"data-stat="study-types">1</span>"#));
    assert!(updated.contains(r#"data-stat="year-span">1</span>"#));
}

#[test]
fn rerunning_the_update_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let data_path = dir.path().join("articles.json");
    fs::write(
        &data_path,
        r#"[{"ano":2020,"autores":"A","pais":"BR","tipo_estudo":"Survey","foco":"X","resultados":"r","fonte":"J1"},
           {"ano":2022,"autores":"B","pais":"US","tipo_estudo":"Review","foco":"Y","resultados":"r2","fonte":"J2"}]"#,
    )
    .unwrap();

    let html_path = dir.path().join("index.html");
    fs::write(&html_path, page_with_empty_tbody()).unwrap();

    let options = Options {
        data_path,
        html_path: html_path.clone(),
    };
    run_update(&options).unwrap();
    let first = fs::read_to_string(&html_path).unwrap();
    run_update(&options).unwrap();
    let second = fs::read_to_string(&html_path).unwrap();
    assert_eq!(first, second);
}
