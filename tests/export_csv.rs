use subscout::export::{build_csv, export_csv, generate_filename, CSV_HEADERS};
use subscout::models::ScanResult;
use subscout::SubscoutError;

fn result(subdomain: &str, status_code: u16, title: &str) -> ScanResult {
    ScanResult {
        subdomain: subdomain.to_string(),
        url: format!("https://{}", subdomain),
        status_code,
        response_time: Some(0.123),
        content_length: Some(2048),
        server: "Apache".to_string(),
        content_type: Some("text/html".to_string()),
        title: title.to_string(),
        final_url: Some(format!("https://{}/home", subdomain)),
        ssl_info: None,
    }
}

/// Minimal CSV line splitter handling quoted fields with doubled quotes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[test]
fn row_count_is_results_plus_header() {
    let results = vec![
        result("a.example.com", 200, "Landing"),
        result("b.example.com", 403, "Forbidden"),
        result("c.example.com", 500, "Error"),
    ];

    let csv = build_csv(&results);
    assert_eq!(csv.lines().count(), results.len() + 1);
    assert_eq!(csv.lines().next().unwrap(), CSV_HEADERS.join(","));
}

#[test]
fn reparsing_recovers_subdomain_and_status_for_every_row() {
    let results = vec![
        result("a.example.com", 200, "Landing, with commas"),
        result("b.example.com", 403, "Says \"no\""),
    ];

    let csv = build_csv(&results);
    let rows: Vec<Vec<String>> = csv.lines().skip(1).map(split_csv_line).collect();

    assert_eq!(rows.len(), results.len());
    for (row, expected) in rows.iter().zip(&results) {
        assert_eq!(row.len(), CSV_HEADERS.len());
        assert_eq!(row[0], expected.subdomain);
        assert_eq!(row[2], expected.status_code.to_string());
    }
}

#[test]
fn titles_with_quotes_are_doubled_in_place() {
    let results = vec![result("a.example.com", 200, "Say \"hi\" twice")];
    let csv = build_csv(&results);

    assert!(csv.contains("\"Say \"\"hi\"\" twice\""));

    let row = split_csv_line(csv.lines().nth(1).unwrap());
    assert_eq!(row[7], "Say \"hi\" twice");
}

#[test]
fn absent_fields_render_their_placeholders() {
    let mut sparse = result("a.example.com", 200, "No extras");
    sparse.response_time = None;
    sparse.content_length = None;
    sparse.content_type = None;
    sparse.final_url = None;

    let csv = build_csv(&[sparse]);
    let row = split_csv_line(csv.lines().nth(1).unwrap());

    assert_eq!(row[3], "N/A"); // response time
    assert_eq!(row[4], ""); // content length
    assert_eq!(row[6], "Unknown"); // content type
    assert_eq!(row[8], "https://a.example.com"); // final url falls back
}

#[test]
fn response_time_converts_to_rounded_millis() {
    let csv = build_csv(&[result("a.example.com", 200, "Landing")]);
    let row = split_csv_line(csv.lines().nth(1).unwrap());
    assert_eq!(row[3], "123");
}

#[test]
fn exporting_nothing_is_an_error_and_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();

    let err = export_csv(&[], dir.path(), "subdomains").unwrap_err();
    assert!(matches!(err, SubscoutError::Export(_)));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn export_writes_the_named_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let results = vec![result("a.example.com", 200, "Landing")];

    let path = export_csv(&results, dir.path(), "subdomains").unwrap();

    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert_eq!(name, generate_filename("subdomains"));
    assert!(name.starts_with("subdomains-"));
    assert!(name.ends_with(".csv"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, build_csv(&results));
}
