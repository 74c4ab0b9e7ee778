use subscout::models::{ScanResponse, ScanResult};
use subscout::session::{ResultFilter, ScanSession, SortKey};

fn result(
    subdomain: &str,
    status_code: u16,
    title: &str,
    response_time: Option<f64>,
    content_length: Option<u64>,
) -> ScanResult {
    ScanResult {
        subdomain: subdomain.to_string(),
        url: format!("https://{}", subdomain),
        status_code,
        response_time,
        content_length,
        server: "nginx".to_string(),
        content_type: Some("text/html".to_string()),
        title: title.to_string(),
        final_url: None,
        ssl_info: None,
    }
}

fn two_result_response() -> ScanResponse {
    ScanResponse {
        domain: "example.com".to_string(),
        subdomains: vec![
            result("a.example.com", 200, "Landing", Some(0.12), Some(4096)),
            result("b.example.com", 403, "Forbidden", Some(0.48), Some(512)),
        ],
        wordlist_size: 1000,
        total_checked: 100,
        found_count: 2,
    }
}

#[test]
fn load_replaces_everything_and_reports_success_rate() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    assert!(session.has_results());
    assert_eq!(session.domain(), "example.com");
    assert_eq!(session.filtered().len(), 2);
    assert_eq!(session.stats().success_rate_display(), "2.00%");
}

#[test]
fn success_rate_is_plain_zero_when_nothing_checked() {
    let mut session = ScanSession::new();
    session.load(ScanResponse {
        domain: "example.com".to_string(),
        subdomains: vec![],
        wordlist_size: 0,
        total_checked: 0,
        found_count: 0,
    });

    assert_eq!(session.stats().success_rate_display(), "0%");
}

#[test]
fn status_filter_keeps_exact_matches_only() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    session.apply_filter(ResultFilter {
        search: String::new(),
        status_code: Some(200),
    });

    assert_eq!(session.filtered().len(), 1);
    assert_eq!(session.filtered()[0].subdomain, "a.example.com");
}

#[test]
fn search_matches_subdomain_and_title_case_insensitively() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    session.apply_filter(ResultFilter {
        search: "LANDING".to_string(),
        status_code: None,
    });
    assert_eq!(session.filtered().len(), 1);
    assert_eq!(session.filtered()[0].subdomain, "a.example.com");

    session.apply_filter(ResultFilter {
        search: "b.example".to_string(),
        status_code: None,
    });
    assert_eq!(session.filtered().len(), 1);
    assert_eq!(session.filtered()[0].subdomain, "b.example.com");
}

#[test]
fn filtering_is_idempotent() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    let filter = ResultFilter {
        search: "example".to_string(),
        status_code: Some(403),
    };

    session.apply_filter(filter.clone());
    let once: Vec<String> = session
        .filtered()
        .iter()
        .map(|r| r.subdomain.clone())
        .collect();

    session.apply_filter(filter);
    let twice: Vec<String> = session
        .filtered()
        .iter()
        .map(|r| r.subdomain.clone())
        .collect();

    assert_eq!(once, twice);
}

#[test]
fn filtered_view_is_always_a_subset_of_the_full_set() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    session.apply_filter(ResultFilter {
        search: "nothing-matches-this".to_string(),
        status_code: None,
    });
    assert!(session.filtered().is_empty());
    assert_eq!(session.results().len(), 2);

    let full: Vec<String> = session.results().iter().map(|r| r.subdomain.clone()).collect();
    session.apply_filter(ResultFilter::default());
    for r in session.filtered() {
        assert!(full.contains(&r.subdomain));
    }
}

#[test]
fn sort_cycles_through_all_keys_and_wraps() {
    let mut session = ScanSession::new();
    session.load(two_result_response());

    assert_eq!(session.sort_key(), SortKey::Subdomain);
    assert_eq!(session.cycle_sort(), SortKey::StatusCode);
    assert_eq!(session.cycle_sort(), SortKey::ResponseTime);
    assert_eq!(session.cycle_sort(), SortKey::ContentLength);
    assert_eq!(session.cycle_sort(), SortKey::Subdomain);
}

#[test]
fn sorting_permutes_without_adding_or_dropping() {
    let mut session = ScanSession::new();
    session.load(ScanResponse {
        domain: "example.com".to_string(),
        subdomains: vec![
            result("c.example.com", 500, "Error", None, Some(10)),
            result("a.example.com", 200, "Landing", Some(0.9), None),
            result("b.example.com", 301, "Moved", Some(0.1), Some(999)),
        ],
        wordlist_size: 100,
        total_checked: 100,
        found_count: 3,
    });

    let mut before: Vec<String> = session
        .filtered()
        .iter()
        .map(|r| r.subdomain.clone())
        .collect();
    before.sort();

    for _ in 0..4 {
        session.cycle_sort();
        let mut after: Vec<String> = session
            .filtered()
            .iter()
            .map(|r| r.subdomain.clone())
            .collect();
        after.sort();
        assert_eq!(before, after);
    }
}

#[test]
fn missing_numeric_fields_sort_as_zero_and_length_sorts_descending() {
    let mut session = ScanSession::new();
    session.load(ScanResponse {
        domain: "example.com".to_string(),
        subdomains: vec![
            result("slow.example.com", 200, "Slow", Some(2.0), Some(10)),
            result("untimed.example.com", 200, "Untimed", None, Some(5000)),
            result("fast.example.com", 200, "Fast", Some(0.1), None),
        ],
        wordlist_size: 100,
        total_checked: 100,
        found_count: 3,
    });

    // Subdomain -> StatusCode -> ResponseTime
    session.cycle_sort();
    session.cycle_sort();
    let by_time: Vec<&str> = session
        .filtered()
        .iter()
        .map(|r| r.subdomain.as_str())
        .collect();
    assert_eq!(
        by_time,
        vec!["untimed.example.com", "fast.example.com", "slow.example.com"]
    );

    // -> ContentLength, largest first, missing as zero
    session.cycle_sort();
    let by_length: Vec<&str> = session
        .filtered()
        .iter()
        .map(|r| r.subdomain.as_str())
        .collect();
    assert_eq!(
        by_length,
        vec!["untimed.example.com", "slow.example.com", "fast.example.com"]
    );
}

#[test]
fn new_response_supersedes_previous_results_and_filter() {
    let mut session = ScanSession::new();
    session.load(two_result_response());
    session.apply_filter(ResultFilter {
        search: String::new(),
        status_code: Some(403),
    });
    assert_eq!(session.filtered().len(), 1);

    session.load(ScanResponse {
        domain: "other.org".to_string(),
        subdomains: vec![result("www.other.org", 200, "Other", None, None)],
        wordlist_size: 50,
        total_checked: 50,
        found_count: 1,
    });

    assert_eq!(session.domain(), "other.org");
    assert!(session.filter().is_empty());
    assert_eq!(session.filtered().len(), 1);
    assert_eq!(session.filtered()[0].subdomain, "www.other.org");
}
