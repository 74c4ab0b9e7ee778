use subscout::domain::{is_valid, normalize, parse_target};
use subscout::SubscoutError;

#[test]
fn accepts_ordinary_domains() {
    assert!(is_valid("example.com"));
    assert!(is_valid("sub.example.com"));
    assert!(is_valid("a-b.example.co.uk"));
    assert!(is_valid("xn--bcher-kva.example"));
    assert!(is_valid("123.example.com"));
}

#[test]
fn rejects_bad_label_syntax() {
    assert!(!is_valid(""));
    assert!(!is_valid("example..com"));
    assert!(!is_valid(".example.com"));
    assert!(!is_valid("example.com."));
    assert!(!is_valid("-example.com"));
    assert!(!is_valid("example-.com"));
    assert!(!is_valid("exa_mple.com"));
    assert!(!is_valid("exam ple.com"));
    assert!(!is_valid("exämple.com"));
}

#[test]
fn rejects_overlong_labels_and_names() {
    let max_label = "a".repeat(63);
    assert!(is_valid(&format!("{}.example.com", max_label)));
    let over_label = "a".repeat(64);
    assert!(!is_valid(&format!("{}.example.com", over_label)));

    let long_name = format!("{}.{}.{}.{}.com", max_label, max_label, max_label, max_label);
    assert!(long_name.len() > 253);
    assert!(!is_valid(&long_name));
}

#[test]
fn normalize_strips_url_dressing() {
    assert_eq!(normalize("https://example.com/path?q=1"), "example.com");
    assert_eq!(normalize("http://EXAMPLE.com"), "example.com");
    assert_eq!(normalize("  example.com\n"), "example.com");
}

#[test]
fn parse_target_normalizes_then_validates() {
    assert_eq!(
        parse_target("https://Sub.Example.COM/login").unwrap(),
        "sub.example.com"
    );

    assert!(matches!(
        parse_target(""),
        Err(SubscoutError::InvalidDomain(_))
    ));
    assert!(matches!(
        parse_target("https://"),
        Err(SubscoutError::InvalidDomain(_))
    ));
    assert!(matches!(
        parse_target("not a domain"),
        Err(SubscoutError::InvalidDomain(_))
    ));
}
