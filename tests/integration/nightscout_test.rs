use cgmon::core::nightscout::{parse_entry, NightscoutClient, MGDL_PER_MMOL};

// One line of the real tab-separated entries payload.
const SHARE_LINE: &str =
    "\"2024-03-07T12:34:56.000Z\"\t1709814896000\t134\t\"Flat\"\t\"share2\"";

#[test]
fn test_parse_share_payload() {
    let entry = parse_entry(SHARE_LINE).unwrap();
    assert_eq!(entry.timestamp_ms, 1709814896000);
    assert_eq!(entry.sgv_mgdl, 134);
    assert_eq!(entry.direction, "Flat");
}

#[test]
fn test_parse_uses_first_line_only() {
    let body = format!(
        "{}\n\"2024-03-07T12:29:56.000Z\"\t1709814596000\t140\t\"SingleDown\"\n",
        SHARE_LINE
    );
    let entry = parse_entry(&body).unwrap();
    assert_eq!(entry.sgv_mgdl, 134);
    assert_eq!(entry.direction, "Flat");
}

#[test]
fn test_parse_unquoted_direction() {
    let entry = parse_entry("\"2024-03-07\"\t1709814896000\t134\tFlat").unwrap();
    assert_eq!(entry.direction, "Flat");
}

#[test]
fn test_parse_rejects_non_tsv_bodies() {
    assert!(parse_entry("").is_err());
    assert!(parse_entry("<html><body>502 Bad Gateway</body></html>").is_err());
    assert!(parse_entry("{\"status\":\"ok\"}").is_err());
}

#[test]
fn test_entry_to_sample_conversion() {
    let entry = parse_entry(SHARE_LINE).unwrap();
    let sample = entry.to_sample();
    assert_eq!(sample.timestamp_ms, 1709814896000);
    // 134 mg/dL is 7.437 mmol/L.
    assert!((sample.value - 134.0 / MGDL_PER_MMOL).abs() < 1e-9);
    assert!((sample.value - 7.437).abs() < 0.001);
}

#[test]
fn test_client_rejects_malformed_url() {
    assert!(NightscoutClient::new("not a url").is_err());
    assert!(NightscoutClient::new("").is_err());
    assert!(NightscoutClient::new("https://cgm.example.com/").is_ok());
}
