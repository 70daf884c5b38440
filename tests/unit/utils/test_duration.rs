use fake_api_client::utils::duration::parse_duration;
use std::time::Duration;

#[test]
fn test_default_client_timeout_forms() {
    assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
    assert_eq!(parse_duration("60s").unwrap(), Duration::from_secs(60));
    assert_eq!(parse_duration("60000ms").unwrap(), Duration::from_secs(60));
}

#[test]
fn test_explicit_plus_sign() {
    assert_eq!(parse_duration("+2s").unwrap(), Duration::from_secs(2));
}

#[test]
fn test_micro_sign_alias() {
    assert_eq!(parse_duration("5µs").unwrap(), parse_duration("5us").unwrap());
}

#[test]
fn test_fraction_without_integer_part() {
    assert_eq!(parse_duration(".5s").unwrap(), Duration::from_millis(500));
}

#[test]
fn test_error_message() {
    let err = parse_duration("-1s").unwrap_err();
    assert_eq!(err.to_string(), "time: negative value in duration \"-1s\"");

    let err = parse_duration("3").unwrap_err();
    assert_eq!(err.to_string(), "time: missing unit in duration \"3\"");

    let err = parse_duration("3y").unwrap_err();
    assert_eq!(err.to_string(), "time: unknown unit in duration \"3y\"");
}
