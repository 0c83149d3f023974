use super::*;

#[test]
fn field_defaults_to_absent() {
    let f: Field<i64> = Field::default();
    assert!(f.is_absent());
    assert_eq!(f.get(), 0);
}

#[test]
fn get_collapses_absent_and_empty() {
    let absent: Field<String> = Field::Absent;
    let empty: Field<String> = Field::Empty;
    assert_eq!(absent.get(), "");
    assert_eq!(empty.get(), "");
    assert_ne!(absent, empty);
    assert_eq!(Field::Present("a".to_string()).get(), "a");
}

#[test]
fn map_keeps_state() {
    assert_eq!(Field::<i64>::Empty.map(|v| v + 1), Field::Empty);
    assert_eq!(Field::<i64>::Absent.map(|v| v + 1), Field::Absent);
    assert_eq!(Field::Present(1).map(|v| v + 1), Field::Present(2));
}

#[test]
fn set_and_value_mut() {
    let mut f = Field::Absent;
    f.set(3);
    *f.value_mut().unwrap() += 1;
    assert_eq!(f.into_value(), Some(4));
}

#[test]
fn conversions() {
    assert_eq!(Field::from_option(Some(5)), Field::Present(5));
    assert_eq!(Field::<i64>::from_option(None), Field::Absent);
    assert_eq!(Field::from(7), Field::Present(7));
}

#[test]
fn int_grammar() {
    assert_eq!(parse_int("100"), Some(100));
    assert_eq!(parse_int(" -1\n"), Some(-1));
    assert_eq!(parse_int("abc"), None);
    assert_eq!(parse_int(""), None);
    assert_eq!(parse_int("1.5"), None);
}

#[test]
fn bool_grammar_is_case_insensitive() {
    assert_eq!(parse_bool("TRUE"), Some(true));
    assert_eq!(parse_bool("true"), Some(true));
    assert_eq!(parse_bool("False"), Some(false));
    assert_eq!(parse_bool("yes"), None);
    assert_eq!(parse_bool(""), None);
    assert_eq!(format_bool(true), "TRUE");
    assert_eq!(format_bool(false), "FALSE");
}
