use formbind::{Decoder, FormRecord, FormValues, decode};

#[derive(Debug, Default, PartialEq, FormRecord)]
#[form(rename_all = "camelCase")]
struct Signup {
    first_name: String,
    #[form(rename = "mail")]
    email_address: String,
    accept_terms: bool,
    #[form(skip)]
    session: Option<String>,
}

#[test]
fn test_rename_all_and_rename() {
    let values = FormValues::from([
        ("firstName", vec!["Ada"]),
        ("mail", vec!["ada@example.com"]),
        ("acceptTerms", vec!["true"]),
    ]);
    let mut signup = Signup::default();
    decode(&values, &mut signup).unwrap();
    assert_eq!(signup.first_name, "Ada");
    assert_eq!(signup.email_address, "ada@example.com");
    assert!(signup.accept_terms);
}

#[test]
fn test_declared_name_no_longer_matches() {
    let values = FormValues::from([("email_address", vec!["x"])]);
    let mut signup = Signup::default();
    assert!(decode(&values, &mut signup).is_err());
}

#[test]
fn test_skipped_field_is_unknown_and_untouched() {
    let values = FormValues::from([("session", vec!["abc"])]);
    let mut signup = Signup::default();
    Decoder::new()
        .allow_extra(true)
        .decode(&values, &mut signup)
        .unwrap();
    assert_eq!(signup.session, None);
    assert!(decode(&values, &mut signup).is_err());
}

#[test]
fn test_case_insensitive_matches_renamed_fields() {
    let values = FormValues::from([("FIRSTNAME", vec!["Ada"]), ("Mail", vec!["a@b.c"])]);
    let mut signup = Signup::default();
    Decoder::new()
        .case_insensitive(true)
        .decode(&values, &mut signup)
        .unwrap();
    assert_eq!(signup.first_name, "Ada");
    assert_eq!(signup.email_address, "a@b.c");
}
