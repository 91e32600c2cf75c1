use formbind::{FormRecord, FormValues, decode};

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Paged<T> {
    page: u32,
    #[form(flatten)]
    filter: T,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct UserFilter {
    name: String,
    active: bool,
}

#[test]
fn test_generic_record_flattens_its_parameter() {
    let values = FormValues::from([
        ("page", vec!["2"]),
        ("name", vec!["bo"]),
        ("active", vec!["false"]),
    ]);
    let mut paged = Paged::<UserFilter>::default();
    decode(&values, &mut paged).unwrap();
    assert_eq!(paged.page, 2);
    assert_eq!(paged.filter.name, "bo");
    assert!(!paged.filter.active);
}

#[test]
fn test_generic_scalar_parameter() {
    let values = FormValues::from([("page", vec!["1"]), ("filter", vec!["-5"])]);
    let mut paged = Paged::<i64>::default();
    decode(&values, &mut paged).unwrap();
    assert_eq!(paged.filter, -5);
}
