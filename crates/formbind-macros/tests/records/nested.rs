use formbind::{Decoder, Encoder, FormRecord, FormValues, KeyScheme};

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Street {
    line: String,
    number: u16,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Address {
    street: Street,
    city: String,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Order {
    id: u64,
    shipping: Address,
    billing: Option<Address>,
}

#[derive(Debug, Default, PartialEq, FormRecord)]
struct Category {
    name: String,
    parent: Option<Box<Category>>,
}

#[test]
fn test_repeated_brackets_reach_deep_fields() {
    let values = FormValues::from([
        ("id", vec!["9"]),
        ("shipping[street][line]", vec!["Main St"]),
        ("shipping[street][number]", vec!["12"]),
        ("shipping[city]", vec!["Oslo"]),
    ]);
    let mut order = Order::default();
    Decoder::new()
        .recurse_scheme(KeyScheme::RepeatedBrackets)
        .decode(&values, &mut order)
        .unwrap();
    assert_eq!(order.id, 9);
    assert_eq!(order.shipping.street.line, "Main St");
    assert_eq!(order.shipping.street.number, 12);
    assert_eq!(order.shipping.city, "Oslo");
    assert_eq!(order.billing, None);
}

#[test]
fn test_optional_record_is_allocated_on_demand() {
    let values = FormValues::from([("billing.city", vec!["Bergen"])]);
    let mut order = Order::default();
    Decoder::new()
        .recurse_scheme(KeyScheme::Dotted)
        .decode(&values, &mut order)
        .unwrap();
    let billing = order.billing.unwrap();
    assert_eq!(billing.city, "Bergen");
    assert_eq!(billing.street, Street::default());
}

#[test]
fn test_without_recursion_nested_keys_are_unexpected() {
    let values = FormValues::from([("shipping.city", vec!["Oslo"])]);
    let mut order = Order::default();
    assert!(Decoder::new().decode(&values, &mut order).is_err());
    Decoder::new()
        .allow_extra(true)
        .decode(&values, &mut order)
        .unwrap();
    assert_eq!(order, Order::default());
}

#[test]
fn test_recursive_type_decodes_and_encodes() {
    let values = FormValues::from([
        ("name", vec!["leaf"]),
        ("parent[name]", vec!["mid"]),
        ("parent[parent[name]]", vec!["root"]),
    ]);
    let mut category = Category::default();
    Decoder::new()
        .recurse_scheme(KeyScheme::NestedBrackets)
        .decode(&values, &mut category)
        .unwrap();
    let mid = category.parent.as_deref().unwrap();
    let root = mid.parent.as_deref().unwrap();
    assert_eq!((mid.name.as_str(), root.name.as_str()), ("mid", "root"));
    assert!(root.parent.is_none());

    let encoded = Encoder::new()
        .recurse_scheme(KeyScheme::NestedBrackets)
        .encode(&category)
        .unwrap();
    assert_eq!(encoded, values);
}
