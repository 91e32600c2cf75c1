use formbind::KeyScheme;

#[test]
fn test_structured_keys_rejoin_exactly() {
    let cases = [
        (KeyScheme::NestedBrackets, "user[address[city]]", &["user", "address", "city"][..]),
        (KeyScheme::RepeatedBrackets, "user[address][city]", &["user", "address", "city"][..]),
        (KeyScheme::Dotted, "user.address.city", &["user", "address", "city"][..]),
    ];
    for (scheme, key, segments) in cases {
        let path = scheme.decode(key);
        assert_eq!(path.segments(), segments, "{scheme}");
        assert_eq!(scheme.encode(path.segments()), key, "{scheme}");
    }
}

#[test]
fn test_unstructured_keys_stay_whole() {
    let cases = [
        (KeyScheme::NestedBrackets, "user[name"),
        (KeyScheme::NestedBrackets, "user]name["),
        (KeyScheme::RepeatedBrackets, "user[name]x"),
        (KeyScheme::RepeatedBrackets, "user[a]b[c]"),
        (KeyScheme::RepeatedBrackets, "plain"),
    ];
    for (scheme, key) in cases {
        let path = scheme.decode(key);
        assert!(path.is_single(), "{scheme}: {key}");
        assert_eq!(path.first(), key);
    }
}

#[test]
fn test_scheme_names_parse() {
    for scheme in KeyScheme::ALL {
        assert_eq!(scheme.name().parse::<KeyScheme>().unwrap(), scheme);
    }
    assert!("slashes".parse::<KeyScheme>().is_err());
}
