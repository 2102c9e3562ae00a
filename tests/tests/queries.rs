//! Query and lookup tests against a seeded registry.

use frost_tests::prelude::*;
use pretty_assertions::assert_eq;

fn sorted<T: Ord>(mut items: Vec<T>) -> Vec<T> {
    items.sort();
    items
}

#[test]
fn test_get_keys_and_values() {
    let fx = Fixture::seeded();

    assert_eq!(
        sorted(fx.registry.get_keys("Colors").unwrap()),
        vec![Key::from("Blue"), Key::from("Green"), Key::from("Red")]
    );

    let mut values: Vec<i64> = fx
        .registry
        .get_values("Status")
        .unwrap()
        .iter()
        .filter_map(Value::as_int)
        .collect();
    values.sort();
    assert_eq!(values, vec![0, 1]);
}

#[test]
fn test_status_scenario() {
    let fx = Fixture::seeded();

    assert_eq!(fx.registry.key_has_value("Status", "Active", 1), Ok(true));
    assert_eq!(fx.registry.key_has_value("Status", "Active", 0), Ok(false));
    assert_eq!(fx.registry.value_has_key("Status", "Active", 1), Ok(true));
    assert_eq!(fx.registry.value_has_key("Status", "Active", 0), Ok(false));
}

#[test]
fn test_membership() {
    let fx = Fixture::seeded();

    assert_eq!(fx.registry.is_enum_member("Active", "Status"), Ok(true));
    assert_eq!(fx.registry.is_enum_member("Red", "Status"), Ok(false));
    assert_eq!(fx.registry.has_key("Colors", "Red"), Ok(true));
    assert_eq!(fx.registry.has_value("Status", 1), Ok(true));
    assert_eq!(fx.registry.has_value("Status", "1"), Ok(false));
    assert!(fx.reporter.is_empty());
}

#[test]
fn test_reverse_lookup_cardinality() {
    let fx = Fixture::new();
    fx.registry
        .create(
            "Tier",
            &members! { "Bronze" => 1, "Copper" => 1, "Tin" => 1, "Silver" => 2 },
        )
        .unwrap();

    assert_eq!(
        fx.registry.get_key_from_value("Tier", 2),
        Ok(KeyMatch::One(Key::from("Silver")))
    );
    assert_eq!(
        fx.registry.get_key_from_value("Tier", 1),
        Ok(KeyMatch::Many(vec![
            Key::from("Bronze"),
            Key::from("Copper"),
            Key::from("Tin"),
        ]))
    );
    assert_eq!(
        fx.registry.get_key_from_value("Tier", 3),
        Ok(KeyMatch::NotFound)
    );
}

#[test]
fn test_deep_clone_is_caller_owned() {
    let fx = Fixture::seeded();

    let mut copy = fx.registry.deep_clone("Colors").unwrap();
    assert_eq!(copy, colors());

    copy.clear();
    assert_eq!(fx.registry.get_keys("Colors").unwrap().len(), 3);
}

#[test]
fn test_try_get_returns_shared_handle() {
    let fx = Fixture::seeded();

    let a = fx.registry.try_get("Colors").unwrap();
    let b = fx.registry.try_get("Colors").unwrap();

    assert!(EnumTable::ptr_eq(&a, &b));
    assert_eq!(a.get("Blue"), Ok(&Value::from("Blue")));
}

mod unknown_enum {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_every_accessor_reports_invalid_enum() {
        let fx = Fixture::seeded();
        let missing = EnumError::invalid_enum("Ghost");

        assert_eq!(fx.registry.get("Ghost", "A"), Err(missing.clone()));
        assert_eq!(fx.registry.get_values("Ghost"), Err(missing.clone()));
        assert_eq!(fx.registry.get_keys("Ghost"), Err(missing.clone()));
        assert_eq!(fx.registry.is_enum_member("A", "Ghost"), Err(missing.clone()));
        assert_eq!(fx.registry.has_key("Ghost", "A"), Err(missing.clone()));
        assert_eq!(fx.registry.has_value("Ghost", 1), Err(missing.clone()));
        assert_eq!(fx.registry.get_key_from_value("Ghost", 1), Err(missing.clone()));
        assert_eq!(fx.registry.deep_clone("Ghost"), Err(missing.clone()));
        assert_eq!(fx.registry.key_has_value("Ghost", "A", 1), Err(missing.clone()));
        assert_eq!(fx.registry.value_has_key("Ghost", "A", 1), Err(missing));

        let locations: Vec<&str> = fx.reporter.take().iter().map(|r| r.location).collect();
        assert_eq!(
            locations,
            vec![
                "get",
                "get_values",
                "get_keys",
                "is_enum_member",
                "has_key",
                "has_value",
                "get_key_from_value",
                "deep_clone",
                "key_has_value",
                "value_has_key",
            ]
        );
    }

    #[test]
    fn test_try_get_never_fails() {
        let fx = Fixture::seeded();

        assert!(fx.registry.try_get("Ghost").is_none());
        assert!(fx.registry.try_get("").is_none());

        let reports = fx.reporter.take();
        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(Report::is_warning));
        assert_eq!(reports[0].kind, ErrorKind::InvalidEnum);
        assert_eq!(reports[1].kind, ErrorKind::InvalidArguments);
    }

    #[test]
    fn test_empty_name_is_invalid_argument() {
        let fx = Fixture::seeded();

        let err = fx.registry.get("", "Red").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidArguments);
    }
}
