use metafold_macro_tests::prelude::*;

fn object(entries: &[(&str, Value)]) -> Container {
    entries
        .iter()
        .map(|(k, v)| (*k, v.clone()))
        .collect::<Container>()
        .with_kind(ContainerKind::Object)
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn type_without_properties_encodes_to_an_empty_container() {
    let encoded = NoProperty.encode(None).unwrap();

    assert!(encoded.is_empty());
    assert_eq!(NoProperty::from_container(&encoded, None, None), Ok(NoProperty));
}

#[test]
fn properties_round_trip_under_their_own_names() {
    let value = PublicProperty {
        property: Some("value".into()),
    };

    let encoded = value.encode(None).unwrap();
    assert_eq!(encoded, object(&[("property", text("value"))]));
    assert_eq!(encoded.kind(), ContainerKind::Object);

    let decoded = PublicProperty::from_container(&encoded, None, None).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn unset_properties_write_no_key() {
    let encoded = PublicProperty::default().encode(None).unwrap();

    assert!(encoded.is_empty(), "unexpected keys: {encoded:?}");
}

#[test]
fn absent_paths_leave_the_target_untouched() {
    let target = Outer {
        direct: Some("qux".into()),
        ..Outer::default()
    };

    let decoded = Outer::from_container(&Container::new(), None, Some(target.clone())).unwrap();
    assert_eq!(decoded, target);
}

#[test]
fn nested_objects_merge_into_existing_state() {
    let target = Outer {
        direct: Some("qux".into()),
        nested: Some(Nested {
            property: Some("foo".into()),
            count: Some(7),
        }),
        ..Outer::default()
    };
    let input = object(&[(
        "nested",
        Value::Container(object(&[("property", text("bar"))])),
    )]);

    let decoded = Outer::from_container(&input, None, Some(target)).unwrap();

    assert_eq!(decoded.direct.as_deref(), Some("qux"));
    let nested = decoded.nested.expect("nested");
    assert_eq!(nested.property.as_deref(), Some("bar"));
    assert_eq!(nested.count, Some(7), "existing nested state was discarded");
}

#[test]
fn nested_lists_merge_by_position() {
    let target = Outer {
        list: Some(vec![
            Nested {
                property: Some("a".into()),
                count: Some(1),
            },
            Nested::default(),
        ]),
        ..Outer::default()
    };
    let first: Container = [("count", Value::Int(10))].into_iter().collect();
    let input = object(&[(
        "list",
        Value::Container([(0usize, Value::Container(first))].into_iter().collect()),
    )]);

    let decoded = Outer::from_container(&input, None, Some(target)).unwrap();
    let list = decoded.list.expect("list");

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].property.as_deref(), Some("a"));
    assert_eq!(list[0].count, Some(10));
}

#[test]
fn null_counts_as_absent() {
    let target = PublicProperty {
        property: Some("kept".into()),
    };
    let input = object(&[("property", Value::Null)]);

    let decoded = PublicProperty::from_container(&input, None, Some(target.clone())).unwrap();
    assert_eq!(decoded, target);
}

#[test]
fn scalar_input_is_coerced_to_a_single_entry_container() {
    // a scalar becomes {0: scalar}, which carries no named property
    let decoded = PublicProperty::from_value(&text("loose"), None, None).unwrap();
    assert_eq!(decoded, PublicProperty::default());

    let decoded = PublicProperty::from_value(&Value::Null, None, None).unwrap();
    assert_eq!(decoded, PublicProperty::default());
}

#[test]
fn wrong_scalar_shape_names_the_property() {
    let input = object(&[("property", Value::Int(3))]);
    let err = PublicProperty::from_container(&input, None, None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "PublicProperty::property: expected text, found int"
    );
    assert!(matches!(err.root(), MarshalError::Mismatch { .. }));
}

#[test]
fn nested_errors_carry_the_whole_path() {
    let input = object(&[(
        "nested",
        Value::Container(object(&[("count", text("many"))])),
    )]);
    let err = Outer::from_container(&input, None, None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Outer::nested: Nested::count: expected u32, found text"
    );
}

#[test]
fn keyword_properties_use_their_plain_name() {
    let value = Keyword {
        r#type: Some("admin".into()),
    };

    let encoded = value.encode(None).unwrap();
    assert_eq!(encoded.get("type"), Some(&text("admin")));
    assert_eq!(Keyword::from_container(&encoded, None, None), Ok(value));
}

#[test]
fn private_properties_are_reachable_from_the_defining_module() {
    let value = Private::new("s3cret");
    let encoded = value.encode(None).unwrap();

    let decoded = Private::from_container(&encoded, None, None).unwrap();
    assert_eq!(decoded.hidden(), Some("s3cret"));
}

#[test]
fn to_value_wraps_the_encoded_object() {
    let value = PublicProperty {
        property: Some("v".into()),
    };

    let Value::Container(c) = value.to_value(None).unwrap() else {
        panic!("expected a container");
    };
    assert_eq!(c.kind(), ContainerKind::Object);
    assert_eq!(c, value.to_container(None).unwrap());
}
