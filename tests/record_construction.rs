use dynrec::record::{ConstructError, FieldDef, RecordBuilder, RecordSchema};
use dynrec::types::{DataType, Value};

#[test]
fn four_field_schema_end_to_end() {
    let schema = RecordSchema::new(
        "Record",
        vec![
            FieldDef::new("id", DataType::Int),
            FieldDef::new("name", DataType::Text),
            FieldDef::new("birth", DataType::Timestamp),
            FieldDef::new("value", DataType::Decimal),
        ],
    )
    .unwrap();

    let t0 = Value::Timestamp(1_700_000_000_000_000);
    let record = RecordBuilder::new(&schema)
        .args([
            Value::Int(1),
            Value::text("A"),
            t0.clone(),
            Value::decimal(1, 1),
        ])
        .finish()
        .unwrap();

    assert_eq!(record.get_named("id"), Some(&Value::Int(1)));
    assert_eq!(record.get_named("name"), Some(&Value::text("A")));
    assert_eq!(record.get_named("birth"), Some(&t0));
    assert_eq!(record.get_named("value"), Some(&Value::decimal(1, 1)));

    let err = RecordBuilder::new(&schema)
        .args([Value::Int(1), Value::text("A")])
        .finish()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Record() missing 2 required arguments: 'birth' and 'value'"
    );
    match err.downcast_ref::<ConstructError>() {
        Some(ConstructError::MissingRequiredFields { missing, .. }) => {
            assert_eq!(missing, &["birth", "value"]);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[test]
fn single_list_field_stores_values_as_given() {
    let schema =
        RecordSchema::new("Record", vec![FieldDef::list("item_ids", DataType::Int)]).unwrap();

    let items = Value::list([Value::Int(1), Value::Int(2), Value::text("A")]);
    let record = RecordBuilder::new(&schema)
        .arg(items.clone())
        .finish()
        .unwrap();

    assert_eq!(record.get_named("item_ids"), Some(&items));
}

#[test]
fn fully_defaulted_schema_builds_with_no_arguments() {
    let schema = RecordSchema::new(
        "Record",
        vec![
            FieldDef::new("id", DataType::Int).with_default(Value::Int(0)),
            FieldDef::new("name", DataType::Text).with_default(Value::text("")),
            FieldDef::new("birth", DataType::Timestamp).with_default(Value::Timestamp(0)),
            FieldDef::new("value", DataType::Decimal).with_default(Value::decimal(0, 1)),
        ],
    )
    .unwrap();

    let empty = RecordBuilder::new(&schema).finish().unwrap();
    assert_eq!(empty.to_string(), "Record(id=0, name='', birth=0, value=0.0)");

    let partial = RecordBuilder::new(&schema)
        .arg(Value::Int(1))
        .arg(Value::text("A"))
        .finish()
        .unwrap();
    assert_eq!(partial.to_string(), "Record(id=1, name='A', birth=0, value=0.0)");

    let named = RecordBuilder::new(&schema)
        .kwarg("name", Value::text("B"))
        .kwarg("value", Value::decimal(99, 1))
        .finish()
        .unwrap();
    assert_eq!(named.to_string(), "Record(id=0, name='B', birth=0, value=9.9)");
}

#[test]
fn field_metadata_flows_through_introspection() {
    let schema = RecordSchema::new(
        "Record",
        vec![
            FieldDef::new("id", DataType::Int),
            FieldDef::new("name", DataType::Text),
            FieldDef::new("birth", DataType::Timestamp)
                .with_default(Value::Null)
                .with_metadata([("DF", Value::text("CURRENT_TIMESTAMP"))]),
            FieldDef::new("note", DataType::Text)
                .with_default(Value::Null)
                .with_metadata([("UK", Value::text("id name"))]),
        ],
    )
    .unwrap();

    let names: Vec<&str> = schema.fields().iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["id", "name", "birth", "note"]);

    let birth = schema.field_by_name("birth").unwrap();
    assert_eq!(birth.data_type(), DataType::Timestamp);
    assert!(birth.default().value().is_some());
    assert_eq!(
        birth.metadata().get("DF"),
        Some(&Value::text("CURRENT_TIMESTAMP"))
    );

    let id = schema.field_by_name("id").unwrap();
    assert!(id.default().is_missing());
    assert!(id.metadata().is_empty());
}

#[test]
fn strict_mode_is_opt_in_only() {
    let schema = RecordSchema::new(
        "Record",
        vec![
            FieldDef::new("id", DataType::Int),
            FieldDef::new("name", DataType::Text),
        ],
    )
    .unwrap();

    // Default construction stores mismatched values untouched.
    let lax = RecordBuilder::new(&schema)
        .args([Value::text("1"), Value::Int(2)])
        .finish()
        .unwrap();
    assert_eq!(lax.get(0), Some(&Value::text("1")));
    assert_eq!(lax.get(1), Some(&Value::Int(2)));

    // The same bindings fail once a check is installed.
    let err = RecordBuilder::new(&schema)
        .args([Value::text("1"), Value::Int(2)])
        .check_types(DataType::accepts)
        .finish()
        .unwrap_err();
    assert_eq!(err.to_string(), "Record() field 'id' declared int but got text");
}
