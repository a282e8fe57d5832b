//! Builder output fed back through the codec, as the API would echo it.

use monday_columns::{
    build_checkbox, build_date, build_date_time, build_dropdown, build_people,
    build_status_index, decode, encode, Column, ColumnCatalog, ColumnType, ColumnValue,
    ColumnsError, DecodedValue,
};

fn board() -> ColumnCatalog {
    ColumnCatalog::build(vec![
        Column::new("t1", "Notes", ColumnType::Text),
        Column::new("s1", "Status", ColumnType::Color)
            .with_settings(r#"{"labels":{"0":"Done","1":"Stuck","2":"Working on it"}}"#),
        Column::new("c1", "Approved", ColumnType::Boolean),
        Column::new("d1", "Due", ColumnType::Date),
        Column::new("p1", "Owners", ColumnType::MultiplePerson),
        Column::new("x1", "Tags", ColumnType::Dropdown)
            .with_settings(r#"{"labels":[{"id":5,"name":"Red"},{"id":9,"name":"Blue"}]}"#),
        Column::new("n1", "Estimate", "numeric"),
    ])
}

fn echo(column_id: &str, raw: String) -> DecodedValue {
    decode(&board(), &ColumnValue::new(column_id, raw)).unwrap()
}

#[test_log::test]
fn text_round_trip() {
    assert_eq!(
        echo("t1", "plain words".to_string()),
        DecodedValue::Scalar("plain words".into())
    );
}

#[test_log::test]
fn date_round_trip() {
    let raw = encode(&build_date("2024-01-05")).unwrap();
    assert_eq!(echo("d1", raw), DecodedValue::Scalar("2024-01-05".into()));

    let raw = encode(&build_date_time("2024-01-05", "09:15:00")).unwrap();
    assert_eq!(echo("d1", raw), DecodedValue::Scalar("2024-01-05".into()));
}

#[test_log::test]
fn status_round_trip_and_label_lookup() {
    let raw = encode(&build_status_index(2)).unwrap();
    let decoded = echo("s1", raw);
    assert_eq!(decoded, DecodedValue::Scalar("2".into()));

    let labels = board().labels("s1").unwrap();
    assert_eq!(labels.name_of(decoded.as_scalar().unwrap()), Some("Working on it"));
}

#[test_log::test]
fn checkbox_round_trip() {
    let raw = encode(&build_checkbox("true")).unwrap();
    assert_eq!(echo("c1", raw), DecodedValue::Scalar("true".into()));
}

#[test_log::test]
fn people_round_trip() {
    let raw = encode(&build_people([3, 1, 2])).unwrap();
    assert_eq!(
        echo("p1", raw),
        DecodedValue::List(vec!["3".into(), "1".into(), "2".into()])
    );

    let raw = encode(&build_people(Vec::new())).unwrap();
    assert_eq!(echo("p1", raw), DecodedValue::List(vec![]));
}

#[test_log::test]
fn dropdown_round_trip_and_label_lookup() {
    let raw = encode(&build_dropdown([9, 5])).unwrap();
    let decoded = echo("x1", raw);
    assert_eq!(decoded, DecodedValue::List(vec!["9".into(), "5".into()]));

    let labels = board().labels("x1").unwrap();
    let names: Vec<&str> = decoded
        .as_list()
        .unwrap()
        .iter()
        .filter_map(|id| labels.name_of(id))
        .collect();
    assert_eq!(names, vec!["Blue", "Red"]);
}

#[test_log::test]
fn empty_value_decodes_empty_for_every_column() {
    let catalog = board();
    for column in catalog.iter() {
        let decoded = decode(&catalog, &ColumnValue::new(column.id.clone(), "")).unwrap();
        assert_eq!(decoded, DecodedValue::Scalar(String::new()), "{}", column.id);
    }
}

#[test_log::test]
fn unknown_column_for_every_valid_value() {
    let raws = [
        encode(&build_date("2024-01-05")).unwrap(),
        encode(&build_status_index(0)).unwrap(),
        encode(&build_checkbox("false")).unwrap(),
        encode(&build_people([1])).unwrap(),
        encode(&build_dropdown([1])).unwrap(),
    ];
    for raw in raws {
        let err = decode(&board(), &ColumnValue::new("zz", raw)).unwrap_err();
        assert!(matches!(err, ColumnsError::UnknownColumn { .. }));
    }
}

#[test_log::test]
fn unsupported_type_is_rejected() {
    let err = decode(&board(), &ColumnValue::new("n1", r#""12""#)).unwrap_err();
    assert!(matches!(err, ColumnsError::UnsupportedColumnType { .. }));
}

#[test_log::test]
fn malformed_date_is_an_error() {
    let err = decode(&board(), &ColumnValue::new("d1", "not json")).unwrap_err();
    assert!(matches!(err, ColumnsError::MalformedValue { .. }));
}

#[test_log::test]
fn shape_family_is_fixed_by_column_type() {
    let catalog = board();
    for column in catalog.iter().filter(|c| c.column_type.is_list()) {
        let raw = match column.column_type {
            ColumnType::MultiplePerson => encode(&build_people(Vec::new())).unwrap(),
            _ => encode(&build_dropdown(Vec::new())).unwrap(),
        };
        let decoded = decode(&catalog, &ColumnValue::new(column.id.clone(), raw)).unwrap();
        assert!(decoded.as_list().is_some(), "{}", column.id);
    }
}
