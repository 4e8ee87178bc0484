use fluent_collection::common::{Convertible, Value};
use fluent_collection::{collection, record, val, Collection};
use fluent_collection_int_test::test_util::{coffee_objects, coffees, integers, people, run_test};

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_to_json_numeric() {
    run_test(integers, |col| {
        let values: Vec<i64> = col.values().copied().collect();
        let expected = serde_json::to_string(&values).unwrap();
        assert_eq!(serde_json::to_string(&col).unwrap(), expected);
        Ok(())
    })
}

#[test]
fn test_to_json_records() {
    run_test(coffees, |col| {
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"[{"name":"Black","ingredients":[],"cost":4.5},"#,
                r#"{"name":"Decaf","ingredients":[],"cost":5},"#,
                r#"{"name":"Cappuccino","ingredients":["Milk","Chocolate"],"cost":7.5},"#,
                r#"{"name":"Submarine","ingredients":["Milk","Chocolate Bar"],"cost":9.99}]"#
            )
        );
        Ok(())
    })
}

#[test]
fn test_to_json_objects() {
    run_test(coffee_objects, |col| {
        let json: serde_json::Value = serde_json::to_value(&col).unwrap();
        assert_eq!(json[0]["name"], "Black");
        assert_eq!(json[2]["ingredients"][1], "Chocolate");
        assert_eq!(json.as_array().map(Vec::len), Some(4));
        Ok(())
    })
}

#[test]
fn test_string_keys_are_dropped() {
    let colors = collection!["Negro" => "Black", "Blanco" => "White"];
    assert_eq!(serde_json::to_string(&colors).unwrap(), r#"["Black","White"]"#);
}

#[test]
fn test_nested_collections() {
    run_test(people, |col| {
        let by_age = col.group_by("Age", false)?;
        assert_eq!(
            serde_json::to_string(&by_age).unwrap(),
            concat!(
                r#"[[{"Name":"John","Age":21,"sex":"M"},{"Name":"July","Age":21,"sex":"F"}],"#,
                r#"[{"Name":"Nathan","Age":19,"sex":"M"}]]"#
            )
        );

        let serializable = by_age.to_serializable()?;
        assert_eq!(serializable.as_array().map(Vec::len), Some(2));
        Ok(())
    })
}

#[test]
fn test_collection_inside_record_like_value() {
    let inner = collection![1, 2];
    let outer: Collection<Value> = Collection::from(vec![
        val!("head"),
        inner.to_value().unwrap(),
        Value::Record(record! { tail: true }),
    ]);
    assert_eq!(
        serde_json::to_string(&outer).unwrap(),
        r#"["head",[1,2],{"tail":true}]"#
    );
}
