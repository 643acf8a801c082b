//! Value coercion tests
//!
//! Covers each coercion rule and the idempotence of coercion.

use tikzplot::{
    Node, Options,
    value::{Color, Coordinate, Raw, Value, ValueList, coerce},
};

fn inputs() -> Vec<Raw> {
    vec![
        Raw::from(3),
        Raw::from(2.5),
        Raw::from("red"),
        Raw::from(true),
        Raw::from((0.5, 1)),
        Raw::from(("left", 1)),
        Raw::from(vec![1, 2, 3]),
        Raw::map([("a", 1), ("b", 2)]),
        Raw::from(Color::rgb8(255, 0, 0)),
        Raw::from(Coordinate::xy(1.0, 2.0)),
        Raw::from(Value::bracketed(Value::scalar("x"))),
    ]
}

#[test]
fn test_coercion_is_idempotent() {
    for raw in inputs() {
        let once = coerce(raw.clone()).expect("only None coerces to nothing");
        let twice = coerce(once.clone()).expect("typed values are kept");
        assert_eq!(once, twice, "coercion changed {raw:?}");
        assert_eq!(once.to_string(), twice.to_string());
    }
}

#[test]
fn test_none_is_absent() {
    assert_eq!(coerce(Raw::None), None);
    assert_eq!(coerce(None::<i32>), None);
    assert_eq!(coerce(Some(4)).unwrap().to_string(), "4");
}

#[test]
fn test_numeric_tuple_is_bracketed() {
    let value = coerce((1, 2, 3)).unwrap();
    assert!(matches!(value, Value::Bracketed(_)));
    assert_eq!(value.to_string(), "{(1, 2, 3)}");
}

#[test]
fn test_text_tuple_is_aggregate() {
    let value = coerce(("a", "b")).unwrap();
    assert!(value.as_list().is_some());
    assert_eq!(value.to_string(), "{a, b}");
}

#[test]
fn test_nested_aggregate() {
    let value = coerce(Raw::map([
        ("font", Raw::from("\\small")),
        ("at", Raw::from((0.5, 1.0))),
        ("marks", Raw::from(vec!["*", "o"])),
    ]))
    .unwrap();
    assert_eq!(value.to_string(), "{font=\\small, at={(0.5, 1)}, marks={*, o}}");
}

#[test]
fn test_aggregate_mutation() {
    let mut value = coerce(vec!["thick"]).unwrap();
    let list = value.as_list_mut().unwrap();
    list.set("color", "blue");
    list.push(Raw::None);
    assert_eq!(list.len(), 2);
    assert_eq!(value.to_string(), "{thick, color=blue}");
}

#[test]
fn test_json_input_keeps_order() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"z": 1, "a": [1, 2], "m": "text", "f": 0.5}"#).unwrap();
    assert_eq!(
        coerce(json).unwrap().to_string(),
        "{z=1, a={1, 2}, m=text, f=0.5}"
    );
}

#[test]
fn test_color_and_coordinate_values() {
    let color = Color::rgb(1.0, 0.5, 0.0).unwrap();
    assert_eq!(coerce(color).unwrap().to_string(), "{rgb,1:red,1;green,0.5;blue,0}");

    let err = Color::rgb(1.5, 0.0, 0.0).unwrap_err();
    assert!(err.is_color_error());

    let point = Coordinate::xy(1.0, 2.0).with_error([0.0, 0.5]).with_meta("a");
    assert_eq!(point.to_string(), "(1, 2) +- (0, 0.5) [a]");

    let err = tikzplot::Error::from(Coordinate::new(Vec::<f64>::new()).unwrap_err());
    assert!(err.is_configuration_error());
    assert_eq!(err.module(), "value");
}

#[test]
fn test_value_list_from_iterator() {
    let list: ValueList = ["a", "b", "a"].into_iter().collect();
    assert_eq!(list.to_string(), "{a, b, a}");
}

#[test]
fn test_repeated_items_are_kept() {
    let labels = coerce(vec!["Mon", "Tue", "Mon"]).unwrap();
    assert_eq!(labels.to_string(), "{Mon, Tue, Mon}");

    let ticks = coerce(vec![0, 0, 1]).unwrap();
    assert_eq!(ticks.as_list().unwrap().len(), 3);
    assert_eq!(ticks.to_string(), "{0, 0, 1}");
}

#[derive(Debug)]
struct Label(&'static str);

impl Node for Label {
    fn write(&self, sink: &mut dyn std::fmt::Write) -> tikzplot::Result<()> {
        write!(sink, "\\textbf{{{}}}", self.0)?;
        Ok(())
    }
}

#[test]
fn test_node_as_value() {
    let value = Value::node(Label("peak"));
    assert_eq!(value.type_name(), "node");
    assert_eq!(value, value.clone());
    assert_ne!(value, Value::node(Label("peak")));
    assert_eq!(coerce(value.clone()), Some(value.clone()));

    let mut options = Options::new();
    options.set("title", value);
    assert_eq!(options.to_string(), "[title=\\textbf{peak}]");
}
