//! Option list tests
//!
//! Ordering, flag handling and merging of heterogeneous arguments.

use tikzplot::{
    options,
    options::{Arg, Configurable, Options},
    value::{Raw, ValueList},
};

#[test]
fn test_positional_then_named_order() {
    let mut options = Options::new();
    options
        .merge(["ybar", "fill"], [("mark", "none")])
        .unwrap();
    let mut out = String::new();
    options.write_entries(&mut out).unwrap();
    assert_eq!(out, "ybar, fill, mark=none");
}

#[test]
fn test_reused_key_keeps_first_position() {
    let mut options = Options::new();
    options.add_raw([Raw::map([("a", 1)])]).unwrap();
    options.add_raw([Raw::map([("b", 2)])]).unwrap();
    options.add_raw([Raw::map([("a", 3)])]).unwrap();
    assert_eq!(options.to_string(), "[a=3, b=2]");
}

#[test]
fn test_disjoint_calls_commute_on_key_set() {
    let mut first = Options::new();
    first.add([("a", 1)]);
    first.add(["b"]);

    let mut second = Options::new();
    second.add(["b"]);
    second.add([("a", 1)]);

    let first_keys: Vec<&str> = first.keys().collect();
    let mut second_keys: Vec<&str> = second.keys().collect();
    second_keys.sort_unstable();
    assert_eq!(first_keys, second_keys);
    assert_eq!(second.to_string(), "[b, a=1]");
}

#[test]
fn test_flag_round_trip() {
    let mut options = Options::new();
    options.add(["foo"]);
    assert_eq!(options.get("foo").unwrap(), None);
    assert!(options.is_flag("foo"));
    assert_eq!(options.to_string(), "[foo]");
}

#[test]
fn test_empty_iff_no_entries() {
    let mut options = Options::new();
    assert_eq!(options.to_string(), "");
    options.set_flag("x");
    assert_eq!(options.to_string(), "[x]");
    options.delete("x").unwrap();
    assert!(options.is_empty());
    assert_eq!(options.to_string(), "");
}

#[test]
fn test_missing_key_is_not_found() {
    let mut options = options!["thick"];
    let err = options.get("color").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "options");

    let err = options.delete("color").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_delete_keeps_relative_order() {
    let mut options = options!["a" => 1, "b" => 2, "c" => 3];
    assert_eq!(options.delete("b").unwrap().unwrap().to_string(), "2");
    assert_eq!(options.to_string(), "[a=1, c=3]");
}

#[test]
fn test_mixed_argument_shapes() {
    let mut options = Options::new();
    options
        .add_raw([
            Raw::from("only marks"),
            Raw::from(("mark", "*")),
            Raw::map([("mark size", 2)]),
            Raw::from(vec![Raw::from("thick"), Raw::from(("opacity", 0.5))]),
            Raw::from(3),
        ])
        .unwrap();
    assert_eq!(
        options.to_string(),
        "[only marks, mark=*, mark size=2, thick, opacity=0.5, 3]"
    );
}

#[test]
fn test_unsupported_arguments() {
    for raw in [Raw::None, Raw::from(true), Raw::from(vec![Raw::None])] {
        let mut options = options!["keep"];
        let err = options.add_raw([Raw::from("new"), raw]).unwrap_err();
        assert!(err.is_configuration_error());
        assert_eq!(options.to_string(), "[keep]");
    }
}

#[test]
fn test_value_list_argument_merges_entries() {
    let mut list = ValueList::new();
    list.push("thick");
    list.set("color", "red");

    let mut options = options!["color" => "blue"];
    options.add([Arg::from(list)]);
    assert_eq!(options.to_string(), "[color=red, thick]");
}

#[test]
fn test_nested_options_argument() {
    let inner = options!["dashed", "line width" => "1pt"];
    let mut options = Options::new();
    options.add([Arg::from("thin"), Arg::from(inner)]);
    assert_eq!(options.to_string(), "[thin, dashed, line width=1pt]");
}

#[test]
fn test_aggregate_option_value() {
    let mut options = Options::new();
    options.set("legend style", Raw::map([("at", Raw::from((0.5, -0.1))), ("anchor", Raw::from("north"))]));
    assert_eq!(options.to_string(), "[legend style={at={(0.5, -0.1)}, anchor=north}]");

    let style = options.get_value("legend style").unwrap();
    assert_eq!(style.as_list().unwrap().len(), 2);
}

#[test]
fn test_configurable_chaining() {
    let mut element = tikzplot::element::Element::command("addplot");
    element.set("color", "red").set_flag("thick").set("color", "blue");
    element.add(["smooth"]);
    assert_eq!(element.options().to_string(), "[color=blue, thick, smooth]");
    assert_eq!(element.get("color").unwrap().unwrap().to_string(), "blue");
}

#[test]
fn test_json_point_keeps_repeated_coordinates() {
    let json: serde_json::Value =
        serde_json::from_str(r#"{"legend style": {"at": [0.5, 0.5]}}"#).unwrap();
    let mut options = Options::new();
    options.add_raw([Raw::from(json)]).unwrap();
    assert_eq!(options.to_string(), "[legend style={at={0.5, 0.5}}]");
}

#[test]
fn test_value_list_argument_keeps_items_in_order() {
    let list = ValueList::from_items([Raw::from("thick"), Raw::from(2), Raw::from("thick")]);
    let mut options = Options::new();
    options.add([Arg::from(list)]);
    assert_eq!(options.to_string(), "[thick, 2]");
}
