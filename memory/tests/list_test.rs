use memory::{format_list, parse_list, Value};
use proptest::prelude::*;

#[test]
fn test_nested_list_values() {
    let inner = Value::list(vec![Value::string("x y"), Value::int(2)]);
    let outer = Value::list(vec![inner, Value::string("z")]);
    assert_eq!(outer.as_str(), "{{x y} 2} z");

    let reparsed = Value::string(outer.as_str().to_string()).get_list().unwrap();
    let inner_again = reparsed[0].get_list().unwrap();
    assert_eq!(inner_again[0].as_str(), "x y");
    assert_eq!(inner_again[1].get_int(), Some(2));
}

#[test]
fn test_unbalanced_element_is_escaped() {
    let s = format_list(&["{a", "b}"]);
    assert_eq!(parse_list(&s).unwrap(), vec!["{a", "b}"]);
}

proptest! {
    #[test]
    fn format_then_parse_recovers_elements(items in prop::collection::vec(".*", 0..8)) {
        let s = format_list(&items);
        prop_assert_eq!(parse_list(&s).unwrap(), items);
    }

    #[test]
    fn int_string_forms_read_back(i in any::<i64>()) {
        let v = Value::string(Value::int(i).as_str().to_string());
        prop_assert_eq!(v.get_int(), Some(i));
    }

    #[test]
    fn double_string_forms_read_back(d in any::<f64>().prop_filter("finite", |d| d.is_finite())) {
        let v = Value::string(Value::double(d).as_str().to_string());
        prop_assert_eq!(v.get_double(), Some(d));
    }
}
