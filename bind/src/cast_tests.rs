#[cfg(test)]
mod tests {
    use crate::cast::*;
    use crate::error::Error;
    use crate::ByteArray;
    use memory::{obj_type, Value};
    use num_bigint::BigInt;
    use std::collections::{BTreeMap, HashMap};
    use std::rc::Rc;

    #[test]
    fn test_cast_reports_type_mismatch() {
        let err = cast::<i64>(&Value::string("abc")).unwrap_err();
        assert_eq!(err.expected, "integer");
        assert_eq!(err.got, "abc");
        assert_eq!(err.to_string(), "expected integer but got \"abc\"");
    }

    #[test]
    fn test_string_like_refuses_typed_values_without_implicit_string() {
        assert_eq!(try_cast_no_implicit_string::<String>(&Value::int(3)), None);
        assert_eq!(
            try_cast_no_implicit_string::<String>(&Value::typed_string("x")),
            Some("x".to_string())
        );
        assert_eq!(
            try_cast_no_implicit_string::<String>(&Value::string("y")),
            Some("y".to_string())
        );
        assert_eq!(try_cast::<String>(&Value::int(3)), Some("3".to_string()));
    }

    #[test]
    fn test_non_string_types_ignore_the_implicit_string_rule() {
        assert_eq!(try_cast_no_implicit_string::<f64>(&Value::int(3)), Some(3.0));
        assert_eq!(try_cast_no_implicit_string::<i64>(&Value::string("7")), Some(7));
    }

    #[test]
    fn test_nested_lists() {
        let v = make_value(vec![vec![1i64, 2], vec![], vec![3]]);
        assert_eq!(v.as_str(), "{1 2} {} 3");
        assert!(is_exact_type::<Vec<Vec<i64>>>(&v));
        assert!(!is_exact_type::<Vec<Vec<f64>>>(&v));
        assert!(is_equivalent_type::<Vec<String>>(v.ty()));

        let from_string: Vec<Vec<i64>> = try_cast(&Value::string("{1 2} {} 3")).unwrap();
        assert_eq!(from_string, vec![vec![1, 2], vec![], vec![3]]);
        assert_eq!(try_cast::<Vec<i64>>(&Value::string("1 x")), None);
    }

    #[test]
    fn test_dicts() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1i64);
        map.insert("b".to_string(), 2);
        let v = make_value(map.clone());
        assert!(v.has_type(&obj_type::DICT));
        assert_eq!(v.as_str(), "a 1 b 2");

        let back: HashMap<String, i64> = try_cast(&v).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back["b"], 2);
        let nested: BTreeMap<String, Vec<i64>> = try_cast(&Value::string("x {1 2}")).unwrap();
        assert_eq!(nested["x"], vec![1, 2]);
        assert!(try_cast::<BTreeMap<String, i64>>(&Value::string("a")).is_none());
    }

    #[test]
    fn test_optional() {
        assert_eq!(try_cast::<Option<i64>>(&Value::empty()), Some(None));
        assert_eq!(try_cast::<Option<i64>>(&Value::string("4")), Some(Some(4)));
        assert_eq!(try_cast::<Option<i64>>(&Value::string("z")), None);
        assert_eq!(make_value(None::<i64>).as_str(), "");
        assert!(is_exact_type::<Option<i64>>(&Value::int(1)));
    }

    #[test]
    fn test_bytearray() {
        let v = make_value(ByteArray(vec![1, 2, 255]));
        assert!(v.has_type(&obj_type::BYTEARRAY));
        assert!(is_exact_type::<ByteArray>(&v));
        let back: ByteArray = try_cast(&v).unwrap();
        assert_eq!(back.0, vec![1, 2, 255]);
        let as_ints: Vec<i64> = try_cast(&make_value(vec![1u8, 2])).unwrap();
        assert_eq!(as_ints, vec![1, 2]);
    }

    #[test]
    fn test_bignum_stays_bignum() {
        let v = make_value(BigInt::from(5));
        assert!(v.has_type(&obj_type::BIGNUM));
        assert_eq!(try_cast::<i64>(&v), Some(5));
        assert!(is_equivalent_type::<BigInt>(Value::int(1).ty()));
    }

    #[test]
    fn test_exception_values_keep_the_error() {
        let v = make_value(Error::Script("boom".into()));
        assert_eq!(v.as_str(), "boom");
        assert!(is_exact_type::<Rc<Error>>(&v));
        let err: Rc<Error> = try_cast(&v).unwrap();
        assert!(matches!(&*err, Error::Script(m) if m == "boom"));

        let from_string: Rc<Error> = try_cast(&Value::string("plain")).unwrap();
        assert_eq!(from_string.to_string(), "plain");
        assert!(try_cast::<Rc<Error>>(&Value::int(1)).is_none());
    }

    #[test]
    fn test_value_passes_through() {
        let v = Value::int(8);
        let same: Value = try_cast(&v).unwrap();
        assert!(same.ptr_eq(&v));
        assert!(make_value(v.clone()).ptr_eq(&v));
    }
}
