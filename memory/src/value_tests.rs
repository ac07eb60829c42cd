#[cfg(test)]
mod tests {
    use crate::obj_type;
    use crate::Value;
    use num_bigint::BigInt;
    use std::rc::Rc;

    #[test]
    fn test_untyped_string_is_string_like() {
        let v = Value::string("hello");
        assert!(v.is_untyped());
        assert!(v.is_string_like());
        assert_eq!(v.as_str(), "hello");
    }

    #[test]
    fn test_typed_string_is_string_like() {
        let v = Value::typed_string("hello");
        assert!(v.has_type(&obj_type::STRING));
        assert!(v.is_string_like());
    }

    #[test]
    fn test_int_is_not_string_like() {
        let v = Value::int(5);
        assert!(!v.is_string_like());
        assert!(v.has_type(&obj_type::INT));
        assert!(!v.has_type(&obj_type::DOUBLE));
    }

    #[test]
    fn test_string_form_is_lazy() {
        let v = Value::int(-12);
        assert!(!v.has_string());
        assert_eq!(v.as_str(), "-12");
        assert!(v.has_string());
    }

    #[test]
    fn test_reading_does_not_retag() {
        let v = Value::string("42");
        assert_eq!(v.get_int(), Some(42));
        assert!(v.is_untyped());
        assert_eq!(v.get_double(), Some(42.0));
        assert!(v.is_untyped());
    }

    #[test]
    fn test_double_string_forms() {
        assert_eq!(Value::double(1.0).as_str(), "1.0");
        assert_eq!(Value::double(0.1).as_str(), "0.1");
        assert_eq!(Value::double(f64::INFINITY).as_str(), "Inf");
        assert_eq!(Value::double(f64::NEG_INFINITY).as_str(), "-Inf");
        assert_eq!(Value::double(f64::NAN).as_str(), "NaN");
    }

    #[test]
    fn test_double_is_not_an_int() {
        assert_eq!(Value::double(2.0).get_int(), None);
        assert_eq!(Value::int(2).get_double(), Some(2.0));
    }

    #[test]
    fn test_boolean_forms() {
        assert_eq!(Value::boolean(true).as_str(), "1");
        assert_eq!(Value::boolean(false).as_str(), "0");
        assert_eq!(Value::string("on").get_boolean(), Some(true));
        assert_eq!(Value::int(0).get_boolean(), Some(false));
    }

    #[test]
    fn test_bignum_reads() {
        let big: BigInt = "340282366920938463463374607431768211456".parse().unwrap();
        let v = Value::bignum(big.clone());
        assert_eq!(v.get_bignum(), Some(big));
        assert_eq!(v.get_int(), None);
        assert!(v.get_double().unwrap() > 3.0e38);

        let small = Value::bignum(BigInt::from(7));
        assert_eq!(small.get_int(), Some(7));
    }

    #[test]
    fn test_bytes_round_trip_through_string() {
        let v = Value::bytes(vec![0, 65, 255]);
        assert_eq!(v.as_str().chars().count(), 3);
        let s = Value::string(v.as_str().to_string());
        assert_eq!(s.get_bytes(), Some(vec![0, 65, 255]));
        assert_eq!(Value::string("\u{100}").get_bytes(), None);
    }

    #[test]
    fn test_list_string_form() {
        let v = Value::list(vec![Value::int(1), Value::string("a b"), Value::empty()]);
        assert_eq!(v.as_str(), "1 {a b} {}");
        let parsed = Value::string(v.as_str().to_string()).get_list().unwrap();
        let words: Vec<&str> = parsed.iter().map(Value::as_str).collect();
        assert_eq!(words, vec!["1", "a b", ""]);
    }

    #[test]
    fn test_dict_from_even_list() {
        let d = Value::string("a 1 b 2").get_dict().unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d[1].0.as_str(), "b");
        assert_eq!(d[1].1.get_int(), Some(2));
        assert!(Value::string("a 1 b").get_dict().is_none());
    }

    #[test]
    fn test_dict_string_form() {
        let d = Value::dict(vec![(Value::string("k"), Value::int(3))]);
        assert_eq!(d.as_str(), "k 3");
        assert_eq!(d.get_list().map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_opaque_payload() {
        let v = Value::opaque(&obj_type::EXCEPTION, Rc::new(17u32), "boom");
        assert_eq!(v.as_str(), "boom");
        assert_eq!(v.opaque_ref::<u32>().as_deref(), Some(&17));
        assert!(v.opaque_ref::<i64>().is_none());
        assert!(Value::int(1).opaque_ref::<u32>().is_none());
    }

    #[test]
    fn test_clone_shares_the_object() {
        let a = Value::int(9);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Value::int(9)));
    }
}
