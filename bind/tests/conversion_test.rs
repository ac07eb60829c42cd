use bind::{make_value, try_cast, ByteArray, FromValue, IntoValue};
use num_bigint::BigInt;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fmt::Debug;

fn round_trips<T>(x: T) -> Result<(), TestCaseError>
where
    T: FromValue + IntoValue + Clone + PartialEq + Debug,
{
    let v = make_value(x.clone());
    prop_assert_eq!(try_cast::<T>(&v), Some(x.clone()));
    // The same must hold once only the string form is left.
    let s = bind::Value::string(v.as_str().to_string());
    prop_assert_eq!(try_cast::<T>(&s), Some(x));
    Ok(())
}

proptest! {
    #[test]
    fn ints(x in any::<i64>()) { round_trips(x)?; }

    #[test]
    fn unsigned(x in any::<u64>()) { round_trips(x)?; }

    #[test]
    fn small(x in any::<i8>(), y in any::<u16>()) { round_trips(x)?; round_trips(y)?; }

    #[test]
    fn doubles(x in any::<f64>().prop_filter("finite", |d| d.is_finite())) { round_trips(x)?; }

    #[test]
    fn booleans(x in any::<bool>()) { round_trips(x)?; }

    #[test]
    fn strings(x in ".*") { round_trips(x)?; }

    #[test]
    fn bignums(digits in "-?[1-9][0-9]{0,60}") {
        let big: BigInt = digits.parse().unwrap();
        round_trips(big)?;
    }

    #[test]
    fn bytes(x in prop::collection::vec(any::<u8>(), 0..64)) { round_trips(ByteArray(x))?; }

    #[test]
    fn nested_lists(x in prop::collection::vec(prop::collection::vec(".*", 0..4), 0..4)) {
        round_trips(x)?;
    }

    #[test]
    fn dicts(x in prop::collection::btree_map("[a-z ]{0,8}", any::<i64>(), 0..6)) {
        round_trips::<BTreeMap<String, i64>>(x)?;
    }

    #[test]
    fn optionals(x in prop::option::of(any::<i32>())) { round_trips(x)?; }
}
