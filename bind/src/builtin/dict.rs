use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

fn entries<K: FromValue, V: FromValue>(value: &Value) -> Option<Vec<(K, V)>> {
    value
        .get_dict()?
        .iter()
        .map(|(k, v)| Some((K::try_cast(k)?, V::try_cast(v)?)))
        .collect()
}

impl<K, V, S> FromValue for HashMap<K, V, S>
where
    K: FromValue + Eq + Hash,
    V: FromValue,
    S: BuildHasher + Default,
{
    fn expected() -> String {
        format!("dict of {} to {}", K::expected(), V::expected())
    }

    fn try_cast(value: &Value) -> Option<Self> {
        Some(entries(value)?.into_iter().collect())
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::DICT
    }
}

impl<K, V> FromValue for BTreeMap<K, V>
where
    K: FromValue + Ord,
    V: FromValue,
{
    fn expected() -> String {
        format!("dict of {} to {}", K::expected(), V::expected())
    }

    fn try_cast(value: &Value) -> Option<Self> {
        Some(entries(value)?.into_iter().collect())
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::DICT
    }
}

impl<K: IntoValue, V: IntoValue, S> IntoValue for HashMap<K, V, S> {
    fn into_value(self) -> Value {
        Value::dict(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }
}

impl<K: IntoValue, V: IntoValue> IntoValue for BTreeMap<K, V> {
    fn into_value(self) -> Value {
        Value::dict(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }
}
