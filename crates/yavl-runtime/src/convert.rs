//! `FromYaml` / `ToYaml` implementations for the supported value shapes.

use crate::error::{ConversionError, Result};
use indexmap::{IndexMap, IndexSet};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use yaml_rust2::Yaml;
use yaml_rust2::yaml::Hash as YamlHash;

/// Reader capability: build a value from a document node.
pub trait FromYaml: Sized {
    fn from_yaml(node: &Yaml) -> Result<Self>;
}

/// Writer capability: render a value as a document node.
pub trait ToYaml {
    fn to_yaml(&self) -> Yaml;

    /// Whether a mapping writer should leave this field out entirely.
    fn is_absent(&self) -> bool {
        false
    }
}

/// `std::any::type_name` without module paths (`Vec<u8>`, not `alloc::vec::Vec<u8>`).
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else if c == ':' {
            segment.clear();
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}

fn sequence<'a, T>(node: &'a Yaml) -> Result<&'a [Yaml]> {
    match node {
        Yaml::Array(items) => Ok(items),
        _ => Err(ConversionError::bad_conversion(node, short_type_name::<T>())),
    }
}

fn mapping<'a, T>(node: &'a Yaml) -> Result<&'a YamlHash> {
    match node {
        Yaml::Hash(hash) => Ok(hash),
        _ => Err(ConversionError::bad_conversion(node, short_type_name::<T>())),
    }
}

fn check_length(expected: usize, got: usize) -> Result<()> {
    if expected == got {
        Ok(())
    } else {
        Err(ConversionError::InvalidSequenceLength { expected, got })
    }
}

// Scalars

impl FromYaml for String {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        // Any non-null scalar reads as its text.
        yavl_yaml::scalar_text(node).ok_or_else(|| ConversionError::bad_conversion(node, "String"))
    }
}

impl ToYaml for String {
    fn to_yaml(&self) -> Yaml {
        Yaml::String(self.clone())
    }
}

impl ToYaml for str {
    fn to_yaml(&self) -> Yaml {
        Yaml::String(self.to_string())
    }
}

impl FromYaml for bool {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        match node {
            Yaml::Boolean(b) => Ok(*b),
            Yaml::String(s) => yavl_yaml::parse_bool_word(s)
                .ok_or_else(|| ConversionError::bad_conversion(node, "bool")),
            _ => Err(ConversionError::bad_conversion(node, "bool")),
        }
    }
}

impl ToYaml for bool {
    fn to_yaml(&self) -> Yaml {
        Yaml::Boolean(*self)
    }
}

macro_rules! impl_integer {
    ($($t:ty),*) => {$(
        impl FromYaml for $t {
            fn from_yaml(node: &Yaml) -> Result<Self> {
                let value = match node {
                    Yaml::Integer(i) => <$t>::try_from(*i).ok(),
                    Yaml::String(s) => s.trim().parse::<$t>().ok(),
                    _ => None,
                };
                value.ok_or_else(|| ConversionError::bad_conversion(node, stringify!($t)))
            }
        }

        impl ToYaml for $t {
            #[allow(clippy::useless_conversion)]
            fn to_yaml(&self) -> Yaml {
                // Values outside i64 are kept as text so they read back losslessly.
                i64::try_from(*self).map_or_else(|_| Yaml::String(self.to_string()), Yaml::Integer)
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),*) => {$(
        impl FromYaml for $t {
            fn from_yaml(node: &Yaml) -> Result<Self> {
                let value = match node {
                    Yaml::Real(s) | Yaml::String(s) => s.trim().parse::<$t>().ok(),
                    Yaml::Integer(i) => Some(*i as $t),
                    _ => None,
                };
                value.ok_or_else(|| ConversionError::bad_conversion(node, stringify!($t)))
            }
        }

        impl ToYaml for $t {
            fn to_yaml(&self) -> Yaml {
                Yaml::Real(format!("{:?}", self))
            }
        }
    )*};
}

impl_float!(f32, f64);

impl FromYaml for Yaml {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        Ok(node.clone())
    }
}

impl ToYaml for Yaml {
    fn to_yaml(&self) -> Yaml {
        self.clone()
    }
}

// Wrappers

impl<T: FromYaml> FromYaml for Option<T> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        match node {
            Yaml::Null | Yaml::BadValue => Ok(None),
            _ => T::from_yaml(node).map(Some),
        }
    }
}

impl<T: ToYaml> ToYaml for Option<T> {
    fn to_yaml(&self) -> Yaml {
        self.as_ref().map_or(Yaml::Null, ToYaml::to_yaml)
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: FromYaml> FromYaml for Box<T> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        T::from_yaml(node).map(Box::new)
    }
}

impl<T: ToYaml + ?Sized> ToYaml for Box<T> {
    fn to_yaml(&self) -> Yaml {
        (**self).to_yaml()
    }
}

impl<T: ToYaml + ?Sized> ToYaml for &T {
    fn to_yaml(&self) -> Yaml {
        (**self).to_yaml()
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

// Sequences

impl<T: FromYaml> FromYaml for Vec<T> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        sequence::<Self>(node)?.iter().map(T::from_yaml).collect()
    }
}

impl<T: ToYaml> ToYaml for Vec<T> {
    fn to_yaml(&self) -> Yaml {
        self.as_slice().to_yaml()
    }
}

impl<T: ToYaml> ToYaml for [T] {
    fn to_yaml(&self) -> Yaml {
        Yaml::Array(self.iter().map(ToYaml::to_yaml).collect())
    }
}

impl<T: FromYaml, const N: usize> FromYaml for [T; N] {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let items = sequence::<Self>(node)?;
        check_length(N, items.len())?;
        let values = items.iter().map(T::from_yaml).collect::<Result<Vec<T>>>()?;
        values
            .try_into()
            .map_err(|v: Vec<T>| ConversionError::InvalidSequenceLength {
                expected: N,
                got: v.len(),
            })
    }
}

impl<T: ToYaml, const N: usize> ToYaml for [T; N] {
    fn to_yaml(&self) -> Yaml {
        self.as_slice().to_yaml()
    }
}

macro_rules! impl_tuple {
    ($len:expr => $($name:ident : $idx:tt),+) => {
        impl<$($name: FromYaml),+> FromYaml for ($($name,)+) {
            fn from_yaml(node: &Yaml) -> Result<Self> {
                let items = sequence::<Self>(node)?;
                check_length($len, items.len())?;
                Ok(($($name::from_yaml(&items[$idx])?,)+))
            }
        }

        impl<$($name: ToYaml),+> ToYaml for ($($name,)+) {
            fn to_yaml(&self) -> Yaml {
                Yaml::Array(vec![$(self.$idx.to_yaml()),+])
            }
        }
    };
}

impl_tuple!(1 => A: 0);
impl_tuple!(2 => A: 0, B: 1);
impl_tuple!(3 => A: 0, B: 1, C: 2);
impl_tuple!(4 => A: 0, B: 1, C: 2, D: 3);

// Sets

fn collect_set<T: FromYaml>(items: &[Yaml], mut insert: impl FnMut(T) -> bool) -> Result<()> {
    for item in items {
        if !insert(T::from_yaml(item)?) {
            return Err(ConversionError::DuplicateSetItem);
        }
    }
    Ok(())
}

impl<T: FromYaml + Hash + Eq> FromYaml for IndexSet<T> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let items = sequence::<Self>(node)?;
        let mut set = IndexSet::with_capacity(items.len());
        collect_set(items, |v| set.insert(v))?;
        Ok(set)
    }
}

impl<T: FromYaml + Ord> FromYaml for BTreeSet<T> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let items = sequence::<Self>(node)?;
        let mut set = BTreeSet::new();
        collect_set(items, |v| set.insert(v))?;
        Ok(set)
    }
}

impl<T: FromYaml + Hash + Eq, S: BuildHasher + Default> FromYaml for HashSet<T, S> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let items = sequence::<Self>(node)?;
        let mut set = HashSet::with_capacity_and_hasher(items.len(), S::default());
        collect_set(items, |v| set.insert(v))?;
        Ok(set)
    }
}

impl<T: ToYaml> ToYaml for IndexSet<T> {
    fn to_yaml(&self) -> Yaml {
        Yaml::Array(self.iter().map(ToYaml::to_yaml).collect())
    }
}

impl<T: ToYaml> ToYaml for BTreeSet<T> {
    fn to_yaml(&self) -> Yaml {
        Yaml::Array(self.iter().map(ToYaml::to_yaml).collect())
    }
}

impl<T: ToYaml, S: BuildHasher> ToYaml for HashSet<T, S> {
    fn to_yaml(&self) -> Yaml {
        Yaml::Array(self.iter().map(ToYaml::to_yaml).collect())
    }
}

// Maps

fn collect_map<K: FromYaml, V: FromYaml>(
    hash: &YamlHash,
    mut insert: impl FnMut(K, V) -> bool,
) -> Result<()> {
    for (key, value) in hash {
        if !insert(K::from_yaml(key)?, V::from_yaml(value)?) {
            return Err(ConversionError::DuplicateMapItem);
        }
    }
    Ok(())
}

fn to_yaml_hash<'a, K: ToYaml + 'a, V: ToYaml + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a V)>,
) -> Yaml {
    let mut hash = YamlHash::new();
    for (key, value) in entries {
        hash.insert(key.to_yaml(), value.to_yaml());
    }
    Yaml::Hash(hash)
}

impl<K: FromYaml + Hash + Eq, V: FromYaml> FromYaml for IndexMap<K, V> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let hash = mapping::<Self>(node)?;
        let mut map = IndexMap::with_capacity(hash.len());
        collect_map(hash, |k, v| map.insert(k, v).is_none())?;
        Ok(map)
    }
}

impl<K: FromYaml + Ord, V: FromYaml> FromYaml for BTreeMap<K, V> {
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let hash = mapping::<Self>(node)?;
        let mut map = BTreeMap::new();
        collect_map(hash, |k, v| map.insert(k, v).is_none())?;
        Ok(map)
    }
}

impl<K: FromYaml + Hash + Eq, V: FromYaml, S: BuildHasher + Default> FromYaml
    for HashMap<K, V, S>
{
    fn from_yaml(node: &Yaml) -> Result<Self> {
        let hash = mapping::<Self>(node)?;
        let mut map = HashMap::with_capacity_and_hasher(hash.len(), S::default());
        collect_map(hash, |k, v| map.insert(k, v).is_none())?;
        Ok(map)
    }
}

impl<K: ToYaml, V: ToYaml> ToYaml for IndexMap<K, V> {
    fn to_yaml(&self) -> Yaml {
        to_yaml_hash(self.iter())
    }
}

impl<K: ToYaml, V: ToYaml> ToYaml for BTreeMap<K, V> {
    fn to_yaml(&self) -> Yaml {
        to_yaml_hash(self.iter())
    }
}

impl<K: ToYaml, V: ToYaml, S: BuildHasher> ToYaml for HashMap<K, V, S> {
    fn to_yaml(&self) -> Yaml {
        to_yaml_hash(self.iter())
    }
}
