//! # General Helpers
//!
//! The emptiness predicate used as a guard by nearly every other helper,
//! plus small helpers over JSON-shaped records handed over by host code.
//!
//! ## What Counts As Empty
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EMPTY                              │  NOT EMPTY                        │
//! │  ───────────────────────────────    │  ─────────────────────────────    │
//! │  null / None                        │  any number (0, NaN included)     │
//! │  "" and "   "                       │  "0"                              │
//! │  "null"                             │  true / false                     │
//! │  {} and []                          │  [1], {"a": 1}, "text"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use serde_json::{Map, Value};
use tracing::error;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Emptiness
// =============================================================================

/// Values that can be classified as empty or not.
///
/// Numbers are never empty. Callers that care about `NaN` check it
/// separately.
pub trait Emptiness {
    /// Returns true if the value carries no usable content.
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty() || self == "null"
    }
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.as_str().is_empty_value()
    }
}

impl Emptiness for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty_value(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            Value::Number(_) | Value::Bool(_) => false,
        }
    }
}

impl Emptiness for Map<String, Value> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Emptiness> Emptiness for Option<T> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(inner) => inner.is_empty_value(),
            None => true,
        }
    }
}

impl<T> Emptiness for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Emptiness for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Emptiness for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Emptiness for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Emptiness + ?Sized> Emptiness for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

macro_rules! never_empty {
    ($($ty:ty),*) => {
        $(
            impl Emptiness for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_empty!(bool, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Checks if a value is empty. Returns true if it is empty else false.
///
/// ## Example
/// ```rust
/// use frontkit_core::general::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!(null)));
/// assert!(is_empty("   "));
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&0));
/// assert!(!is_empty("0"));
/// ```
#[inline]
pub fn is_empty<T: Emptiness + ?Sized>(data: &T) -> bool {
    data.is_empty_value()
}

// =============================================================================
// Collection Helpers
// =============================================================================

/// Returns a vector of `size` copies of `value`.
pub fn get_filled_array<T: Clone>(size: usize, value: T) -> Vec<T> {
    vec![value; size]
}

/// A tab record that can be matched by its search id.
pub trait Tab {
    fn search_id(&self) -> Option<&str>;
}

impl Tab for Value {
    fn search_id(&self) -> Option<&str> {
        self.get("searchId").and_then(Value::as_str)
    }
}

/// Returns the index of the selected tab, or 0 when nothing matches.
///
/// When several tabs share the search id, the last one wins.
pub fn get_selected_tab_index<T: Tab>(tabs: &[T], selected_tab_name: &str) -> usize {
    if selected_tab_name.is_empty() {
        return 0;
    }

    tabs.iter()
        .rposition(|tab| tab.search_id() == Some(selected_tab_name))
        .unwrap_or(0)
}

/// Returns a copy of a single-level object with its entries ordered by value.
///
/// Values must be all numbers or all strings. Anything else is logged and
/// the original object is returned.
///
/// ## Example
/// ```rust
/// use frontkit_core::general::sort_object_by_value;
/// use serde_json::json;
///
/// let list = json!({ "yellow": 1, "blue": 10, "red": 5 });
/// let sorted = sort_object_by_value(list.as_object().unwrap(), true);
/// let keys: Vec<&str> = sorted.keys().map(String::as_str).collect();
/// assert_eq!(keys, ["blue", "red", "yellow"]);
/// ```
pub fn sort_object_by_value(obj: &Map<String, Value>, is_descending: bool) -> Map<String, Value> {
    match sorted_entries(obj, is_descending) {
        Ok(entries) => entries.into_iter().collect(),
        Err(err) => {
            error!(error = %err, "Error in sorting object, original object returned");
            obj.clone()
        }
    }
}

fn sorted_entries(obj: &Map<String, Value>, is_descending: bool) -> CoreResult<Vec<(String, Value)>> {
    let mut entries: Vec<(String, Value)> =
        obj.iter().map(|(k, v)| (k.clone(), v.clone())).collect();

    // Validate up front so the comparator itself cannot fail.
    let all_numbers = entries.iter().all(|(_, v)| v.is_number());
    let all_strings = entries.iter().all(|(_, v)| v.is_string());
    if !all_numbers && !all_strings {
        let key = entries
            .iter()
            .find(|(_, v)| !(v.is_number() || v.is_string()))
            .or_else(|| entries.first())
            .map(|(k, _)| k.clone())
            .unwrap_or_default();
        return Err(CoreError::Incomparable { key });
    }

    entries.sort_by(|(_, a), (_, b)| {
        let ordering = compare_scalars(a, b);
        if is_descending {
            ordering.reverse()
        } else {
            ordering
        }
    });

    Ok(entries)
}

fn compare_scalars(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

// =============================================================================
// Path Lookup
// =============================================================================

/// Returns the value at `path` inside `obj`, or `default` when the path does
/// not resolve or resolves to a falsy value (`null`, `false`, `0`, `""`).
///
/// Paths use dots and brackets: `a.b[0]`, `a.b.[2]`.
///
/// ## Example
/// ```rust
/// use frontkit_core::general::get_data;
/// use serde_json::{json, Value};
///
/// let obj = json!({ "a": { "b": [56, 75, 23], "d": 1 }, "e": 2 });
/// assert_eq!(get_data(&obj, "a.d", Value::Null), json!(1));
/// assert_eq!(get_data(&obj, "a.b[0]", Value::Null), json!(56));
/// assert_eq!(get_data(&obj, "a.d.e", json!("random")), json!("random"));
/// ```
pub fn get_data(obj: &Value, path: &str, default: Value) -> Value {
    let mut current = obj;

    for segment in sanitize_path(path).split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => return default,
        }
    }

    if is_falsy(current) {
        default
    } else {
        current.clone()
    }
}

/// `a.[0].b[1]` → `a.0.b.1`
fn sanitize_path(path: &str) -> String {
    let mut sanitized = path.replace(['[', ']'], ".").replace("..", ".");

    if sanitized.ends_with('.') {
        sanitized.pop();
    }

    sanitized
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f == 0.0 || f.is_nan()),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Returns the index of the first object whose `match_key` equals
/// `match_value`.
///
/// ## Example
/// ```rust
/// use frontkit_core::general::get_index_by_matching_object_value;
/// use serde_json::json;
///
/// let rows = vec![json!({ "rollNo": 1 }), json!({ "rollNo": 2 }), json!({ "rollNo": 4 })];
/// assert_eq!(get_index_by_matching_object_value(&rows, "rollNo", &json!(4)), Some(2));
/// assert_eq!(get_index_by_matching_object_value(&rows, "rollNo", &json!(6)), None);
/// ```
pub fn get_index_by_matching_object_value(
    search_arr: &[Value],
    match_key: &str,
    match_value: &Value,
) -> Option<usize> {
    search_arr
        .iter()
        .position(|obj| obj.get(match_key) == Some(match_value))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_empty_json_values() {
        assert!(is_empty(&json!(null)));
        assert!(is_empty(&json!("")));
        assert!(is_empty(&json!("   ")));
        assert!(is_empty(&json!("null")));
        assert!(is_empty(&json!({})));
        assert!(is_empty(&json!([])));

        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!("0")));
        assert!(!is_empty(&json!([0])));
        assert!(!is_empty(&json!({ "a": 1 })));
        assert!(!is_empty(&json!(false)));
    }

    #[test]
    fn test_is_empty_typed_values() {
        let none: Option<&str> = None;
        assert!(is_empty(&none));
        assert!(is_empty(&Some("  ")));
        assert!(!is_empty(&Some("x")));
        assert!(is_empty(&Vec::<i32>::new()));
        assert!(!is_empty(&vec![1]));
        assert!(is_empty(&HashMap::<String, i32>::new()));
        assert!(!is_empty(&f64::NAN));
        assert!(!is_empty(&0_i64));
        assert!(!is_empty("hello"));
    }

    #[test]
    fn test_get_filled_array() {
        assert_eq!(get_filled_array(4, "hello"), vec!["hello"; 4]);
        assert!(get_filled_array(0, 1).is_empty());
    }

    #[test]
    fn test_get_selected_tab_index() {
        let tabs = vec![
            json!({ "searchId": "stocks" }),
            json!({ "searchId": "mutual-funds" }),
            json!({ "searchId": "gold" }),
        ];
        assert_eq!(get_selected_tab_index(&tabs, "mutual-funds"), 1);
        assert_eq!(get_selected_tab_index(&tabs, "gold"), 2);
        assert_eq!(get_selected_tab_index(&tabs, "fd"), 0);
        assert_eq!(get_selected_tab_index(&tabs, ""), 0);
    }

    #[test]
    fn test_sort_object_by_value() {
        let list = json!({ "yellow": 1, "blue": 10, "red": 5, "green": 6, "pink": 8 });
        let obj = list.as_object().unwrap();

        let ascending = sort_object_by_value(obj, false);
        let keys: Vec<&str> = ascending.keys().map(String::as_str).collect();
        assert_eq!(keys, ["yellow", "red", "green", "pink", "blue"]);

        let descending = sort_object_by_value(obj, true);
        let keys: Vec<&str> = descending.keys().map(String::as_str).collect();
        assert_eq!(keys, ["blue", "pink", "green", "red", "yellow"]);
    }

    #[test]
    fn test_sort_object_by_value_returns_original_on_mixed_values() {
        let list = json!({ "yellow": 1, "blue": ["I", "am", "blue"], "red": 5 });
        let obj = list.as_object().unwrap();

        let result = sort_object_by_value(obj, false);
        assert_eq!(&result, obj);
    }

    #[test]
    fn test_get_data() {
        let obj = json!({ "a": { "b": [56, 75, 23], "d": 1 }, "e": 2, "z": 0 });

        assert_eq!(get_data(&obj, "a.d", Value::Null), json!(1));
        assert_eq!(get_data(&obj, "e", Value::Null), json!(2));
        assert_eq!(get_data(&obj, "a.d.e", json!("random")), json!("random"));
        assert_eq!(get_data(&obj, "a.b[0]", Value::Null), json!(56));
        assert_eq!(get_data(&obj, "a.b.[2]", Value::Null), json!(23));
        assert_eq!(get_data(&obj, "a.b[7]", json!(-1)), json!(-1));
        // Falsy values fall back to the default.
        assert_eq!(get_data(&obj, "z", json!("none")), json!("none"));
    }

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("a.[0].b.c"), "a.0.b.c");
        assert_eq!(sanitize_path("a.b[0]"), "a.b.0");
    }

    #[test]
    fn test_get_index_by_matching_object_value() {
        let rows = vec![
            json!({ "rollNo": 1 }),
            json!({ "rollNo": 2 }),
            json!({ "rollNo": 3 }),
            json!({ "rollNo": 4 }),
        ];
        assert_eq!(get_index_by_matching_object_value(&rows, "rollNo", &json!(4)), Some(3));
        assert_eq!(get_index_by_matching_object_value(&rows, "rollNo", &json!(3)), Some(2));
        assert_eq!(get_index_by_matching_object_value(&rows, "rollNo", &json!(6)), None);
    }
}
