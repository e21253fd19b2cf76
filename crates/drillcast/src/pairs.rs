//! Flat pair-list parsing for `--rename` and `--cast`.

use std::collections::HashMap;

use anyhow::{bail, Result};

/// Turn a flat even-length list into a map. An empty list yields an empty
/// map; later pairs win when a key repeats.
pub fn pairs_to_map(values: &[String]) -> Result<HashMap<String, String>> {
    if values.len() % 2 != 0 {
        bail!(
            "expected an even number of values (NAME VALUE pairs), got {}",
            values.len()
        );
    }
    Ok(values
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn test_empty_list_is_empty_map() {
        assert_eq!(pairs_to_map(&[]).unwrap(), HashMap::new());
    }

    #[test]
    fn test_single_pair() {
        let map = pairs_to_map(&strings(&["a", "b"])).unwrap();
        assert_eq!(map, HashMap::from([("a".to_string(), "b".to_string())]));
    }

    #[test]
    fn test_multiple_pairs_any_order() {
        let expected = HashMap::from([
            ("a".to_string(), "b".to_string()),
            ("x".to_string(), "y".to_string()),
        ]);
        assert_eq!(pairs_to_map(&strings(&["a", "b", "x", "y"])).unwrap(), expected);
        assert_eq!(pairs_to_map(&strings(&["x", "y", "a", "b"])).unwrap(), expected);
    }

    #[test]
    fn test_odd_length_is_rejected() {
        assert!(pairs_to_map(&strings(&["foo"])).is_err());
        assert!(pairs_to_map(&strings(&["foo", "bar", "baz"])).is_err());
    }

    #[test]
    fn test_later_pairs_win() {
        let map = pairs_to_map(&strings(&["a", "old", "a", "new"])).unwrap();
        assert_eq!(map.get("a").map(String::as_str), Some("new"));
    }
}
