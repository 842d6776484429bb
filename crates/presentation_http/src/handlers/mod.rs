//! HTTP request handlers

pub mod city;
pub mod health;
pub mod placeholder;

/// First value of a query parameter; later repeats are ignored
pub(crate) fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_value_wins() {
        let query = pairs(&[("city", "Rome"), ("city", "Paris")]);
        assert_eq!(first_value(&query, "city"), Some("Rome"));
    }

    #[test]
    fn missing_parameter_is_none() {
        let query = pairs(&[("town", "Rome")]);
        assert_eq!(first_value(&query, "city"), None);
    }
}
