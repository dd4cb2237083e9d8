use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

/// The latest trading day's stats, in the order the API listed them.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Quote {
    symbol: String,
    date: NaiveDate,
    fields: Vec<(String, String)>,
}

impl Quote {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| field_name(key).eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn without_volume(&self) -> Vec<(String, String)> {
        self.fields
            .iter()
            .filter(|(key, _)| !field_name(key).eq_ignore_ascii_case("volume"))
            .cloned()
            .collect()
    }
}

/// Strips the Alpha Vantage ordinal prefix: `"4. close"` -> `"close"`.
pub fn field_name(key: &str) -> &str {
    match key.split_once(". ") {
        Some((prefix, rest)) if is_ordinal(prefix) => rest,
        _ => key,
    }
}

/// `"1. open"` -> `"Open"`
pub fn field_label(key: &str) -> String {
    let name = field_name(key);
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_ordinal(prefix: &str) -> bool {
    !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_digit())
}
