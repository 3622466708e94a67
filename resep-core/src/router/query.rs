//! Ordered, percent-encoded query string parameters.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    /// Parses `search`, with or without the leading `?`.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let params = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(name), decode(value))
            })
            .collect();
        Self { params }
    }

    /// First value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets `name` to `value`, keeping the position of an existing entry
    /// and dropping any duplicates.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.params.iter().position(|(n, _)| n == name) {
            Some(idx) => {
                self.params[idx].1 = value;
                let mut seen = false;
                self.params.retain(|(n, _)| {
                    if n != name {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.params.push((name.to_string(), value)),
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.params.retain(|(n, _)| n != name);
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, value)) in self.params.iter().enumerate() {
            if idx > 0 {
                f.write_str("&")?;
            }
            write!(
                f,
                "{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

fn decode(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw,
    }
}
