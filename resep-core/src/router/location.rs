//! Address-bar adapters.

/// The current address and the ability to rewrite it in place.
pub trait Location {
    /// Scheme, host and port, e.g. `https://resep.example`.
    fn origin(&self) -> &str;

    fn pathname(&self) -> &str;

    /// Query string including the leading `?`, or empty.
    fn search(&self) -> &str;

    /// Replaces the current history entry with `url` (a path plus optional
    /// query) without navigating.
    fn replace_state(&mut self, url: &str);
}

/// A [`Location`] kept in memory, with a history entry count so callers
/// can tell replacing from pushing.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryLocation {
    origin: String,
    pathname: String,
    search: String,
    history_len: usize,
}

impl MemoryLocation {
    /// Parses an absolute (`https://host/path?q`) or relative (`/path?q`,
    /// `?q`) URL. Fragments are dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split('#').next().unwrap_or_default();

        // Only a scheme before any path or query marks an absolute URL
        let scheme = url
            .find("://")
            .filter(|&idx| !url[..idx].contains(['/', '?']));

        let (origin, rest) = match scheme {
            Some(scheme_end) => {
                let after_scheme = scheme_end + 3;
                let path_start = url[after_scheme..]
                    .find(['/', '?'])
                    .map(|idx| after_scheme + idx)
                    .unwrap_or(url.len());
                (&url[..path_start], &url[path_start..])
            }
            None => ("", url),
        };

        let (pathname, search) = split_path(rest);
        Self {
            origin: origin.to_string(),
            pathname,
            search,
            history_len: 1,
        }
    }

    /// The full address.
    pub fn href(&self) -> String {
        format!("{}{}{}", self.origin, self.pathname, self.search)
    }

    pub fn history_len(&self) -> usize {
        self.history_len
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        Self::parse("/")
    }
}

impl Location for MemoryLocation {
    fn origin(&self) -> &str {
        &self.origin
    }

    fn pathname(&self) -> &str {
        &self.pathname
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn replace_state(&mut self, url: &str) {
        let (pathname, search) = split_path(url);
        self.pathname = pathname;
        self.search = search;
    }
}

fn split_path(rest: &str) -> (String, String) {
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, query),
        None => (rest, ""),
    };
    let pathname = if path.is_empty() { "/" } else { path };
    let search = if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query)
    };
    (pathname.to_string(), search)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute() {
        let location = MemoryLocation::parse("https://resep.example:8080/app?recipeId=5#top");
        assert_eq!(location.origin(), "https://resep.example:8080");
        assert_eq!(location.pathname(), "/app");
        assert_eq!(location.search(), "?recipeId=5");
        assert_eq!(location.href(), "https://resep.example:8080/app?recipeId=5");
    }

    #[test]
    fn test_parse_origin_only() {
        let location = MemoryLocation::parse("http://localhost:5173?recipeType=makanan");
        assert_eq!(location.origin(), "http://localhost:5173");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.search(), "?recipeType=makanan");
    }

    #[test]
    fn test_parse_relative() {
        let location = MemoryLocation::parse("?recipeType=minuman&recipeId=5");
        assert_eq!(location.origin(), "");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.search(), "?recipeType=minuman&recipeId=5");
    }

    #[test]
    fn test_parse_relative_with_url_in_query() {
        let location =
            MemoryLocation::parse("/?recipeType=makanan&recipeId=12&ref=https://wa.me");
        assert_eq!(location.origin(), "");
        assert_eq!(location.pathname(), "/");
        assert_eq!(
            location.search(),
            "?recipeType=makanan&recipeId=12&ref=https://wa.me"
        );

        let location = MemoryLocation::parse("http://localhost:5173/?ref=https://wa.me");
        assert_eq!(location.origin(), "http://localhost:5173");
        assert_eq!(location.search(), "?ref=https://wa.me");
    }

    #[test]
    fn test_replace_state_keeps_history_length() {
        let mut location = MemoryLocation::parse("http://localhost/?a=1");
        location.replace_state("/detail?b=2");
        assert_eq!(location.pathname(), "/detail");
        assert_eq!(location.search(), "?b=2");
        assert_eq!(location.origin(), "http://localhost");
        assert_eq!(location.history_len(), 1);

        location.replace_state("/detail");
        assert_eq!(location.search(), "");
    }
}
