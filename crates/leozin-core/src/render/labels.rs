//! Friendly link labels
//!
//! Maps known hosts to brand names and derives the label shown for an
//! autolinked URL.

use std::collections::HashMap;

use url::Url;

/// Built-in host → name pairs
const BUILTIN_LABELS: &[(&str, &str)] = &[
    ("facebook.com", "Facebook"),
    ("instagram.com", "Instagram"),
    ("linkedin.com", "LinkedIn"),
    ("tiktok.com", "TikTok"),
    ("youtube.com", "YouTube"),
    ("jovemprogramador.com.br", "Jovem Programador"),
];

/// Host → friendly name mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    names: HashMap<String, String>,
}

impl Default for LabelTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.extend(BUILTIN_LABELS.iter().map(|(h, n)| (*h, *n)));
        table
    }
}

impl LabelTable {
    /// A table with no entries; every link is labeled with its bare host
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
        }
    }

    /// Add or replace a mapping. Hosts are case-insensitive and a leading
    /// `www.` is ignored.
    pub fn insert(&mut self, host: impl AsRef<str>, name: impl Into<String>) {
        let name = name.into();
        if name.trim().is_empty() {
            return;
        }
        let host = normalize_host(host.as_ref());
        if !host.is_empty() {
            self.names.insert(host, name);
        }
    }

    pub fn extend<H, N>(&mut self, entries: impl IntoIterator<Item = (H, N)>)
    where
        H: AsRef<str>,
        N: Into<String>,
    {
        for (host, name) in entries {
            self.insert(host, name);
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up a host, falling back to its parent domains
    /// (`m.facebook.com` resolves through `facebook.com`).
    pub fn lookup(&self, host: &str) -> Option<&str> {
        let host = normalize_host(host);
        let mut candidate = host.as_str();
        loop {
            if let Some(name) = self.names.get(candidate) {
                return Some(name.as_str());
            }
            match candidate.split_once('.') {
                Some((_, parent)) if parent.contains('.') => candidate = parent,
                _ => return None,
            }
        }
    }

    /// Label for an absolute URL.
    ///
    /// Falls back to `raw` when the URL does not parse or has no host.
    pub fn label_for(&self, url: &str, raw: &str) -> String {
        let host = match Url::parse(url) {
            Ok(parsed) => parsed.host_str().map(normalize_host),
            Err(err) => {
                tracing::trace!(url, %err, "link label falls back to raw text");
                None
            }
        };

        match host {
            Some(host) if !host.is_empty() => match self.lookup(&host) {
                Some(name) => name.to_string(),
                None => host,
            },
            _ => raw.to_string(),
        }
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    match host.strip_prefix("www.") {
        Some(rest) => rest.to_string(),
        None => host,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let table = LabelTable::default();
        assert_eq!(table.lookup("facebook.com"), Some("Facebook"));
        assert_eq!(table.lookup("www.instagram.com"), Some("Instagram"));
        assert_eq!(table.lookup("LinkedIn.com"), Some("LinkedIn"));
        assert_eq!(table.lookup("example.com"), None);
    }

    #[test]
    fn test_parent_domain_lookup() {
        let table = LabelTable::default();
        assert_eq!(table.lookup("m.facebook.com"), Some("Facebook"));
        assert_eq!(table.lookup("br.linkedin.com"), Some("LinkedIn"));
        // Never falls back to a bare TLD
        assert_eq!(table.lookup("com"), None);
    }

    #[test]
    fn test_label_for_url() {
        let table = LabelTable::default();
        assert_eq!(
            table.label_for("https://facebook.com/jovemprogramador", "raw"),
            "Facebook"
        );
        assert_eq!(
            table.label_for("https://www.example.com/path?q=1", "raw"),
            "example.com"
        );
        assert_eq!(table.label_for("http://[broken", "http://[broken"), "http://[broken");
    }

    #[test]
    fn test_overrides() {
        let mut table = LabelTable::default();
        table.insert("WWW.Example.com", "Exemplo");
        table.insert("facebook.com", "FB");
        table.insert("ignored.com", "  ");

        assert_eq!(table.lookup("example.com"), Some("Exemplo"));
        assert_eq!(table.lookup("facebook.com"), Some("FB"));
        assert_eq!(table.lookup("ignored.com"), None);
    }
}
