//! Hosts that refuse embedding or inject ads.

/// A fixed set of denied hostnames.
///
/// Matching is by plain suffix on the lowercased hostname, so an entry
/// `mediafire.com` covers `mediafire.com`, `www.mediafire.com` and
/// look-alike mirrors such as `example-mediafire.com`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Denylist {
    hosts: Vec<String>,
}

impl Denylist {
    /// Build from configured host entries. Blank entries are dropped.
    pub fn new<I, S>(hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts
            .into_iter()
            .map(|h| h.as_ref().trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        Self { hosts }
    }

    /// Check a hostname against the list.
    pub fn is_denied(&self, host: &str) -> bool {
        if host.is_empty() {
            return false;
        }
        let host = host.to_ascii_lowercase();
        let host = host.trim_end_matches('.');
        self.hosts.iter().any(|entry| host.ends_with(entry.as_str()))
    }

    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }
}
