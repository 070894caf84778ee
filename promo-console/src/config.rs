// promo-console/src/config.rs

//! Console configuration

use promo_client::ClientConfig;

pub const ENV_PROMOTE_FIRST: &str = "PROMO_PROMOTE_FIRST";
pub const ENV_QUERY_ENCODING: &str = "PROMO_QUERY_ENCODING";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub client: ClientConfig,

    /// Apply the first search result to the record form
    pub promote_first_result: bool,

    /// Percent-encode search values (`PROMO_QUERY_ENCODING=raw` turns it off)
    pub encode_query: bool,
}

impl ConsoleConfig {
    pub fn new(client: ClientConfig) -> Self {
        Self {
            client,
            promote_first_result: false,
            encode_query: true,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let client = ClientConfig::from_lookup(&lookup);

        let promote_first_result = lookup(ENV_PROMOTE_FIRST)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let encode_query = match lookup(ENV_QUERY_ENCODING) {
            Some(v) if v.trim().eq_ignore_ascii_case("raw") => false,
            Some(v) if v.trim().is_empty() || v.trim().eq_ignore_ascii_case("encoded") => true,
            Some(v) => {
                tracing::warn!(value = %v, "Unknown {}, using encoded", ENV_QUERY_ENCODING);
                true
            }
            None => true,
        };

        Self {
            client,
            promote_first_result,
            encode_query,
        }
    }

    pub fn with_promote_first_result(mut self, promote: bool) -> Self {
        self.promote_first_result = promote;
        self
    }

    pub fn with_encode_query(mut self, encode: bool) -> Self {
        self.encode_query = encode;
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ApiRevision;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_lookup(|_| None);
        assert_eq!(config, ConsoleConfig::default());
        assert!(!config.promote_first_result);
        assert!(config.encode_query);
    }

    #[test]
    fn test_from_lookup() {
        let config = ConsoleConfig::from_lookup(lookup_from(&[
            ("PROMO_API_REVISION", "legacy"),
            (ENV_PROMOTE_FIRST, "true"),
            (ENV_QUERY_ENCODING, "RAW"),
        ]));
        assert_eq!(config.client.revision, ApiRevision::Legacy);
        assert!(config.promote_first_result);
        assert!(!config.encode_query);
    }

    #[test]
    fn test_unknown_values_keep_defaults() {
        let config = ConsoleConfig::from_lookup(lookup_from(&[
            (ENV_PROMOTE_FIRST, "maybe"),
            (ENV_QUERY_ENCODING, "base64"),
        ]));
        assert!(!config.promote_first_result);
        assert!(config.encode_query);
    }
}
