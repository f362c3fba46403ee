use serde::{Deserialize, Serialize};

// ============ Credentials ============

/// The credential values captured by the scan form.
///
/// Held only for the duration of one scan; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanCredentials {
    /// AWS Access Key ID.
    pub access_key_id: String,
    /// AWS Secret Access Key.
    pub secret_access_key: String,
    /// AWS region name (e.g., `"ap-south-1"`).
    pub region: String,
}

impl ScanCredentials {
    /// The region the form starts with (and its only selectable option).
    pub const DEFAULT_REGION: &'static str = "ap-south-1";

    /// Empty credentials with the default region, as the form starts out.
    pub fn empty() -> Self {
        Self {
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: Self::DEFAULT_REGION.to_string(),
        }
    }

    /// Whether every field is non-empty (whitespace-only counts as empty).
    pub fn is_complete(&self) -> bool {
        !self.access_key_id.trim().is_empty()
            && !self.secret_access_key.trim().is_empty()
            && !self.region.trim().is_empty()
    }
}

impl Default for ScanCredentials {
    fn default() -> Self {
        Self::empty()
    }
}

// ============ Zone Types ============

/// A hosted zone as listed by the provider.
///
/// Only the identifier and display name are kept; the zone itself is not
/// retained once its records have been fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedZone {
    /// Provider zone identifier. May carry a `/hostedzone/` path prefix,
    /// which is stripped before the identifier is used as a lookup key.
    pub id: String,
    /// Zone name (e.g., `"example.com."`).
    pub name: String,
}

// ============ Record Types ============

/// A DNS resource record set, flattened for display.
///
/// Route 53 records carry either a list of literal values or an alias target
/// pointing at another DNS name; [`display_value()`](Self::display_value)
/// derives the one string the results table shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Record name, never absent (empty string when the provider omits it).
    pub name: String,
    /// Record type (`"A"`, `"CNAME"`, `"MX"`, ...).
    pub record_type: String,
    /// Time to live in seconds, when the provider reports one. Alias records
    /// have no TTL of their own.
    pub ttl: Option<i64>,
    /// Literal record values, in provider order.
    pub values: Vec<String>,
    /// Alias target hostname, for alias records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_target: Option<String>,
}

impl ResourceRecord {
    /// Derives the value column for this record:
    /// literal values joined with `", "`, else the alias target suffixed
    /// with `" (Alias)"`, else `"N/A"`.
    pub fn display_value(&self) -> String {
        if !self.values.is_empty() {
            return self.values.join(", ");
        }
        if let Some(target) = &self.alias_target {
            return format!("{target} (Alias)");
        }
        "N/A".to_string()
    }

    /// The TTL column: the number of seconds, or `"N/A"` when absent.
    pub fn display_ttl(&self) -> String {
        self.ttl
            .map_or_else(|| "N/A".to_string(), |ttl| ttl.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(values: Vec<&str>, alias: Option<&str>) -> ResourceRecord {
        ResourceRecord {
            name: "www.example.com.".to_string(),
            record_type: "A".to_string(),
            ttl: Some(300),
            values: values.into_iter().map(String::from).collect(),
            alias_target: alias.map(String::from),
        }
    }

    // ============ display_value derivation ============

    #[test]
    fn display_value_joins_literal_values() {
        let r = record(vec!["1.2.3.4", "5.6.7.8"], None);
        assert_eq!(r.display_value(), "1.2.3.4, 5.6.7.8");
    }

    #[test]
    fn display_value_single_literal_value() {
        let r = record(vec!["1.2.3.4"], None);
        assert_eq!(r.display_value(), "1.2.3.4");
    }

    #[test]
    fn display_value_alias_target() {
        let r = record(vec![], Some("example.com"));
        assert_eq!(r.display_value(), "example.com (Alias)");
    }

    #[test]
    fn display_value_values_win_over_alias() {
        // Route 53 never returns both, but the derivation is ordered anyway.
        let r = record(vec!["1.2.3.4"], Some("example.com"));
        assert_eq!(r.display_value(), "1.2.3.4");
    }

    #[test]
    fn display_value_neither() {
        let r = record(vec![], None);
        assert_eq!(r.display_value(), "N/A");
    }

    // ============ display_ttl ============

    #[test]
    fn display_ttl_present() {
        let r = record(vec!["1.2.3.4"], None);
        assert_eq!(r.display_ttl(), "300");
    }

    #[test]
    fn display_ttl_absent() {
        let mut r = record(vec![], Some("example.com"));
        r.ttl = None;
        assert_eq!(r.display_ttl(), "N/A");
    }

    // ============ ScanCredentials ============

    #[test]
    fn empty_credentials_default_region() {
        let c = ScanCredentials::empty();
        assert_eq!(c.region, ScanCredentials::DEFAULT_REGION);
        assert!(!c.is_complete());
    }

    #[test]
    fn complete_credentials() {
        let c = ScanCredentials {
            access_key_id: "AKIAEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            region: "ap-south-1".to_string(),
        };
        assert!(c.is_complete());
    }

    #[test]
    fn whitespace_only_field_is_incomplete() {
        let c = ScanCredentials {
            access_key_id: "  ".to_string(),
            secret_access_key: "secret".to_string(),
            region: "ap-south-1".to_string(),
        };
        assert!(!c.is_complete());
    }

    #[test]
    fn record_serde_roundtrip() {
        let r = record(vec!["1.2.3.4"], None);
        let json = serde_json::to_string(&r).unwrap();
        let back: ResourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
