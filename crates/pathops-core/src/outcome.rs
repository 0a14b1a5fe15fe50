//! Structured results for facade actions

use serde::Serialize;

/// The result of one facade action.
///
/// Produced fresh per call and owned by the caller; the facade keeps no
/// state between calls. Exactly one `Outcome` per action invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Whether the action did what was asked.
    pub success: bool,
    /// Human-readable diagnostic, suitable for logging as-is.
    pub message: String,
    /// Numeric payload, e.g. the removed-entry count of a recursive remove.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Resulting path for query actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_path: Option<String>,
}

impl Outcome {
    /// Successful action with a diagnostic message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            count: None,
            result_path: None,
        }
    }

    /// Successful action carrying a numeric payload.
    pub fn ok_with_count(message: impl Into<String>, count: u64) -> Self {
        Self {
            count: Some(count),
            ..Self::ok(message)
        }
    }

    /// Successful query carrying a resolved path.
    pub fn ok_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            result_path: Some(path.into()),
            ..Self::ok(message)
        }
    }

    /// Failed action with a diagnostic message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            count: None,
            result_path: None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_with_path_sets_result_path() {
        let outcome = Outcome::ok_with_path("resolved", "/tmp/x");
        assert!(outcome.success);
        assert_eq!(outcome.result_path.as_deref(), Some("/tmp/x"));
        assert_eq!(outcome.count, None);
    }

    #[test]
    fn failed_carries_message_only() {
        let outcome = Outcome::failed("nope");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "nope");
        assert_eq!(outcome.result_path, None);
    }

    #[test]
    fn empty_options_stay_out_of_json() {
        let json = serde_json::to_value(Outcome::ok("done")).unwrap();
        assert_eq!(json["success"], true);
        assert!(json.get("count").is_none());
        assert!(json.get("result_path").is_none());
    }
}
