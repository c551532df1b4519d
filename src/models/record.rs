use serde::{Deserialize, Serialize};

/// A single utterance in the source transcript
///
/// Records come from an external store and may be missing fields; every
/// field defaults rather than failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptItem {
    /// Speaker role: "user", "assistant", or anything else (skipped)
    #[serde(default)]
    pub role: String,
    /// Text fragments making up the utterance, joined with spaces
    #[serde(default)]
    pub content: Vec<String>,
    /// Whether the speaker was cut off before finishing
    #[serde(default)]
    pub interrupted: bool,
}

/// Transcript payload of a call record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(default)]
    pub items: Vec<TranscriptItem>,
}

/// A timestamp as stored: a bare scalar or wrapped as `{"$date": scalar}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampField {
    Scalar(TimestampScalar),
    Wrapped {
        #[serde(rename = "$date")]
        date: TimestampScalar,
    },
}

/// The scalar part of a timestamp: numeric epoch or formatted string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampScalar {
    Number(f64),
    Text(String),
}

impl TimestampScalar {
    /// Ordering for latest-record selection. Numbers compare numerically,
    /// strings lexically (ISO-8601 strings sort correctly); a number
    /// always sorts before a string so mixed stores stay deterministic.
    pub fn cmp_order(&self, other: &Self) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for TimestampScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// One call record as fetched from the store
///
/// All fields are optional at the wire level; accessors return typed
/// defaults so downstream stages never deal with absence directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRecord {
    #[serde(default)]
    pub transcript: Transcript,
    #[serde(default)]
    pub call_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<TimestampField>,
    #[serde(default)]
    pub user_talk_time: Option<f64>,
    #[serde(default)]
    pub user_listen_time: Option<f64>,
}

impl CallRecord {
    /// Transcript items, empty when the transcript is missing
    pub fn items(&self) -> &[TranscriptItem] {
        &self.transcript.items
    }

    /// Call identifier, if present
    pub fn call_id(&self) -> Option<&str> {
        self.call_id.as_deref()
    }

    /// Timestamp flattened through the optional `$date` wrapper
    pub fn timestamp(&self) -> Option<&TimestampScalar> {
        match self.timestamp.as_ref()? {
            TimestampField::Scalar(s) => Some(s),
            TimestampField::Wrapped { date } => Some(date),
        }
    }

    /// Reported user talk time, when present and nonzero
    pub fn user_talk_time(&self) -> Option<f64> {
        self.user_talk_time.filter(|t| *t != 0.0)
    }

    /// Reported user listen time, when present and nonzero
    pub fn user_listen_time(&self) -> Option<f64> {
        self.user_listen_time.filter(|t| *t != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let record: CallRecord = serde_json::from_str("{}").unwrap();
        assert!(record.items().is_empty());
        assert!(record.call_id().is_none());
        assert!(record.timestamp().is_none());
        assert!(record.user_talk_time().is_none());
    }

    #[test]
    fn test_timestamp_date_wrapper_flattens() {
        let record: CallRecord =
            serde_json::from_str(r#"{"timestamp": {"$date": "2026-01-15T10:00:00Z"}}"#).unwrap();
        assert_eq!(
            record.timestamp(),
            Some(&TimestampScalar::Text("2026-01-15T10:00:00Z".to_string()))
        );

        let record: CallRecord = serde_json::from_str(r#"{"timestamp": 1700000000}"#).unwrap();
        assert_eq!(record.timestamp(), Some(&TimestampScalar::Number(1700000000.0)));
    }

    #[test]
    fn test_zero_times_treated_as_absent() {
        let record: CallRecord =
            serde_json::from_str(r#"{"user_talk_time": 0, "user_listen_time": 60}"#).unwrap();
        assert!(record.user_talk_time().is_none());
        assert_eq!(record.user_listen_time(), Some(60.0));
    }

    #[test]
    fn test_timestamp_ordering() {
        use std::cmp::Ordering;
        let a = TimestampScalar::Number(100.0);
        let b = TimestampScalar::Number(200.0);
        assert_eq!(a.cmp_order(&b), Ordering::Less);

        let x = TimestampScalar::Text("2026-01-01".to_string());
        let y = TimestampScalar::Text("2026-02-01".to_string());
        assert_eq!(y.cmp_order(&x), Ordering::Greater);

        assert_eq!(a.cmp_order(&x), Ordering::Less);
    }
}
