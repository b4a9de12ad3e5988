//! Summary statistics over stored messages.

use std::collections::BTreeMap;

use serde::Serialize;
use time::UtcOffset;

use crate::domain::entities::MessageRecord;

/// Aggregate view of a message collection.
///
/// `by_hour` is keyed by the UTC hour (0-23) of each message's creation time
/// and only contains hours that saw at least one message.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct MessageAnalytics {
    pub total: u64,
    pub avg_length: f64,
    pub by_hour: BTreeMap<u8, u64>,
}

impl MessageAnalytics {
    pub fn from_messages(messages: &[MessageRecord]) -> Self {
        if messages.is_empty() {
            return Self::default();
        }

        let mut total_length: u64 = 0;
        let mut by_hour = BTreeMap::new();
        for message in messages {
            total_length += message.content.chars().count() as u64;
            let hour = message.created_at.to_offset(UtcOffset::UTC).hour();
            *by_hour.entry(hour).or_insert(0) += 1;
        }

        let total = messages.len() as u64;
        Self {
            total,
            avg_length: total_length as f64 / total as f64,
            by_hour,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{OffsetDateTime, macros::datetime};

    fn message(id: i64, content: &str, created_at: OffsetDateTime) -> MessageRecord {
        MessageRecord {
            id,
            content: content.to_string(),
            user_id: 1,
            created_at,
        }
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let analytics = MessageAnalytics::from_messages(&[]);
        assert_eq!(analytics.total, 0);
        assert_eq!(analytics.avg_length, 0.0);
        assert!(analytics.by_hour.is_empty());

        let value = serde_json::to_value(&analytics).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({"total": 0, "avg_length": 0.0, "by_hour": {}})
        );
    }

    #[test]
    fn counts_and_averages_content_length() {
        let messages = vec![
            message(1, "hi", datetime!(2024-05-01 08:00:00 UTC)),
            message(2, "hello", datetime!(2024-05-01 08:30:00 UTC)),
            message(3, "hey there", datetime!(2024-05-02 17:05:00 UTC)),
        ];

        let analytics = MessageAnalytics::from_messages(&messages);
        assert_eq!(analytics.total, 3);
        assert!((analytics.avg_length - 16.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(analytics.by_hour.get(&8), Some(&2));
        assert_eq!(analytics.by_hour.get(&17), Some(&1));
        assert_eq!(analytics.by_hour.len(), 2);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let messages = vec![message(1, "héllo", datetime!(2024-05-01 00:00:00 UTC))];
        let analytics = MessageAnalytics::from_messages(&messages);
        assert_eq!(analytics.avg_length, 5.0);
    }

    #[test]
    fn hour_is_taken_in_utc() {
        let messages = vec![message(1, "late", datetime!(2024-05-01 23:30:00 +02:00))];
        let analytics = MessageAnalytics::from_messages(&messages);
        assert_eq!(analytics.by_hour.get(&21), Some(&1));
    }

    #[test]
    fn hours_serialize_as_ordered_string_keys() {
        let messages = vec![
            message(1, "b", datetime!(2024-05-01 14:00:00 UTC)),
            message(2, "a", datetime!(2024-05-01 03:00:00 UTC)),
        ];
        let json = serde_json::to_string(&MessageAnalytics::from_messages(&messages))
            .expect("serialize");
        assert!(json.contains(r#""by_hour":{"3":1,"14":1}"#), "{json}");
    }
}
