//! Audit record type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A flat audit record: who touched which entity, and when.
///
/// Declared for interchange with audit tooling; carries no behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub media_id: i64,
    pub user: String,
    pub operation_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_record_round_trips() {
        let operation = Operation {
            media_id: 7,
            user: "claire".to_string(),
            operation_date: Utc::now(),
        };

        let json = serde_json::to_string(&operation).unwrap();
        let back: Operation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, operation);
    }
}
