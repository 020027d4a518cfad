//! Strongly-typed ID types for the records served by the REST API.
//!
//! The backend keys every record with a numeric database id. Wrapping those
//! ids keeps an employee id from being passed where a task id is expected,
//! and gives route parameters (`/admin/edit-user/:id`) a single parse path.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an ID from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    /// The type of ID that failed to parse.
    pub id_type: &'static str,
    /// The reason for the parse failure.
    pub reason: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {}: {}", self.id_type, self.reason)
    }
}

impl std::error::Error for ParseIdError {}

/// Macro to generate a strongly-typed ID wrapper around a backend key.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an ID from the backend's numeric key.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Returns the underlying numeric key.
            #[must_use]
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|e| ParseIdError {
                        id_type: stringify!($name),
                        reason: e.to_string(),
                    })
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of an employee, manager or administrator account.
    EmployeeId
);

define_id!(
    /// Identifier of an assigned task.
    TaskId
);

define_id!(
    /// Identifier of a leave request.
    LeaveId
);

define_id!(
    /// Identifier of a submitted task report.
    ReportId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(EmployeeId::new(42).to_string(), "42");
    }

    #[test]
    fn parse_route_parameter() {
        let id: EmployeeId = "17".parse().expect("should parse");
        assert_eq!(id.get(), 17);
    }

    #[test]
    fn parse_tolerates_surrounding_whitespace() {
        let id: TaskId = " 9 ".parse().expect("should parse");
        assert_eq!(id, TaskId::new(9));
    }

    #[test]
    fn parse_invalid_number() {
        let err = "abc".parse::<LeaveId>().unwrap_err();
        assert_eq!(err.id_type, "LeaveId");
        assert!(err.to_string().contains("LeaveId"));
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&ReportId::new(5)).expect("serialize");
        assert_eq!(json, "5");
        let parsed: ReportId = serde_json::from_str("5").expect("deserialize");
        assert_eq!(parsed, ReportId::new(5));
    }

    #[test]
    fn id_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(TaskId::new(1));
        set.insert(TaskId::new(2));
        set.insert(TaskId::new(1));

        assert_eq!(set.len(), 2);
    }
}
