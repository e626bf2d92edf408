// ABOUTME: Type-safe identifiers for athletes and training sessions
// ABOUTME: AthleteId and SessionId newtypes over the store's integer keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trainlog Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw store key
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Get the raw store key
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<i64>() {
                    Ok(raw) if raw > 0 => Ok(Self(raw)),
                    _ => Err(AppError::invalid_input(format!(
                        "Invalid {} id: '{s}'",
                        $label
                    ))),
                }
            }
        }
    };
}

define_id!(
    /// Identifier of an athlete record
    AthleteId,
    "athlete"
);

define_id!(
    /// Identifier of a training session record
    SessionId,
    "session"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!("17".parse::<AthleteId>().unwrap(), AthleteId::new(17));
    }

    #[test]
    fn test_parse_rejects_malformed_ids() {
        for raw in ["abc", "", "0", "-3", "1.5"] {
            let error = raw.parse::<SessionId>().unwrap_err();
            assert_eq!(error.code, ErrorCode::InvalidInput, "input {raw:?}");
        }
    }
}
