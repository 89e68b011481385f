//! Optional auction start date.
//!
//! `Unset` and `At(_)` are distinct states: `At(0)` is encoded as `Some 0`.
//! Older test suites passed a raw value where `0` and `""` meant "no start
//! date"; [`StartDate::from_legacy`] keeps that reading available.
use auction_testkit_micheline::{int, some, Micheline, ToMicheline};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<i64>", into = "Option<i64>")]
pub enum StartDate {
    #[default]
    Unset,
    /// Unix timestamp, in seconds.
    At(i64),
}

impl StartDate {
    /// Reads a start date the way the legacy helpers did: an empty or zero
    /// value means no start date.
    pub fn from_legacy(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(StartDate::Unset);
        }

        let timestamp: i64 = raw
            .parse()
            .map_err(|_| Error::InvalidStartDate(raw.to_string()))?;

        Ok(if timestamp == 0 {
            StartDate::Unset
        } else {
            StartDate::At(timestamp)
        })
    }
}

impl From<Option<i64>> for StartDate {
    fn from(item: Option<i64>) -> Self {
        match item {
            Some(t) => StartDate::At(t),
            None => StartDate::Unset,
        }
    }
}

impl From<StartDate> for Option<i64> {
    fn from(item: StartDate) -> Self {
        match item {
            StartDate::At(t) => Some(t),
            StartDate::Unset => None,
        }
    }
}

impl ToMicheline for StartDate {
    fn to_micheline(&self) -> Micheline {
        match self {
            StartDate::At(t) => some(int(*t)),
            StartDate::Unset => Micheline::None,
        }
    }
}

pub fn mk_start_date(start_date: StartDate) -> Micheline {
    start_date.to_micheline()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_start_date() {
        assert_eq!(mk_start_date(StartDate::Unset), Micheline::None);
        assert_eq!(
            mk_start_date(StartDate::At(1_700_000_000)),
            some(int(1_700_000_000))
        );
        // A zero timestamp is a real date once set explicitly.
        assert_eq!(mk_start_date(StartDate::At(0)), some(int(0)));
    }

    #[test]
    fn test_from_legacy() {
        assert_eq!(StartDate::from_legacy("").unwrap(), StartDate::Unset);
        assert_eq!(StartDate::from_legacy("0").unwrap(), StartDate::Unset);
        assert_eq!(
            StartDate::from_legacy("1650000000").unwrap(),
            StartDate::At(1_650_000_000)
        );
        assert_eq!(
            mk_start_date(StartDate::from_legacy("0").unwrap()),
            Micheline::None
        );
        assert_eq!(
            mk_start_date(StartDate::from_legacy("42").unwrap()),
            some(int(42))
        );
        assert!(matches!(
            StartDate::from_legacy("tomorrow"),
            Err(Error::InvalidStartDate(_))
        ));
    }

    #[test]
    fn test_serde() {
        let d: StartDate = serde_json::from_str("null").unwrap();
        assert_eq!(d, StartDate::Unset);

        let d: StartDate = serde_json::from_str("0").unwrap();
        assert_eq!(d, StartDate::At(0));

        assert_eq!(serde_json::to_string(&StartDate::At(7)).unwrap(), "7");
    }
}
