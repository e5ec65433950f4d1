//! Translation unit status (`mq:status`)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Row status as shown by the colors in memoQ's translation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TuStatus {
    NotStarted,
    PreTranslated,
    PartiallyEdited,
    ManuallyConfirmed,
    Reviewer1Confirmed,
    AssembledFromFragments,
    Proofread,
    MachineTranslated,
    Rejected,
}

impl TuStatus {
    pub const ALL: [TuStatus; 9] = [
        TuStatus::NotStarted,
        TuStatus::PreTranslated,
        TuStatus::PartiallyEdited,
        TuStatus::ManuallyConfirmed,
        TuStatus::Reviewer1Confirmed,
        TuStatus::AssembledFromFragments,
        TuStatus::Proofread,
        TuStatus::MachineTranslated,
        TuStatus::Rejected,
    ];

    /// The attribute value memoQ writes for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TuStatus::NotStarted => "NotStarted",
            TuStatus::PreTranslated => "PreTranslated",
            TuStatus::PartiallyEdited => "PartiallyEdited",
            TuStatus::ManuallyConfirmed => "ManuallyConfirmed",
            TuStatus::Reviewer1Confirmed => "Reviewer1Confirmed",
            TuStatus::AssembledFromFragments => "AssembledFromFragments",
            TuStatus::Proofread => "Proofread",
            TuStatus::MachineTranslated => "MachineTranslated",
            TuStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for TuStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TuStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TuStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidStatus(s.to_owned()))
    }
}
