//! Result shape consumed by the interactive demo.

use crate::StatusReport;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Either a resolved report or a user-facing failure message.
///
/// The two variants never share fields: a report serializes as
/// `{code, meaning, category, useCases}`, a failure as
/// `{error: true, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LookupOutcome {
    Found(StatusReport),
    Failed(LookupFailure),
}

impl LookupOutcome {
    pub fn failed(message: impl Into<String>) -> Self {
        LookupOutcome::Failed(LookupFailure {
            message: message.into(),
        })
    }

    pub fn report(&self) -> Option<&StatusReport> {
        match self {
            LookupOutcome::Found(report) => Some(report),
            LookupOutcome::Failed(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LookupOutcome::Failed(_))
    }
}

impl From<StatusReport> for LookupOutcome {
    fn from(report: StatusReport) -> Self {
        LookupOutcome::Found(report)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFailure {
    pub message: String,
}

impl Serialize for LookupFailure {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LookupFailure", 2)?;
        state.serialize_field("error", &true)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}
