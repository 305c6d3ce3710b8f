use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Label used when a record carries no primary intent.
pub const UNKNOWN_INTENT: &str = "unknown";

/// One call entry as held by the viewer's store.
///
/// The multi-case flag arrives nested as `data.call_summary.multi_case_details`
/// and is lifted into a plain field at the serde boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    pub name: String,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub final_outcome: String,

    pub resolution_type: String,

    pub caller_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_intent: Option<String>,

    #[serde(default)]
    pub resolution_achieved: Option<bool>,

    #[serde(default)]
    pub transfer_success: Option<bool>,

    #[serde(default)]
    pub call_duration: Option<f64>,

    #[serde(rename = "data", default, with = "call_summary")]
    pub multi_case_details: Option<bool>,
}

impl CallRecord {
    pub fn new(
        name: impl Into<String>,
        resolution_type: impl Into<String>,
        caller_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            final_outcome: String::new(),
            resolution_type: resolution_type.into(),
            caller_type: caller_type.into(),
            primary_intent: None,
            resolution_achieved: None,
            transfer_success: None,
            call_duration: None,
            multi_case_details: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_final_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.final_outcome = outcome.into();
        self
    }

    pub fn with_primary_intent(mut self, intent: impl Into<String>) -> Self {
        self.primary_intent = Some(intent.into());
        self
    }

    pub fn with_resolution_achieved(mut self, achieved: bool) -> Self {
        self.resolution_achieved = Some(achieved);
        self
    }

    pub fn with_transfer_success(mut self, success: bool) -> Self {
        self.transfer_success = Some(success);
        self
    }

    pub fn with_call_duration(mut self, secs: f64) -> Self {
        self.call_duration = Some(secs);
        self
    }

    pub fn with_multi_case(mut self, multi_case: bool) -> Self {
        self.multi_case_details = Some(multi_case);
        self
    }

    /// Primary intent, falling back to `"unknown"` when absent or blank.
    pub fn primary_intent_label(&self) -> &str {
        match self.primary_intent.as_deref() {
            Some(intent) if !intent.is_empty() => intent,
            _ => UNKNOWN_INTENT,
        }
    }

    pub fn achieved_status(&self) -> AchievedStatus {
        AchievedStatus::from_flag(self.resolution_achieved)
    }

    pub fn transfer_status(&self) -> TransferStatus {
        TransferStatus::from_flag(self.transfer_success)
    }

    pub fn multi_case_status(&self) -> MultiCaseStatus {
        MultiCaseStatus::from_flag(self.multi_case_details)
    }
}

mod call_summary {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct CallData {
        #[serde(default)]
        call_summary: Option<CallSummary>,
    }

    #[derive(Serialize, Deserialize)]
    struct CallSummary {
        #[serde(default)]
        multi_case_details: Option<bool>,
    }

    pub fn serialize<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
        CallData {
            call_summary: Some(CallSummary {
                multi_case_details: *value,
            }),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
        let data = Option::<CallData>::deserialize(deserializer)?;
        Ok(data
            .and_then(|d| d.call_summary)
            .and_then(|s| s.multi_case_details))
    }
}

/// A label for an `Option<bool>` field, one per observable state.
pub trait TriState: Copy + Ord + fmt::Display + 'static {
    /// Every label, in the order the panel lists them.
    const ALL: [Self; 3];

    fn from_flag(flag: Option<bool>) -> Self;

    /// Wire label, e.g. `no_transfer`.
    fn as_str(&self) -> &'static str;

    /// Human label, e.g. `No Transfer`.
    fn display_label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievedStatus {
    Resolved,
    Unresolved,
    Unknown,
}

impl TriState for AchievedStatus {
    const ALL: [Self; 3] = [Self::Resolved, Self::Unresolved, Self::Unknown];

    fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Resolved,
            Some(false) => Self::Unresolved,
            None => Self::Unknown,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Resolved => "resolved",
            Self::Unresolved => "unresolved",
            Self::Unknown => "unknown",
        }
    }

    fn display_label(&self) -> &'static str {
        match self {
            Self::Resolved => "Resolved",
            Self::Unresolved => "Unresolved",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for AchievedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievedStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resolved" => Ok(Self::Resolved),
            "unresolved" => Ok(Self::Unresolved),
            "unknown" => Ok(Self::Unknown),
            _ => Err(FilterError::UnknownLabel {
                kind: "achieved status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Successful,
    Failed,
    NoTransfer,
}

impl TriState for TransferStatus {
    const ALL: [Self; 3] = [Self::Successful, Self::Failed, Self::NoTransfer];

    fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::Successful,
            Some(false) => Self::Failed,
            None => Self::NoTransfer,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::NoTransfer => "no_transfer",
        }
    }

    fn display_label(&self) -> &'static str {
        match self {
            Self::Successful => "Successful",
            Self::Failed => "Failed",
            Self::NoTransfer => "No Transfer",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "successful" => Ok(Self::Successful),
            "failed" => Ok(Self::Failed),
            "no_transfer" => Ok(Self::NoTransfer),
            _ => Err(FilterError::UnknownLabel {
                kind: "transfer status",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MultiCaseStatus {
    True,
    False,
    Unknown,
}

impl TriState for MultiCaseStatus {
    const ALL: [Self; 3] = [Self::True, Self::False, Self::Unknown];

    fn from_flag(flag: Option<bool>) -> Self {
        match flag {
            Some(true) => Self::True,
            Some(false) => Self::False,
            None => Self::Unknown,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unknown => "unknown",
        }
    }

    fn display_label(&self) -> &'static str {
        match self {
            Self::True => "True",
            Self::False => "False",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for MultiCaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MultiCaseStatus {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "unknown" => Ok(Self::Unknown),
            _ => Err(FilterError::UnknownLabel {
                kind: "multi-case status",
                value: s.to_string(),
            }),
        }
    }
}
