use crate::catalog::ActivityId;
use crate::errors::AppError;
use crate::mood::{Mood, Palette};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const MAX_DURATION_MONTHS: f64 = 600.0;
pub const MAX_EMOTIONAL_IMPACT: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryInput {
    pub breakup_date: NaiveDate,
    pub relationship_duration_months: f64,
    pub emotional_impact: f64,
    #[serde(default)]
    pub activities: BTreeSet<ActivityId>,
}

impl RecoveryInput {
    pub fn has_negative_activity(&self) -> bool {
        self.activities.iter().any(|id| id.is_negative())
    }

    pub fn positive_activity_count(&self) -> usize {
        self.activities.iter().filter(|id| !id.is_negative()).count()
    }
}

/// Raw form payload as the page submits it. The date stays a string so an
/// unset picker (`""` or missing) can be told apart from a malformed one.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryForm {
    #[serde(default)]
    pub breakup_date: Option<String>,
    #[serde(default)]
    pub relationship_duration_months: f64,
    #[serde(default = "default_emotional_impact")]
    pub emotional_impact: f64,
    #[serde(default)]
    pub activities: Vec<String>,
}

fn default_emotional_impact() -> f64 {
    50.0
}

impl RecoveryForm {
    pub fn validate(self) -> Result<RecoveryInput, AppError> {
        let raw_date = self
            .breakup_date
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::bad_request("Please select the breakup date."))?;
        let breakup_date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| AppError::bad_request(format!("invalid breakup date '{raw_date}'")))?;

        if !(0.0..=MAX_DURATION_MONTHS).contains(&self.relationship_duration_months) {
            return Err(AppError::bad_request(
                "relationship duration must be between 0 and 600 months",
            ));
        }
        if !(0.0..=MAX_EMOTIONAL_IMPACT).contains(&self.emotional_impact) {
            return Err(AppError::bad_request(
                "emotional impact must be between 0 and 100",
            ));
        }

        let activities = self
            .activities
            .iter()
            .map(|value| value.parse::<ActivityId>())
            .collect::<Result<BTreeSet<_>, _>>()
            .map_err(|err| AppError::bad_request(err.to_string()))?;

        Ok(RecoveryInput {
            breakup_date,
            relationship_duration_months: self.relationship_duration_months,
            emotional_impact: self.emotional_impact,
            activities,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Factors {
    pub days_since_breakup: i64,
    pub time: f64,
    pub emotional: f64,
    pub activity: f64,
    pub duration: f64,
    pub raw_total: f64,
    pub penalty: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoveryResult {
    pub percentage: f64,
    pub mood: Mood,
    pub mood_emoji: &'static str,
    pub mood_message: &'static str,
    pub advice: &'static str,
    pub palette: Palette,
    pub cautionary_text: Option<&'static str>,
    pub factors: Factors,
}

impl RecoveryResult {
    pub fn rounded_percentage(&self) -> u8 {
        self.percentage.round() as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedEntry {
    pub id: String,
    pub saved_at: String,
    pub percentage: f64,
    pub input: RecoveryInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub input: RecoveryInput,
    pub result: RecoveryResult,
    pub share_text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemePayload {
    pub dark_mode: bool,
}

#[derive(Debug, Deserialize)]
pub struct ShareQuery {
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub text: String,
}
