//! Completed skin profile produced by the quiz
//!
//! A `SkinProfile` is the immutable result of finishing all six quiz
//! questions. It can also be loaded from a JSON file for headless
//! recommendation runs; the field names and enum strings match the quiz
//! vocabulary (`skinType`, `concerns`, `age`, ...).

use crate::error::{DermTuiError, Result};
use crate::types::{AgeGroup, Concern, Lifestyle, RoutineHabit, Sensitivity, SkinType};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The completed structured answer set from the quiz.
///
/// Immutable once produced: the quiz engine builds it exactly once when the
/// final question is answered, and the wizard holds it for the rest of the
/// session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinProfile {
    pub skin_type: SkinType,
    /// Concerns in the order the user selected them. Never empty for a
    /// quiz-produced profile; file-loaded profiles are checked by
    /// [`SkinProfile::validate`].
    pub concerns: Vec<Concern>,
    pub age: AgeGroup,
    pub lifestyle: Lifestyle,
    pub current_routine: RoutineHabit,
    pub sensitivity: Sensitivity,
}

impl SkinProfile {
    /// Load a profile from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let profile: Self = serde_json::from_str(&text)?;
        Ok(profile)
    }

    /// Validate the profile.
    ///
    /// The only structural rule beyond the type system: the concern list
    /// must be non-empty, matching the quiz gate on the multi-select
    /// question.
    pub fn validate(&self) -> Result<()> {
        if self.concerns.is_empty() {
            return Err(DermTuiError::profile(
                "at least one skin concern is required",
            ));
        }
        Ok(())
    }

    /// Whether this profile lists the given concern.
    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> SkinProfile {
        SkinProfile {
            skin_type: SkinType::Oily,
            concerns: vec![Concern::Acne, Concern::Pores],
            age: AgeGroup::From22To25,
            lifestyle: Lifestyle::Active,
            current_routine: RoutineHabit::Basic,
            sensitivity: Sensitivity::Low,
        }
    }

    #[test]
    fn test_validate_requires_concern() {
        let mut profile = sample_profile();
        assert!(profile.validate().is_ok());

        profile.concerns.clear();
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_has_concern() {
        let profile = sample_profile();
        assert!(profile.has_concern(Concern::Acne));
        assert!(!profile.has_concern(Concern::Aging));
    }

    #[test]
    fn test_json_field_names_are_camel_case() {
        let json = serde_json::to_string(&sample_profile()).unwrap();
        assert!(json.contains("\"skinType\":\"oily\""));
        assert!(json.contains("\"currentRoutine\":\"basic\""));
        assert!(json.contains("\"age\":\"22-25\""));
    }

    #[test]
    fn test_json_roundtrip() {
        let original = sample_profile();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: SkinProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(original, parsed);
    }
}
