use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Risk status assigned to one company-year.
///
/// `Distress`/`Grey`/`Safe` come from the Altman Z″ index,
/// `Weak`/`Neutral`/`Strong` from the Piotroski F-score.
/// `FinanceSector` is the not-applicable sentinel for skipped entities;
/// it never participates in downgrade detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskStatus {
    Distress,
    Grey,
    Safe,
    Weak,
    Neutral,
    Strong,
    FinanceSector,
}

impl RiskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskStatus::Distress => "Distress",
            RiskStatus::Grey => "Grey",
            RiskStatus::Safe => "Safe",
            RiskStatus::Weak => "Weak",
            RiskStatus::Neutral => "Neutral",
            RiskStatus::Strong => "Strong",
            RiskStatus::FinanceSector => "Finance Sector",
        }
    }

    /// Case-insensitive label parse. Unknown labels return `None` so callers
    /// can drop malformed rows instead of erroring.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "distress" => Some(RiskStatus::Distress),
            "grey" => Some(RiskStatus::Grey),
            "safe" => Some(RiskStatus::Safe),
            "weak" => Some(RiskStatus::Weak),
            "neutral" => Some(RiskStatus::Neutral),
            "strong" => Some(RiskStatus::Strong),
            "finance sector" => Some(RiskStatus::FinanceSector),
            _ => None,
        }
    }

    /// Classify a (rounded) Altman Z″ score.
    ///
    /// 1.1 belongs to Distress, 2.6 to Grey.
    pub fn from_distress_index(score: f64) -> Self {
        if score <= 1.1 {
            RiskStatus::Distress
        } else if score <= 2.6 {
            RiskStatus::Grey
        } else {
            RiskStatus::Safe
        }
    }

    /// Classify a Piotroski F-score (integer in 0..=9).
    pub fn from_quality_score(score: u8) -> Self {
        if score >= 6 {
            RiskStatus::Strong
        } else if score >= 4 {
            RiskStatus::Neutral
        } else {
            RiskStatus::Weak
        }
    }

    /// Statuses a downgrade can start from.
    pub fn is_valid_prior(&self) -> bool {
        matches!(
            self,
            RiskStatus::Safe | RiskStatus::Strong | RiskStatus::Neutral
        )
    }

    /// Statuses a downgrade lands on.
    pub fn is_downgrade_target(&self) -> bool {
        matches!(
            self,
            RiskStatus::Distress | RiskStatus::Weak | RiskStatus::Grey
        )
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RiskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        RiskStatus::parse(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown risk status: {label}")))
    }
}

/// Which scoring model produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreModel {
    AltmanZ,
    PiotroskiF,
    Skipped,
}

impl ScoreModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreModel::AltmanZ => "Altman Z″",
            ScoreModel::PiotroskiF => "Piotroski F-Score",
            ScoreModel::Skipped => "Skipped",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "altman z″" | "altman z" => Some(ScoreModel::AltmanZ),
            "piotroski f-score" => Some(ScoreModel::PiotroskiF),
            "skipped" => Some(ScoreModel::Skipped),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScoreModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScoreModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScoreModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        ScoreModel::parse(&label)
            .ok_or_else(|| de::Error::custom(format!("unknown score model: {label}")))
    }
}

/// One entity's scoring outcome for one fiscal year.
///
/// `status` is `None` exactly when `score` is `None`, except for skipped
/// finance-sector records, which carry a null score and the
/// `FinanceSector` sentinel status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub ticker: String,
    pub fiscal_year: i32,
    pub sector: String,
    pub model: ScoreModel,
    pub score: Option<f64>,
    pub status: Option<RiskStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distress_index_thresholds_partition() {
        assert_eq!(RiskStatus::from_distress_index(0.0), RiskStatus::Distress);
        assert_eq!(RiskStatus::from_distress_index(1.09), RiskStatus::Distress);
        // Boundary values belong to the lower zone.
        assert_eq!(RiskStatus::from_distress_index(1.1), RiskStatus::Distress);
        assert_eq!(RiskStatus::from_distress_index(1.11), RiskStatus::Grey);
        assert_eq!(RiskStatus::from_distress_index(2.6), RiskStatus::Grey);
        assert_eq!(RiskStatus::from_distress_index(2.61), RiskStatus::Safe);
        assert_eq!(RiskStatus::from_distress_index(-4.5), RiskStatus::Distress);
    }

    #[test]
    fn quality_score_thresholds_cover_all_integers() {
        for f in 0..=9u8 {
            let status = RiskStatus::from_quality_score(f);
            match f {
                0..=3 => assert_eq!(status, RiskStatus::Weak),
                4..=5 => assert_eq!(status, RiskStatus::Neutral),
                _ => assert_eq!(status, RiskStatus::Strong),
            }
        }
    }

    #[test]
    fn status_label_roundtrip() {
        for status in [
            RiskStatus::Distress,
            RiskStatus::Grey,
            RiskStatus::Safe,
            RiskStatus::Weak,
            RiskStatus::Neutral,
            RiskStatus::Strong,
            RiskStatus::FinanceSector,
        ] {
            assert_eq!(RiskStatus::parse(status.as_str()), Some(status));
            assert_eq!(
                RiskStatus::parse(&status.as_str().to_uppercase()),
                Some(status)
            );
        }
        assert_eq!(RiskStatus::parse("Bankrupt"), None);
        assert_eq!(RiskStatus::parse(""), None);
    }

    #[test]
    fn prior_and_target_sets_are_disjoint() {
        let all = [
            RiskStatus::Distress,
            RiskStatus::Grey,
            RiskStatus::Safe,
            RiskStatus::Weak,
            RiskStatus::Neutral,
            RiskStatus::Strong,
            RiskStatus::FinanceSector,
        ];
        for status in all {
            assert!(!(status.is_valid_prior() && status.is_downgrade_target()));
        }
        assert!(!RiskStatus::FinanceSector.is_valid_prior());
        assert!(!RiskStatus::FinanceSector.is_downgrade_target());
    }

    #[test]
    fn model_label_roundtrip() {
        for model in [ScoreModel::AltmanZ, ScoreModel::PiotroskiF, ScoreModel::Skipped] {
            assert_eq!(ScoreModel::parse(model.as_str()), Some(model));
        }
        assert_eq!(ScoreModel::parse("DCF"), None);
    }
}
