use serde::Serialize;

/// Tons of CO₂ per person per year.
pub const AVERAGE_US_EMISSIONS: u32 = 16;
pub const AVERAGE_GLOBAL_EMISSIONS: u32 = 4;
/// Highest score a quiz submission may report.
pub const MAX_TOTAL_EMISSIONS: f64 = 1000.0;
/// Footprint icons drawn for a single score.
pub const MAX_DISPLAY_FOOTPRINTS: u32 = 100;

/// A user's score next to the US and global averages, one footprint per ton.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootprintComparison {
    pub total_emissions: Option<f64>,
    pub display_score: String,
    pub user_footprints: u32,
    pub average_us_footprints: u32,
    pub average_global_footprints: u32,
}

impl FootprintComparison {
    pub fn new(total_emissions: Option<f64>) -> Self {
        let total_emissions = total_emissions.filter(|t| t.is_finite());

        let user_footprints = match total_emissions {
            Some(t) if t > 0.0 => t.round().min(MAX_DISPLAY_FOOTPRINTS as f64) as u32,
            _ => 0,
        };
        let display_score = match total_emissions {
            Some(t) => format!("{:.2}", t),
            None => "N/A".to_string(),
        };

        FootprintComparison {
            total_emissions,
            display_score,
            user_footprints,
            average_us_footprints: AVERAGE_US_EMISSIONS,
            average_global_footprints: AVERAGE_GLOBAL_EMISSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FootprintComparison, MAX_DISPLAY_FOOTPRINTS};

    #[test]
    fn rounds_score_to_footprints() {
        let comparison = FootprintComparison::new(Some(12.456));

        assert_eq!(comparison.user_footprints, 12);
        assert_eq!(comparison.display_score, "12.46");
        assert_eq!(comparison.average_us_footprints, 16);
        assert_eq!(comparison.average_global_footprints, 4);
    }

    #[test]
    fn huge_scores_are_capped_for_display() {
        let comparison = FootprintComparison::new(Some(1e12));

        assert_eq!(comparison.user_footprints, MAX_DISPLAY_FOOTPRINTS);
        assert_eq!(comparison.display_score, "1000000000000.00");
    }

    #[test]
    fn missing_score_shows_na() {
        let comparison = FootprintComparison::new(None);

        assert_eq!(comparison.user_footprints, 0);
        assert_eq!(comparison.display_score, "N/A");
    }

    #[test]
    fn negative_or_nan_scores_have_no_footprints() {
        assert_eq!(FootprintComparison::new(Some(-3.0)).user_footprints, 0);
        assert_eq!(FootprintComparison::new(Some(f64::NAN)).display_score, "N/A");
    }
}
