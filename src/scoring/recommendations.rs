use serde::Serialize;

use super::dosha::Dosha;

/// Static guidance for one dosha, grouped into four dimensions.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationBundle {
    pub diet: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub exercise: &'static [&'static str],
    pub mental_health: &'static [&'static str],
}

impl RecommendationBundle {
    /// Dimensions paired with their heading, in display order
    pub fn sections(&self) -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("Diet", self.diet),
            ("Lifestyle", self.lifestyle),
            ("Exercise", self.exercise),
            ("Mental Health", self.mental_health),
        ]
    }
}

static VATA: RecommendationBundle = RecommendationBundle {
    diet: &[
        "Warm, cooked foods",
        "Sweet, sour, salty tastes",
        "Regular meal times",
        "Avoid cold, dry foods",
    ],
    lifestyle: &[
        "Regular routine",
        "Adequate rest",
        "Warm environment",
        "Gentle activities",
    ],
    exercise: &["Yoga", "Walking", "Swimming", "Avoid excessive cardio"],
    mental_health: &[
        "Meditation",
        "Calming music",
        "Massage",
        "Avoid overstimulation",
    ],
};

static PITTA: RecommendationBundle = RecommendationBundle {
    diet: &[
        "Cool, fresh foods",
        "Sweet, bitter, astringent tastes",
        "Avoid spicy, oily foods",
        "Moderate portions",
    ],
    lifestyle: &[
        "Cool environment",
        "Avoid overheating",
        "Moderate activity",
        "Stress management",
    ],
    exercise: &[
        "Swimming",
        "Cycling",
        "Moderate intensity",
        "Avoid competitive sports",
    ],
    mental_health: &[
        "Cooling pranayama",
        "Nature walks",
        "Avoid anger triggers",
        "Practice patience",
    ],
};

static KAPHA: RecommendationBundle = RecommendationBundle {
    diet: &[
        "Light, warm foods",
        "Spicy, bitter, astringent tastes",
        "Avoid heavy, oily foods",
        "Smaller portions",
    ],
    lifestyle: &[
        "Active routine",
        "Stimulating environment",
        "Regular exercise",
        "Avoid oversleeping",
    ],
    exercise: &[
        "Running",
        "Aerobics",
        "Vigorous activities",
        "Daily movement",
    ],
    mental_health: &[
        "Energizing practices",
        "Social activities",
        "Avoid lethargy",
        "Stay motivated",
    ],
};

/// Look up the recommendation bundle for a primary dosha.
pub fn recommendations_for(dosha: Dosha) -> &'static RecommendationBundle {
    match dosha {
        Dosha::Vata => &VATA,
        Dosha::Pitta => &PITTA,
        Dosha::Kapha => &KAPHA,
    }
}
