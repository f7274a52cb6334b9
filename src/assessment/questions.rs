use crate::scoring::Dosha;

/// One answer choice. Each option maps directly onto a dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionOption {
    pub dosha: Dosha,
    pub label: &'static str,
}

/// A question in the Prakriti assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Key used in the submitted response set
    pub id: &'static str,
    pub prompt: &'static str,
    pub section: &'static str,
    /// Always ordered vata, pitta, kapha
    pub options: [QuestionOption; 3],
}

impl Question {
    /// Find the option for a given answer value, if it is a recognized dosha.
    pub fn option_for(&self, answer: &str) -> Option<&QuestionOption> {
        let dosha = Dosha::parse(answer)?;
        self.options.iter().find(|o| o.dosha == dosha)
    }
}

const fn options(vata: &'static str, pitta: &'static str, kapha: &'static str) -> [QuestionOption; 3] {
    [
        QuestionOption { dosha: Dosha::Vata, label: vata },
        QuestionOption { dosha: Dosha::Pitta, label: pitta },
        QuestionOption { dosha: Dosha::Kapha, label: kapha },
    ]
}

const PHYSICAL: &str = "Physical Traits";
const MENTAL: &str = "Mental & Emotional";
const HABITS: &str = "Daily Habits";
const ENVIRONMENT: &str = "Environmental";

static QUESTIONS: [Question; 12] = [
    Question {
        id: "bodyType",
        prompt: "What best describes your body type?",
        section: PHYSICAL,
        options: options(
            "Thin, light frame (naturally slim)",
            "Medium build, muscular",
            "Large frame, heavy build",
        ),
    },
    Question {
        id: "skin",
        prompt: "How would you describe your skin?",
        section: PHYSICAL,
        options: options(
            "Dry, rough, occasionally dry",
            "Warm, oily, sensitive",
            "Thick, moist, balanced",
        ),
    },
    Question {
        id: "hair",
        prompt: "What describes your hair type?",
        section: PHYSICAL,
        options: options("Dry, thin, brittle", "Oily, fine, thinning", "Thick, oily, strong"),
    },
    Question {
        id: "eyes",
        prompt: "How would you describe your eyes?",
        section: PHYSICAL,
        options: options(
            "Small, dry, active",
            "Medium, bright, penetrating",
            "Large, calm, attractive",
        ),
    },
    Question {
        id: "mindset",
        prompt: "What describes your general mindset?",
        section: MENTAL,
        options: options(
            "Restless, quick-thinking",
            "Intense, focused, determined",
            "Calm, steady, peaceful",
        ),
    },
    Question {
        id: "memory",
        prompt: "How is your memory?",
        section: MENTAL,
        options: options(
            "Quick to learn, quick to forget",
            "Sharp, clear, remembers easily",
            "Slow to learn, long-term retention",
        ),
    },
    Question {
        id: "emotions",
        prompt: "What describes your emotional tendencies?",
        section: MENTAL,
        options: options(
            "Anxious, worried, changeable",
            "Irritable, angry under pressure",
            "Content, stable, calm",
        ),
    },
    Question {
        id: "diet",
        prompt: "What are your dietary preferences?",
        section: HABITS,
        options: options(
            "Warm, moist, grounding foods",
            "Cool, sweet, mild foods",
            "Spicy, light, warm foods",
        ),
    },
    Question {
        id: "sleep",
        prompt: "How is your sleep pattern?",
        section: HABITS,
        options: options(
            "Light sleeper, restless, easily disturbed",
            "Sound sleep, moderate duration",
            "Deep sleep, long duration",
        ),
    },
    Question {
        id: "energy",
        prompt: "What describes your energy levels?",
        section: HABITS,
        options: options(
            "Variable, bursts of energy",
            "Moderate, steady, consistent",
            "Balanced with high and low periods",
        ),
    },
    Question {
        id: "weather",
        prompt: "What weather do you prefer?",
        section: ENVIRONMENT,
        options: options("Warm, humid climates", "Cool, dry climates", "Warm, dry climates"),
    },
    Question {
        id: "stress",
        prompt: "How do you respond to stress?",
        section: ENVIRONMENT,
        options: options(
            "Become anxious, worried",
            "Become irritable, angry",
            "Handle calmly, may withdraw",
        ),
    },
];

/// The full question bank in presentation order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
