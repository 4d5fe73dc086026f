use unicode_categories::UnicodeCategories;

/// Words whose presence marks text as likely prescription content.
pub const DOMAIN_KEYWORDS: [&str; 9] = [
    "mg",
    "tablet",
    "capsule",
    "dose",
    "daily",
    "medicine",
    "prescription",
    "doctor",
    "dr",
];

const LENGTH_DIVISOR: usize = 10;
const LENGTH_CAP: i64 = 20;
const DENSITY_DIVISOR: usize = 5;
const DENSITY_CAP: i64 = 30;
const KEYWORD_BONUS: i64 = 25;
const NOISE_PENALTY: i64 = 20;

/// Character statistics every scoring rule reads from. Only letters and
/// decimal digits count as alphanumeric; `½` or a combining vowel sign does not.
#[derive(Debug, Clone)]
pub struct TextProfile {
    lowercase: String,
    length: usize,
    alphanumeric: usize,
    special: usize,
}

impl TextProfile {
    pub fn new(text: &str) -> Self {
        let (alphanumeric, special) = text.chars().fold((0, 0), |(alnum, special), c| {
            if c.is_letter() || c.is_number_decimal_digit() {
                (alnum + 1, special)
            } else if c.is_whitespace() {
                (alnum, special)
            } else {
                (alnum, special + 1)
            }
        });

        Self {
            lowercase: text.to_lowercase(),
            length: text.chars().count(),
            alphanumeric,
            special,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn alphanumeric(&self) -> usize {
        self.alphanumeric
    }

    pub fn special(&self) -> usize {
        self.special
    }
}

pub type ScoringRule = fn(&TextProfile) -> i64;

pub const SCORING_RULES: [ScoringRule; 4] =
    [length_term, density_term, keyword_bonus, noise_penalty];

/// Scores recognized text for plausibility. Pure and deterministic.
///
/// The score is the sum of [`SCORING_RULES`] over the trimmed text, floored
/// at zero. Empty or whitespace-only text scores zero.
pub fn score_candidate(text: &str) -> u32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    let profile = TextProfile::new(trimmed);
    let total = SCORING_RULES
        .iter()
        .fold(0_i64, |acc, rule| acc + rule(&profile));

    total.max(0) as u32
}

pub fn length_term(profile: &TextProfile) -> i64 {
    ((profile.length / LENGTH_DIVISOR) as i64).min(LENGTH_CAP)
}

pub fn density_term(profile: &TextProfile) -> i64 {
    ((profile.alphanumeric / DENSITY_DIVISOR) as i64).min(DENSITY_CAP)
}

/// Substring match, so "dr" also fires inside "drive".
pub fn keyword_bonus(profile: &TextProfile) -> i64 {
    if DOMAIN_KEYWORDS
        .iter()
        .any(|keyword| profile.lowercase.contains(keyword))
    {
        KEYWORD_BONUS
    } else {
        0
    }
}

pub fn noise_penalty(profile: &TextProfile) -> i64 {
    if profile.special > profile.length / 3 {
        -NOISE_PENALTY
    } else {
        0
    }
}
