//! Tone calibration for cover letters: maps the requested tone to the phrasing
//! used in the opening, the pitch and the sign-off.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterTone {
    #[default]
    Professional,
    Enthusiastic,
    Confident,
    Creative,
}

/// Phrasing calibrated to a specific tone. `{job_title}` and `{company}` are
/// substituted by the cover-letter generator.
#[derive(Debug, Clone)]
pub struct TonePhrases {
    pub opening: &'static str,
    pub pitch_verb: &'static str,
    pub closing: &'static str,
}

pub fn get_tone_phrases(tone: LetterTone) -> TonePhrases {
    match tone {
        LetterTone::Professional => TonePhrases {
            opening: "I am writing to express my strong interest in the {job_title} position at {company}.",
            pitch_verb: "I am confident that I would be a valuable addition to your team",
            closing: "Thank you for considering my application. I look forward to hearing from you soon.",
        },
        LetterTone::Enthusiastic => TonePhrases {
            opening: "I am thrilled to apply for the {job_title} position at {company}!",
            pitch_verb: "I would love the chance to bring that energy to your team",
            closing: "I would be delighted to talk about how I can contribute. Thank you so much for your time!",
        },
        LetterTone::Confident => TonePhrases {
            opening: "I am the {job_title} that {company} is looking for.",
            pitch_verb: "I will deliver results for your team from day one",
            closing: "I look forward to discussing the impact I can make at {company}.",
        },
        LetterTone::Creative => TonePhrases {
            opening: "Great products are built by people who sweat the details, which is exactly why the {job_title} position at {company} caught my eye.",
            pitch_verb: "I would bring curiosity and a builder's mindset to your team",
            closing: "I would welcome the chance to swap ideas about what we could build together at {company}.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tone_is_professional() {
        assert_eq!(LetterTone::default(), LetterTone::Professional);
    }

    #[test]
    fn test_tone_deserializes_lowercase() {
        let tone: LetterTone = serde_json::from_str(r#""enthusiastic""#).unwrap();
        assert_eq!(tone, LetterTone::Enthusiastic);
        assert!(serde_json::from_str::<LetterTone>(r#""snarky""#).is_err());
    }

    #[test]
    fn test_every_opening_names_the_role() {
        for tone in [
            LetterTone::Professional,
            LetterTone::Enthusiastic,
            LetterTone::Confident,
            LetterTone::Creative,
        ] {
            let phrases = get_tone_phrases(tone);
            assert!(phrases.opening.contains("{job_title}"), "{tone:?}");
            assert!(phrases.opening.contains("{company}"), "{tone:?}");
        }
    }
}
