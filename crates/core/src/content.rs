//! Localized prompts, hints and explainer text.
//!
//! This is a lookup table keyed by item id and language. The engine passes
//! ids and a language in and never inspects the text that comes back.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{AgeBand, Item, ItemKind, Language};

/// A response already written in `H+T+O` form.
static DECOMPOSED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\+\d+\+\d+").expect("decomposition pattern is valid")
});

/// Number the explainer walks through.
pub const EXPLAINER_EXAMPLE: u16 = 346;

/// Static description of the concept being practised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concept {
    pub id: &'static str,
    pub title: &'static str,
    pub grade: u8,
    pub subject: &'static str,
    pub learning_objectives: &'static [&'static str],
    pub real_world_hooks: &'static [&'static str],
    pub misconceptions: &'static [&'static str],
}

pub const PLACE_VALUE: Concept = Concept {
    id: "M-G2-BASE10-PLACEVALUE",
    title: "Place Value up to 1000",
    grade: 2,
    subject: "Math",
    learning_objectives: &[
        "Identify hundreds, tens, ones in any 3-digit number",
        "Compose & decompose numbers using base-10 understanding",
    ],
    real_world_hooks: &[
        "Rupee notes & coins as hundreds/tens/ones",
        "LEGO bricks: stacks of 10 and flats of 100",
    ],
    misconceptions: &[
        "Thinking 105 > 96 because 5>6 (ignoring place)",
        "Confusing '0' in tens place as 'no tens exist' so number becomes 1-digit",
    ],
};

/// Supplies display text for items. Implementations are pure lookups.
pub trait ContentProvider: Send + Sync {
    fn concept(&self) -> &Concept;

    fn prompt(&self, item: &Item, lang: Language) -> String;

    /// Choice labels for multiple-choice items; empty for the rest.
    fn choices(&self, item: &Item, lang: Language) -> Vec<String>;

    /// Hint for `item`. `last_response` is whatever the learner has typed so
    /// far, which lets some hints react to partial answers.
    fn hint(&self, item: &Item, last_response: Option<&str>, lang: Language) -> String;

    fn explainer(&self, age_band: AgeBand, lang: Language) -> String;

    fn answer_placeholder(&self, kind: ItemKind, lang: Language) -> Option<String>;

    /// Short notes for a parent or teacher reviewing progress.
    fn parent_guidance(&self, lang: Language) -> Vec<String>;
}

/// Built-in English/Hindi text for the place-value catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl ContentProvider for StaticContent {
    fn concept(&self) -> &Concept {
        &PLACE_VALUE
    }

    fn prompt(&self, item: &Item, lang: Language) -> String {
        let text = match item.id().as_str() {
            "q1" => lang.pick(
                "Which digit is in the hundreds place in 346?",
                "346 में सैकड़ों (hundreds) स्थान पर कौन‑सा अंक है?",
            ),
            "q2" => lang.pick("Which number is greater?", "कौन‑सा संख्या बड़ी है?"),
            "q3" => lang.pick(
                "Expand 408 as hundreds + tens + ones (format: H+T+O)",
                "408 को सैकड़े + दहाई + इकाई के रूप में लिखें (H+T+O)",
            ),
            "q4" => lang.pick(
                "Write the number with 5 hundreds, 2 tens, and 7 ones",
                "5 सैकड़े, 2 दहाइयाँ और 7 इकाइयाँ मिलाकर संख्या लिखें",
            ),
            "q5" => lang.pick(
                "If tens digit is 0 in 406, what is the value of tens? (enter a number)",
                "406 में दहाई का अंक 0 है, दहाई का मान क्या होगा? (संख्या लिखें)",
            ),
            "q6" => lang.pick("Choose the correct comparison:", "सही तुलना चुनें:"),
            _ => return item.id().to_string(),
        };
        text.to_string()
    }

    fn choices(&self, item: &Item, _lang: Language) -> Vec<String> {
        // Numerals and comparisons read the same in both languages.
        let labels: &[&str] = match item.id().as_str() {
            "q1" => &["3", "4", "6"],
            "q2" => &["507", "570"],
            "q6" => &["405 < 450", "405 > 450"],
            _ => &[],
        };
        labels.iter().map(|s| (*s).to_string()).collect()
    }

    fn hint(&self, item: &Item, last_response: Option<&str>, lang: Language) -> String {
        let text = match item.id().as_str() {
            "q1" => lang.pick(
                "Look at the first digit from the left in a 3-digit number for hundreds.",
                "3-अंकों की संख्या में बाएँ से पहला अंक सैकड़ों को बताता है।",
            ),
            "q2" => lang.pick(
                "Compare the tens digit first. If they match, compare ones.",
                "पहले दहाई के अंक की तुलना करें। यदि बराबर हों तो इकाइयों की तुलना करें।",
            ),
            "q3" if last_response.is_some_and(|r| DECOMPOSED.is_match(r)) => lang.pick(
                "Check the tens part: the tens digit is 0 in 408.",
                "दहाई वाले भाग पर ध्यान दें: 408 में दहाई का अंक 0 है।",
            ),
            "q3" => lang.pick(
                "Write it as hundreds + tens + ones. How many tens in 408?",
                "इसे सैकड़ा + दहाई + इकाई के रूप में लिखें। 408 में कितनी दहाइयाँ हैं?",
            ),
            "q4" => lang.pick(
                "Five hundreds is 500, two tens is 20, seven ones is 7. Combine them.",
                "5 सैकड़े = 500, 2 दहाइयाँ = 20, 7 इकाइयाँ = 7; इन्हें जोड़ें।",
            ),
            "q5" => lang.pick(
                "A tens digit of 0 means zero tens (value 0).",
                "दहाई का अंक 0 होने का मतलब दहाई का मान 0 है।",
            ),
            "q6" => lang.pick(
                "Compare hundreds first: 4 vs 4 are equal. Now compare tens: 0 vs 5.",
                "पहले सैकड़े की तुलना करें: 4 और 4 समान हैं। अब दहाइयाँ देखें: 0 बनाम 5।",
            ),
            _ => lang.pick(
                "Think about hundreds, tens, and ones.",
                "सैकड़ा, दहाई और इकाई के बारे में सोचें।",
            ),
        };
        text.to_string()
    }

    fn explainer(&self, age_band: AgeBand, lang: Language) -> String {
        explain_number(EXPLAINER_EXAMPLE, age_band, lang)
    }

    fn answer_placeholder(&self, kind: ItemKind, lang: Language) -> Option<String> {
        match kind {
            ItemKind::MultipleChoice => None,
            ItemKind::Decomposition => Some(lang.pick("e.g., 400+0+8", "जैसे: 400+0+8").into()),
            ItemKind::FreeText => Some(lang.pick("Type your answer", "अपना उत्तर लिखें").into()),
        }
    }

    fn parent_guidance(&self, lang: Language) -> Vec<String> {
        let notes: [&str; 3] = match lang {
            Language::En => [
                "Today's focus: Place value within 1000. Aim for 10 questions with 70%+ accuracy.",
                "Tip: Use rupee notes/coins at home to build numbers (₹100/₹10/₹1).",
                "Celebrate streaks every 3 correct answers: kids unlock a sticker!",
            ],
            Language::Hi => [
                "आज का लक्ष्य: 1000 तक का स्थान‑मूल्य। 10 प्रश्न, सटीकता 70%+ रखें।",
                "टिप: घर पर ₹100/₹10/₹1 से संख्या बनवाएँ।",
                "हर 3 सही उत्तर पर स्टिकर देकर उत्साह बढ़ाएँ।",
            ],
        };
        notes.iter().map(|s| (*s).to_string()).collect()
    }
}

/// Rupee-notes walkthrough of a three-digit number.
#[must_use]
pub fn explain_number(number: u16, age_band: AgeBand, lang: Language) -> String {
    let hundreds = number / 100 % 10;
    let tens = number / 10 % 10;
    let ones = number % 10;

    match lang {
        Language::Hi => {
            let age = match age_band {
                AgeBand::Early => "कक्षा 1–2",
                AgeBand::Middle => "कक्षा 3–5",
            };
            format!(
                "({age}) कल्पना करें कि हमारे पास रुपये की नोटें और सिक्के हैं। {number} में पहला अंक ({hundreds}) सैकड़ों को दर्शाता है (₹100 की नोटें), दूसरा अंक ({tens}) दहाइयों को (₹10 की नोटें) और आख़िरी अंक ({ones}) इकाइयों को (₹1 के सिक्के)। इसलिए {number} = {hundreds} सैकड़े + {tens} दहाइयाँ + {ones} इकाइयाँ।"
            )
        }
        Language::En => {
            let age = match age_band {
                AgeBand::Early => "Grade 1–2",
                AgeBand::Middle => "Grade 3–5",
            };
            format!(
                "({age}) Imagine rupee notes and coins. In {number}, the first digit ({hundreds}) tells hundreds (₹100 notes), the second digit ({tens}) tells tens (₹10 notes), and the last digit ({ones}) tells ones (₹1 coins). So {number} = {hundreds} hundreds + {tens} tens + {ones} ones."
            )
        }
    }
}
