// Syllable annotator: splits the chosen realization into tagged fragments.
//
// Each word's surface text is cut into as many contiguous pieces as its
// chosen pronunciation has syllables. The cut is not phonetic: every piece
// gets `chars / syllables` characters and the last piece also takes the
// remainder, so "compare" read as two syllables becomes "com" + "pare". A
// word shorter than its syllable count yields empty pieces, and each of those
// still gets its own tag.
//
// Every voiced piece is tagged with the pair (expected stress at that point
// of the alternation, actual stress). Joiners, and any silent slot, pass
// through with the `Neutral` tag and do not advance the alternation. The
// result carries the classification so renderers can emphasize a line of
// pentameter as a whole.
//
// Output of this module is consumed by `render.rs`.

use pentameter_lang::Stress;
use serde::{Deserialize, Serialize};

use crate::classify::{Classification, expected_stress};
use crate::enumerate::RealizedPhrase;
use crate::render::Render;

/// Tag for one fragment: what the meter expected against what was said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// Expected unstressed, read unstressed.
    Unstressed,
    /// Expected stressed, read unstressed.
    MissedStress,
    /// Expected unstressed, read stressed.
    ExtraStress,
    /// Expected stressed, read stressed.
    Stressed,
    /// Joiner or other silent text.
    Neutral,
}

impl Annotation {
    /// Tag for a voiced syllable. Silent input on either side is `Neutral`.
    pub fn for_syllable(expected: Stress, actual: Stress) -> Annotation {
        match (expected, actual) {
            (Stress::Unstressed, Stress::Unstressed) => Annotation::Unstressed,
            (Stress::Stressed, Stress::Unstressed) => Annotation::MissedStress,
            (Stress::Unstressed, Stress::Stressed) => Annotation::ExtraStress,
            (Stress::Stressed, Stress::Stressed) => Annotation::Stressed,
            _ => Annotation::Neutral,
        }
    }

    /// Stable text label.
    pub fn label(self) -> &'static str {
        match self {
            Annotation::Unstressed => "unstressed",
            Annotation::MissedStress => "missed_stress",
            Annotation::ExtraStress => "extra_stress",
            Annotation::Stressed => "stressed",
            Annotation::Neutral => "neutral",
        }
    }

    /// Whether the syllable fit the meter. `Neutral` counts as a match.
    pub fn is_match(self) -> bool {
        !matches!(self, Annotation::MissedStress | Annotation::ExtraStress)
    }
}

/// A piece of surface text with its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    pub text: String,
    pub annotation: Annotation,
}

/// The final analysis of one phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedResult {
    pub fragments: Vec<Fragment>,
    #[serde(flatten)]
    pub classification: Classification,
}

impl AnnotatedResult {
    pub fn is_iambic(&self) -> bool {
        self.classification.is_iambic
    }

    pub fn is_iambic_pentameter(&self) -> bool {
        self.classification.is_iambic_pentameter
    }

    /// Whether the whole line should be rendered emphasized.
    pub fn is_emphasized(&self) -> bool {
        self.classification.is_iambic_pentameter
    }

    pub fn mismatch_count(&self) -> usize {
        self.classification.mismatch_count
    }

    pub fn syllable_count(&self) -> usize {
        self.classification.syllable_count
    }

    /// Fragments that stand for syllables (everything but `Neutral`).
    pub fn syllables(&self) -> impl Iterator<Item = &Fragment> {
        self.fragments
            .iter()
            .filter(|f| f.annotation != Annotation::Neutral)
    }

    /// The original text, reassembled from the fragments.
    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    /// Feed every fragment through a renderer.
    pub fn render_with<R: Render>(&self, mut renderer: R) -> String {
        renderer.begin(self.is_emphasized());
        for fragment in &self.fragments {
            renderer.fragment(&fragment.text, fragment.annotation);
        }
        renderer.finish()
    }
}

/// Cut `text` into `parts` contiguous pieces of `len / parts` characters,
/// the last piece taking the remainder. `parts == 0` is treated as one.
pub fn split_syllables(text: &str, parts: usize) -> Vec<&str> {
    let parts = parts.max(1);
    let len = text.chars().count();
    let size = len / parts;

    // Byte offset of every char boundary, plus the end of the string.
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    (0..parts)
        .map(|k| {
            let start = bounds[k * size];
            let end = if k + 1 == parts {
                text.len()
            } else {
                bounds[(k + 1) * size]
            };
            &text[start..end]
        })
        .collect()
}

/// Annotate a realization.
pub fn annotate(phrase: &RealizedPhrase<'_>, classification: Classification) -> AnnotatedResult {
    let mut fragments = Vec::new();
    let mut position = 0;

    for part in &phrase.parts {
        let stresses = part.pronunciation.stresses();
        if part.token.is_joiner() || part.pronunciation.is_silent() {
            fragments.push(Fragment {
                text: part.token.text.clone(),
                annotation: Annotation::Neutral,
            });
            continue;
        }

        for (piece, &actual) in split_syllables(&part.token.text, stresses.len())
            .into_iter()
            .zip(stresses)
        {
            let annotation = if actual.is_voiced() {
                let tag = Annotation::for_syllable(expected_stress(position), actual);
                position += 1;
                tag
            } else {
                Annotation::Neutral
            };
            fragments.push(Fragment {
                text: piece.to_string(),
                annotation,
            });
        }
    }

    AnnotatedResult {
        fragments,
        classification,
    }
}
