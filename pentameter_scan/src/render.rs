// Rendering targets for annotated results.
//
// `AnnotatedResult::render_with` drives a `Render` implementation: one
// `begin` call, one `fragment` call per fragment in order, then `finish`.
// Three targets ship here:
// - `PlainRenderer`: the surface text, unchanged.
// - `BracketRenderer`: each syllable followed by its stress mark, `(x)` for
//   unstressed and `(/)` for stressed, with `!` inside the brackets when the
//   syllable broke the meter. An emphasized line is wrapped in `*`. Meant for
//   logs and tests, where escape codes get in the way.
// - `AnsiRenderer`: terminal colors via crossterm. Matches are green and
//   mismatches magenta, the darker shade marking stressed syllables. An
//   emphasized line is bold throughout.

use crossterm::style::{Attribute, Color, ContentStyle};

use crate::annotate::Annotation;

pub trait Render {
    /// Called once before any fragment.
    fn begin(&mut self, emphasized: bool);

    fn fragment(&mut self, text: &str, tag: Annotation);

    fn finish(self) -> String;
}

#[derive(Debug, Default)]
pub struct PlainRenderer {
    out: String,
}

impl Render for PlainRenderer {
    fn begin(&mut self, _emphasized: bool) {}

    fn fragment(&mut self, text: &str, _tag: Annotation) {
        self.out.push_str(text);
    }

    fn finish(self) -> String {
        self.out
    }
}

#[derive(Debug, Default)]
pub struct BracketRenderer {
    out: String,
    emphasized: bool,
}

impl BracketRenderer {
    fn mark(tag: Annotation) -> &'static str {
        match tag {
            Annotation::Unstressed => "(x)",
            Annotation::MissedStress => "(x!)",
            Annotation::ExtraStress => "(/!)",
            Annotation::Stressed => "(/)",
            Annotation::Neutral => "",
        }
    }
}

impl Render for BracketRenderer {
    fn begin(&mut self, emphasized: bool) {
        self.emphasized = emphasized;
        if emphasized {
            self.out.push('*');
        }
    }

    fn fragment(&mut self, text: &str, tag: Annotation) {
        self.out.push_str(text);
        self.out.push_str(Self::mark(tag));
    }

    fn finish(mut self) -> String {
        if self.emphasized {
            self.out.push('*');
        }
        self.out
    }
}

#[derive(Debug, Default)]
pub struct AnsiRenderer {
    out: String,
    emphasized: bool,
}

impl AnsiRenderer {
    fn style(&self, tag: Annotation) -> ContentStyle {
        let mut style = ContentStyle::new();
        style.foreground_color = match tag {
            Annotation::Unstressed => Some(Color::Green),
            Annotation::Stressed => Some(Color::DarkGreen),
            Annotation::ExtraStress => Some(Color::DarkMagenta),
            Annotation::MissedStress => Some(Color::Magenta),
            Annotation::Neutral => None,
        };
        if self.emphasized {
            style.attributes.set(Attribute::Bold);
        }
        style
    }
}

impl Render for AnsiRenderer {
    fn begin(&mut self, emphasized: bool) {
        self.emphasized = emphasized;
    }

    fn fragment(&mut self, text: &str, tag: Annotation) {
        if text.is_empty() {
            return;
        }
        let style = self.style(tag);
        if style == ContentStyle::new() {
            self.out.push_str(text);
        } else {
            self.out.push_str(&style.apply(text).to_string());
        }
    }

    fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<R: Render>(mut r: R, emphasized: bool, parts: &[(&str, Annotation)]) -> String {
        r.begin(emphasized);
        for (text, tag) in parts {
            r.fragment(text, *tag);
        }
        r.finish()
    }

    const PARTS: &[(&str, Annotation)] = &[
        ("the", Annotation::ExtraStress),
        (" ", Annotation::Neutral),
        ("gar", Annotation::Stressed),
        ("den", Annotation::Unstressed),
    ];

    #[test]
    fn test_plain_is_surface_text() {
        assert_eq!(drive(PlainRenderer::default(), true, PARTS), "the garden");
    }

    #[test]
    fn test_brackets() {
        assert_eq!(
            drive(BracketRenderer::default(), false, PARTS),
            "the(/!) gar(/)den(x)"
        );
        assert_eq!(
            drive(
                BracketRenderer::default(),
                true,
                &[("a", Annotation::Unstressed), ("b", Annotation::MissedStress)]
            ),
            "*a(x)b(x!)*"
        );
    }

    #[test]
    fn test_ansi_keeps_text_and_styles_syllables() {
        let out = drive(AnsiRenderer::default(), false, PARTS);
        assert!(out.contains("the"));
        assert!(out.contains("gar"));
        assert!(out.contains('\x1b'), "syllables should carry escape codes");
        assert!(out.contains(' '));

        let neutral_only = drive(AnsiRenderer::default(), false, &[(" ", Annotation::Neutral)]);
        assert_eq!(neutral_only, " ");
    }

    #[test]
    fn test_ansi_emphasis_differs() {
        let plain = drive(AnsiRenderer::default(), false, PARTS);
        let bold = drive(AnsiRenderer::default(), true, PARTS);
        assert_ne!(plain, bold);
    }

    #[test]
    fn test_ansi_skips_empty_fragments() {
        let out = drive(
            AnsiRenderer::default(),
            false,
            &[("", Annotation::Unstressed), ("", Annotation::Stressed)],
        );
        assert!(out.is_empty());
    }
}
