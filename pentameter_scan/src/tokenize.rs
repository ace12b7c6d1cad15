// Phrase tokenizer: splits free text into word and joiner tokens.
//
// Spaces and dashes are the only delimiters. Each delimiter becomes its own
// joiner token (silent, never a syllable), and the text between delimiters
// becomes a word token. Everything else (punctuation, digits, apostrophes)
// stays inside the word; the pronunciation store strips it when building a
// lookup key.
//
// Empty words are dropped. A leading, trailing, or doubled delimiter yields
// only its joiner, so `" a--b "` tokenizes to
// `[" ", "a", "-", "-", "b", " "]` and the surface text is always preserved
// exactly: concatenating every token's text reproduces the input.

use serde::Serialize;

/// Characters that separate words.
pub const JOINERS: [char; 2] = [' ', '-'];

/// Whether a token is a pronounceable word or a silent joiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Word,
    Joiner,
}

/// One unit of a tokenized phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// Literal surface text.
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn word(text: &str) -> Self {
        Token {
            text: text.to_string(),
            kind: TokenKind::Word,
        }
    }

    pub fn joiner(c: char) -> Self {
        Token {
            text: c.to_string(),
            kind: TokenKind::Joiner,
        }
    }

    pub fn is_joiner(&self) -> bool {
        self.kind == TokenKind::Joiner
    }
}

/// Tokenize a phrase into words and joiners, in order.
pub fn tokenize(phrase: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = phrase;

    // Every pass that finds a delimiter consumes at least one byte, so
    // len + 1 passes always reach the final fragment.
    for _ in 0..=phrase.len() {
        match next_joiner(rest) {
            Some((at, joiner)) => {
                push_word(&mut tokens, &rest[..at]);
                tokens.push(Token::joiner(joiner));
                rest = &rest[at + joiner.len_utf8()..];
            }
            None => {
                push_word(&mut tokens, rest);
                return tokens;
            }
        }
    }

    tokens
}

/// Earliest delimiter in `text`, with its byte offset.
fn next_joiner(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|(_, c)| JOINERS.contains(c))
}

fn push_word(tokens: &mut Vec<Token>, text: &str) {
    if !text.is_empty() {
        tokens.push(Token::word(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
        tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_phrase() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_single_word() {
        let tokens = tokenize("xyzzy");
        assert_eq!(texts(&tokens), vec!["xyzzy"]);
        assert_eq!(kinds(&tokens), vec![TokenKind::Word]);
    }

    #[test]
    fn test_spaces_and_dashes() {
        let tokens = tokenize("the well-known cat");
        assert_eq!(
            texts(&tokens),
            vec!["the", " ", "well", "-", "known", " ", "cat"]
        );
        assert_eq!(
            kinds(&tokens),
            vec![
                TokenKind::Word,
                TokenKind::Joiner,
                TokenKind::Word,
                TokenKind::Joiner,
                TokenKind::Word,
                TokenKind::Joiner,
                TokenKind::Word,
            ]
        );
    }

    #[test]
    fn test_single_delimiter() {
        let tokens = tokenize(" ");
        assert_eq!(texts(&tokens), vec![" "]);
        assert!(tokens[0].is_joiner());

        let tokens = tokenize("-");
        assert_eq!(texts(&tokens), vec!["-"]);
        assert!(tokens[0].is_joiner());
    }

    #[test]
    fn test_leading_trailing_and_consecutive_delimiters() {
        let tokens = tokenize(" a--b ");
        assert_eq!(texts(&tokens), vec![" ", "a", "-", "-", "b", " "]);
        assert_eq!(
            tokens.iter().filter(|t| !t.is_joiner()).count(),
            2,
            "no empty words should be produced"
        );
    }

    #[test]
    fn test_punctuation_stays_in_word() {
        let tokens = tokenize("summer's day!");
        assert_eq!(texts(&tokens), vec!["summer's", " ", "day!"]);
    }

    #[test]
    fn test_other_whitespace_is_not_a_joiner() {
        let tokens = tokenize("a\tb");
        assert_eq!(texts(&tokens), vec!["a\tb"]);
    }

    #[test]
    fn test_multibyte_text() {
        let tokens = tokenize("naïve café-au lait");
        assert_eq!(
            texts(&tokens),
            vec!["naïve", " ", "café", "-", "au", " ", "lait"]
        );
    }

    #[test]
    fn test_concatenation_reproduces_input() {
        for phrase in ["", " ", "--", "shall I compare", "  x - y  ", "a-b c-d", "é-è"] {
            let joined: String = tokenize(phrase).iter().map(|t| t.text.as_str()).collect();
            assert_eq!(joined, phrase, "tokens of {phrase:?} should rebuild it");
        }
    }

    #[test]
    fn test_only_delimiters_terminates() {
        let phrase = " -".repeat(500);
        let tokens = tokenize(&phrase);
        assert_eq!(tokens.len(), 1000);
        assert!(tokens.iter().all(Token::is_joiner));
    }
}
