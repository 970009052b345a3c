//! Elision: the contraction of a clitic before a vowel-initial word.

use syntaxe_protocol::{ElisionError, Gender, WordToken};

/// Letters that allow elision. `h` is always treated as silent.
pub const VOWELS: [char; 15] = ['a', 'e', 'i', 'o', 'u', 'y', 'é', 'è', 'ê', 'à', 'â', 'î', 'ô', 'û', 'h'];

/// Clitics that must be elided before a vowel.
pub const ELIDING_WORDS: [&str; 8] = ["je", "ne", "me", "te", "se", "le", "de", "que"];

pub fn starts_with_vowel(text: &str) -> bool {
    text.chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .map_or(false, |c| VOWELS.contains(&c))
}

pub fn is_eliding_word(text: &str) -> bool {
    ELIDING_WORDS.contains(&text.to_lowercase().as_str())
}

/// Generates the elided form of a clitic ("le" -> "l'", "Que" -> "Qu'").
pub fn elided_form(word: &str) -> Option<String> {
    if !is_eliding_word(word) {
        return None;
    }
    let (last, _) = word.char_indices().last()?;
    Some(format!("{}'", &word[..last]))
}

/// Checks every adjacent token pair and reports the first elision misuse.
pub fn check_elision(tokens: &[WordToken]) -> Option<ElisionError> {
    tokens.windows(2).find_map(|pair| {
        let (current, next) = (&pair[0], &pair[1]);
        let next_is_vowel = starts_with_vowel(&next.text);

        if current.gender == Some(Gender::Elision) && !next_is_vowel {
            return Some(ElisionError::ElidedBeforeConsonant { word: current.text.clone() });
        }

        if next_is_vowel {
            if let Some(elided) = elided_form(&current.text) {
                return Some(ElisionError::MissingElision {
                    word: current.text.clone(),
                    elided,
                    next: next.text.clone(),
                });
            }
        }

        None
    })
}
