//! Letter and entity-name normalisation.
//!
//! Everything the round engine compares is upper-case ASCII. Accented
//! letters fold to their base letter so translated names stay winnable from
//! an A-Z keyboard; any other character of a name is shown as-is and never
//! needs guessing.

use crate::RoundError;

/// Placeholder drawn for a letter that has not been found yet.
pub const MASK_GLYPH: char = '_';

/// Turn raw keyboard input into a guessable letter, if it is one.
pub fn normalize_letter(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    let first = upper.next()?;
    if upper.next().is_some() {
        return None;
    }

    let mut folded = String::with_capacity(2);
    fold_into(first, &mut folded);
    let mut chars = folded.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_uppercase() => Some(letter),
        _ => None,
    }
}

/// Canonical secret word for an entity name: trimmed, upper-cased, folded.
pub fn canonical_secret(name: &str) -> Result<String, RoundError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RoundError::InvalidEntity("entity name is empty".to_string()));
    }

    let mut secret = String::with_capacity(trimmed.len());
    for ch in trimmed.chars().flat_map(char::to_uppercase) {
        fold_into(ch, &mut secret);
    }

    if !secret.chars().any(needs_guess) {
        return Err(RoundError::InvalidEntity(format!(
            "entity name '{}' has no letters to guess",
            trimmed
        )));
    }

    Ok(secret)
}

/// Whether a character of the secret word has to be guessed to be revealed.
/// Spaces, hyphens and any other non-letter pass through for free.
pub fn needs_guess(ch: char) -> bool {
    ch.is_ascii_uppercase()
}

fn fold_into(ch: char, out: &mut String) {
    let folded = match ch {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Æ' => {
            out.push_str("AE");
            return;
        }
        'Œ' => {
            out.push_str("OE");
            return;
        }
        other => other,
    };
    out.push(folded);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_letter() {
        assert_eq!(normalize_letter('a'), Some('A'));
        assert_eq!(normalize_letter('Z'), Some('Z'));
        assert_eq!(normalize_letter('é'), Some('E'));
        assert_eq!(normalize_letter('ç'), Some('C'));

        assert_eq!(normalize_letter('1'), None);
        assert_eq!(normalize_letter('-'), None);
        assert_eq!(normalize_letter(' '), None);
        assert_eq!(normalize_letter('ß'), None); // upper-cases to two letters
        assert_eq!(normalize_letter('œ'), None);
        assert_eq!(normalize_letter('ж'), None);
    }

    #[test]
    fn test_canonical_secret() {
        assert_eq!(canonical_secret("Pikachu").unwrap(), "PIKACHU");
        assert_eq!(canonical_secret("  mew ").unwrap(), "MEW");
        assert_eq!(canonical_secret("Salamèche").unwrap(), "SALAMECHE");
        assert_eq!(canonical_secret("M. Mime").unwrap(), "M. MIME");
        assert_eq!(canonical_secret("Porygon-Z").unwrap(), "PORYGON-Z");
    }

    #[test]
    fn test_canonical_secret_rejects_empty_names() {
        assert!(matches!(canonical_secret(""), Err(RoundError::InvalidEntity(_))));
        assert!(matches!(canonical_secret("   "), Err(RoundError::InvalidEntity(_))));
        assert!(matches!(canonical_secret("- -"), Err(RoundError::InvalidEntity(_))));
    }

    #[test]
    fn test_free_characters() {
        assert!(needs_guess('A'));
        assert!(!needs_guess(' '));
        assert!(!needs_guess('-'));
        assert!(!needs_guess('.'));
        assert!(!needs_guess('2'));
    }
}
