//! Bullet extraction — finds achievement bullets in raw resume text.

use crate::analysis::lexicon::Lexicon;

const MAX_BULLETS: usize = 15;
const MARKER_CHARS: [char; 3] = ['•', '-', '*'];
const MIN_MARKER_BULLET_LEN: usize = 10;
const MIN_VERB_BULLET_LEN: usize = 20;

/// Scans `text` line by line and returns up to 15 bullet strings, in line
/// order. A line qualifies either by bullet marker (`•`, `-`, `*`) or by
/// leading with an achievement verb in lowercase. Pure.
pub fn extract_bullet_points(lexicon: &Lexicon, text: &str) -> Vec<String> {
    let mut bullets = Vec::new();

    for line in text.lines() {
        if bullets.len() >= MAX_BULLETS {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with(MARKER_CHARS) {
            let stripped = trimmed.trim_start_matches(MARKER_CHARS).trim();
            if stripped.chars().count() > MIN_MARKER_BULLET_LEN {
                bullets.push(stripped.to_string());
            }
        } else if is_verb_led_bullet(lexicon, line, trimmed) {
            bullets.push(trimmed.to_string());
        }
    }

    bullets
}

/// Unindented, lowercase-leading line of useful length that starts with one
/// of the achievement verbs.
fn is_verb_led_bullet(lexicon: &Lexicon, raw: &str, trimmed: &str) -> bool {
    if raw.starts_with(char::is_whitespace) {
        return false;
    }
    if trimmed.starts_with(char::is_uppercase) {
        return false;
    }
    if trimmed.chars().count() <= MIN_VERB_BULLET_LEN {
        return false;
    }
    let lowered = trimmed.to_lowercase();
    lexicon
        .achievement_verbs
        .iter()
        .any(|verb| lowered.starts_with(verb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default()
    }

    #[test]
    fn test_marker_bullet_extracted() {
        let bullets =
            extract_bullet_points(&lexicon(), "- Implemented caching layer for API\nShort line");
        assert_eq!(bullets, vec!["Implemented caching layer for API"]);
    }

    #[test]
    fn test_unicode_marker_bullet_extracted() {
        let bullets = extract_bullet_points(&lexicon(), "• Optimized slow database queries");
        assert_eq!(bullets, vec!["Optimized slow database queries"]);
    }

    #[test]
    fn test_short_marker_line_dropped() {
        assert!(extract_bullet_points(&lexicon(), "- tiny note").is_empty());
    }

    #[test]
    fn test_verb_led_lowercase_line_extracted() {
        let bullets =
            extract_bullet_points(&lexicon(), "developed a distributed ingestion pipeline");
        assert_eq!(bullets.len(), 1);
    }

    #[test]
    fn test_uppercase_lead_is_not_a_bullet() {
        assert!(
            extract_bullet_points(&lexicon(), "Developed a distributed ingestion pipeline")
                .is_empty()
        );
    }

    #[test]
    fn test_indented_verb_line_is_not_a_bullet() {
        assert!(
            extract_bullet_points(&lexicon(), "  developed a distributed ingestion pipeline")
                .is_empty()
        );
    }

    #[test]
    fn test_indented_marker_line_still_counts() {
        let bullets = extract_bullet_points(&lexicon(), "   - Implemented caching layer for API");
        assert_eq!(bullets, vec!["Implemented caching layer for API"]);
    }

    #[test]
    fn test_caps_at_fifteen_bullets() {
        let text = (0..25)
            .map(|i| format!("- Implemented feature number {i} end to end"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(extract_bullet_points(&lexicon(), &text).len(), 15);
    }

    #[test]
    fn test_empty_input_yields_no_bullets() {
        assert!(extract_bullet_points(&lexicon(), "").is_empty());
    }
}
