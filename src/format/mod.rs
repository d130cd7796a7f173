// Deterministic text shaping for assistant replies
// Public interface for post-processing, status highlighting, and the
// token-by-token reveal

mod reveal;

pub use reveal::{assemble, Reveal, CARET};

use crossterm::style::Stylize;
use once_cell::sync::Lazy;
use regex::Regex;

/// Strip markdown artifacts the model emits despite instructions, normalize
/// escaped newlines, and bold the two payment labels.
///
/// Pure and idempotent: labels already wrapped are unwrapped before being
/// wrapped again, so a second pass changes nothing.
pub fn post_process(raw: &str) -> String {
    let cleaned = raw
        .replace("**", "")
        .replace("```", "")
        .replace("\\n", "\n");

    let cleaned = embolden(&cleaned, "Due Date:");
    embolden(&cleaned, "Amount Due:")
}

/// Recolor the status words in the fully assembled text. Applied after the
/// reveal finishes, never to partial snapshots.
pub fn highlight_status(text: &str) -> String {
    let text = recolor(text, "OVERDUE", &"OVERDUE".red().to_string());
    recolor(&text, "Due Soon", &"Due Soon".dark_yellow().to_string())
}

fn embolden(text: &str, label: &str) -> String {
    let styled = label.bold().to_string();
    text.replace(&styled, label).replace(label, &styled)
}

fn recolor(text: &str, word: &str, styled: &str) -> String {
    text.replace(styled, word).replace(word, styled)
}

static ANSI_SEQ: Lazy<Regex> =
    Lazy::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("valid ANSI pattern"));

/// Remove ANSI style sequences for plain-mode output.
pub fn strip_styles(text: &str) -> String {
    ANSI_SEQ.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_markers_and_normalizes_newlines() {
        let raw = "**Rent**\\nis due";
        assert_eq!(strip_styles(&post_process(raw)), "Rent\nis due");
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let clean = "Electric bill\nDue Date: 08/10/2026\nAmount Due: $80";
        let once = post_process(clean);
        let twice = post_process(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_labels_bolded_exactly_once() {
        let raw = "Rent\nDue Date: 08/01/2026\nAmount Due: $1200";
        let processed = post_process(raw);

        let bold_due = "Due Date:".bold().to_string();
        let bold_amount = "Amount Due:".bold().to_string();
        assert_eq!(processed.matches(&bold_due).count(), 1);
        assert_eq!(processed.matches(&bold_amount).count(), 1);

        // no unstyled label remains once the styled ones are removed
        let without = processed.replace(&bold_due, "").replace(&bold_amount, "");
        assert!(!without.contains("Due Date:"));
        assert!(!without.contains("Amount Due:"));
    }

    #[test]
    fn test_overdue_is_recolored_everywhere() {
        let text = "Rent is OVERDUE. Water bill: Due Soon.";
        let highlighted = highlight_status(text);

        let red_overdue = "OVERDUE".red().to_string();
        let amber_due_soon = "Due Soon".dark_yellow().to_string();
        assert!(highlighted.contains(&red_overdue));
        assert!(highlighted.contains(&amber_due_soon));

        // the bare literals only survive inside the styled wrapping
        let without = highlighted
            .replace(&red_overdue, "")
            .replace(&amber_due_soon, "");
        assert!(!without.contains("OVERDUE"));
        assert!(!without.contains("Due Soon"));
    }

    #[test]
    fn test_highlight_applied_twice_does_not_stack() {
        let once = highlight_status("payment OVERDUE");
        let twice = highlight_status(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_styles_undoes_all_markup() {
        let raw = "Due Date: 08/01/2026, currently OVERDUE";
        let shaped = highlight_status(&post_process(raw));
        assert_eq!(strip_styles(&shaped), raw);
    }
}
