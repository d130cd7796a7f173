// Paced reveal of an already-computed reply
//
// Produces the growing sequence of partial snapshots the terminal shows
// while a reply "types out". Pacing lives in the caller; this is pure
// sequencing.

/// Placeholder appended to every in-flight snapshot.
pub const CARET: &str = "▌";

/// Collapse each line to single-spaced tokens. The final reveal snapshot
/// and the recorded transcript text both use this form.
pub fn assemble(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Finite token-by-token reveal of a processed reply.
///
/// Yields one snapshot per whitespace-delimited token, each carrying the
/// trailing caret, then a final snapshot equal to `assemble(text)`. Not
/// restartable; build a new one per reply.
pub struct Reveal {
    lines: Vec<Vec<String>>,
    line: usize,
    word: usize,
    buffer: String,
    finished: bool,
}

impl Reveal {
    pub fn new(text: &str) -> Self {
        let lines = text
            .lines()
            .map(|line| line.split_whitespace().map(str::to_string).collect())
            .collect();

        Self {
            lines,
            line: 0,
            word: 0,
            buffer: String::new(),
            finished: false,
        }
    }
}

impl Iterator for Reveal {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }

        // Advance past exhausted lines, keeping their newlines in the buffer.
        while self.line < self.lines.len() && self.word >= self.lines[self.line].len() {
            self.line += 1;
            self.word = 0;
            if self.line < self.lines.len() {
                self.buffer.push('\n');
            }
        }

        if self.line >= self.lines.len() {
            self.finished = true;
            return Some(self.buffer.clone());
        }

        let token = &self.lines[self.line][self.word];
        if self.word > 0 {
            self.buffer.push(' ');
        }
        self.buffer.push_str(token);
        self.word += 1;

        Some(format!("{}{}", self.buffer, CARET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_snapshot_is_assembled_text() {
        let frames: Vec<String> = Reveal::new("pay rent\nby friday").collect();
        assert_eq!(frames.last().unwrap(), "pay rent\nby friday");
        assert_eq!(frames.last().unwrap(), &assemble("pay rent\nby friday"));
    }

    #[test]
    fn test_intermediate_snapshots_carry_caret_and_grow() {
        let frames: Vec<String> = Reveal::new("pay rent now").collect();
        assert_eq!(
            frames,
            vec![
                format!("pay{}", CARET),
                format!("pay rent{}", CARET),
                format!("pay rent now{}", CARET),
                "pay rent now".to_string(),
            ]
        );
    }

    #[test]
    fn test_newline_appended_after_each_line() {
        let frames: Vec<String> = Reveal::new("a\nb").collect();
        assert_eq!(
            frames,
            vec![
                format!("a{}", CARET),
                format!("a\nb{}", CARET),
                "a\nb".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_lines_survive() {
        let frames: Vec<String> = Reveal::new("a\n\nb").collect();
        assert_eq!(frames.last().unwrap(), "a\n\nb");
    }

    #[test]
    fn test_empty_text_yields_single_empty_snapshot() {
        let frames: Vec<String> = Reveal::new("").collect();
        assert_eq!(frames, vec![String::new()]);
    }

    #[test]
    fn test_assemble_collapses_token_whitespace() {
        assert_eq!(assemble("a   b\t c\nd"), "a b c\nd");
    }
}
