//! Text rendering of an [`Evaluation`], one line per explained token or match.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::{Evaluation, SpanRef};

struct IncludedLine {
    span: SpanRef,
    label: String,
}

/// Renders the tokens of an evaluated entry with markers underneath.
///
/// ```text
/// Sir  Charles  Noun
/// ╰─╯rejected pattern
/// ╰──────────╯FULL_NAME
/// ```
pub struct EvaluationDisplay<'a> {
    evaluation: &'a Evaluation,
    include_lines: Vec<IncludedLine>,
}

impl<'a> std::fmt::Display for EvaluationDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SPACE_PADDING: usize = 2;
        let mut token_idx_to_start_display_char_idx = Vec::new();
        let mut token_idx_to_end_display_char_idx = Vec::new();

        let mut opening_line = String::new();
        for (idx, token) in self.evaluation.doc.tokens().iter().enumerate() {
            if idx > 0 {
                opening_line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            token_idx_to_start_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
            opening_line.push_str(&token.surface_text);
            token_idx_to_end_display_char_idx.push(UnicodeWidthStr::width(&*opening_line));
        }

        f.write_str(&opening_line)?;

        for line in self.include_lines.iter() {
            let (Some(&start_char_idx), Some(&end_char_idx)) = (
                token_idx_to_start_display_char_idx.get(line.span.start_idx),
                token_idx_to_end_display_char_idx.get(line.span.end_idx),
            ) else {
                // spans of matches supplied from outside may not fit the doc
                continue;
            };

            f.write_char('\n')?;
            for _ in 0..start_char_idx {
                f.write_char(' ')?;
            }

            f.write_char('╰')?;

            let char_len = end_char_idx.saturating_sub(start_char_idx);
            for _ in (start_char_idx + 1)..end_char_idx.saturating_sub(1) {
                f.write_char('─')?;
            }

            if char_len > 1 {
                f.write_char('╯')?;
            }

            f.write_str(&line.label)?;
        }

        Ok(())
    }
}

impl<'a> EvaluationDisplay<'a> {
    pub fn new(evaluation: &'a Evaluation) -> Self {
        EvaluationDisplay {
            evaluation,
            include_lines: Vec::new(),
        }
    }

    /// Add one line per token, labelled with what happened to it.
    pub fn include_decisions(&mut self) {
        for (idx, decision) in self.evaluation.decisions.iter().enumerate() {
            self.include_lines.push(IncludedLine {
                span: SpanRef::single(idx),
                label: decision.to_string(),
            });
        }
    }

    /// Add one line per pattern match, labelled with its rule.
    pub fn include_matches(&mut self) {
        for pattern_match in self.evaluation.matches.iter() {
            self.include_lines.push(IncludedLine {
                span: pattern_match.span,
                label: pattern_match.rule_key.clone(),
            });
        }
    }

    /// Takes self
    pub fn with_decisions(mut self) -> Self {
        self.include_decisions();
        self
    }

    /// Takes self
    pub fn with_matches(mut self) -> Self {
        self.include_matches();
        self
    }
}
