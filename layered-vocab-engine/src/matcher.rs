//! Matching of configured rejection rules against annotated tokens.

use layered_vocab::{
    AnnotatedToken, ConstraintKind, Doc, PatternMatch, RejectionPatternConfiguration, SpanRef,
    TokenConstraint, VocabError, VocabResult,
};

#[derive(Debug, Clone)]
struct CompiledRule {
    group: String,
    key: String,
    positions: Vec<TokenConstraint>,
}

/// Every rule of a [`RejectionPatternConfiguration`], ready to run.
#[derive(Debug, Clone, Default)]
pub(crate) struct PatternMatcher {
    rules: Vec<CompiledRule>,
}

impl PatternMatcher {
    pub(crate) fn new(patterns: &RejectionPatternConfiguration) -> Self {
        Self {
            rules: patterns
                .rules()
                .map(|(group, key, positions)| CompiledRule {
                    group: group.to_string(),
                    key: key.to_string(),
                    positions: positions.to_vec(),
                })
                .collect(),
        }
    }

    pub(crate) fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// All matches of all rules from every start position, overlapping ones
    /// included, ordered by span and then rule key.
    pub(crate) fn find_matches(&self, doc: &Doc) -> VocabResult<Vec<PatternMatch>> {
        let tokens = doc.tokens();
        let shapes: Vec<String> = tokens.iter().map(AnnotatedToken::shape).collect();

        let mut matches = Vec::new();
        for start in 0..tokens.len() {
            for rule in &self.rules {
                let mut ends = Vec::new();
                match_from(&rule.positions, tokens, &shapes, start, &mut ends);
                ends.sort_unstable();
                ends.dedup();

                for end in ends.into_iter().filter(|&end| end > start) {
                    let span = SpanRef::new(start, end - 1);
                    let matched_text = doc.span_text(span).ok_or_else(|| {
                        VocabError::pipeline(format!("match {:?} of {} lies outside the entry", span, rule.key))
                    })?;
                    tracing::trace!(
                        group = rule.group.as_str(),
                        rule = rule.key.as_str(),
                        text = matched_text,
                        "pattern matched"
                    );
                    matches.push(PatternMatch::new(rule.key.clone(), span, matched_text));
                }
            }
        }

        matches.sort_by(|a, b| (a.span, &a.rule_key).cmp(&(b.span, &b.rule_key)));
        matches.dedup();
        Ok(matches)
    }
}

/// Push every token index at which `positions` can finish when matching
/// begins at token `at`.
fn match_from(
    positions: &[TokenConstraint],
    tokens: &[AnnotatedToken],
    shapes: &[String],
    at: usize,
    ends: &mut Vec<usize>,
) {
    let Some((first, rest)) = positions.split_first() else {
        ends.push(at);
        return;
    };

    if first.optional {
        match_from(rest, tokens, shapes, at, ends);
    }
    if at < tokens.len() && satisfies(first, &tokens[at], &shapes[at]) {
        match_from(rest, tokens, shapes, at + 1, ends);
    }
}

fn satisfies(constraint: &TokenConstraint, token: &AnnotatedToken, shape: &str) -> bool {
    match &constraint.kind {
        ConstraintKind::PartOfSpeech(pos) => token.part_of_speech == *pos,
        ConstraintKind::Text(text) => token.surface_text == *text,
        ConstraintKind::Shape(expected) => shape == expected,
    }
}
