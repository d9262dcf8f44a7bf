//! Keyword vocabularies and the whole-word matcher built from them.
//!
//! Two fixed lists (mental-health terms and LGBT-related terms, from Dawn's
//! coding table) are merged, lower-cased, and de-duplicated into a
//! [`KeywordIndex`]. Each term is compiled once into a case-insensitive
//! whole-word regex; the index is built at startup and passed explicitly to
//! whoever needs it.
//!
//! # Word-boundary rule
//!
//! `\b` is asserted only at term edges that are word characters. A symbol
//! edge (the `+` in `lgbtq+`, a leading or trailing `-`) carries no boundary
//! assertion, so `lgbtq+` matches at end of string or before a space, while
//! `sex` still refuses to fire inside `sexist`. Terms are escaped before
//! compilation, so `+` and `-` are literal characters, and multi-word terms
//! like `substance abuse` match across their literal space.

use regex::{Regex, RegexBuilder};
use std::collections::BTreeMap;
use std::error::Error;
use tracing::{debug, instrument};

/// Mental-health terms to scan for.
pub const MENTAL_HEALTH_KEYWORDS: &[&str] = &[
    "mental", "mentally", "behavioural", "behavioral", "emotional", "psychiatry", "psychiatric",
    "psychiatrist", "psychology", "psychological", "psychologist", "counselling", "counseling",
    "counsellor", "counselor", "therapy", "therapist", "therapeutic", "psychotherapy",
    "psychotherapeutic", "psychotherapists", "depression", "depressed", "suicide", "suicidal",
    "anxiety", "anxious", "stress", "stressed", "trauma", "traumatised", "traumatized",
    "self-harm", "addiction", "addictive", "substance abuse", "alcoholism", "bipolar",
    "schizophrenia", "schizophrenic", "ocd", "obsessive compulsive disorder", "ptsd",
    "post-traumatic stress disorder", "adhd", "attention deficit hyperactivity disorder",
    "autism", "autistic", "isolation", "loneliness", "lonely", "wellbeing", "well-being",
    "mindfulness", "stressful", "coping", "cope", "stigma", "resilience", "discriminate",
    "discrimination", "discriminated",
];

/// LGBT-related terms to scan for.
pub const LGBT_KEYWORDS: &[&str] = &[
    "lgb", "lgbt", "lgbtq", "lgbtq+", "lgbtqia", "lgbtqia+", "lesbian", "gay", "homosexual",
    "homosexuality", "bisexual", "bisexuality", "transgender", "trans", "transwoman",
    "transwomen", "transman", "transmen", "transsexual", "transvestite", "non-binary",
    "nonbinary", "queer", "intersex", "sogie", "sogiesc", "sex", "sexual", "sexuality",
    "gender", "masculine", "masculinity", "feminine", "femininity",
];

/// The merged vocabulary with one compiled whole-word matcher per term.
///
/// Built once at process start via [`KeywordIndex::build`]; immutable after
/// that. Matching is case-insensitive and respects word boundaries at
/// word-character term edges (see the module docs for the symbol-edge rule).
#[derive(Debug)]
pub struct KeywordIndex {
    // BTreeMap keeps terms sorted, so match output is sorted for free.
    patterns: BTreeMap<String, Regex>,
}

impl KeywordIndex {
    /// Merge vocabulary lists into a compiled index.
    ///
    /// Every term is lower-cased; duplicates across lists collapse silently.
    ///
    /// # Errors
    ///
    /// Returns an error if a term fails to compile, which would mean a typo
    /// in the vocabulary constants rather than a runtime condition.
    #[instrument(level = "debug", skip_all)]
    pub fn build(vocabularies: &[&[&str]]) -> Result<Self, Box<dyn Error>> {
        let mut patterns = BTreeMap::new();
        for vocab in vocabularies {
            for term in *vocab {
                let term = term.to_lowercase();
                if patterns.contains_key(&term) {
                    continue;
                }
                let regex = compile_whole_word(&term)?;
                patterns.insert(term, regex);
            }
        }
        debug!(terms = patterns.len(), "Compiled keyword index");
        Ok(Self { patterns })
    }

    /// Build the index over the two default vocabularies.
    pub fn default_vocabulary() -> Result<Self, Box<dyn Error>> {
        Self::build(&[MENTAL_HEALTH_KEYWORDS, LGBT_KEYWORDS])
    }

    /// Number of distinct terms in the index.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Scan `text` against the full vocabulary.
    ///
    /// Returns every term that fires at least once, sorted and unique. No
    /// early exit, no frequency counting; empty text yields an empty vec.
    pub fn find_matches(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(term, _)| term.clone())
            .collect()
    }
}

/// Compile a single term into its case-insensitive whole-word matcher.
fn compile_whole_word(term: &str) -> Result<Regex, Box<dyn Error>> {
    let mut pattern = String::new();
    if term.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
    Ok(regex)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
