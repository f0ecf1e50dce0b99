//! Core data models for collocate
//!
//! These models are shared by the loader, the association measures and the
//! writers: one bigram's contingency counts, the scored output of a measure,
//! and the part-of-speech templates used to narrow the candidate set.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Part-of-speech tag attached to each word of a bigram.
///
/// The reference corpus uses single-letter tags; anything outside the four
/// known ones is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PosTag {
    /// `N`
    Noun,
    /// `V`
    Verb,
    /// `J`
    Adjective,
    /// `I`
    Preposition,
    Other(String),
}

impl PosTag {
    pub fn as_str(&self) -> &str {
        match self {
            PosTag::Noun => "N",
            PosTag::Verb => "V",
            PosTag::Adjective => "J",
            PosTag::Preposition => "I",
            PosTag::Other(tag) => tag,
        }
    }
}

impl FromStr for PosTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "N" => PosTag::Noun,
            "V" => PosTag::Verb,
            "J" => PosTag::Adjective,
            "I" => PosTag::Preposition,
            other => PosTag::Other(other.to_string()),
        })
    }
}

impl From<String> for PosTag {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(tag) => tag,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for PosTag {
    fn from(s: &str) -> Self {
        PosTag::from(s.to_string())
    }
}

impl From<PosTag> for String {
    fn from(tag: PosTag) -> Self {
        tag.as_str().to_string()
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bigram observation with its 2x2 contingency counts.
///
/// `frequency` is the first input column. Scoring never reads it, but it is
/// written back out unchanged in the record stage files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyRecord {
    pub frequency: String,
    pub word1: String,
    pub pos1: PosTag,
    pub word2: String,
    pub pos2: PosTag,
    pub o11: u64,
    pub o12: u64,
    pub o21: u64,
    pub o22: u64,
}

impl ContingencyRecord {
    /// Marginal count of word1 regardless of partner (`o11 + o12`).
    /// Saturates at `u64::MAX`; the loader rejects rows where it would.
    pub fn c1(&self) -> u64 {
        self.o11.saturating_add(self.o12)
    }

    /// Marginal count of word2 regardless of partner (`o11 + o21`)
    pub fn c2(&self) -> u64 {
        self.o11.saturating_add(self.o21)
    }

    pub fn pos_pair(&self) -> (&PosTag, &PosTag) {
        (&self.pos1, &self.pos2)
    }

    /// Fields in input column order, ready to be written back out.
    pub fn to_fields(&self) -> [String; 9] {
        [
            self.frequency.clone(),
            self.word1.clone(),
            self.pos1.to_string(),
            self.word2.clone(),
            self.pos2.to_string(),
            self.o11.to_string(),
            self.o12.to_string(),
            self.o21.to_string(),
            self.o22.to_string(),
        ]
    }
}

/// The word (and optionally the tag) whose collocations are being studied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub word: String,
    pub tag: Option<PosTag>,
}

impl Query {
    pub fn new(word: impl Into<String>, tag: Option<PosTag>) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }

    /// Exact match on the word, and on the tag when one was given.
    pub fn matches(&self, word: &str, tag: &PosTag) -> bool {
        self.word == word && self.tag.as_ref().map_or(true, |t| t == tag)
    }

    /// True when the target sits in the first slot of the bigram.
    pub fn is_first(&self, record: &ContingencyRecord) -> bool {
        self.matches(&record.word1, &record.pos1)
    }

    /// The side of the bigram that is not the target.
    pub fn partner<'a>(&self, record: &'a ContingencyRecord) -> &'a str {
        if self.is_first(record) {
            &record.word2
        } else {
            &record.word1
        }
    }
}

/// Output of an association measure for one bigram. Never mutated once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub word1: String,
    pub word2: String,
    pub partner: String,
    pub score: f64,
}

impl ScoredEntry {
    pub fn to_fields(&self) -> [String; 4] {
        [
            self.word1.clone(),
            self.word2.clone(),
            self.partner.clone(),
            self.score.to_string(),
        ]
    }
}

/// An allowed `(pos1, pos2)` syntactic template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Template(pub PosTag, pub PosTag);

impl Template {
    pub fn matches(&self, record: &ContingencyRecord) -> bool {
        record.pos_pair() == (&self.0, &self.1)
    }
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.0, self.1)
    }
}

/// Ordered, duplicate-free set of templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Template>", into = "Vec<Template>")]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    pub fn new(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut unique: Vec<Template> = Vec::new();
        for template in templates {
            if !unique.contains(&template) {
                unique.push(template);
            }
        }
        Self { templates: unique }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn matches(&self, record: &ContingencyRecord) -> bool {
        self.templates.iter().any(|t| t.matches(record))
    }
}

/// Adjective+noun, noun+noun, verb+preposition, verb+noun.
impl Default for TemplateSet {
    fn default() -> Self {
        Self::new([
            Template(PosTag::Adjective, PosTag::Noun),
            Template(PosTag::Noun, PosTag::Noun),
            Template(PosTag::Verb, PosTag::Preposition),
            Template(PosTag::Verb, PosTag::Noun),
        ])
    }
}

impl From<Vec<Template>> for TemplateSet {
    fn from(templates: Vec<Template>) -> Self {
        Self::new(templates)
    }
}

impl From<TemplateSet> for Vec<Template> {
    fn from(set: TemplateSet) -> Self {
        set.templates
    }
}
