//! Indicator term lists used for keyword matching

const SEED_SPAM_TERMS: &[&str] = &[
    "free",
    "winner",
    "cash",
    "prize",
    "urgent",
    "click",
    "offer",
    "limited",
    "act now",
    "congratulations",
    "guarantee",
    "no cost",
    "gratis",
    "ganador",
    "premio",
    "urgente",
    "oferta",
    "garantía",
];

const SEED_HAM_TERMS: &[&str] = &[
    "meeting",
    "schedule",
    "report",
    "attached",
    "please",
    "regards",
    "reunión",
    "reporte",
    "adjunto",
    "saludos",
    "gracias",
];

const URGENCY_TERMS: &[&str] = &[
    "urgent",
    "hurry",
    "act now",
    "limited time",
    "urgente",
    "rápido",
];

/// Spam and ham indicator terms.
///
/// Terms are matched as literal substrings of lower-cased text. Merging
/// appends without deduplication, so repeated recalibration grows the lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexicon {
    spam_terms: Vec<String>,
    ham_terms: Vec<String>,
}

impl Lexicon {
    /// Create a lexicon holding only the seed terms
    pub fn seeded() -> Self {
        Self {
            spam_terms: SEED_SPAM_TERMS.iter().map(|t| t.to_string()).collect(),
            ham_terms: SEED_HAM_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn spam_terms(&self) -> &[String] {
        &self.spam_terms
    }

    pub fn ham_terms(&self) -> &[String] {
        &self.ham_terms
    }

    /// Fixed urgency terms (never recalibrated)
    pub fn urgency_terms(&self) -> &'static [&'static str] {
        URGENCY_TERMS
    }

    /// Append terms observed in a corpus
    pub fn merge(&mut self, spam_terms: Vec<String>, ham_terms: Vec<String>) {
        self.spam_terms
            .extend(spam_terms.into_iter().map(|t| t.to_lowercase()));
        self.ham_terms
            .extend(ham_terms.into_iter().map(|t| t.to_lowercase()));
    }

    /// Number of spam terms found in `text`
    pub fn spam_hits(&self, text: &str) -> usize {
        count_hits(self.spam_terms.iter().map(String::as_str), text)
    }

    /// Number of ham terms found in `text`
    pub fn ham_hits(&self, text: &str) -> usize {
        count_hits(self.ham_terms.iter().map(String::as_str), text)
    }

    /// Number of urgency terms found in `text`
    pub fn urgency_hits(&self, text: &str) -> usize {
        count_hits(URGENCY_TERMS.iter().copied(), text)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::seeded()
    }
}

fn count_hits<'a>(terms: impl Iterator<Item = &'a str>, text: &str) -> usize {
    terms.filter(|term| text.contains(term)).count()
}
