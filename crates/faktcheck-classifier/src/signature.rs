//! Claim signatures - the ordered lookup table of known claim shapes

use crate::ClassifierError;
use faktcheck_domain::{Source, TemporalAssessment, Verdict, VerdictStatus};
use std::sync::{Arc, LazyLock};

/// Substring test applied to the lowercased claim text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Matches when the text contains any of the terms
    AnyOf(Vec<String>),
    /// Matches when the text contains all of the terms
    AllOf(Vec<String>),
}

impl Matcher {
    /// Match if any term is contained (terms are lowercased)
    pub fn any_of<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matcher::AnyOf(lowercase_all(terms))
    }

    /// Match if every term is contained (terms are lowercased)
    pub fn all_of<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Matcher::AllOf(lowercase_all(terms))
    }

    /// Test already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Matcher::AnyOf(terms) => terms.iter().any(|term| lowered.contains(term.as_str())),
            Matcher::AllOf(terms) => terms.iter().all(|term| lowered.contains(term.as_str())),
        }
    }

    fn terms(&self) -> &[String] {
        match self {
            Matcher::AnyOf(terms) | Matcher::AllOf(terms) => terms,
        }
    }
}

fn lowercase_all<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    terms.into_iter().map(|t| t.as_ref().to_lowercase()).collect()
}

/// Verdict produced when a signature matches
#[derive(Debug, Clone, PartialEq)]
pub struct VerdictTemplate {
    /// Status to assign
    pub status: VerdictStatus,
    /// Explanation shown to readers
    pub interpretation: String,
    /// Corrected statement, if any
    pub correction: Option<String>,
    /// Sources to attach, in display order
    pub sources: Vec<Source>,
}

impl VerdictTemplate {
    /// Create a verdict for the claim from this template
    pub fn instantiate(&self, claim: &str, temporal: Option<TemporalAssessment>) -> Verdict {
        Verdict {
            claim: claim.to_string(),
            status: self.status,
            temporal,
            interpretation: self.interpretation.clone(),
            correction: self.correction.clone(),
            sources: self.sources.clone(),
        }
    }
}

/// A known claim shape: matcher plus the verdict it yields
#[derive(Debug, Clone, PartialEq)]
pub struct ClaimSignature {
    /// Short identifier used in logs
    pub name: String,
    /// When this signature applies
    pub matcher: Matcher,
    /// What verdict it produces
    pub template: VerdictTemplate,
}

impl ClaimSignature {
    /// Check the signature can produce a well-formed verdict
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let invalid = |reason: &str| ClassifierError::Signature {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.matcher.terms().is_empty() {
            return Err(invalid("matcher has no terms"));
        }
        if self.matcher.terms().iter().any(|t| t.is_empty()) {
            return Err(invalid("matcher contains an empty term"));
        }
        if self.template.interpretation.trim().is_empty() {
            return Err(invalid("interpretation is empty"));
        }
        if let Some(source) = self
            .template
            .sources
            .iter()
            .find(|s| !(0.0..=1.0).contains(&s.trust_score))
        {
            return Err(invalid(&format!(
                "source '{}' has trust score {} outside [0.0, 1.0]",
                source.name, source.trust_score
            )));
        }
        Ok(())
    }
}

/// Interpretation used when no signature matches
pub const NO_SOURCE_INTERPRETATION: &str =
    "Für diese Aussage konnten keine verlässlichen Quellen gefunden werden.";

static DEFAULT_SIGNATURES: LazyLock<Arc<[ClaimSignature]>> = LazyLock::new(|| {
    vec![
        ClaimSignature {
            name: "population".to_string(),
            matcher: Matcher::any_of(["83 millionen", "bevölkerungsreichste"]),
            template: VerdictTemplate {
                status: VerdictStatus::Verified,
                interpretation: "Die Angabe ist korrekt. Deutschland hat etwa 83,2 Millionen Einwohner (Stand 2023)."
                    .to_string(),
                correction: None,
                sources: vec![Source::new("Statistisches Bundesamt", "destatis.de", 0.95, 2023)],
            },
        },
        ClaimSignature {
            name: "unemployment".to_string(),
            matcher: Matcher::any_of(["3,5%", "3.5%"]),
            template: VerdictTemplate {
                status: VerdictStatus::Disputed,
                interpretation: "Die angegebene Arbeitslosenquote von 3,5% weicht von offiziellen Zahlen ab. \
                                 Aktuelle Daten zeigen 5,7% (2024)."
                    .to_string(),
                correction: Some("Die korrekte Arbeitslosenquote liegt bei 5,7% (Stand 2024).".to_string()),
                sources: vec![Source::new("Bundesagentur für Arbeit", "arbeitsagentur.de", 0.9, 2024)],
            },
        },
        ClaimSignature {
            name: "gdp_growth".to_string(),
            matcher: Matcher::all_of(["10%", "wuchs"]),
            template: VerdictTemplate {
                status: VerdictStatus::False,
                interpretation: "Ein Wirtschaftswachstum von 10% ist unrealistisch für Deutschland. \
                                 Das tatsächliche Wachstum lag 2019 bei etwa 0,6%."
                    .to_string(),
                correction: Some("Das BIP-Wachstum betrug 2019 nur 0,6%, nicht 10%.".to_string()),
                sources: vec![Source::new(
                    "Statistisches Bundesamt - BIP Daten",
                    "destatis.de/bip",
                    0.95,
                    2019,
                )],
            },
        },
        ClaimSignature {
            name: "city_population".to_string(),
            matcher: Matcher::all_of(["berlin", "hamburg"]),
            template: VerdictTemplate {
                status: VerdictStatus::Verified,
                interpretation: "Die Aussage ist korrekt. Berlin (3,7 Mio.) hat tatsächlich mehr Einwohner als \
                                 Hamburg (1,9 Mio.) und München (1,5 Mio.) zusammen (3,4 Mio.)."
                    .to_string(),
                correction: None,
                sources: vec![Source::new("Statistische Ämter der Länder", "statistik-portal.de", 0.85, 2023)],
            },
        },
    ]
    .into()
});

/// The built-in signature table, in evaluation order
pub fn default_signatures() -> Arc<[ClaimSignature]> {
    Arc::clone(&DEFAULT_SIGNATURES)
}
