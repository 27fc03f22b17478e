//! Lookup tables turning the free text found in match log lines into enumerations.
//!
//! Text is compared through [normalized_key()]: case, blanks and punctuation are folded away,
//! so "Bled out", "bled  out" and "BledOut" are all the same word.
//! Unknown words are never guessed -- lookups simply fail.

use model::matches::{FacedSurvivorState, SurvivorMatchResult};


const FACED_SURVIVOR_STATES: &[(&str, FacedSurvivorState)] = &[
    ("sacrificed",   FacedSurvivorState::Sacrificed),
    ("killed",       FacedSurvivorState::Killed),
    ("bledout",      FacedSurvivorState::BledOut),
    ("disconnected", FacedSurvivorState::Disconnected),
    ("escaped",      FacedSurvivorState::Escaped),
];

const SURVIVOR_MATCH_RESULTS: &[(&str, SurvivorMatchResult)] = &[
    ("sacrificed",         SurvivorMatchResult::Sacrificed),
    ("killed",             SurvivorMatchResult::Killed),
    ("escaped",            SurvivorMatchResult::Escaped),
    ("hatchescape",        SurvivorMatchResult::HatchEscape),
    ("tunnelled",          SurvivorMatchResult::Tunnelled),
    ("camped",             SurvivorMatchResult::Camped),
    ("bledout",            SurvivorMatchResult::BledOut),
    ("dead",               SurvivorMatchResult::Dead),
    ("disconnected",       SurvivorMatchResult::Disconnected),
    ("killerdisconnected", SurvivorMatchResult::KillerDisconnected),
    ("keyescape",          SurvivorMatchResult::KeyEscape),
];


/// Folds `text` into the form used as key in the lookup tables: lowercase alphanumerics only
pub fn normalized_key(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolves the state of a faced survivor, as in "Yui: bled out"
pub fn faced_survivor_state(text: &str) -> Option<FacedSurvivorState> {
    let key = normalized_key(text);
    FACED_SURVIVOR_STATES.iter()
        .find(|(known_key, _)| *known_key == key)
        .map(|(_, state)| *state)
}


/// The closed set of [SurvivorMatchResult]s a parser accepts.\
/// Which outcomes are tracked changes along with the game -- `Dead` was superseded by `BledOut`,
/// `KillerDisconnected` & `KeyEscape` came later... -- so the caller decides.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResultVocabulary {
    accepted: Vec<SurvivorMatchResult>,
}

impl MatchResultVocabulary {

    /// Accepts every known outcome
    pub fn all() -> Self {
        Self::only(SURVIVOR_MATCH_RESULTS.iter().map(|(_, result)| *result))
    }

    /// Accepts only the given outcomes
    pub fn only(accepted: impl IntoIterator<Item=SurvivorMatchResult>) -> Self {
        let mut deduplicated = Vec::new();
        for result in accepted {
            if !deduplicated.contains(&result) {
                deduplicated.push(result);
            }
        }
        Self { accepted: deduplicated }
    }

    pub fn accepts(&self, result: SurvivorMatchResult) -> bool {
        self.accepted.contains(&result)
    }

    pub fn accepted(&self) -> &[SurvivorMatchResult] {
        &self.accepted
    }

    /// Resolves the free text of a survivor's match result -- "killer disconnected" is [SurvivorMatchResult::KillerDisconnected].\
    /// Outcomes out of this vocabulary are reported as unknown.
    pub fn lookup(&self, text: &str) -> Option<SurvivorMatchResult> {
        let key = normalized_key(text);
        SURVIVOR_MATCH_RESULTS.iter()
            .find(|(known_key, _)| *known_key == key)
            .map(|(_, result)| *result)
            .filter(|result| self.accepts(*result))
    }

}

impl Default for MatchResultVocabulary {
    fn default() -> Self {
        Self::all()
    }
}
