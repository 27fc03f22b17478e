//! Resting place for [MatchParsingError]

use model::matches::{MAX_ADDONS, MAX_PARTY_SIZE, MAX_PERKS, MAX_SURVIVORS, BEST_RANK, WORST_RANK};


/// Everything that may go wrong when turning a match log line into a [model::matches::MatchRecord].\
/// Three classes of errors exist:
///   1) Structural -- the line can't be taken for a match at all (see [Self::is_structural()]);
///   2) Reference resolution -- the line names a perk, addon, map, ... absent from the catalog;
///   3) Invariant violations -- the line breaks the game rules (see [Self::is_invariant_violation()]).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchParsingError {

    // structural
    /////////////

    #[error("no comma found in the match entry -- the character name must be followed by one: '{line}'")]
    MalformedLine { line: String },
    #[error("no killer or survivor named '{name}' was found")]
    UnknownCharacter { name: String },
    #[error("no match date is known -- matches must follow a 'DD MM YYYY' date line")]
    NoMatchDate,

    // reference resolution
    ///////////////////////

    #[error("the {field_name} field is either absent or unterminated")]
    MissingField { field_name: &'static str },
    #[error("couldn't parse the {field_name} out of '{observed}'")]
    UnparseableNumber { field_name: &'static str, observed: String },
    #[error("perk '{entry}' is not in the form '<NAME> <TIER>', where <TIER> is one of I, II or III")]
    UnparseablePerk { entry: String },
    #[error("unknown {perk_type} perk '{name}' of tier {tier}")]
    UnknownPerk { name: String, perk_type: &'static str, tier: u8 },
    #[error("unknown addon '{name}'")]
    UnknownAddon { name: String },
    #[error("unknown item '{name}'")]
    UnknownItem { name: String },
    #[error("unknown map '{name}'")]
    UnknownMap { name: String },
    #[error("unknown offering '{name}'")]
    UnknownOffering { name: String },
    #[error("unknown survivor '{name}'")]
    UnknownSurvivor { name: String },
    #[error("unknown killer '{name}'")]
    UnknownKiller { name: String },
    #[error("unknown match result '{observed}'")]
    UnknownMatchResult { observed: String },
    #[error("unknown state '{observed}' for a faced survivor")]
    UnknownSurvivorState { observed: String },

    // invariant violations
    ///////////////////////

    #[error("the number of kills is missing -- as in '0 kills'")]
    MissingKillCount,
    #[error("{kills} kills + {moris} moris + {disconnects} disconnects make more eliminations than the {max} survivors in a match", max = MAX_SURVIVORS)]
    InvalidEliminationCount { kills: u32, moris: u32, disconnects: u32 },
    #[error("{count} perks were listed, but no more than {max} may be equipped", max = MAX_PERKS)]
    TooManyPerks { count: usize },
    #[error("perk '{name}' was listed more than once")]
    DuplicatePerk { name: String },
    #[error("{count} addons were listed, but no more than {max} may be equipped", max = MAX_ADDONS)]
    TooManyAddons { count: usize },
    #[error("addon '{name}' was listed more than once")]
    DuplicateAddon { name: String },
    #[error("addon '{addon}' is not one of {killer}'s addons")]
    AddonNotForKiller { addon: String, killer: String },
    #[error("addon '{addon}' doesn't fit the {item_type} '{item}'")]
    AddonNotForItem { addon: String, item: String, item_type: String },
    #[error("{count} survivors were listed, but a match has no more than {max}", max = MAX_SURVIVORS)]
    TooManySurvivors { count: usize },
    #[error("rank '{observed}' is not a number from {best} to {worst}", best = BEST_RANK, worst = WORST_RANK)]
    InvalidRank { observed: String },
    #[error("party size '{observed}' is not a number from 1 to {max}", max = MAX_PARTY_SIZE)]
    InvalidPartySize { observed: String },
}

impl MatchParsingError {

    /// Structural errors mean the line is not a match entry at all -- which, in a log file,
    /// marks the end of the current date block
    pub fn is_structural(&self) -> bool {
        matches!(self,
            MatchParsingError::MalformedLine { .. } |
            MatchParsingError::UnknownCharacter { .. } |
            MatchParsingError::NoMatchDate)
    }

    /// True for errors where every referenced entity is known, but they don't add up according to the game rules
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self,
            MatchParsingError::MissingKillCount |
            MatchParsingError::InvalidEliminationCount { .. } |
            MatchParsingError::TooManyPerks { .. } |
            MatchParsingError::DuplicatePerk { .. } |
            MatchParsingError::TooManyAddons { .. } |
            MatchParsingError::DuplicateAddon { .. } |
            MatchParsingError::AddonNotForKiller { .. } |
            MatchParsingError::AddonNotForItem { .. } |
            MatchParsingError::TooManySurvivors { .. } |
            MatchParsingError::InvalidRank { .. } |
            MatchParsingError::InvalidPartySize { .. })
    }

}
