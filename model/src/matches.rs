//! Resting place for [MatchRecord] & friends: the domain records produced out of each match log line

use crate::catalog::{GameMap, Item, ItemAddon, Killer, KillerAddon, Offering, Perk, Survivor};
use chrono::NaiveDate;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};


/// The maximum number of perks a character may equip
pub const MAX_PERKS: usize = 4;
/// The maximum number of addons for a killer's power or a survivor's item
pub const MAX_ADDONS: usize = 2;
/// The number of survivors in a full match -- also the upper bound for eliminations
pub const MAX_SURVIVORS: usize = 4;
/// Best (lowest) rank
pub const BEST_RANK: u8 = 1;
/// Worst (highest) rank
pub const WORST_RANK: u8 = 20;
/// The largest party a survivor may queue with -- counting itself
pub const MAX_PARTY_SIZE: u8 = 4;


/// A match, from either side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum MatchRecord {
    Killer(KillerMatch),
    Survivor(SurvivorMatch),
}

impl MatchRecord {

    /// The fields both sides have in common
    pub fn info(&self) -> &MatchInfo {
        match self {
            MatchRecord::Killer(killer_match) => &killer_match.info,
            MatchRecord::Survivor(survivor_match) => &survivor_match.info,
        }
    }

    pub fn is_killer(&self) -> bool {
        matches!(self, MatchRecord::Killer(_))
    }

    pub fn is_survivor(&self) -> bool {
        matches!(self, MatchRecord::Survivor(_))
    }

}

/// Data present in every [MatchRecord]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchInfo {
    /// Bloodpoints earned -- 0 when not logged
    pub points: u32,
    pub map: Option<GameMap>,
    pub offering: Option<Offering>,
    /// The date of the log block the match was found in
    pub match_date: NaiveDate,
    /// From [BEST_RANK] to [WORST_RANK], if logged
    pub rank: Option<u8>,
}

/// A match played as the killer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KillerMatch {
    #[serde(flatten)]
    pub info: MatchInfo,
    pub killer: Killer,
    pub perks: Vec<Perk>,
    pub addons: Vec<KillerAddon>,
    pub faced_survivors: Vec<FacedSurvivor>,
}

impl KillerMatch {

    /// How many survivors were sacrificed on hooks
    pub fn sacrifices(&self) -> usize {
        self.count_of(FacedSurvivorState::Sacrificed)
    }

    /// How many survivors were killed by other means than hooks -- moris, mostly
    pub fn kills(&self) -> usize {
        self.count_of(FacedSurvivorState::Killed)
    }

    pub fn disconnects(&self) -> usize {
        self.count_of(FacedSurvivorState::Disconnected)
    }

    pub fn escapes(&self) -> usize {
        self.count_of(FacedSurvivorState::Escaped)
    }

    fn count_of(&self, state: FacedSurvivorState) -> usize {
        self.faced_survivors.iter()
            .filter(|faced_survivor| faced_survivor.state == state)
            .count()
    }

}

/// One of the survivors seen by the killer, and how it ended for them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacedSurvivor {
    pub survivor: Survivor,
    pub state: FacedSurvivorState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum FacedSurvivorState {
    Sacrificed,
    Killed,
    BledOut,
    Disconnected,
    Escaped,
}

/// A match played as a survivor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivorMatch {
    #[serde(flatten)]
    pub info: MatchInfo,
    pub survivor: Survivor,
    pub result: SurvivorMatchResult,
    pub item: Option<Item>,
    /// Empty if no [Self::item] was brought
    pub item_addons: Vec<ItemAddon>,
    pub perks: Vec<Perk>,
    pub faced_killer: Killer,
    /// 1 (solo) up to [MAX_PARTY_SIZE]
    pub party_size: u8,
}

/// How a match ended for a survivor.\
/// This is the union of every outcome ever tracked -- which of them are accepted
/// is up to the parser's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum SurvivorMatchResult {
    Sacrificed,
    Killed,
    Escaped,
    HatchEscape,
    Tunnelled,
    Camped,
    BledOut,
    Dead,
    Disconnected,
    KillerDisconnected,
    KeyEscape,
}


/// Unit tests for the [matches](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn faced(name: &str, state: FacedSurvivorState) -> FacedSurvivor {
        FacedSurvivor { survivor: Survivor { name: name.to_string() }, state }
    }

    fn killer_match(faced_survivors: Vec<FacedSurvivor>) -> KillerMatch {
        KillerMatch {
            info: MatchInfo {
                points: 0,
                map: None,
                offering: None,
                match_date: NaiveDate::from_ymd_opt(2021, 5, 21).expect("valid date"),
                rank: None,
            },
            killer: Killer { name: String::from("Max Thompson Jr."), alias: String::from("The Hillbilly") },
            perks: vec![],
            addons: vec![],
            faced_survivors,
        }
    }

    /// Tests the elimination counters derived from the faced survivors
    #[test]
    fn elimination_counters() {
        let killer_match = killer_match(vec![
            faced("Meg Thomas", FacedSurvivorState::Sacrificed),
            faced("David King", FacedSurvivorState::Sacrificed),
            faced("Yui Kimura", FacedSurvivorState::Killed),
            faced("Jeffrey \"Jeff\" Johansen", FacedSurvivorState::Disconnected),
        ]);
        assert_eq!(killer_match.sacrifices(), 2);
        assert_eq!(killer_match.kills(), 1);
        assert_eq!(killer_match.disconnects(), 1);
        assert_eq!(killer_match.escapes(), 0);
    }

    /// Tests that the survivor outcomes may be named by their variant names -- as done by the command line
    #[test]
    fn survivor_match_result_names() {
        assert_eq!(SurvivorMatchResult::from_str("KillerDisconnected"), Ok(SurvivorMatchResult::KillerDisconnected));
        assert!(SurvivorMatchResult::from_str("Teleported").is_err());
        assert_eq!(SurvivorMatchResult::iter().count(), 11);
        let name: &'static str = SurvivorMatchResult::HatchEscape.into();
        assert_eq!(name, "HatchEscape");
    }

    #[test]
    fn common_info() {
        let record = MatchRecord::Killer(killer_match(vec![]));
        assert!(record.is_killer());
        assert!(!record.is_survivor());
        assert_eq!(record.info().points, 0);
    }

}
