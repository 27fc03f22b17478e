//! Turns hand-typed match log lines into [MatchRecord]s, resolving every name against the [Catalog].
//!
//! A match log is made of date lines, such as `21 05 2021`, each followed by the matches of that date:
//! ```text
//! Hillbilly, 2 kills, (tinkerer I, enduring III, lightborn III), 23196 points, add ons: apex muffler, map: rancid abattoir, offering: black ward, survivors: [Jeff, Yui: sacrificed, David: sacrificed, Meg], rank: 6
//! Bill, sacrificed, (we're gonna live forever III, dead hard I), 20100 points, item: commodious toolbox, add ons: wire spool, scraps (against legion), map: wreckers' yard, rank: 10, party size: 1
//! ```
//! The character before the first comma tells the side of the match. All other fields are found by
//! their labels -- see [fields](crate::fields).

use crate::{
    errors::MatchParsingError,
    fields::{self, Eliminations},
    vocabulary::{self, MatchResultVocabulary},
};
use model::{
    catalog::{Catalog, GameMap, Item, ItemAddon, Killer, KillerAddon, Offering, Perk, PerkType, Survivor},
    matches::{FacedSurvivor, FacedSurvivorState, KillerMatch, MatchInfo, MatchRecord, SurvivorMatch,
              MAX_ADDONS, MAX_PARTY_SIZE, MAX_PERKS, MAX_SURVIVORS, BEST_RANK, WORST_RANK},
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::sync::Arc;


static DATE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{2} \d{2} \d{4}$")
        .expect("DATE_LINE_REGEX compilation failed")
});

const DATE_LINE_FORMAT: &str = "%d %m %Y";


/// Recognizes the `DD MM YYYY` lines opening each block of matches
pub fn deserialize_date_line(line: &str) -> Option<NaiveDate> {
    let line = line.trim();
    if !DATE_LINE_REGEX.is_match(line) {
        return None
    }
    NaiveDate::parse_from_str(line, DATE_LINE_FORMAT).ok()
}


/// Parses match log lines against an immutable [Catalog].\
/// Holds no per-line state: the match date is given along with each line, so a single instance
/// may be shared (through an `Arc`) by any number of feeds -- see [MatchLogSession] for a date-tracking wrapper.
#[derive(Debug)]
pub struct MatchLineParser {
    catalog: Arc<Catalog>,
    match_results: MatchResultVocabulary,
}

/// The side a character name resolved to
enum Character<'a> {
    Killer(&'a Killer),
    Survivor(&'a Survivor),
}

impl MatchLineParser {

    /// Creates a parser accepting every known [model::matches::SurvivorMatchResult]
    pub fn new<IntoArcCatalog: Into<Arc<Catalog>>>(catalog: IntoArcCatalog) -> Self {
        Self {
            catalog: catalog.into(),
            match_results: MatchResultVocabulary::default(),
        }
    }

    /// Restricts the survivor match results this parser recognizes
    pub fn with_match_results(mut self, match_results: MatchResultVocabulary) -> Self {
        self.match_results = match_results;
        self
    }

    /// Parses a killer or survivor match out of `line`, stamping it with `match_date`
    pub fn parse(&self, line: &str, match_date: NaiveDate) -> Result<MatchRecord, MatchParsingError> {
        let character_name = fields::character_name(line)?;
        match self.identify(character_name) {
            Some(Character::Killer(killer)) => self.parse_killer_match(line, killer, match_date).map(MatchRecord::Killer),
            Some(Character::Survivor(survivor)) => self.parse_survivor_match(line, survivor, match_date).map(MatchRecord::Survivor),
            None => Err(MatchParsingError::UnknownCharacter { name: character_name.to_string() }),
        }
    }

    /// Killers are looked up first, by (a part of) their aliases; then survivors, by (a part of) their names
    fn identify(&self, character_name: &str) -> Option<Character> {
        if character_name.is_empty() {
            return None
        }
        self.catalog.killers.iter()
            .find(|killer| killer.alias.contains(character_name))
            .map(Character::Killer)
            .or_else(|| self.catalog.survivors.iter()
                .find(|survivor| survivor.name.contains(character_name))
                .map(Character::Survivor))
    }

    fn parse_killer_match(&self, line: &str, killer: &Killer, match_date: NaiveDate) -> Result<KillerMatch, MatchParsingError> {
        let (perk_group_start, perk_entries) = fields::perk_group(line)
            .ok_or(MatchParsingError::MissingField { field_name: "perks" })?;
        let eliminations = fields::eliminations(fields::outcome_segment(line, perk_group_start)?)?;
        if eliminations.total() > MAX_SURVIVORS as u64 {
            return Err(MatchParsingError::InvalidEliminationCount {
                kills: eliminations.kills,
                moris: eliminations.moris,
                disconnects: eliminations.disconnects,
            })
        }
        let perks = self.resolve_perks(perk_entries, PerkType::Killer)?;
        let points = fields::points(line)?;
        let addons = match fields::addon_names(line) {
            Some(names) => self.resolve_killer_addons(&names, killer)?,
            None => vec![],
        };
        let map = self.resolve_map(line)?;
        let offering = self.resolve_offering(line)?;
        let faced_survivors = match fields::bracketed_list(line, fields::SURVIVORS_LABEL, "survivors")? {
            Some(entries) => self.resolve_faced_survivors(entries, &eliminations)?,
            None => vec![],
        };
        let rank = rank(line)?;
        Ok(KillerMatch {
            info: MatchInfo { points, map, offering, match_date, rank },
            killer: killer.clone(),
            perks,
            addons,
            faced_survivors,
        })
    }

    fn parse_survivor_match(&self, line: &str, survivor: &Survivor, match_date: NaiveDate) -> Result<SurvivorMatch, MatchParsingError> {
        let (perk_group_start, perk_entries) = fields::perk_group(line)
            .ok_or(MatchParsingError::MissingField { field_name: "perks" })?;
        let result_text = fields::outcome_segment(line, perk_group_start)?;
        let result = self.match_results.lookup(result_text)
            .ok_or_else(|| MatchParsingError::UnknownMatchResult { observed: result_text.trim_matches(|c: char| c == ',' || c.is_whitespace()).to_string() })?;
        let perks = self.resolve_perks(perk_entries, PerkType::Survivor)?;
        let points = fields::points(line)?;
        let item = self.resolve_item(line)?;
        let item_addons = match (&item, fields::addon_names(line)) {
            (Some(item), Some(names)) => self.resolve_item_addons(&names, item)?,
            _ => vec![],
        };
        let map = self.resolve_map(line)?;
        let offering = self.resolve_offering(line)?;
        let faced_killer = self.resolve_faced_killer(line)?;
        let rank = rank(line)?;
        let party_size = party_size(line)?;
        Ok(SurvivorMatch {
            info: MatchInfo { points, map, offering, match_date, rank },
            survivor: survivor.clone(),
            result,
            item,
            item_addons,
            perks,
            faced_killer,
            party_size,
        })
    }

    /// Checks the cardinality & uniqueness of the perks before resolving them against the perks of `perk_type`
    fn resolve_perks(&self, perk_entries: &str, perk_type: PerkType) -> Result<Vec<Perk>, MatchParsingError> {
        let entries: Vec<&str> = perk_entries.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();
        if entries.len() > MAX_PERKS {
            return Err(MatchParsingError::TooManyPerks { count: entries.len() })
        }
        let names_and_tiers = entries.into_iter()
            .map(fields::perk_name_and_tier)
            .collect::<Result<Vec<_>, _>>()?;
        let mut seen = HashSet::new();
        if let Some((name, _)) = names_and_tiers.iter().find(|(name, _)| !seen.insert(name.to_lowercase())) {
            return Err(MatchParsingError::DuplicatePerk { name: name.clone() })
        }
        let perk_type_name = match perk_type {
            PerkType::Killer => "killer",
            PerkType::Survivor => "survivor",
        };
        names_and_tiers.into_iter()
            .map(|(name, tier)| self.catalog.perks_of(perk_type)
                .find(|perk| perk.tier == tier && fields::same_name(&perk.name, &name))
                .cloned()
                .ok_or(MatchParsingError::UnknownPerk { name, perk_type: perk_type_name, tier }))
            .collect()
    }

    /// Killer addons must belong to `killer`
    fn resolve_killer_addons(&self, names: &[&str], killer: &Killer) -> Result<Vec<KillerAddon>, MatchParsingError> {
        check_addons(names)?;
        names.iter()
            .map(|&name| {
                let mut candidates = self.catalog.killer_addons.iter()
                    .filter(|addon| fields::same_name(&addon.name, name))
                    .peekable();
                if candidates.peek().is_none() {
                    return Err(MatchParsingError::UnknownAddon { name: name.to_string() })
                }
                candidates
                    .find(|addon| addon.killer == killer.name)
                    .cloned()
                    .ok_or_else(|| MatchParsingError::AddonNotForKiller { addon: name.to_string(), killer: killer.alias.clone() })
            })
            .collect()
    }

    /// Item addons must fit the type of `item`
    fn resolve_item_addons(&self, names: &[&str], item: &Item) -> Result<Vec<ItemAddon>, MatchParsingError> {
        check_addons(names)?;
        names.iter()
            .map(|&name| {
                let mut candidates = self.catalog.item_addons.iter()
                    .filter(|addon| fields::same_name(&addon.name, name))
                    .peekable();
                if candidates.peek().is_none() {
                    return Err(MatchParsingError::UnknownAddon { name: name.to_string() })
                }
                candidates
                    .find(|addon| addon.item_type == item.item_type)
                    .cloned()
                    .ok_or_else(|| MatchParsingError::AddonNotForItem { addon: name.to_string(), item: item.name.clone(), item_type: item.item_type.to_string() })
            })
            .collect()
    }

    fn resolve_item(&self, line: &str) -> Result<Option<Item>, MatchParsingError> {
        fields::optional_label_value(line, fields::ITEM_LABEL)
            .map(|name| self.catalog.items.iter()
                .find(|item| fields::same_name(&item.name, name))
                .cloned()
                .ok_or_else(|| MatchParsingError::UnknownItem { name: name.to_string() }))
            .transpose()
    }

    fn resolve_map(&self, line: &str) -> Result<Option<GameMap>, MatchParsingError> {
        fields::optional_label_value(line, fields::MAP_LABEL)
            .map(|name| self.catalog.maps()
                .find(|map| fields::same_name(&map.name, name))
                .cloned()
                .ok_or_else(|| MatchParsingError::UnknownMap { name: name.to_string() }))
            .transpose()
    }

    fn resolve_offering(&self, line: &str) -> Result<Option<Offering>, MatchParsingError> {
        fields::optional_label_value(line, fields::OFFERING_LABEL)
            .map(|name| self.catalog.offerings.iter()
                .find(|offering| fields::same_name(&offering.name, name))
                .cloned()
                .ok_or_else(|| MatchParsingError::UnknownOffering { name: name.to_string() }))
            .transpose()
    }

    /// The killer of a survivor match is written as `(against <ALIAS>)`
    fn resolve_faced_killer(&self, line: &str) -> Result<Killer, MatchParsingError> {
        let name = fields::against_group(line)?
            .ok_or(MatchParsingError::MissingField { field_name: "against" })?;
        let lowercase_name = name.to_lowercase();
        if lowercase_name.is_empty() {
            return Err(MatchParsingError::UnknownKiller { name: name.to_string() })
        }
        self.catalog.killers.iter()
            .find(|killer| killer.alias.to_lowercase().contains(&lowercase_name))
            .cloned()
            .ok_or_else(|| MatchParsingError::UnknownKiller { name: name.to_string() })
    }

    /// Each entry is either `<NAME>` or `<NAME>: <STATE>`.\
    /// Explicit states are always honored; the others are inferred from the eliminations -- see [inferred_state()]
    fn resolve_faced_survivors(&self, entries: &str, eliminations: &Eliminations) -> Result<Vec<FacedSurvivor>, MatchParsingError> {
        let entries: Vec<&str> = entries.split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();
        if entries.len() > MAX_SURVIVORS {
            return Err(MatchParsingError::TooManySurvivors { count: entries.len() })
        }
        let default_state = inferred_state(eliminations);
        entries.into_iter()
            .map(|entry| -> Result<FacedSurvivor, MatchParsingError> {
                let (name, state) = match entry.split_once(':') {
                    Some((name, state_text)) => (name.trim(), vocabulary::faced_survivor_state(state_text)
                        .ok_or_else(|| MatchParsingError::UnknownSurvivorState { observed: state_text.trim().to_string() })?),
                    None => (entry, default_state),
                };
                let survivor = self.find_survivor(name)
                    .ok_or_else(|| MatchParsingError::UnknownSurvivor { name: name.to_string() })?;
                Ok(FacedSurvivor { survivor: survivor.clone(), state })
            })
            .collect()
    }

    /// Exact case containment is preferred, but the case-insensitive one is good enough
    fn find_survivor(&self, name: &str) -> Option<&Survivor> {
        if name.is_empty() {
            return None
        }
        let lowercase_name = name.to_lowercase();
        self.catalog.survivors.iter()
            .find(|survivor| survivor.name.contains(name))
            .or_else(|| self.catalog.survivors.iter()
                .find(|survivor| survivor.name.to_lowercase().contains(&lowercase_name)))
    }

}

/// The state of the faced survivors listed without one: when all the eliminations were of the same kind
/// (or there were none), everybody shared the same fate. Otherwise, unlisted fates are taken for escapes.
fn inferred_state(eliminations: &Eliminations) -> FacedSurvivorState {
    let everybody = MAX_SURVIVORS as u32;
    match eliminations {
        Eliminations { kills, .. } if *kills == everybody => FacedSurvivorState::Sacrificed,
        Eliminations { moris, .. } if *moris == everybody => FacedSurvivorState::Killed,
        Eliminations { disconnects, .. } if *disconnects == everybody => FacedSurvivorState::Disconnected,
        _ => FacedSurvivorState::Escaped,
    }
}

fn check_addons(names: &[&str]) -> Result<(), MatchParsingError> {
    if names.len() > MAX_ADDONS {
        return Err(MatchParsingError::TooManyAddons { count: names.len() })
    }
    let mut seen = HashSet::new();
    match names.iter().find(|name| !seen.insert(name.to_lowercase())) {
        Some(name) => Err(MatchParsingError::DuplicateAddon { name: name.to_string() }),
        None => Ok(()),
    }
}

fn rank(line: &str) -> Result<Option<u8>, MatchParsingError> {
    fields::label_value(line, fields::RANK_LABEL)
        .map(|observed| observed.parse::<u8>().ok()
            .filter(|rank| (BEST_RANK..=WORST_RANK).contains(rank))
            .ok_or_else(|| MatchParsingError::InvalidRank { observed: observed.to_string() }))
        .transpose()
}

/// Solo (1) unless told otherwise
fn party_size(line: &str) -> Result<u8, MatchParsingError> {
    fields::label_value(line, fields::PARTY_SIZE_LABEL)
        .map_or(Ok(1), |observed| observed.parse::<u8>().ok()
            .filter(|party_size| (1..=MAX_PARTY_SIZE).contains(party_size))
            .ok_or_else(|| MatchParsingError::InvalidPartySize { observed: observed.to_string() }))
}


/// Keeps track of the date of the block being parsed, so lines may be parsed one after the other
/// the way they appear in a match log
#[derive(Debug)]
pub struct MatchLogSession {
    parser: Arc<MatchLineParser>,
    match_date: Option<NaiveDate>,
}

impl MatchLogSession {

    pub fn new(parser: Arc<MatchLineParser>) -> Self {
        Self {
            parser,
            match_date: None,
        }
    }

    /// Subsequent calls to [Self::parse()] will stamp `match_date` onto the matches
    pub fn set_match_date(&mut self, match_date: NaiveDate) {
        self.match_date = Some(match_date);
    }

    /// Forgets the current date: no lines may be parsed until a new one is set
    pub fn end_block(&mut self) {
        self.match_date = None;
    }

    pub fn match_date(&self) -> Option<NaiveDate> {
        self.match_date
    }

    /// Parses `line` with the current match date
    pub fn parse(&self, line: &str) -> Result<MatchRecord, MatchParsingError> {
        let match_date = self.match_date
            .ok_or(MatchParsingError::NoMatchDate)?;
        self.parser.parse(line, match_date)
    }

}
