//! Keyword-anchored extraction of the fields of a match log line.
//!
//! Match logs are typed by hand, so fields are not found by their positions, but by their own labels:
//! each extractor here searches the whole line independently, allowing fields to come in any order.
//! Two strategies are mixed:
//!  1) `std::str` searches for the labeled text fields (`map:`, `item:`, ...), and
//!  2) precompiled `Regex`es for the numeric fields without labels (`23196 points`, `2 kills`, ...).
//!
//! Labels are matched case-insensitively. As [str::to_ascii_lowercase()] keeps byte offsets intact,
//! positions found in the lowercased line are valid in the original one.
//!
//! Extractors only slice the line: resolving the slices against the catalog is up to the
//! [deserializer](crate::deserializer).

use crate::errors::MatchParsingError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;


pub const ADDONS_LABEL:     &str = "add ons:";
pub const MAP_LABEL:        &str = "map:";
pub const OFFERING_LABEL:   &str = "offering:";
pub const SURVIVORS_LABEL:  &str = "survivors:";
pub const RANK_LABEL:       &str = "rank:";
pub const PARTY_SIZE_LABEL: &str = "party size:";
pub const ITEM_LABEL:       &str = "item:";
pub const AGAINST_MARKER:   &str = "(against";

/// The text meaning "nothing" for optional fields -- as in "offering: none"
const NONE_VALUE: &str = "none";

/// Labels after which an addon list is over
const ADDON_LIST_TERMINATORS: &[&str] = &[MAP_LABEL, OFFERING_LABEL, SURVIVORS_LABEL, RANK_LABEL, PARTY_SIZE_LABEL, ITEM_LABEL, AGAINST_MARKER];

static POINTS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<points>\d+)\s*points\b")
        .expect("POINTS_REGEX compilation failed")
});

static ELIMINATIONS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<count>\d+)\s*(?P<kind>kill|mori|disconnect)")
        .expect("ELIMINATIONS_REGEX compilation failed")
});


/// How many survivors the killer eliminated, by each of the possible means
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Eliminations {
    /// Sacrifices on hooks -- logged as "kills"
    pub kills: u32,
    pub moris: u32,
    pub disconnects: u32,
}

impl Eliminations {

    pub fn total(&self) -> u64 {
        self.kills as u64 + self.moris as u64 + self.disconnects as u64
    }

}

/// Returns the trimmed character name -- the text before the first comma
pub fn character_name(line: &str) -> Result<&str, MatchParsingError> {
    line.split_once(',')
        .map(|(name, _)| name.trim())
        .ok_or_else(|| MatchParsingError::MalformedLine { line: line.to_string() })
}

/// Returns the text between the first comma and the perk group -- which holds the
/// eliminations for killers or the match result for survivors
pub fn outcome_segment(line: &str, perk_group_start: usize) -> Result<&str, MatchParsingError> {
    line.find(',')
        .and_then(|first_comma| line.get(first_comma+1..perk_group_start))
        .ok_or(MatchParsingError::MissingField { field_name: "perks" })
}

/// Sums up each `<COUNT> kill|mori|disconnect` found in `segment`.\
/// At least the word "kill" must be present, even if as "0 kills".
pub fn eliminations(segment: &str) -> Result<Eliminations, MatchParsingError> {
    if !segment.to_ascii_lowercase().contains("kill") {
        return Err(MatchParsingError::MissingKillCount)
    }
    let mut eliminations = Eliminations::default();
    for captures in ELIMINATIONS_REGEX.captures_iter(segment) {
        let count: u32 = number_from(&captures["count"], "elimination count")?;
        let counter = match captures["kind"].to_ascii_lowercase().as_str() {
            "kill" => &mut eliminations.kills,
            "mori" => &mut eliminations.moris,
            _      => &mut eliminations.disconnects,
        };
        *counter = counter.saturating_add(count);
    }
    Ok(eliminations)
}

/// Locates the perk list: the first parenthesized group that is not the `(against ...)` one.\
/// Returns the position of its opening parenthesis along with its contents.
pub fn perk_group(line: &str) -> Option<(usize, &str)> {
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find('(') {
        let open = search_from + offset;
        let contents_start = open + 1;
        let close = contents_start + line[contents_start..].find(')')?;
        let contents = &line[contents_start..close];
        if !contents.trim_start().to_ascii_lowercase().starts_with("against") {
            return Some((open, contents))
        }
        search_from = close + 1;
    }
    None
}

/// Splits a perk entry such as "borrowed time III" into its name & tier
pub fn perk_name_and_tier(entry: &str) -> Result<(String, u8), MatchParsingError> {
    let unparseable = || MatchParsingError::UnparseablePerk { entry: entry.trim().to_string() };
    let (name, numerals) = entry.trim().rsplit_once(char::is_whitespace)
        .ok_or_else(unparseable)?;
    let tier = tier_from_numerals(numerals)
        .ok_or_else(unparseable)?;
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    if name.is_empty() {
        return Err(unparseable())
    }
    Ok((name, tier))
}

/// "I" is 1, "II" is 2 & "III" is 3
fn tier_from_numerals(numerals: &str) -> Option<u8> {
    let tier = numerals.len();
    ((1..=3).contains(&tier) && numerals.chars().all(|c| c == 'I' || c == 'i'))
        .then_some(tier as u8)
}

/// The first `<NUMBER> points` of the line -- 0 if the line has none
pub fn points(line: &str) -> Result<u32, MatchParsingError> {
    POINTS_REGEX.captures(line)
        .map_or(Ok(0), |captures| number_from(&captures["points"], "points"))
}

/// The trimmed text after `label` up to the next comma, parenthesis, bracket or end of line
pub fn label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    let start = find_label(line, label)?;
    let rest = &line[start..];
    let end = rest.find(|c: char| matches!(c, ',' | '(' | '['))
        .unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Like [label_value()], but `none` is taken for an absent value
pub fn optional_label_value<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    label_value(line, label)
        .filter(|value| !is_none(value))
}

/// The comma-separated names after `add ons:`, which end at the next known label, `points` or end of line.\
/// `None` if there is no addon list; an empty list for `add ons: none`.
pub fn addon_names(line: &str) -> Option<Vec<&str>> {
    let start = find_label(line, ADDONS_LABEL)?;
    let rest = &line[start..];
    let lowercase_rest = rest.to_ascii_lowercase();
    let end = ADDON_LIST_TERMINATORS.iter()
        .filter_map(|label| lowercase_rest.find(label))
        .chain(POINTS_REGEX.find(rest).map(|found| found.start()))
        .min()
        .unwrap_or(rest.len());
    let names: Vec<&str> = rest[..end].split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if names.len() == 1 && is_none(names[0]) {
        Some(vec![])
    } else {
        Some(names)
    }
}

/// The contents of the `[...]` group following `label`, if `label` is present
pub fn bracketed_list<'a>(line: &'a str, label: &str, field_name: &'static str) -> Result<Option<&'a str>, MatchParsingError> {
    let Some(start) = find_label(line, label)
    else {
        return Ok(None)
    };
    let rest = &line[start..];
    let missing = || MatchParsingError::MissingField { field_name };
    let open = rest.find('[').ok_or_else(missing)?;
    let close = open + rest[open..].find(']').ok_or_else(missing)?;
    Ok(Some(&rest[open+1..close]))
}

/// The trimmed contents of the `(against ...)` group, if present
pub fn against_group(line: &str) -> Result<Option<&str>, MatchParsingError> {
    let Some(start) = find_label(line, AGAINST_MARKER)
    else {
        return Ok(None)
    };
    let rest = &line[start..];
    let close = rest.find(')')
        .ok_or(MatchParsingError::MissingField { field_name: "against" })?;
    Ok(Some(rest[..close].trim()))
}

/// Case-insensitive name comparison
pub fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// True if `text` means "nothing"
pub fn is_none(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(NONE_VALUE)
}

/// Returns the position right after `label`, searched case-insensitively -- `label` must be lowercase
fn find_label(line: &str, label: &str) -> Option<usize> {
    line.to_ascii_lowercase()
        .find(label)
        .map(|start| start + label.len())
}

fn number_from<T: FromStr>(number: &str, field_name: &'static str) -> Result<T, MatchParsingError> {
    number.parse()
        .map_err(|_| MatchParsingError::UnparseableNumber { field_name, observed: number.to_string() })
}
