//! Resting place for the reference [Catalog] & its entities.
//!
//! The catalog is the read-only universe of names the match log lines may refer to:
//! it is gathered by an external data acquisition process and handed over, once,
//! to the parser -- which never changes it.

use serde::{Deserialize, Serialize};
use strum_macros::Display;


/// A killer, known in the logs by (a part of) its alias -- "Hillbilly" for "The Hillbilly"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Killer {
    /// The character's name, such as "Max Thompson Jr."
    pub name: String,
    /// The in-game title, such as "The Hillbilly"
    pub alias: String,
}

/// A survivor, known in the logs by any part of the full name -- "Bill" for `William "Bill" Overbeck`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survivor {
    pub name: String,
}

/// Which side of the match may equip a [Perk]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PerkType {
    Killer,
    Survivor,
}

/// A perk, at one of its tiers. Each tier is a distinct catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perk {
    pub name: String,
    pub perk_type: PerkType,
    /// 1 to 3 -- written as "I", "II" or "III" in the logs
    pub tier: u8,
}

/// The kinds of items survivors may bring into a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ItemType {
    Medkit,
    Key,
    Flashlight,
    Toolbox,
    Firecracker,
    Map,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub item_type: ItemType,
}

/// Addon for a killer's power
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillerAddon {
    pub name: String,
    /// The [Killer::name] of the killer this addon belongs to
    pub killer: String,
}

/// Addon for any survivor item of the given [ItemType]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAddon {
    pub name: String,
    pub item_type: ItemType,
}

/// Informative only: the parser accepts any offering on any side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum OfferingType {
    Killer,
    Survivor,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offering {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_type: Option<OfferingType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMap {
    pub name: String,
}

/// Groups [GameMap]s thematically. Every map belongs to exactly one realm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub name: String,
    #[serde(default)]
    pub maps: Vec<GameMap>,
}

/// All the reference entities, by category.\
/// Any category may be absent from a catalog file, meaning "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub killers: Vec<Killer>,
    pub survivors: Vec<Survivor>,
    pub perks: Vec<Perk>,
    pub killer_addons: Vec<KillerAddon>,
    pub item_addons: Vec<ItemAddon>,
    pub items: Vec<Item>,
    pub offerings: Vec<Offering>,
    pub realms: Vec<Realm>,
}

impl Catalog {

    /// Iterates over the maps of every realm, in realm order
    pub fn maps(&self) -> impl Iterator<Item=&GameMap> {
        self.realms.iter()
            .flat_map(|realm| realm.maps.iter())
    }

    /// Iterates over the perks equippable by the given side
    pub fn perks_of(&self, perk_type: PerkType) -> impl Iterator<Item=&Perk> {
        self.perks.iter()
            .filter(move |perk| perk.perk_type == perk_type)
    }

}
