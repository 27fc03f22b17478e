//! A small, but realistic, [Catalog] for the unit tests

use model::catalog::{Catalog, GameMap, Item, ItemAddon, ItemType, Killer, KillerAddon, Offering, OfferingType, Perk, PerkType, Realm, Survivor};


pub fn catalog() -> Catalog {
    Catalog {
        killers: vec![
            killer("Evan Macmillan", "The Trapper"),
            killer("Sally Smithson", "The Nurse"),
            killer("Max Thompson Jr.", "The Hillbilly"),
            killer("Frank, Julie, Susie and Joey", "The Legion"),
        ],
        survivors: ["Dwight Fairfield", "Meg Thomas", "Claudette Morel", "Jeffrey \"Jeff\" Johansen", "David King",
                    "William \"Bill\" Overbeck", "Yui Kimura"]
            .into_iter()
            .map(|name| Survivor { name: name.to_string() })
            .collect(),
        perks: [
            ("Tinkerer", 1), ("Enduring", 3), ("Lightborn", 3), ("Brutal Strength", 1), ("Brutal Strength", 2), ("Brutal Strength", 3),
            ("Barbecue & Chili", 3), ("Nurse's Calling", 3), ("Bamboozle", 2),
        ]
            .into_iter()
            .map(|(name, tier)| perk(name, PerkType::Killer, tier))
            .chain([
                ("We're Gonna Live Forever", 3), ("Dead Hard", 1), ("Unbreakable", 3), ("Borrowed Time", 3),
                ("Sprint Burst", 3), ("Self-Care", 1), ("Kindred", 2),
            ]
                .into_iter()
                .map(|(name, tier)| perk(name, PerkType::Survivor, tier)))
            .collect(),
        killer_addons: vec![
            killer_addon("Apex Muffler", "Max Thompson Jr."),
            killer_addon("Iridescent Brick", "Max Thompson Jr."),
            killer_addon("Spark Plug", "Max Thompson Jr."),
            killer_addon("Trapper Gloves", "Evan Macmillan"),
            killer_addon("Coil Spring", "Evan Macmillan"),
            killer_addon("Mural Sketch", "Frank, Julie, Susie and Joey"),
        ],
        item_addons: vec![
            item_addon("Wire Spool", ItemType::Toolbox),
            item_addon("Scraps", ItemType::Toolbox),
            item_addon("Instructions", ItemType::Toolbox),
            item_addon("Battery", ItemType::Flashlight),
            item_addon("Gauze Roll", ItemType::Medkit),
        ],
        items: vec![
            item("Commodious Toolbox", ItemType::Toolbox),
            item("Flashlight", ItemType::Flashlight),
            item("First Aid Kit", ItemType::Medkit),
            item("Skeleton Key", ItemType::Key),
        ],
        offerings: vec![
            Offering { name: String::from("Black Ward"), offering_type: Some(OfferingType::Both) },
            Offering { name: String::from("White Ward"), offering_type: Some(OfferingType::Survivor) },
            Offering { name: String::from("Bloody Party Streamers"), offering_type: Some(OfferingType::Both) },
        ],
        realms: vec![
            realm("Coldwind Farm", &["Rancid Abattoir", "Thompson House"]),
            realm("Autohaven Wreckers", &["Wreckers' Yard", "Azarov's Resting Place"]),
            realm("Gideon Meat Plant", &["The Game"]),
        ],
    }
}

pub fn killer(name: &str, alias: &str) -> Killer {
    Killer { name: name.to_string(), alias: alias.to_string() }
}

pub fn survivor(name: &str) -> Survivor {
    Survivor { name: name.to_string() }
}

pub fn perk(name: &str, perk_type: PerkType, tier: u8) -> Perk {
    Perk { name: name.to_string(), perk_type, tier }
}

pub fn killer_addon(name: &str, killer: &str) -> KillerAddon {
    KillerAddon { name: name.to_string(), killer: killer.to_string() }
}

pub fn item_addon(name: &str, item_type: ItemType) -> ItemAddon {
    ItemAddon { name: name.to_string(), item_type }
}

pub fn item(name: &str, item_type: ItemType) -> Item {
    Item { name: name.to_string(), item_type }
}

fn realm(name: &str, maps: &[&str]) -> Realm {
    Realm {
        name: name.to_string(),
        maps: maps.iter().map(|map| GameMap { name: map.to_string() }).collect(),
    }
}
