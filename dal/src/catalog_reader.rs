//! Loads the reference [Catalog] from its JSON file, as produced by the data acquisition process

use common::types::Result;
use model::catalog::Catalog;
use std::fs::File;
use std::io::BufReader;
use log::debug;


/// Reads & deserializes the catalog at `catalog_file_path`. Absent categories are taken as empty.
pub fn read_catalog(catalog_file_path: &str) -> Result<Catalog> {
    let file = File::open(catalog_file_path)
        .map_err(|err| format!("Couldn't open catalog file '{catalog_file_path}' for reading: {err}"))?;
    let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
        .map_err(|err| format!("Couldn't deserialize catalog file '{catalog_file_path}': {err}"))?;
    debug!("Catalog '{catalog_file_path}' loaded: {} killers, {} survivors, {} perks, {} items, {} maps",
           catalog.killers.len(), catalog.survivors.len(), catalog.perks.len(), catalog.items.len(), catalog.maps().count());
    Ok(catalog)
}
