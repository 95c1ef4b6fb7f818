//! Loading occupancy maps from the built-in layout, text files or JSON.

use std::fs;

use log::debug;
use robonav_core::OccupancyMap;

use crate::config::MapSource;
use crate::error::Error;

/// The default 20×15 warehouse floor.
pub const WAREHOUSE: &str = include_str!("../maps/warehouse.txt");

/// Read and parse the map `source` points at.
pub fn load(source: &MapSource) -> Result<OccupancyMap, Error> {
    let map = match source {
        MapSource::Builtin => OccupancyMap::parse(WAREHOUSE)?,
        MapSource::Text(path) => {
            let text = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            OccupancyMap::parse(&text)?
        }
        MapSource::Json(path) => {
            let text = fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            // Decode plain rows first so layout errors stay InvalidMapError.
            let rows: Vec<String> =
                serde_json::from_str(&text).map_err(|source| Error::Json {
                    path: path.clone(),
                    source,
                })?;
            OccupancyMap::try_from(rows)?
        }
    };
    debug!(
        "loaded {}x{} map from {:?}",
        map.width(),
        map.height(),
        source
    );
    Ok(map)
}
