//! Loading reference data from disk

pub mod identity;
pub mod tables;

pub use identity::{
    load_brand_mark, load_id_cache, load_registry, parse_id_cache, parse_registry,
    read_brand_mark, save_id_cache, write_id_cache,
};
pub use tables::{
    load_attributes, load_logos, load_roster, load_scouting, load_top100, parse_attributes,
    parse_logos, parse_roster, parse_scouting, parse_top100, Roster,
};
