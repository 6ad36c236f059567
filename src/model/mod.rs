pub mod attributes;
pub mod identity;
pub mod player;
pub mod tables;

pub use attributes::{AttributeSource, TableAttributes, ATTRIBUTE_FIELDS};
pub use identity::{registry_key, IdentityCache, IdentityRegistry};
pub use player::{fields, normalize_name, PlayerRecord};
pub use tables::{GradeLabel, LogoTable, RankTables, ReferenceTables, ScoutingEntry, ScoutingTable};
