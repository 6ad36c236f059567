//! Registry snapshot, identity cache persistence and the brand mark image

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use image::RgbaImage;

use crate::error::LoadError;
use crate::model::{IdentityCache, IdentityRegistry};

/// Add every row of one registry file (`name_first`, `name_last`, `key_mlbam`)
pub fn parse_registry<R: Read>(rdr: R, registry: &mut IdentityRegistry) -> Result<(), LoadError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(rdr);
    let headers = reader.headers()?.clone();
    let idx = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| LoadError::MissingColumn {
                table: "registry",
                column: name.to_string(),
            })
    };
    let first_idx = idx("name_first")?;
    let last_idx = idx("name_last")?;
    let id_idx = idx("key_mlbam")?;

    for result in reader.records() {
        let record = result?;
        let get = |i: usize| record.get(i).unwrap_or_default();
        registry.insert(get(first_idx), get(last_idx), get(id_idx));
    }
    Ok(())
}

/// Registry built from every `people-*.csv` file in `dir`.
/// A missing directory yields an empty registry.
pub fn load_registry(dir: &Path) -> Result<IdentityRegistry, LoadError> {
    let mut registry = IdentityRegistry::new();
    if !dir.is_dir() {
        log::warn!("Registry directory {} not found", dir.display());
        return Ok(registry);
    }

    let mut files: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("people-") && n.ends_with(".csv"))
        })
        .collect();
    files.sort();

    for path in &files {
        log::debug!("Reading registry file {}", path.display());
        parse_registry(File::open(path)?, &mut registry)?;
    }
    log::info!(
        "Loaded {} registry ids from {} files in {}",
        registry.len(),
        files.len(),
        dir.display()
    );
    Ok(registry)
}

/// Headerless `name,id` rows; short rows are skipped
pub fn parse_id_cache<R: Read>(rdr: R) -> Result<IdentityCache, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);
    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        if let (Some(name), Some(id)) = (record.get(0), record.get(1)) {
            entries.push((name.to_string(), id.trim().to_string()));
        }
    }
    Ok(IdentityCache::from_entries(entries))
}

/// Load the identity cache; a missing file is an empty cache
pub fn load_id_cache(path: &Path) -> Result<IdentityCache, LoadError> {
    if !path.exists() {
        log::info!("No identity cache at {}, starting empty", path.display());
        return Ok(IdentityCache::new());
    }
    let cache = parse_id_cache(File::open(path)?)?;
    log::info!("Loaded {} cached ids from {}", cache.len(), path.display());
    Ok(cache)
}

pub fn write_id_cache<W: Write>(cache: &IdentityCache, wtr: W) -> Result<(), LoadError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(wtr);
    for (name, id) in cache.snapshot() {
        writer.write_record([name.as_str(), id.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Save the cache sorted by name
pub fn save_id_cache(cache: &IdentityCache, path: &Path) -> Result<(), LoadError> {
    write_id_cache(cache, File::create(path)?)?;
    log::info!("Saved {} cached ids to {}", cache.len(), path.display());
    Ok(())
}

pub fn read_brand_mark(path: &Path) -> Result<RgbaImage, LoadError> {
    Ok(image::open(path)?.to_rgba8())
}

/// Decode the brand mark; any failure is logged and the mark is skipped
pub fn load_brand_mark(path: &Path) -> Option<RgbaImage> {
    match read_brand_mark(path) {
        Ok(img) => Some(img),
        Err(e) => {
            log::warn!("Brand mark {} not loaded: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_skips_blank_ids() {
        let csv_data = "\
key_person,name_last,name_first,key_mlbam
a,Holliday,Jackson,702616
b,Nobody,Some,
";
        let mut registry = IdentityRegistry::new();
        parse_registry(csv_data.as_bytes(), &mut registry).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("Jackson Holliday"), Some("702616"));
    }

    #[test]
    fn test_registry_missing_column() {
        let mut registry = IdentityRegistry::new();
        let err = parse_registry("name_first,name_last\n".as_bytes(), &mut registry);
        assert!(matches!(err, Err(LoadError::MissingColumn { .. })));
    }

    #[test]
    fn test_cache_normalizes_and_sorts() {
        let csv_data = "zed last,3\nEthan Salas,687462\nbroken\n";
        let cache = parse_id_cache(csv_data.as_bytes()).unwrap();
        assert_eq!(cache.get("ethan salas").as_deref(), Some("687462"));

        let mut out = Vec::new();
        write_id_cache(&cache, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ETHAN SALAS,687462\nZED LAST,3\n"
        );
    }

    #[test]
    fn test_missing_cache_file_is_empty() {
        let cache = load_id_cache(Path::new("/nonexistent/cache.csv")).unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_missing_brand_mark_is_none() {
        assert!(load_brand_mark(Path::new("/nonexistent/mark.png")).is_none());
        let err = read_brand_mark(Path::new("/nonexistent/mark.png"));
        assert!(matches!(err, Err(LoadError::Image(_))));
    }
}
