//! Per-crag topo files on disk.
//!
//! A crag at path `europe/austria/wachau/nasenwand` keeps its topo in
//! `<root>/europe/austria/wachau/nasenwand/nasenwand-topo.json`. A route page
//! appends the route id to the crag path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::{Error, Result};
use crate::topo::{Route, Topo};

/// File name suffix of topo records.
pub const TOPO_SUFFIX: &str = "-topo.json";

/// A resolved page request: the crag path, its topo, and the selected route
/// when the request addressed a route page.
#[derive(Clone, Debug)]
pub struct TopoPage {
    pub path: String,
    pub topo: Topo,
    pub route: Option<Route>,
}

/// Directory tree of topo records.
#[derive(Clone, Debug)]
pub struct TopoCatalog {
    root: PathBuf,
}

impl TopoCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the topo file for a crag path. `None` for an empty path.
    pub fn topo_file(&self, crag: &str) -> Option<PathBuf> {
        let name = crag.rsplit('/').next().filter(|s| !s.is_empty())?;
        Some(self.root.join(crag).join(format!("{name}{TOPO_SUFFIX}")))
    }

    /// Resolve a crag or route path.
    ///
    /// The path is first tried as a crag. Failing that, its parent is tried as
    /// a crag and the last segment selects the route.
    pub fn load(&self, path: &str) -> Result<TopoPage> {
        let path = path.trim_matches('/');

        if let Some(file) = self.topo_file(path).filter(|f| f.is_file()) {
            let topo = read_topo(&file)?;
            log::info!("Loaded topo {} ({} routes)", path, topo.routes.len());
            return Ok(TopoPage {
                path: path.to_string(),
                topo,
                route: None,
            });
        }

        if let Some((crag, route_id)) = path.rsplit_once('/') {
            if let Some(file) = self.topo_file(crag).filter(|f| f.is_file()) {
                let topo = read_topo(&file)?;
                // A route id missing from an existing crag is an error rather
                // than a fallback to the crag page.
                let route = topo
                    .route(route_id)
                    .cloned()
                    .ok_or_else(|| Error::RouteNotFound(path.to_string()))?;
                log::info!("Loaded topo {} for route {}", crag, route.id);
                return Ok(TopoPage {
                    path: crag.to_string(),
                    topo,
                    route: Some(route),
                });
            }
        }

        Err(Error::TopoNotFound(path.to_string()))
    }

    /// Every addressable page path: each crag with a topo file, followed by
    /// one path per route of that topo. Sorted by topo file path.
    pub fn entries(&self) -> Result<Vec<String>> {
        let mut files = Vec::new();
        collect_topo_files(&self.root, &mut files)?;
        files.sort();

        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let Some(crag) = self.crag_path(&file) else {
                continue;
            };
            entries.push(crag.clone());

            match read_topo(&file) {
                Ok(topo) => {
                    entries.extend(topo.routes.iter().map(|r| format!("{crag}/{}", r.id)));
                }
                Err(e) => log::warn!("Skipping routes of {}: {}", file.display(), e),
            }
        }
        Ok(entries)
    }

    fn crag_path(&self, file: &Path) -> Option<String> {
        let dir = file.parent()?.strip_prefix(&self.root).ok()?;
        let parts: Vec<String> = dir
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("/"))
        }
    }
}

/// Read and parse a single topo file.
pub fn read_topo(path: &Path) -> Result<Topo> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn collect_topo_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_topo_files(&path, out)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(TOPO_SUFFIX))
        {
            out.push(path);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NASENWAND: &str = r#"{
        "name": "Nasenwand",
        "coordinates": [15.42, 48.39],
        "wallAzimuth": 160,
        "routes": [
            { "id": "kante", "orientation": [0.0, 0.0, -1.0] },
            { "id": "riss" }
        ]
    }"#;

    fn write_topo(root: &Path, crag: &str, json: &str) {
        let name = crag.rsplit('/').next().unwrap();
        let dir = root.join(crag);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}{TOPO_SUFFIX}")), json).unwrap();
    }

    fn catalog() -> (TempDir, TopoCatalog) {
        let dir = TempDir::new().unwrap();
        write_topo(dir.path(), "europe/austria/wachau/nasenwand", NASENWAND);
        write_topo(dir.path(), "europe/austria/tirol/martinswand", r#"{ "routes": [] }"#);
        let catalog = TopoCatalog::new(dir.path());
        (dir, catalog)
    }

    #[test]
    fn test_load_crag_page() {
        let (_dir, catalog) = catalog();
        let page = catalog.load("europe/austria/wachau/nasenwand").unwrap();
        assert_eq!(page.path, "europe/austria/wachau/nasenwand");
        assert_eq!(page.topo.name.as_deref(), Some("Nasenwand"));
        assert!(page.route.is_none());
    }

    #[test]
    fn test_load_route_page() {
        let (_dir, catalog) = catalog();
        let page = catalog.load("/europe/austria/wachau/nasenwand/kante/").unwrap();
        assert_eq!(page.path, "europe/austria/wachau/nasenwand");
        assert_eq!(page.route.map(|r| r.id), Some("kante".to_string()));
    }

    #[test]
    fn test_unknown_route_is_error() {
        let (_dir, catalog) = catalog();
        let err = catalog.load("europe/austria/wachau/nasenwand/nope").unwrap_err();
        match err {
            Error::RouteNotFound(path) => assert_eq!(path, "europe/austria/wachau/nasenwand/nope"),
            other => panic!("expected RouteNotFound, got {other:?}"),
        }
        // The crag page itself still loads
        assert!(catalog.load("europe/austria/wachau/nasenwand").unwrap().route.is_none());
    }

    #[test]
    fn test_unknown_crag_is_error() {
        let (_dir, catalog) = catalog();
        let err = catalog.load("europe/italy/arco").unwrap_err();
        assert!(matches!(err, Error::TopoNotFound(_)));
        assert!(matches!(catalog.load("").unwrap_err(), Error::TopoNotFound(_)));
    }

    #[test]
    fn test_malformed_topo_is_json_error() {
        let dir = TempDir::new().unwrap();
        write_topo(dir.path(), "broken", "{ not json");
        let catalog = TopoCatalog::new(dir.path());
        assert!(matches!(catalog.load("broken").unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_entries_list_crags_and_routes() {
        let (dir, catalog) = catalog();
        write_topo(dir.path(), "europe/broken", "{ not json");

        let entries = catalog.entries().unwrap();
        assert_eq!(
            entries,
            vec![
                "europe/austria/tirol/martinswand".to_string(),
                "europe/austria/wachau/nasenwand".to_string(),
                "europe/austria/wachau/nasenwand/kante".to_string(),
                "europe/austria/wachau/nasenwand/riss".to_string(),
                "europe/broken".to_string(),
            ]
        );
    }
}
