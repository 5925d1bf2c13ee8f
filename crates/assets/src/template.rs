//! Map file naming.

use std::path::{Path, PathBuf};

pub const INDEX_PLACEHOLDER: &str = "{index}";

pub const DEFAULT_HEIGHT_TEMPLATE: &str = "map{index}.height.png";
pub const DEFAULT_COLOR_TEMPLATE: &str = "map{index}.color.png";

/// A file name with an optional `{index}` placeholder, e.g. `map{index}.height.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapTemplate {
    pattern: String,
}

impl MapTemplate {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.pattern.contains(INDEX_PLACEHOLDER)
    }

    /// Substitute every placeholder with `index`.
    pub fn file_name(&self, index: u32) -> String {
        self.pattern.replace(INDEX_PLACEHOLDER, &index.to_string())
    }

    pub fn resolve(&self, dir: &Path, index: u32) -> PathBuf {
        dir.join(self.file_name(index))
    }
}

/// Height and color file paths for map `index` under `dir`.
pub fn map_paths(
    dir: &Path,
    height: &MapTemplate,
    color: &MapTemplate,
    index: u32,
) -> (PathBuf, PathBuf) {
    (height.resolve(dir, index), color.resolve(dir, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_index() {
        let t = MapTemplate::new(DEFAULT_HEIGHT_TEMPLATE);
        assert!(t.has_placeholder());
        assert_eq!(t.file_name(0), "map0.height.png");
        assert_eq!(t.file_name(12), "map12.height.png");
    }

    #[test]
    fn template_without_placeholder_is_literal() {
        let t = MapTemplate::new("terrain.png");
        assert!(!t.has_placeholder());
        assert_eq!(t.file_name(3), "terrain.png");
    }

    #[test]
    fn resolves_pair_under_directory() {
        let (h, c) = map_paths(
            Path::new("maps"),
            &MapTemplate::new(DEFAULT_HEIGHT_TEMPLATE),
            &MapTemplate::new(DEFAULT_COLOR_TEMPLATE),
            2,
        );
        assert_eq!(h, Path::new("maps").join("map2.height.png"));
        assert_eq!(c, Path::new("maps").join("map2.color.png"));
    }
}
