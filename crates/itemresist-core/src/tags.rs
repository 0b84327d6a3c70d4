//! Classification tag loading
//!
//! Tags are RON files laid out like data-pack block tags:
//! `<data_dir>/<namespace>/tags/blocks/<path>.ron`
//!
//! ```ron
//! (
//!     replace: false,
//!     values: [
//!         "minecraft:bedrock",
//!         (id: "othermod:reinforced_glass", required: false),
//!     ],
//! )
//! ```
//!
//! Both tags are optional: a missing file contributes nothing. Data
//! directories are applied in order; a file with `replace: true` discards
//! whatever earlier directories contributed.

use ahash::AHashSet;
use itemresist_materials::{DEFAULT_NAMESPACE, MaterialId, Materials};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classify::{ClassificationSets, FORCE_EXPLODE_TAG, FORCE_RESIST_TAG};
use crate::error::TagError;

/// One entry in a tag's value list
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagEntry {
    /// Material name that must resolve
    Id(String),
    /// Material name that may be skipped when it does not resolve
    Entry { id: String, required: bool },
}

impl TagEntry {
    pub fn id(&self) -> &str {
        match self {
            TagEntry::Id(id) | TagEntry::Entry { id, .. } => id,
        }
    }

    pub fn required(&self) -> bool {
        match self {
            TagEntry::Id(_) => true,
            TagEntry::Entry { required, .. } => *required,
        }
    }
}

/// Contents of a single tag file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TagFile {
    #[serde(default)]
    pub replace: bool,
    #[serde(default)]
    pub values: Vec<TagEntry>,
}

impl TagFile {
    /// Parse tag file contents; `path` is only used for error reporting
    pub fn parse(source: &str, path: &Path) -> Result<Self, TagError> {
        ron::from_str(source).map_err(|source| TagError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a tag file, `None` if it does not exist
    pub fn from_file(path: &Path) -> Result<Option<Self>, TagError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(TagError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&content, path).map(Some)
    }

    /// Resolve entry names against the material registry
    pub fn resolve(&self, tag: &str, materials: &Materials) -> Result<Vec<MaterialId>, TagError> {
        let mut resolved = Vec::with_capacity(self.values.len());

        for entry in &self.values {
            let name = entry.id();
            let problem = match materials.by_name(name) {
                Some(id) if materials.is_placeable(id) => {
                    resolved.push(id);
                    continue;
                }
                Some(_) => TagError::NotPlaceable {
                    tag: tag.to_string(),
                    name: name.to_string(),
                },
                None => TagError::UnknownMaterial {
                    tag: tag.to_string(),
                    name: name.to_string(),
                },
            };

            if entry.required() {
                return Err(problem);
            }
            log::warn!("Skipping optional tag entry: {}", problem);
        }

        Ok(resolved)
    }
}

/// Resolves the classification tags from one or more data directories
#[derive(Clone, Debug, Default)]
pub struct TagLoader {
    data_dirs: Vec<PathBuf>,
}

impl TagLoader {
    pub fn new<P: Into<PathBuf>>(data_dirs: impl IntoIterator<Item = P>) -> Self {
        Self {
            data_dirs: data_dirs.into_iter().map(Into::into).collect(),
        }
    }

    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.data_dirs
    }

    /// File holding `tag` inside `data_dir`
    pub fn tag_path(data_dir: &Path, tag: &str) -> PathBuf {
        let (namespace, path) = tag.split_once(':').unwrap_or((DEFAULT_NAMESPACE, tag));
        data_dir
            .join(namespace)
            .join("tags")
            .join("blocks")
            .join(format!("{path}.ron"))
    }

    /// Load a single tag, layering all data directories
    pub fn load_tag(&self, tag: &str, materials: &Materials) -> Result<AHashSet<MaterialId>, TagError> {
        let mut values = AHashSet::new();

        for dir in &self.data_dirs {
            let path = Self::tag_path(dir, tag);
            let Some(file) = TagFile::from_file(&path)? else {
                log::debug!("No {} tag at {}", tag, path.display());
                continue;
            };

            if file.replace {
                values.clear();
            }
            values.extend(file.resolve(tag, materials)?);
        }

        Ok(values)
    }

    /// Load both classification tags
    pub fn load(&self, materials: &Materials) -> Result<ClassificationSets, TagError> {
        let force_destroy = self.load_tag(FORCE_EXPLODE_TAG, materials)?;
        let force_survive = self.load_tag(FORCE_RESIST_TAG, materials)?;
        let sets = ClassificationSets::new(force_destroy, force_survive);

        for id in sets.overlapping() {
            log::warn!(
                "{} is in both {} and {}; drops will survive",
                materials.get(id).name,
                FORCE_RESIST_TAG,
                FORCE_EXPLODE_TAG
            );
        }

        log::info!(
            "Loaded {} force_explode and {} force_resist materials",
            sets.force_destroy().len(),
            sets.force_survive().len()
        );

        Ok(sets)
    }
}
