use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use rusttype::Font;

use crate::foundation::error::{CartelloError, CartelloResult};

/// The template ids shipped with the standard deployment. Each base frame
/// comes with an empty variant (suffix `_vuoto`) carrying no body artwork.
pub const STANDARD_TEMPLATE_IDS: [(&str, bool); 6] = [
    ("DMI", false),
    ("DMI_vuoto", true),
    ("informatica", false),
    ("informatica_vuoto", true),
    ("matematica", false),
    ("matematica_vuoto", true),
];

/// Identifier of a foreground template, validated against the catalog.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap a raw catalog key.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw catalog key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable catalog entry: a foreground frame with transparency and the
/// default background substituted when the user uploads none.
#[derive(Clone, Debug)]
pub struct Template {
    /// Catalog key.
    pub id: TemplateId,
    /// Whether this is the empty variant of its base frame.
    pub empty_variant: bool,
    /// Path of the foreground PNG; its alpha channel masks the paste.
    pub foreground: PathBuf,
    /// Path of the background used when the session carries no upload.
    pub default_background: PathBuf,
}

/// Immutable mapping from template id to its image resources, loaded once at
/// startup and shared read-only by every session.
///
/// The rasterization font is loaded here as well: a missing or unparsable
/// font file fails construction, so it can never surface as a per-render
/// error later.
#[derive(Debug)]
pub struct TemplateCatalog {
    templates: BTreeMap<String, Template>,
    font: Font<'static>,
}

impl TemplateCatalog {
    /// Load a catalog rooted at `images_root`, expecting `template_<id>.png`
    /// and `bg_<id>.png` per entry, plus the TTF font at `font_path`.
    pub fn load(
        images_root: impl Into<PathBuf>,
        font_path: impl AsRef<Path>,
        ids: &[(&str, bool)],
    ) -> CartelloResult<Self> {
        let images_root = images_root.into();
        let font_path = font_path.as_ref();

        let font_bytes = std::fs::read(font_path)
            .with_context(|| format!("reading font {}", font_path.display()))?;
        let font = Font::try_from_vec(font_bytes).ok_or_else(|| {
            CartelloError::resource_missing(format!(
                "font {} is not a parsable TTF",
                font_path.display()
            ))
        })?;

        let mut templates = BTreeMap::new();
        for &(id, empty_variant) in ids {
            let foreground = images_root.join(format!("template_{id}.png"));
            let default_background = images_root.join(format!("bg_{id}.png"));
            for path in [&foreground, &default_background] {
                if !path.exists() {
                    return Err(CartelloError::resource_missing(format!(
                        "template resource {} does not exist",
                        path.display()
                    )));
                }
            }
            templates.insert(
                id.to_string(),
                Template {
                    id: TemplateId::new(id),
                    empty_variant,
                    foreground,
                    default_background,
                },
            );
        }

        Ok(Self { templates, font })
    }

    /// Load the six standard entries.
    pub fn load_standard(
        images_root: impl Into<PathBuf>,
        font_path: impl AsRef<Path>,
    ) -> CartelloResult<Self> {
        Self::load(images_root, font_path, &STANDARD_TEMPLATE_IDS)
    }

    /// Resolve an id picked by the user. Unknown ids are invalid input, not
    /// a missing resource: the catalog validated its files at startup.
    pub fn get(&self, id: &str) -> CartelloResult<&Template> {
        self.templates
            .get(id)
            .ok_or_else(|| CartelloError::invalid_input(format!("unknown template id {id:?}")))
    }

    /// Catalog keys in stable order, for building the selection keyboard.
    pub fn ids(&self) -> impl Iterator<Item = &TemplateId> {
        self.templates.values().map(|t| &t.id)
    }

    /// The shared rasterization font.
    pub fn font(&self) -> &Font<'static> {
        &self.font
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/templates.rs"]
mod tests;
