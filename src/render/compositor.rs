use std::{io::Cursor, path::Path, sync::Arc};

use anyhow::Context;
use image::{ImageFormat, Rgba, RgbaImage, imageops};
use rand::Rng;
use rusttype::{Font, Scale};

use crate::{
    catalog::{templates::TemplateCatalog, workspace::Workspace},
    config::settings::{ImageSettings, SharedSettings},
    foundation::{
        core::{PixelSize, UserId},
        error::{CartelloError, CartelloResult},
    },
    layout::{
        fit::{FitPlan, fit_background},
        text::{stack_blocks, wrap_text},
    },
    render::{blur, glyphs},
};
use crate::session::model::Draft;

/// Fraction of the canvas width available to a text line, in percent.
const TEXT_WIDTH_PCT: u32 = 90;

/// Builds the final raster image from a background, a foreground template
/// and the two text blocks.
///
/// Every render restarts from the original sources; a re-render with a
/// different crop offset never operates on a previously composited image,
/// so blur and overlay artifacts cannot compound.
pub struct Compositor {
    catalog: Arc<TemplateCatalog>,
    settings: SharedSettings,
    workspace: Workspace,
}

impl Compositor {
    /// Wire the compositor to its shared collaborators.
    pub fn new(catalog: Arc<TemplateCatalog>, settings: SharedSettings, workspace: Workspace) -> Self {
        Self {
            catalog,
            settings,
            workspace,
        }
    }

    /// Render the draft for `user` and persist it at the session's output
    /// path, overwriting any prior render. Returns the encoded PNG bytes.
    ///
    /// The background is the user's upload when one exists on disk (blurred
    /// by the configured radius), else the template's default background
    /// (never blurred). Random-mode windows are drawn from `rng` on every
    /// call.
    #[tracing::instrument(skip(self, draft, rng), fields(user = %user, template = %draft.template))]
    pub fn render(
        &self,
        user: UserId,
        draft: &Draft,
        rng: &mut impl Rng,
    ) -> CartelloResult<Vec<u8>> {
        let settings = self.settings.snapshot();
        let template = self.catalog.get(draft.template.as_str())?;

        let fg = open_rgba(&template.foreground)?;
        let target = PixelSize::new(fg.width(), fg.height())?;

        let bg_path = self.workspace.background_path(user);
        let bg = if bg_path.exists() {
            let uploaded = open_rgba(&bg_path)?;
            blur::blur_rgba(&uploaded, settings.blur)
        } else {
            open_rgba(&template.default_background)?
        };

        let mut canvas = fit_to_target(bg, target, draft, rng)?;
        imageops::overlay(&mut canvas, &fg, 0, 0);
        draw_text_blocks(&mut canvas, &settings, self.catalog.font(), draft);

        let mut bytes = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| CartelloError::render(format!("encoding composite: {e}")))?;

        let out = self.workspace.output_path(user);
        std::fs::write(&out, &bytes)
            .with_context(|| format!("writing composite {}", out.display()))?;
        tracing::debug!(path = %out.display(), "composite rendered");
        Ok(bytes)
    }
}

fn fit_to_target(
    bg: RgbaImage,
    target: PixelSize,
    draft: &Draft,
    rng: &mut impl Rng,
) -> CartelloResult<RgbaImage> {
    let bg_size = PixelSize::new(bg.width(), bg.height())?;
    let offset = draft.fit.offset().unwrap_or_default();
    let plan = fit_background(bg_size, target, draft.fit.mode(), offset, rng);

    Ok(match plan {
        FitPlan::Stretch => imageops::resize(
            &bg,
            target.width,
            target.height,
            imageops::FilterType::CatmullRom,
        ),
        FitPlan::Window { scaled, window } => {
            let scaled_bg = if scaled == bg_size {
                bg
            } else {
                imageops::resize(
                    &bg,
                    scaled.width,
                    scaled.height,
                    imageops::FilterType::CatmullRom,
                )
            };
            imageops::crop_imm(&scaled_bg, window.x, window.y, window.width, window.height)
                .to_image()
        }
    })
}

fn draw_text_blocks(
    canvas: &mut RgbaImage,
    settings: &ImageSettings,
    font: &Font<'_>,
    draft: &Draft,
) {
    let max_width = canvas.width() * TEXT_WIDTH_PCT / 100;
    let title_scale = Scale::uniform(settings.font_size_title as f32);
    let caption_scale = Scale::uniform(settings.font_size_caption as f32);

    let title_lines = wrap_text(&draft.title, max_width, |s| {
        glyphs::line_width(font, title_scale, s)
    });
    let caption_lines = wrap_text(&draft.caption, max_width, |s| {
        glyphs::line_width(font, caption_scale, s)
    });

    let title_lh = glyphs::line_height(font, title_scale);
    let caption_lh = glyphs::line_height(font, caption_scale);
    let anchors = stack_blocks(title_lines.len(), title_lh, canvas.height());

    let white = Rgba([255, 255, 255, 255]);
    let mut y = anchors.title_y;
    for line in &title_lines {
        glyphs::draw_line_centered(canvas, font, title_scale, y, line, white);
        y += title_lh as i32;
    }
    let mut y = anchors.caption_y;
    for line in &caption_lines {
        glyphs::draw_line_centered(canvas, font, caption_scale, y, line, white);
        y += caption_lh as i32;
    }
}

fn open_rgba(path: &Path) -> CartelloResult<RgbaImage> {
    let img = image::open(path).map_err(|e| {
        CartelloError::resource_missing(format!("opening {}: {e}", path.display()))
    })?;
    Ok(img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
