use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::core::Canvas;
use crate::foundation::error::{QuizError, QuizResult};

/// Build the font database used for frame text: system fonts plus any extra font directories.
pub fn build_fontdb(font_dirs: &[PathBuf]) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    for dir in font_dirs {
        load_fonts_from_dir(&mut db, dir);
    }
    tracing::debug!(faces = db.len(), "font database ready");
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        tracing::warn!(dir = %dir.display(), "font directory is not readable; skipping");
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(font = %path.display(), "failed to load font: {e}");
        }
    }
}

// Requested families first, then generic fallbacks, then any face at all, so text is never
// silently dropped while the database has at least one face. Frame text never sets
// `font-stretch`, so faces are always queried at normal stretch.
fn font_resolver() -> usvg::FontResolver<'static> {
    use usvg::FontResolver;

    FontResolver {
        select_font: Box::new(|font, fontdb| {
            let mut families = Vec::<usvg::fontdb::Family<'_>>::new();
            for family in font.families() {
                families.push(match family {
                    usvg::FontFamily::Serif => usvg::fontdb::Family::Serif,
                    usvg::FontFamily::SansSerif => usvg::fontdb::Family::SansSerif,
                    usvg::FontFamily::Cursive => usvg::fontdb::Family::Cursive,
                    usvg::FontFamily::Fantasy => usvg::fontdb::Family::Fantasy,
                    usvg::FontFamily::Monospace => usvg::fontdb::Family::Monospace,
                    usvg::FontFamily::Named(s) => usvg::fontdb::Family::Name(s),
                });
            }
            families.push(usvg::fontdb::Family::SansSerif);
            families.push(usvg::fontdb::Family::Serif);

            let style = match font.style() {
                usvg::FontStyle::Normal => usvg::fontdb::Style::Normal,
                usvg::FontStyle::Italic => usvg::fontdb::Style::Italic,
                usvg::FontStyle::Oblique => usvg::fontdb::Style::Oblique,
            };

            let query = usvg::fontdb::Query {
                families: &families,
                weight: usvg::fontdb::Weight(font.weight()),
                stretch: usvg::fontdb::Stretch::Normal,
                style,
            };

            if let Some(id) = fontdb.query(&query) {
                return Some(id);
            }
            fontdb.faces().next().map(|f| f.id)
        }),
        select_fallback: FontResolver::default_fallback_selector(),
    }
}

/// Rasterize an SVG document to straight-alpha RGBA8 at exactly `canvas` size.
pub fn rasterize_svg(
    svg: &str,
    canvas: Canvas,
    fontdb: Arc<usvg::fontdb::Database>,
) -> QuizResult<Vec<u8>> {
    if fontdb.is_empty() {
        return Err(QuizError::render(
            "no fonts available for frame text (install system fonts or set font_dirs)",
        ));
    }

    let opts = usvg::Options {
        fontdb,
        font_resolver: font_resolver(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &opts)
        .map_err(|e| QuizError::render(format!("frame svg is invalid: {e}")))?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| QuizError::render("failed to allocate frame pixmap"))?;

    let sx = canvas.width as f32 / tree.size().width();
    let sy = canvas.height as f32 / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(&tree, xform, &mut pixmap.as_mut());

    let mut rgba = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    Ok(rgba)
}

/// Encode RGBA8 pixels as PNG at `path`, replacing any existing file, and verify it landed.
pub fn write_png(path: &Path, rgba: &[u8], canvas: Canvas) -> QuizResult<()> {
    let expected = canvas.width as usize * canvas.height as usize * 4;
    if rgba.len() != expected {
        return Err(QuizError::render(format!(
            "frame buffer has {} bytes, expected {expected} for {}x{}",
            rgba.len(),
            canvas.width,
            canvas.height
        )));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create frame directory '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        rgba,
        canvas.width,
        canvas.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|e| QuizError::render(format!("write png '{}': {e}", path.display())))?;

    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(QuizError::render(format!(
            "frame file '{}' missing after write",
            path.display()
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
