//! Question and answer frame rendering.
//!
//! A frame is laid out into plain geometry ([`layout`]), serialized as SVG ([`svg`]) and
//! rasterized with `resvg` into a PNG ([`raster`]).

/// Resolved frame geometry.
pub mod layout;
/// SVG rasterization and PNG output.
pub mod raster;
/// Frame styling (texts, colours, wrap budgets).
pub mod style;
/// Layout to SVG serialization.
pub mod svg;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::foundation::core::{Canvas, Role};
use crate::foundation::error::QuizResult;
use crate::quiz::model::Quiz;

pub use layout::{FrameLayout, TextClass, TextLine, layout_answer, layout_question};
pub use style::{FrameStyle, Palette, WrapBudgets};

/// Coordinate space the frame layout is designed in; output canvases scale from it.
pub const DESIGN_CANVAS: Canvas = Canvas::VERTICAL_HD;

/// A rendered still image for one phase of the video.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub role: Role,
    pub path: PathBuf,
    pub canvas: Canvas,
}

/// Produces the question and answer frames of one quiz.
pub trait FrameSource: Send + Sync {
    /// Write both frames, returning them in role order.
    fn render_pair(
        &self,
        quiz: &Quiz,
        question_path: &Path,
        answer_path: &Path,
    ) -> QuizResult<[Frame; 2]>;
}

/// Renders quiz frames at a fixed canvas size.
pub struct FrameRenderer {
    canvas: Canvas,
    style: FrameStyle,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl std::fmt::Debug for FrameRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameRenderer")
            .field("canvas", &self.canvas)
            .field("font_faces", &self.fontdb.len())
            .finish_non_exhaustive()
    }
}

impl FrameRenderer {
    /// Create a renderer, loading system fonts and `style.font_dirs`.
    pub fn new(canvas: Canvas, style: FrameStyle) -> QuizResult<Self> {
        let fontdb = raster::build_fontdb(&style.font_dirs);
        Self::with_fontdb(canvas, style, fontdb)
    }

    /// Create a renderer with a prepared font database.
    pub fn with_fontdb(
        canvas: Canvas,
        style: FrameStyle,
        fontdb: Arc<usvg::fontdb::Database>,
    ) -> QuizResult<Self> {
        canvas.validate()?;
        style.validate()?;
        Ok(Self {
            canvas,
            style,
            fontdb,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn style(&self) -> &FrameStyle {
        &self.style
    }

    /// Resolve the layout of one frame in design space, without rasterizing it.
    pub fn layout(&self, role: Role, quiz: &Quiz) -> FrameLayout {
        match role {
            Role::Question => layout_question(quiz, DESIGN_CANVAS, &self.style),
            Role::Answer => layout_answer(quiz, DESIGN_CANVAS, &self.style),
        }
    }

    /// SVG document for one frame, sized to the output canvas.
    pub fn svg(&self, role: Role, quiz: &Quiz) -> String {
        svg::frame_svg(&self.layout(role, quiz), &self.style, self.canvas)
    }

    /// Render one frame to `out_path`, overwriting any previous file there.
    #[tracing::instrument(skip(self, quiz), fields(path = %out_path.display()))]
    pub fn render(&self, role: Role, quiz: &Quiz, out_path: &Path) -> QuizResult<Frame> {
        let svg = self.svg(role, quiz);
        let rgba = raster::rasterize_svg(&svg, self.canvas, Arc::clone(&self.fontdb))?;
        raster::write_png(out_path, &rgba, self.canvas)?;
        tracing::debug!("frame written");
        Ok(Frame {
            role,
            path: out_path.to_path_buf(),
            canvas: self.canvas,
        })
    }

    /// Render the question and answer frames concurrently.
    ///
    /// Returns the frames in role order; the first error wins.
    pub fn render_pair(
        &self,
        quiz: &Quiz,
        question_path: &Path,
        answer_path: &Path,
    ) -> QuizResult<[Frame; 2]> {
        let (question, answer) = rayon::join(
            || self.render(Role::Question, quiz, question_path),
            || self.render(Role::Answer, quiz, answer_path),
        );
        Ok([question?, answer?])
    }
}

impl FrameSource for FrameRenderer {
    fn render_pair(
        &self,
        quiz: &Quiz,
        question_path: &Path,
        answer_path: &Path,
    ) -> QuizResult<[Frame; 2]> {
        FrameRenderer::render_pair(self, quiz, question_path, answer_path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
