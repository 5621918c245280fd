use std::fmt;

use crate::foundation::error::{QuizError, QuizResult};

/// Phase of the video a frame or narration asset belongs to.
///
/// The declaration order is the playback order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Question,
    Answer,
}

impl Role {
    /// Both roles in playback order.
    pub const ALL: [Role; 2] = [Role::Question, Role::Answer];

    /// Lowercase name used in file names and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Question => "question",
            Role::Answer => "answer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed output canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// 9:16 vertical canvas used for shorts.
    pub const VERTICAL_HD: Canvas = Canvas {
        width: 1080,
        height: 1920,
    };

    /// Reject zero or odd dimensions (yuv420p needs even sizes).
    pub fn validate(self) -> QuizResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(QuizError::validation("canvas width/height must be non-zero"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(QuizError::validation(
                "canvas width/height must be even (required for yuv420p output)",
            ));
        }
        Ok(())
    }

    pub fn center_x(self) -> f64 {
        f64::from(self.width) / 2.0
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::VERTICAL_HD
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> QuizResult<Self> {
        if num == 0 || den == 0 {
            return Err(QuizError::validation("fps num/den must be non-zero"));
        }
        Ok(Self { num, den })
    }

    /// `ffmpeg` rate argument (`30` or `30000/1001`).
    pub fn to_ffmpeg_arg(self) -> String {
        if self.den == 1 {
            self.num.to_string()
        } else {
            format!("{}/{}", self.num, self.den)
        }
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 30, den: 1 }
    }
}

/// Identifier unique to one pipeline run.
///
/// Every ephemeral file name is derived from it so that concurrent runs never share paths.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RunId(String);

impl RunId {
    /// UTC timestamp plus a random suffix, e.g. `20261019T090000-3f2a9c1d`.
    pub fn generate() -> Self {
        let ts = chrono::Utc::now().format("%Y%m%dT%H%M%S");
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{ts}-{}", &suffix[..8]))
    }

    /// Use an externally supplied identifier. Only `[A-Za-z0-9_-]` is accepted.
    pub fn parse(raw: &str) -> QuizResult<Self> {
        if raw.is_empty() {
            return Err(QuizError::validation("run id must be non-empty"));
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(QuizError::validation(format!(
                "run id '{raw}' may only contain ASCII letters, digits, '-' and '_'"
            )));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
