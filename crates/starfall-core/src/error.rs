use std::fmt;
use std::path::PathBuf;

/// Failure to load or validate a `SimConfig`.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    UnknownSprite {
        name: String,
    },
    DuplicateSprite {
        name: String,
    },
    ZeroFrameWidth {
        name: String,
    },
    SheetNarrowerThanFrame {
        name: String,
        sheet_width: u32,
        frame_width: u32,
    },
    InvalidFps {
        name: String,
        fps: f32,
    },
    NonPositive {
        field: &'static str,
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "malformed config: {err}"),
            Self::UnknownSprite { name } => write!(f, "sprite '{name}' is not in the catalog"),
            Self::DuplicateSprite { name } => {
                write!(f, "sprite '{name}' appears more than once in the catalog")
            }
            Self::ZeroFrameWidth { name } => write!(f, "sprite '{name}' has a zero frame width"),
            Self::SheetNarrowerThanFrame {
                name,
                sheet_width,
                frame_width,
            } => write!(
                f,
                "sprite '{name}' sheet width {sheet_width} is smaller than its frame width {frame_width}"
            ),
            Self::InvalidFps { name, fps } => write!(f, "sprite '{name}' has invalid fps {fps}"),
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}
