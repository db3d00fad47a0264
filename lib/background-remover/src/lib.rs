pub mod config;
pub mod remover;

pub use config::RemoverConfig;
pub use remover::{
    CutoutStats, TRANSPARENT_WHITE, WHITE_THRESHOLD, clear_white_pixels, is_near_white,
    remove_white_background,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Input image not found: {0}")]
    InputNotFound(std::path::PathBuf),

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: std::path::PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: std::path::PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
