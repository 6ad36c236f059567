use thiserror::Error;

/// Geometry that cannot be drawn with the configured design constants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Degenerate rectangle for {element}: {width}x{height}")]
    Degenerate {
        element: &'static str,
        width: i32,
        height: i32,
    },

    #[error("Rectangle for {element} falls outside the {canvas_width}x{canvas_height} canvas")]
    OutOfBounds {
        element: &'static str,
        canvas_width: u32,
        canvas_height: u32,
    },

    #[error("Panel {element} needs at least one row")]
    NoRows { element: &'static str },
}

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Invalid layout configuration: {0}")]
    Layout(#[from] LayoutError),

    #[error("Failed to load font: {0}")]
    FontLoad(String),

    #[error("Identity resolution error: {0}")]
    Identity(#[from] IdentityError),

    #[error("PNG encoding error: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Cannot resolve an identity for an empty player name")]
    EmptyName,
}

/// Failure to obtain a bitmap for a logo or headshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Undecodable image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("No bitmap available for {0}")]
    Unavailable(String),
}

/// Failure of the remote player-id lookup service.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Lookup request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Lookup service returned HTTP {0}")]
    Status(u16),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing column {column} in {table}")]
    MissingColumn { table: &'static str, column: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}
