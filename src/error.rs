use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CatalogError {
    #[error("Project {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    #[error("Project {index} (\"{title}\") has an invalid href \"{href}\": {source}")]
    InvalidHref {
        index: usize,
        title: &'static str,
        href: &'static str,
        source: url::ParseError,
    },

    #[error("Project {index} (\"{title}\") has an invalid imgSrc \"{img_src}\": {reason}")]
    InvalidImgSrc {
        index: usize,
        title: &'static str,
        img_src: &'static str,
        reason: &'static str,
    },
}

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings structure is incorrect: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("Catalog is malformed: {0}")]
    Catalog(#[from] CatalogError),
}

pub type Result<T> = std::result::Result<T, FolioError>;
