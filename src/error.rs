#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Failed to allocate {requested} hash slots")]
    AllocationFailure { requested: usize },

    #[error("Hash table capacity must be positive, got {0}")]
    InvalidCapacity(usize),

    #[error("Hash table full while inserting '{word}'")]
    TableFull { word: String },

    #[error("Failed to resize hash table from {from} to {to} slots")]
    ResizeFailure { from: usize, to: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Corpus has {words} words but {positions} position lists")]
    CorpusMismatch { words: usize, positions: usize },

    #[error("Corpus word '{word}' appears more than once")]
    DuplicateCorpusWord { word: String },

    #[error("Keyword list is empty")]
    EmptyKeywordList,

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
