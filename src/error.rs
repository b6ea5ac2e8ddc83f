use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Grid must be at least {min}x{min}, got {height}x{width}")]
    GridTooSmall {
        height: usize,
        width: usize,
        min: usize,
    },

    #[error(
        "Underpopulation threshold ({underpopulation}) can't exceed overpopulation threshold ({overpopulation})"
    )]
    ThresholdsInverted {
        underpopulation: u8,
        overpopulation: u8,
    },

    #[error(
        "Birth threshold {birth} is outside [{underpopulation}, {overpopulation}], new cells would never be born"
    )]
    BirthOutOfRange {
        birth: u8,
        underpopulation: u8,
        overpopulation: u8,
    },

    #[error("Invalid seed \"{value}\", expected an unsigned integer")]
    InvalidSeed { value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Bad configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),
}
