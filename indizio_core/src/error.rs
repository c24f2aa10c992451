use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Tile index out of range")]
    InvalidTile,
    #[error("Round already over, no new moves are accepted")]
    RoundOver,
    #[error("Round is not cleared, cannot advance")]
    NotCleared,
    #[error("Round setup is inconsistent")]
    BadSetup,
}

pub type Result<T> = std::result::Result<T, GameError>;
