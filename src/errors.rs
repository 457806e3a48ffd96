use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntelMapError {
    #[error("invalid room name {0:?}")]
    InvalidRoomName(String),
    #[error("rooms info is missing or invalid: {0}")]
    InvalidRoomsInfo(String),
    #[error("invalid render options: {0}")]
    InvalidOptions(String),
}
