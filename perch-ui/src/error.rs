use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DropdownError {
    #[error("Dropdown is not open")]
    NotOpen,
    #[error("Invalid dropdown options: {0}")]
    InvalidOptions(String),
}
