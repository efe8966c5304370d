#[derive(Debug)]
pub enum SliceError {
    InvalidArgument(&'static str),
}

impl std::fmt::Display for SliceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SliceError::InvalidArgument(reason) => {
                write!(f, "invalid slice argument: {}", reason)
            }
        }
    }
}

impl std::error::Error for SliceError {}
