extern crate anyhow;
extern crate reqwest;
extern crate serde_json;
extern crate std;

pub type PtvSelectResult<T> = std::result::Result<T, PtvSelectError>;

#[derive(Debug)]
pub enum PtvSelectError {
    HttpError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    OtherError(anyhow::Error),
}

pub fn make_error(msg: &str) -> PtvSelectError {
    return PtvSelectError::OtherError(anyhow::Error::msg(msg.to_string()));
}

impl std::fmt::Display for PtvSelectError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            PtvSelectError::HttpError(ref err) => {
                return write!(f, "HTTP Error: {}", err);
            },
            PtvSelectError::IoError(ref err) => {
                return write!(f, "IO Error: {}", err);
            },
            PtvSelectError::JsonError(ref err) => {
                return write!(f, "JSON Error: {}", err);
            },
            PtvSelectError::OtherError(ref err) => {
                return write!(f, "{:#}", err);
            },
        }
    }
}

impl std::error::Error for PtvSelectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            PtvSelectError::HttpError(ref err) => Some(err),
            PtvSelectError::IoError(ref err) => Some(err),
            PtvSelectError::JsonError(ref err) => Some(err),
            PtvSelectError::OtherError(_) => None,
        }
    }
}

impl From<reqwest::Error> for PtvSelectError {
    fn from(err: reqwest::Error) -> PtvSelectError {
        return PtvSelectError::HttpError(err);
    }
}

impl From<std::io::Error> for PtvSelectError {
    fn from(err: std::io::Error) -> PtvSelectError {
        return PtvSelectError::IoError(err);
    }
}

impl From<serde_json::Error> for PtvSelectError {
    fn from(err: serde_json::Error) -> PtvSelectError {
        return PtvSelectError::JsonError(err);
    }
}

impl From<anyhow::Error> for PtvSelectError {
    fn from(err: anyhow::Error) -> PtvSelectError {
        return PtvSelectError::OtherError(err);
    }
}
