use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type ParseResult<T> = std::result::Result<T, ParseError>;
pub type SignResult<T> = std::result::Result<T, SignError>;
pub type TokenReaderResult<T> = std::result::Result<T, TokenReaderError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("token acquisition failed : {0}")]
    TokenReader(#[from] TokenReaderError),
    #[error("OAuth sign failed : {0}")]
    Signer(#[from] SignError),
    #[error("key-value parse failed : {0}")]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("failed to find '=' in key-value pair : {0:?}")]
    MissingSeparator(String),
}

#[derive(Error, Debug, Clone)]
pub enum SignError {
    #[error("unsupported HTTP method : {0}, signing accepts GET, POST, PUT and DELETE")]
    UnsupportedMethod(String),
    #[error("request URL could not be parsed : {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Error, Debug, Clone)]
pub enum TokenReaderError {
    #[error("response has malformed format: not found {0} in {1}")]
    TokenKeyNotFound(&'static str, String),
    #[error("response has malformed format: {0}")]
    Malformed(#[from] ParseError),
}
