use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordgenError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
