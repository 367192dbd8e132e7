use std::{fmt::Display, fs, io, path::PathBuf};

use log::info;
use thiserror::Error;

/// graphql-js release the Haxe definitions are generated from by default.
pub const DEFAULT_VERSION_TAG: &str = "v0.13.2";

/// Where a locally served copy of `ast.js` is expected during development.
pub const DEFAULT_LOCAL: &str = "http://127.0.0.1/ast.js";

/// Where to read the Flow AST definitions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// `src/language/ast.js` of graphql-js on GitHub, pinned to a tag.
    Remote {
        /// The git tag, e.g. `v0.13.2`.
        version_tag: String,
    },

    /// A development copy, given as an `http(s)://` URL or a file path.
    Local {
        /// URL or path of the copy.
        location: String,
    },
}

/// Failure to retrieve the input text. Nothing is translated when this happens.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("failed to fetch {url}: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The transport error.
        #[source]
        source: Box<ureq::Error>,
    },

    /// The server answered with something other than 200.
    #[error("failed to fetch {url}: HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The status code received.
        status: u16,
    },

    /// The response body could not be read as UTF-8 text.
    #[error("failed to read response body of {url}: {source}")]
    Body {
        /// The requested URL.
        url: String,
        /// The read error.
        #[source]
        source: io::Error,
    },

    /// The local file is missing or unreadable.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The read error.
        #[source]
        source: io::Error,
    },
}

impl Default for Source {
    fn default() -> Self {
        Source::remote(DEFAULT_VERSION_TAG)
    }
}

impl Source {
    /// The GitHub copy for `version_tag`.
    pub fn remote(version_tag: impl Into<String>) -> Self {
        Source::Remote {
            version_tag: version_tag.into(),
        }
    }

    /// A development copy at `location`.
    pub fn local(location: impl Into<String>) -> Self {
        Source::Local {
            location: location.into(),
        }
    }

    /// The URL or path that is read, also recorded in the generated banner.
    pub fn url(&self) -> String {
        match self {
            Source::Remote { version_tag } => format!(
                "https://raw.githubusercontent.com/graphql/graphql-js/{}/src/language/ast.js",
                version_tag
            ),
            Source::Local { location } => location.clone(),
        }
    }

    /// Retrieves the full input text.
    pub fn fetch(&self) -> Result<String, FetchError> {
        let url = self.url();
        info!("reading {}", url);

        let text = match self {
            Source::Remote { .. } => fetch_url(&url)?,
            Source::Local { location } if is_http(location) => fetch_url(location)?,
            Source::Local { location } => {
                let path = PathBuf::from(location.strip_prefix("file://").unwrap_or(location));
                fs::read_to_string(&path).map_err(|source| FetchError::Io { path, source })?
            }
        };

        info!("read {} bytes", text.len());
        Ok(text)
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Remote { version_tag } => write!(f, "graphql-js {}", version_tag),
            Source::Local { location } => write!(f, "local copy at {}", location),
        }
    }
}

fn is_http(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

fn fetch_url(url: &str) -> Result<String, FetchError> {
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => FetchError::Status {
            url: url.to_string(),
            status,
        },
        e => FetchError::Http {
            url: url.to_string(),
            source: Box::new(e),
        },
    })?;

    if response.status() != 200 {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.into_string().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })
}
