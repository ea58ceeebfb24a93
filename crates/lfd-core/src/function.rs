//! Function references and their download locations.

use std::fmt;

/// Suffix appended to a function name to form the artifact file name.
pub const ARTIFACT_SUFFIX: &str = ".zip";

/// Name of one deployed function, as returned by the listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionRef {
    name: String,
}

impl FunctionRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `<name>.zip`. The name is used verbatim: no decoding, no sanitizing.
    pub fn artifact_file_name(&self) -> String {
        format!("{}{}", self.name, ARTIFACT_SUFFIX)
    }
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Presigned, time-limited URL of a function's deployment package.
#[derive(Clone, PartialEq, Eq)]
pub struct DownloadLocation(String);

impl DownloadLocation {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Scheme, host and path only. Presigned query strings carry credentials
    /// and must not end up in logs.
    pub fn redacted(&self) -> String {
        match url::Url::parse(&self.0) {
            Ok(mut u) => {
                u.set_query(None);
                u.set_fragment(None);
                let _ = u.set_password(None);
                let _ = u.set_username("");
                u.to_string()
            }
            Err(_) => "<unparseable url>".to_string(),
        }
    }
}

impl fmt::Debug for DownloadLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DownloadLocation")
            .field(&self.redacted())
            .finish()
    }
}
