use crate::utils::error::FetchError;
use reqwest::Method;
use std::fmt;
use std::str::FromStr;

/// HTTP verb accepted by the fetch helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Get,
    Post,
    Delete,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Get => "GET",
            Mode::Post => "POST",
            Mode::Delete => "DELETE",
        }
    }

    pub fn as_method(&self) -> Method {
        match self {
            Mode::Get => Method::GET,
            Mode::Post => Method::POST,
            Mode::Delete => Method::DELETE,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FetchError;

    // 大小寫不敏感，"post" 與 "POST" 視為相同
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Mode::Get),
            "POST" => Ok(Mode::Post),
            "DELETE" => Ok(Mode::Delete),
            _ => Err(FetchError::UnsupportedMethodError(s.to_string())),
        }
    }
}
