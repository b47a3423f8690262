//! REST route templates attached to model descriptors
//!
//! Templates are written the way the transport layer expects them,
//! e.g. `"GET /api/facilities/{id}"`. This module only parses and renders
//! them; issuing requests is the transport's job.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single REST endpoint: method plus path with optional `{id}` placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteTemplate {
    pub method: HttpMethod,
    pub path: &'static str,
}

impl RouteTemplate {
    /// Parse a `"<METHOD> <path>"` template.
    ///
    /// Meant for descriptor constants: a malformed template fails the build
    /// when evaluated in a `const` and panics otherwise.
    pub const fn parse(template: &'static str) -> Self {
        let bytes = template.as_bytes();
        let mut i = 0;
        while i < HttpMethod::ALL.len() {
            let method = HttpMethod::ALL[i];
            let prefix = method.as_str().as_bytes();
            if has_method_prefix(bytes, prefix) {
                let (_, path) = bytes.split_at(prefix.len() + 1);
                if path.is_empty() || path[0] != b'/' {
                    panic!("route path must start with '/'");
                }
                let path = match std::str::from_utf8(path) {
                    Ok(path) => path,
                    Err(_) => panic!("route template is not valid UTF-8"),
                };
                return Self { method, path };
            }
            i += 1;
        }
        panic!("route template must start with GET, POST, PUT or DELETE");
    }

    pub fn has_id_placeholder(&self) -> bool {
        self.path.contains("{id}")
    }

    /// Substitute `{id}`; templates without a placeholder are returned as is
    pub fn expand(&self, id: &str) -> String {
        self.path.replace("{id}", id)
    }
}

/// `bytes` starts with `<method> `
const fn has_method_prefix(bytes: &[u8], method: &[u8]) -> bool {
    if bytes.len() <= method.len() || bytes[method.len()] != b' ' {
        return false;
    }
    let mut i = 0;
    while i < method.len() {
        if bytes[i] != method[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// List and detail endpoints of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiRoutes {
    pub find_all: RouteTemplate,
    pub find_one: RouteTemplate,
}
