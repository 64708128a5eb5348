//! Outbound request descriptions.
//!
//! Requests are plain values; executing them is the transport's job.

use std::fmt;

const SITES_SEGMENTS: [&str; 2] = ["api", "sites"];

/// Logical channel shared by a request and its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sites,
    AddSite,
    RemoveSite,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Sites, Category::AddSite, Category::RemoveSite];

    /// Wire name carried by responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Sites => "sites",
            Category::AddSite => "addSite",
            Category::RemoveSite => "removeSite",
        }
    }

    /// Exact, case-sensitive lookup of a wire name.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub category: Category,
    pub method: Method,
    /// Unencoded path segments below the API base URL.
    pub segments: Vec<String>,
    /// URL-encoded form body, if any.
    pub form: Option<Vec<(String, String)>>,
}

impl Request {
    /// `GET /api/sites`
    pub fn fetch_sites() -> Self {
        Self {
            category: Category::Sites,
            method: Method::Get,
            segments: sites_segments(),
            form: None,
        }
    }

    /// `POST /api/sites` with form body `key=<key>`
    pub fn add_site(key: impl Into<String>) -> Self {
        Self {
            category: Category::AddSite,
            method: Method::Post,
            segments: sites_segments(),
            form: Some(vec![("key".to_string(), key.into())]),
        }
    }

    /// `DELETE /api/sites/{key}`
    pub fn remove_site(key: impl Into<String>) -> Self {
        let mut segments = sites_segments();
        segments.push(key.into());
        Self {
            category: Category::RemoveSite,
            method: Method::Delete,
            segments,
            form: None,
        }
    }

    /// Human-readable path for logs (segments are not percent-encoded).
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }
}

fn sites_segments() -> Vec<String> {
    SITES_SEGMENTS.iter().map(|s| s.to_string()).collect()
}
