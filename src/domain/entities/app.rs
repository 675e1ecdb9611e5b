//! Steam application entities.

/// A single entry of the Steam application catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSummary {
    pub id: u32,
    pub name: String,
}

impl AppSummary {
    /// Creates a new AppSummary instance.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns true if the entry carries a displayable name.
    ///
    /// The upstream catalogue contains thousands of entries whose name is
    /// empty or made of whitespace only (tools, servers, delisted packages).
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Store details of a single Steam application.
///
/// All text fields are empty strings when the store omits them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppDetail {
    pub id: u32,
    pub name: String,
    pub short_description: String,
    pub header_image_url: String,
    pub website_url: String,
}
