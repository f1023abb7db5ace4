//! Catalog data model: categories, tools, and the catalog view over them.
//!
//! DESIGN
//! ======
//! Descriptors are compiled-in static data (`&'static str` fields), so a
//! [`Catalog`] is a `Copy` pair of slices that can be handed to any view
//! without cloning. A tool points at its category by id; the catalog resolves
//! that reference on demand.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::Serialize;

/// Route prefix for tool pages.
pub const TOOL_ROUTE_PREFIX: &str = "/tools";
/// Route prefix for category pages.
pub const CATEGORY_ROUTE_PREFIX: &str = "/categories";

/// A group of related tools.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Symbolic icon reference, resolved by the presentation layer.
    pub icon: &'static str,
    /// Colour token, e.g. `"blue"`.
    pub color: &'static str,
}

impl CategoryDescriptor {
    /// Canonical navigable route for this category.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{CATEGORY_ROUTE_PREFIX}/{}", self.id)
    }
}

/// One catalog entry. Distinct from the widget that implements it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    /// Stable key used for routing and registry lookup.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Id of the owning [`CategoryDescriptor`].
    pub category: &'static str,
    /// Symbolic icon reference, resolved by the presentation layer.
    pub icon: &'static str,
    pub featured: bool,
    #[serde(rename = "new")]
    pub is_new: bool,
}

impl ToolDescriptor {
    /// Canonical navigable route, derived from the id.
    #[must_use]
    pub fn path(&self) -> String {
        tool_path(self.id)
    }
}

/// Build the route for a tool id.
#[must_use]
pub fn tool_path(id: &str) -> String {
    format!("{TOOL_ROUTE_PREFIX}/{id}")
}

/// Read-only view over the static category and tool lists.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    categories: &'static [CategoryDescriptor],
    tools: &'static [ToolDescriptor],
}

impl Catalog {
    #[must_use]
    pub const fn new(categories: &'static [CategoryDescriptor], tools: &'static [ToolDescriptor]) -> Self {
        Self { categories, tools }
    }

    /// The compiled-in catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(crate::data::CATEGORIES, crate::data::TOOLS)
    }

    #[must_use]
    pub fn categories(&self) -> &'static [CategoryDescriptor] {
        self.categories
    }

    #[must_use]
    pub fn tools(&self) -> &'static [ToolDescriptor] {
        self.tools
    }

    /// Look up a tool by id.
    #[must_use]
    pub fn tool(&self, id: &str) -> Option<&'static ToolDescriptor> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    /// Look up a category by id.
    #[must_use]
    pub fn category(&self, id: &str) -> Option<&'static CategoryDescriptor> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Resolve a tool's category reference.
    ///
    /// Returns `None` only for an authoring defect in the catalog data.
    #[must_use]
    pub fn category_of(&self, tool: &ToolDescriptor) -> Option<&'static CategoryDescriptor> {
        self.category(tool.category)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
