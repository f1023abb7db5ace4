//! Read-only catalog queries used by listing and search views.
//!
//! All queries are total and side-effect free. Results keep catalog order.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::model::{Catalog, ToolDescriptor};

impl Catalog {
    /// Tools whose category reference equals `category_id`.
    #[must_use]
    pub fn list_by_category(&self, category_id: &str) -> Vec<&'static ToolDescriptor> {
        self.tools()
            .iter()
            .filter(|tool| tool.category == category_id)
            .collect()
    }

    /// Number of tools in a category.
    #[must_use]
    pub fn count_in(&self, category_id: &str) -> usize {
        self.tools()
            .iter()
            .filter(|tool| tool.category == category_id)
            .count()
    }

    /// Case-insensitive substring filter over name, description, and category name.
    ///
    /// An empty query returns `tools` unchanged.
    pub fn filter_by_text<'t, I>(&self, query: &str, tools: I) -> Vec<&'t ToolDescriptor>
    where
        I: IntoIterator<Item = &'t ToolDescriptor>,
    {
        if query.is_empty() {
            return tools.into_iter().collect();
        }
        let needle = query.to_lowercase();
        tools
            .into_iter()
            .filter(|tool| self.matches(tool, &needle))
            .collect()
    }

    /// [`Catalog::filter_by_text`] over the whole catalog.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&'static ToolDescriptor> {
        self.filter_by_text(query, self.tools())
    }

    /// Tools flagged for the featured listing.
    #[must_use]
    pub fn featured(&self) -> Vec<&'static ToolDescriptor> {
        self.tools().iter().filter(|tool| tool.featured).collect()
    }

    /// Tools flagged as new.
    #[must_use]
    pub fn new_tools(&self) -> Vec<&'static ToolDescriptor> {
        self.tools().iter().filter(|tool| tool.is_new).collect()
    }

    fn matches(&self, tool: &ToolDescriptor, needle: &str) -> bool {
        let category_name = self.category_of(tool).map_or("", |category| category.name);
        [tool.name, tool.description, category_name]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
