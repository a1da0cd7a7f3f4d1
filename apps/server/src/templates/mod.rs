//! Server-rendered HTML templates
//!
//! Every page is an askama template compiled into the binary. Handlers never
//! touch the template structs directly: they refer to a page by its
//! [`TemplateName`] and the [`TemplateRegistry`] resolves it.

mod pages;

use std::collections::BTreeMap;
use std::fmt;

use crate::{Error, Result};

pub use pages::{NotFoundPage, PartnersPage};

/// Symbolic name of a template, e.g. `"partners"` or `"status/404"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateName(&'static str);

impl TemplateName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PARTNERS: TemplateName = TemplateName::new("partners");
pub const STATUS_404: TemplateName = TemplateName::new("status/404");

/// Data shared by every page of the site.
#[derive(Debug, Clone)]
pub struct PageData {
    pub app_name: String,
    pub app_url: String,
    pub app_version: &'static str,
    pub request_id: Option<String>,
}

impl PageData {
    pub fn new(app_name: impl Into<String>, app_url: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            app_url: app_url.into(),
            app_version: env!("CARGO_PKG_VERSION"),
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }
}

/// Renders one template to a string given the shared page data and its title.
pub type RenderFn = fn(&PageData, &str) -> askama::Result<String>;

#[derive(Clone, Copy)]
struct Entry {
    title: &'static str,
    render: RenderFn,
}

/// Maps template names to compiled templates.
///
/// Built once at startup and never mutated afterwards, so it is shared
/// between requests behind an `Arc` without locking.
#[derive(Clone, Default)]
pub struct TemplateRegistry {
    entries: BTreeMap<TemplateName, Entry>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every page shipped with the server.
    pub fn builtin() -> Self {
        Self::new()
            .register(PARTNERS, "Partners", |page, title| {
                askama::Template::render(&PartnersPage { page, title })
            })
            .register(STATUS_404, "Page Not Found", |page, title| {
                askama::Template::render(&NotFoundPage { page, title })
            })
    }

    /// Adds (or replaces) a template under `name`.
    pub fn register(mut self, name: TemplateName, title: &'static str, render: RenderFn) -> Self {
        self.entries.insert(name, Entry { title, render });
        self
    }

    pub fn contains(&self, name: TemplateName) -> bool {
        self.entries.contains_key(&name)
    }

    pub fn names(&self) -> impl Iterator<Item = TemplateName> + '_ {
        self.entries.keys().copied()
    }

    pub fn render(&self, name: TemplateName, page: &PageData) -> Result<String> {
        let entry = self
            .entries
            .get(&name)
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))?;

        (entry.render)(page, entry.title).map_err(|source| Error::Render {
            template: name.to_string(),
            source,
        })
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}
