//! Core types used throughout the project.

use std::fmt;
use std::sync::Arc;

/// Argument passed to a templated translation.
pub type Context = serde_json::Value;

/// A single-argument templating function.
#[derive(Clone)]
pub struct Template(Arc<dyn Fn(&Context) -> String + Send + Sync>);

impl Template {
    #[must_use]
    pub fn new(render: impl Fn(&Context) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Renders the template with the given context.
    #[must_use]
    pub fn render(&self, context: &Context) -> String {
        (self.0)(context)
    }

    /// Checks whether two templates share the same underlying function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Template(..)")
    }
}

/// Value found at the end of a dotted key path.
#[derive(Debug, Clone)]
pub enum Leaf {
    Literal(Arc<str>),
    Template(Template),
}

impl Leaf {
    #[must_use]
    pub const fn kind(&self) -> LeafKind {
        match self {
            Self::Literal(_) => LeafKind::Literal,
            Self::Template(_) => LeafKind::Template,
        }
    }

    /// Returns the literal text, or `None` for a template.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(text) => Some(text.as_ref()),
            Self::Template(_) => None,
        }
    }

    /// Produces the final string for this leaf.
    ///
    /// Literals ignore the context. Templates receive `Null` when no context is given.
    #[must_use]
    pub fn render(&self, context: Option<&Context>) -> String {
        match self {
            Self::Literal(text) => text.to_string(),
            Self::Template(template) => template.render(context.unwrap_or(&Context::Null)),
        }
    }
}

/// Literals compare by text, templates by function identity.
impl PartialEq for Leaf {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Literal(a), Self::Literal(b)) => a == b,
            (Self::Template(a), Self::Template(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<&str> for Leaf {
    fn from(text: &str) -> Self {
        Self::Literal(Arc::from(text))
    }
}

impl From<String> for Leaf {
    fn from(text: String) -> Self {
        Self::Literal(Arc::from(text))
    }
}

impl From<Template> for Leaf {
    fn from(template: Template) -> Self {
        Self::Template(template)
    }
}

/// Kind of a leaf, compared across locales by the schema check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    Literal,
    Template,
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal => f.write_str("literal"),
            Self::Template => f.write_str("template"),
        }
    }
}
