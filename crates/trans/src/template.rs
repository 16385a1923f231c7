//! Element templates and the tag-to-template registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::TemplateParseError;
use crate::parser::Attributes;
use crate::tag::Tag;

/// The element shape a tag renders as.
#[derive(Clone, Debug, PartialEq)]
pub enum Template {
    /// Inline span with an explanation tooltip (consumes `i18n`).
    Explain,
    /// Strong emphasis.
    Strong,
    /// Light emphasis.
    Emphasis,
    /// Hyperlink (consumes `href` and `target`).
    Link,
    /// Line break; never has children.
    LineBreak,
    /// A caller-supplied element.
    Custom {
        /// Element name, e.g. `"mark"`.
        element: String,
        /// Attributes the element always carries.
        attributes: Attributes,
        /// Void elements never render children.
        void: bool,
    },
}

impl Template {
    /// A custom non-void element with no attributes.
    pub fn custom(element: impl Into<String>) -> Self {
        Template::Custom {
            element: element.into(),
            attributes: Attributes::new(),
            void: false,
        }
    }

    /// The element name used for serialization.
    pub fn element(&self) -> &str {
        match self {
            Template::Explain => "span",
            Template::Strong => "strong",
            Template::Emphasis => "em",
            Template::Link => "a",
            Template::LineBreak => "br",
            Template::Custom { element, .. } => element,
        }
    }

    /// The template's own attributes. Token attributes are merged on top.
    pub fn attributes(&self) -> Attributes {
        match self {
            Template::Custom { attributes, .. } => attributes.clone(),
            _ => Attributes::new(),
        }
    }

    /// Returns true if rendered elements never have children.
    pub fn is_void(&self) -> bool {
        match self {
            Template::LineBreak => true,
            Template::Custom { void, .. } => *void,
            _ => false,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Explain => f.write_str("explain"),
            Template::Strong => f.write_str("strong"),
            Template::Emphasis => f.write_str("em"),
            Template::Link => f.write_str("link"),
            Template::LineBreak => f.write_str("br"),
            Template::Custom { element, .. } => f.write_str(element),
        }
    }
}

impl FromStr for Template {
    type Err = TemplateParseError;

    /// Parse a template name. Built-in names map to their variant; a name
    /// prefixed with `<` (`<mark>`, `<hr/>`) is a custom element.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix('<') {
            let (name, void) = match rest.strip_suffix("/>") {
                Some(name) => (name, true),
                None => (rest.strip_suffix('>').unwrap_or(rest), false),
            };
            let name = name.trim();
            if name.is_empty() {
                return Err(TemplateParseError::Unknown(s.to_string()));
            }
            return Ok(Template::Custom {
                element: name.to_string(),
                attributes: Attributes::new(),
                void,
            });
        }

        match s.to_lowercase().as_str() {
            "explain" | "tooltip" => Ok(Template::Explain),
            "strong" | "bold" => Ok(Template::Strong),
            "em" | "italic" => Ok(Template::Emphasis),
            "link" | "a" => Ok(Template::Link),
            "br" | "linebreak" => Ok(Template::LineBreak),
            _ => Err(TemplateParseError::Unknown(s.to_string())),
        }
    }
}

/// Registry of templates keyed by tag.
///
/// # Examples
///
/// ```
/// use trans::{Tag, Template, TemplateSet};
///
/// let templates = TemplateSet::default().with(Tag::from_id("6"), Template::custom("mark"));
/// assert!(templates.contains(&Tag::Strong));
/// assert!(templates.contains(&Tag::from_id("6")));
/// assert!(!templates.contains(&Tag::from_id("7")));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateSet {
    templates: HashMap<Tag, Template>,
}

impl TemplateSet {
    /// A registry with no templates at all.
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Register or replace the template for a tag.
    pub fn with(mut self, tag: Tag, template: Template) -> Self {
        self.insert(tag, template);
        self
    }

    /// Register or replace the template for a tag.
    pub fn insert(&mut self, tag: Tag, template: Template) {
        self.templates.insert(tag, template);
    }

    /// Remove the template for a tag.
    pub fn remove(&mut self, tag: &Tag) -> Option<Template> {
        self.templates.remove(tag)
    }

    /// Get the template for a tag.
    pub fn get(&self, tag: &Tag) -> Option<&Template> {
        self.templates.get(tag)
    }

    /// Returns true if the tag has a template.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.templates.contains_key(tag)
    }

    /// Parse a `tag=template` override, e.g. `6=<mark>` or `2=em`.
    pub fn parse_override(entry: &str) -> Result<(Tag, Template), TemplateParseError> {
        let (tag, template) = entry
            .split_once('=')
            .ok_or_else(|| TemplateParseError::MissingSeparator(entry.to_string()))?;
        Ok((tag.trim().parse()?, template.parse()?))
    }
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self::empty()
            .with(Tag::Explain, Template::Explain)
            .with(Tag::Strong, Template::Strong)
            .with(Tag::Emphasis, Template::Emphasis)
            .with(Tag::Link, Template::Link)
            .with(Tag::LineBreak, Template::LineBreak)
    }
}
