//! Explanation tooltips for annotated spans (`<1 i18n="key">text</1>`).

use std::fmt;
use std::str::FromStr;

use crate::error::NamespaceParseError;
use crate::render::Element;

/// Shown when an annotated span has no `i18n` key.
pub const NO_EXPLANATION: &str = "Keine Erklärung verfügbar";

/// Translation namespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Regular content strings.
    #[default]
    Content,
    /// Explanations shown by annotated spans.
    Explain,
}

impl Namespace {
    /// The namespace name as used in keys like `explain:tooltip-demo`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Content => "content",
            Namespace::Explain => "explain",
        }
    }

    /// Strip a leading `"{namespace}:"` qualifier from `key`.
    ///
    /// ```
    /// use trans::Namespace;
    ///
    /// assert_eq!(Namespace::Explain.unqualified("explain:term"), "term");
    /// assert_eq!(Namespace::Explain.unqualified("content:term"), "content:term");
    /// ```
    pub fn unqualified<'a>(&self, key: &'a str) -> &'a str {
        key.strip_prefix(self.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .unwrap_or(key)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = NamespaceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(Namespace::Content),
            "explain" => Ok(Namespace::Explain),
            other => Err(NamespaceParseError::Unknown(other.to_string())),
        }
    }
}

/// Resolves translation keys. Implementations never fail: a missing key
/// resolves to something printable, usually the key itself.
pub trait Lookup {
    /// Resolve `key` in `namespace`.
    fn lookup(&self, key: &str, namespace: Namespace) -> String;
}

impl<T: Lookup + ?Sized> Lookup for &T {
    fn lookup(&self, key: &str, namespace: Namespace) -> String {
        (**self).lookup(key, namespace)
    }
}

/// Whether a tooltip is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipState {
    /// Hidden.
    #[default]
    Collapsed,
    /// Showing the explanation.
    Expanded,
}

/// Interaction state of one annotated span.
///
/// Starts collapsed. Activation toggles; a dismissal (a click elsewhere)
/// always collapses. There is no timeout.
///
/// # Examples
///
/// ```
/// use trans::{ExplainTooltip, Renderer, TooltipState};
///
/// let rendered = Renderer::default().render(r#"<1 i18n="tooltip-demo">Tooltips</1>"#);
/// let element = rendered.elements().next().unwrap();
/// let mut tooltip = ExplainTooltip::from_element(element);
/// assert_eq!(tooltip.state(), TooltipState::Collapsed);
/// tooltip.activate();
/// assert!(tooltip.is_expanded());
/// tooltip.dismiss();
/// assert!(!tooltip.is_expanded());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExplainTooltip {
    key: Option<String>,
    label: String,
    state: TooltipState,
}

impl ExplainTooltip {
    /// Create a collapsed tooltip.
    pub fn new(key: Option<String>, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            state: TooltipState::Collapsed,
        }
    }

    /// Create a collapsed tooltip for a rendered element.
    pub fn from_element(element: &Element) -> Self {
        Self::new(
            element.i18n_key().map(str::to_string),
            element.children.clone().unwrap_or_default(),
        )
    }

    /// The explanation key, if any.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The annotated text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Current state.
    pub fn state(&self) -> TooltipState {
        self.state
    }

    /// Returns true while the explanation is showing.
    pub fn is_expanded(&self) -> bool {
        self.state == TooltipState::Expanded
    }

    /// Pointer activation: toggles between collapsed and expanded.
    pub fn activate(&mut self) {
        self.state = match self.state {
            TooltipState::Collapsed => TooltipState::Expanded,
            TooltipState::Expanded => TooltipState::Collapsed,
        };
    }

    /// Dismissal signal, e.g. a click outside the span.
    pub fn dismiss(&mut self) {
        self.state = TooltipState::Collapsed;
    }

    /// Resolve the explanation text. Keys may carry an `explain:` prefix.
    pub fn explanation(&self, lookup: &impl Lookup) -> String {
        match &self.key {
            Some(key) => {
                let namespace = Namespace::Explain;
                lookup.lookup(namespace.unqualified(key), namespace)
            }
            None => NO_EXPLANATION.to_string(),
        }
    }
}
