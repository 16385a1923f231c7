//! Text styles for flattened rendered markup.

use crate::template::Template;

/// Text styling attributes (modifiers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Bold/increased intensity.
    pub bold: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
}

impl TextStyle {
    /// Returns true if no modifiers are set.
    pub fn is_empty(&self) -> bool {
        !self.bold && !self.italic && !self.underline
    }

    /// The style a template's content is shown with.
    ///
    /// Custom elements are styled by their HTML name where it has an
    /// obvious meaning and left plain otherwise.
    pub fn for_template(template: &Template) -> TextStyle {
        let mut style = TextStyle::default();
        match template {
            Template::Strong => style.bold = true,
            Template::Emphasis => style.italic = true,
            Template::Link | Template::Explain => style.underline = true,
            Template::LineBreak => {}
            Template::Custom { element, .. } => match element.to_lowercase().as_str() {
                "b" | "strong" => style.bold = true,
                "i" | "em" | "cite" => style.italic = true,
                "u" | "a" | "ins" => style.underline = true,
                _ => {}
            },
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_template_styles() {
        assert!(TextStyle::for_template(&Template::Strong).bold);
        assert!(TextStyle::for_template(&Template::Emphasis).italic);
        assert!(TextStyle::for_template(&Template::Link).underline);
        assert!(TextStyle::for_template(&Template::Explain).underline);
        assert!(TextStyle::for_template(&Template::LineBreak).is_empty());
    }

    #[test]
    fn custom_template_styles() {
        assert!(TextStyle::for_template(&Template::custom("B")).bold);
        assert!(TextStyle::for_template(&Template::custom("cite")).italic);
        assert!(TextStyle::for_template(&Template::custom("mark")).is_empty());
    }
}
