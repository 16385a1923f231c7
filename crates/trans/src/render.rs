//! Renderer turning parsed markup into presentational nodes.
//!
//! Every recognized tag is instantiated from its [`Template`]: the template's
//! own attributes with the token's attributes merged on top, and the inner
//! content as the only child.

use crate::document::{Document, Token};
use crate::parser::{self, Attributes};
use crate::tag::Tag;
use crate::template::{Template, TemplateSet};

/// An instantiated element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Stable identity among siblings: the tag's byte offset in the source.
    pub key: usize,
    /// The tag this element was rendered from.
    pub tag: Tag,
    /// The template it was instantiated from.
    pub template: Template,
    /// Merged attributes (token attributes win).
    pub attributes: Attributes,
    /// Inner content; `None` when empty or when the template is void.
    pub children: Option<String>,
}

impl Element {
    /// Get an attribute value.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// The `href` of a link.
    pub fn href(&self) -> Option<&str> {
        self.attribute("href")
    }

    /// The `target` of a link.
    pub fn target(&self) -> Option<&str> {
        self.attribute("target")
    }

    /// The explanation key of an annotated span.
    pub fn i18n_key(&self) -> Option<&str> {
        self.attribute("i18n")
    }

    /// Visible text of this element.
    pub fn text(&self) -> &str {
        match (&self.template, &self.children) {
            (Template::LineBreak, _) => "\n",
            (_, Some(children)) => children,
            (_, None) => "",
        }
    }
}

/// A rendered node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Plain text, shown as-is.
    Text(String),
    /// An element instantiated from a template.
    Element(Element),
}

impl Node {
    /// Get the element if this is an element node.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Visible text of this node.
    pub fn text(&self) -> &str {
        match self {
            Node::Text(text) => text,
            Node::Element(element) => element.text(),
        }
    }
}

/// The output of a render pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendered {
    nodes: Vec<Node>,
}

impl Rendered {
    /// Create a rendered document from nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// All nodes in order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Iterate over element nodes.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.nodes.iter().filter_map(Node::as_element)
    }

    /// Returns true if nothing was rendered.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Concatenated visible text, decoration stripped.
    pub fn text(&self) -> String {
        self.nodes.iter().map(Node::text).collect()
    }

    /// Serialize to HTML.
    ///
    /// Text and attribute values are escaped. Annotated spans carry
    /// `class="explain"` ahead of their own attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use trans::Renderer;
    ///
    /// let html = Renderer::default().render("a<2>b</2><5/>").to_html();
    /// assert_eq!(html, "a<strong>b</strong><br/>");
    /// ```
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => escape_into(&mut out, text),
                Node::Element(element) => write_element(&mut out, element),
            }
        }
        out
    }
}

fn write_element(out: &mut String, element: &Element) {
    let name = element.template.element();
    out.push('<');
    out.push_str(name);
    if element.template == Template::Explain {
        out.push_str(r#" class="explain""#);
    }
    for (key, value) in element.attributes.iter() {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(out, value);
        out.push('"');
    }

    if element.template.is_void() {
        out.push_str("/>");
        return;
    }

    out.push('>');
    if let Some(children) = &element.children {
        escape_into(out, children);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Renders markup with a set of templates.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    templates: TemplateSet,
}

impl Renderer {
    /// Create a renderer with the given templates.
    pub fn new(templates: TemplateSet) -> Self {
        Self { templates }
    }

    /// The templates this renderer uses.
    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    /// Register or replace a template.
    pub fn with(mut self, tag: Tag, template: Template) -> Self {
        self.templates.insert(tag, template);
        self
    }

    /// Parse markup against this renderer's templates.
    pub fn parse<'a>(&self, input: &'a str) -> Document<'a> {
        parser::parse(input, |tag| self.templates.contains(tag))
    }

    /// Parse and render markup.
    pub fn render(&self, input: &str) -> Rendered {
        self.render_document(&self.parse(input))
    }

    /// Render an already parsed document.
    ///
    /// Tag tokens whose tag has no template here fall back to text, the
    /// same way the parser treats unknown tags.
    pub fn render_document(&self, document: &Document<'_>) -> Rendered {
        let nodes = document
            .tokens()
            .iter()
            .map(|token| match token {
                Token::Text { text, .. } => Node::Text(text.to_string()),
                Token::Tag(tag) => match self.templates.get(&tag.tag) {
                    Some(template) => Node::Element(Element {
                        key: tag.span.start,
                        tag: tag.tag.clone(),
                        template: template.clone(),
                        attributes: template.attributes().merged(&tag.attributes),
                        children: (!tag.inner.is_empty() && !template.is_void())
                            .then(|| tag.inner.to_string()),
                    }),
                    None => Node::Text(
                        parser::unknown_tag_text(tag.tag.id(), tag.inner).into_owned(),
                    ),
                },
            })
            .collect();

        Rendered::new(nodes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_text_only() {
        let rendered = Renderer::default().render("just text");
        assert_eq!(rendered.nodes(), &[Node::Text("just text".to_string())]);
    }

    #[test]
    fn render_keys_are_source_offsets() {
        let rendered = Renderer::default().render("ab<2>x</2>cd<3>y</3>");
        let keys: Vec<_> = rendered.elements().map(|e| e.key).collect();
        assert_eq!(keys, vec![2, 12]);
    }

    #[test]
    fn render_empty_inner_has_no_children() {
        let rendered = Renderer::default().render("<2></2>");
        let element = rendered.elements().next().unwrap();
        assert_eq!(element.children, None);
        assert_eq!(rendered.to_html(), "<strong></strong>");
    }

    #[test]
    fn render_line_break_drops_children() {
        let rendered = Renderer::default().render("<5>oops</5>");
        let element = rendered.elements().next().unwrap();
        assert_eq!(element.template, Template::LineBreak);
        assert_eq!(element.children, None);
        assert_eq!(rendered.text(), "\n");
    }

    #[test]
    fn render_merges_template_attributes() {
        let mut attributes = Attributes::new();
        attributes.insert("class", "hl");
        attributes.insert("title", "default");
        let renderer = Renderer::default().with(
            Tag::from_id("6"),
            Template::Custom {
                element: "mark".to_string(),
                attributes,
                void: false,
            },
        );
        let rendered = renderer.render(r#"<6 title="mine">x</6>"#);
        let element = rendered.elements().next().unwrap();
        assert_eq!(element.attribute("class"), Some("hl"));
        assert_eq!(element.attribute("title"), Some("mine"));
        assert_eq!(
            rendered.to_html(),
            r#"<mark class="hl" title="mine">x</mark>"#
        );
    }

    #[test]
    fn render_document_parsed_with_wider_vocabulary() {
        let wide = Renderer::default().with(Tag::from_id("6"), Template::custom("mark"));
        let doc = wide.parse("<6>x</6><6></6>");
        let rendered = Renderer::default().render_document(&doc);
        assert_eq!(rendered.text(), "x<6/>");
        assert_eq!(rendered.elements().count(), 0);
    }

    #[test]
    fn element_accessors() {
        let rendered = Renderer::default()
            .render(r#"<4 href="https://x.com" target="blank">go</4><1 i18n="k">t</1>"#);
        let elements: Vec<_> = rendered.elements().collect();
        assert_eq!(elements[0].href(), Some("https://x.com"));
        assert_eq!(elements[0].target(), Some("blank"));
        assert_eq!(elements[1].i18n_key(), Some("k"));
    }

    #[test]
    fn html_escapes_text_and_attributes() {
        let rendered = Renderer::default().render(r#"a & b <4 href="x&y">"q"</4>"#);
        assert_eq!(
            rendered.to_html(),
            r#"a &amp; b <a href="x&amp;y">&quot;q&quot;</a>"#
        );
    }
}
