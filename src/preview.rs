//! Terminal preview of rendered markup.
//!
//! Strong and emphasis map to bold and italic, links become OSC 8
//! hyperlinks, and annotated spans get a numbered marker whose explanation
//! is listed below the text.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use trans::{ExplainTooltip, Lookup, Rendered, TextStyle};

/// Colour of annotated spans and their markers.
pub const TOOLTIP_COLOR: Color = Color::Rgb {
    r: 0x7a,
    g: 0x53,
    b: 0x65,
};

fn set_style(out: &mut impl Write, style: TextStyle) -> io::Result<()> {
    if style.is_empty() {
        return Ok(());
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.underline {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    Ok(())
}

/// Write `rendered` to `out`, resolving explanations through `lookup`.
///
/// Returns the tooltips of the annotated spans, in marker order.
pub fn write_rendered<W: Write>(
    out: &mut W,
    rendered: &Rendered,
    lookup: &impl Lookup,
) -> io::Result<Vec<ExplainTooltip>> {
    let styled = rendered.to_styled();
    let mut tooltips = Vec::new();

    for (text, span) in styled.segments() {
        let Some(span) = span else {
            queue!(out, Print(text))?;
            continue;
        };

        if span.is_explain() {
            tooltips.push(ExplainTooltip::new(
                span.attribute("i18n").map(str::to_string),
                text,
            ));
            queue!(out, SetForegroundColor(TOOLTIP_COLOR))?;
            set_style(out, span.style)?;
            queue!(
                out,
                Print(text),
                SetAttribute(Attribute::Reset),
                Print(format!("[{}]", tooltips.len())),
                ResetColor
            )?;
            continue;
        }

        if let Some(href) = span.href() {
            queue!(out, Print(format!("\x1b]8;;{href}\x1b\\")))?;
        }
        set_style(out, span.style)?;
        queue!(out, Print(text), SetAttribute(Attribute::Reset))?;
        if span.href().is_some() {
            queue!(out, Print("\x1b]8;;\x1b\\"))?;
        }
    }

    if !tooltips.is_empty() {
        queue!(out, Print("\n\n"))?;
        for (index, tooltip) in tooltips.iter().enumerate() {
            queue!(
                out,
                SetForegroundColor(TOOLTIP_COLOR),
                Print(format!("[{}] ", index + 1)),
                ResetColor,
                SetAttribute(Attribute::Bold),
                Print(tooltip.label()),
                SetAttribute(Attribute::Reset),
                Print(format!(": {}\n", tooltip.explanation(lookup)))
            )?;
        }
    }

    out.flush()?;
    Ok(tooltips)
}

/// Render to a string, escape codes included.
pub fn to_ansi_string(rendered: &Rendered, lookup: &impl Lookup) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_rendered(&mut out, rendered, lookup);
    String::from_utf8_lossy(&out).into_owned()
}
