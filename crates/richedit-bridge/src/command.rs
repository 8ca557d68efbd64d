//! Outbound command vocabulary.
//!
//! Every variant maps to one method on the page's `RE` object. String
//! arguments are always passed through [`escape_js_string`] before being
//! placed between single quotes.

use richedit_common::Color;

use crate::escape::escape_js_string;

/// Heading level, `<h1>` through `<h6>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    /// Returns `None` outside `1..=6`.
    pub fn new(level: u8) -> Option<Self> {
        (1..=6).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// A state-changing instruction for the editor page.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Inline toggles
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
    RemoveFormat,

    // Block level
    Heading(HeadingLevel),
    OrderedList,
    UnorderedList,
    Blockquote,
    Indent,
    Outdent,
    Align(Alignment),

    // Insertion (snapshot the selection first)
    InsertImage { url: String, alt: String },
    InsertLink { href: String, title: String },

    // Styling
    TextColor(Color),
    TextBackgroundColor(Color),
    EditorFontColor(Color),
    EditorBackgroundColor(Color),
    FontSize(u32),
    LineHeight(u32),

    // Content
    SetHtml(String),
    SetPlaceholder(String),
    SetEditable(bool),

    // Focus
    Focus,
    /// Viewport coordinates; non-finite values render as `0`.
    FocusAt { x: f64, y: f64 },
    Blur,

    Undo,
    Redo,
}

impl Command {
    pub fn insert_image(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::InsertImage {
            url: url.into(),
            alt: alt.into(),
        }
    }

    pub fn insert_link(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self::InsertLink {
            href: href.into(),
            title: title.into(),
        }
    }

    /// Render the command as a script for the page.
    pub fn script(&self) -> String {
        match self {
            Self::Bold => "RE.setBold();".into(),
            Self::Italic => "RE.setItalic();".into(),
            Self::Underline => "RE.setUnderline();".into(),
            Self::Strikethrough => "RE.setStrikeThrough();".into(),
            Self::Subscript => "RE.setSubscript();".into(),
            Self::Superscript => "RE.setSuperscript();".into(),
            Self::RemoveFormat => "RE.removeFormat();".into(),

            Self::Heading(level) => format!("RE.setHeading('{}');", level.get()),
            Self::OrderedList => "RE.setOrderedList();".into(),
            Self::UnorderedList => "RE.setUnorderedList();".into(),
            Self::Blockquote => "RE.setBlockquote();".into(),
            Self::Indent => "RE.setIndent();".into(),
            Self::Outdent => "RE.setOutdent();".into(),
            Self::Align(Alignment::Left) => "RE.setJustifyLeft();".into(),
            Self::Align(Alignment::Center) => "RE.setJustifyCenter();".into(),
            Self::Align(Alignment::Right) => "RE.setJustifyRight();".into(),

            Self::InsertImage { url, alt } => format!(
                "RE.prepareInsert(); RE.insertImage('{}', '{}');",
                escape_js_string(url),
                escape_js_string(alt)
            ),
            Self::InsertLink { href, title } => format!(
                "RE.prepareInsert(); RE.insertLink('{}', '{}');",
                escape_js_string(href),
                escape_js_string(title)
            ),

            Self::TextColor(c) => format!("RE.prepareInsert(); RE.setTextColor('{c}');"),
            Self::TextBackgroundColor(c) => {
                format!("RE.prepareInsert(); RE.setTextBackgroundColor('{c}');")
            }
            Self::EditorFontColor(c) => format!("RE.setBaseTextColor('{c}');"),
            Self::EditorBackgroundColor(c) => format!("RE.setBackgroundColor('{c}');"),
            Self::FontSize(px) => format!("RE.setFontSize('{px}px');"),
            Self::LineHeight(px) => format!("RE.setLineHeight('{px}px');"),

            Self::SetHtml(html) => format!("RE.setHtml('{}');", escape_js_string(html)),
            Self::SetPlaceholder(text) => {
                format!("RE.setPlaceholderText('{}');", escape_js_string(text))
            }
            Self::SetEditable(on) => format!("RE.editor.contentEditable = {on};"),

            Self::Focus => "RE.focus();".into(),
            Self::FocusAt { x, y } => {
                format!("RE.focusAtPoint({}, {});", finite_or_zero(*x), finite_or_zero(*y))
            }
            Self::Blur => "RE.blurFocus();".into(),

            Self::Undo => "RE.undo();".into(),
            Self::Redo => "RE.redo();".into(),
        }
    }
}

/// `inf` and `NaN` are not script literals.
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

/// A read of page state. Results always come back as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Html,
    Text,
    RangeSelectionExists,
    RangeOrCaretSelectionExists,
    SelectedHref,
    ContentHeight,
    LineHeight,
    RelativeCaretY,
    IsEditable,
    /// Take (and clear) the pending action queue as a JSON array.
    CommandQueue,
}

impl Query {
    pub fn script(self) -> &'static str {
        match self {
            Self::Html => "RE.getHtml();",
            Self::Text => "RE.getText();",
            Self::RangeSelectionExists => "RE.rangeSelectionExists();",
            Self::RangeOrCaretSelectionExists => "RE.rangeOrCaretSelectionExists();",
            Self::SelectedHref => "RE.getSelectedHref();",
            Self::ContentHeight => "document.getElementById('editor').clientHeight;",
            Self::LineHeight => "RE.getLineHeight();",
            Self::RelativeCaretY => "RE.getRelativeCaretYPosition();",
            Self::IsEditable => "RE.editor.isContentEditable;",
            Self::CommandQueue => "RE.getCommandQueue();",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::has_unescaped_quote;
    use crate::testing::quoted_args;
    use proptest::prelude::*;

    #[test]
    fn heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_none());
        assert!(HeadingLevel::new(7).is_none());
        for level in 1..=6 {
            assert_eq!(HeadingLevel::new(level).unwrap().get(), level);
        }
    }

    #[test]
    fn toggles_render_engine_verbs() {
        assert_eq!(Command::Bold.script(), "RE.setBold();");
        assert_eq!(Command::Strikethrough.script(), "RE.setStrikeThrough();");
        assert_eq!(Command::RemoveFormat.script(), "RE.removeFormat();");
        assert_eq!(Command::Undo.script(), "RE.undo();");
        assert_eq!(Command::Blur.script(), "RE.blurFocus();");
    }

    #[test]
    fn heading_and_alignment() {
        let h3 = Command::Heading(HeadingLevel::new(3).unwrap());
        assert_eq!(h3.script(), "RE.setHeading('3');");
        assert_eq!(
            Command::Align(Alignment::Center).script(),
            "RE.setJustifyCenter();"
        );
    }

    #[test]
    fn insertions_prepare_the_selection_first() {
        let link = Command::insert_link("https://example.com", "Example").script();
        assert_eq!(
            link,
            "RE.prepareInsert(); RE.insertLink('https://example.com', 'Example');"
        );
        let image = Command::insert_image("a.png", "alt").script();
        assert!(image.starts_with("RE.prepareInsert();"));
        assert!(Command::TextColor(Color::BLACK)
            .script()
            .starts_with("RE.prepareInsert();"));
    }

    #[test]
    fn colors_render_as_hex() {
        let c = Color::from_rgb(0x1a, 0x2b, 0x3c);
        assert_eq!(
            Command::EditorFontColor(c).script(),
            "RE.setBaseTextColor('#1a2b3c');"
        );
        assert_eq!(
            Command::EditorBackgroundColor(Color::WHITE).script(),
            "RE.setBackgroundColor('#ffffff');"
        );
    }

    #[test]
    fn sizes_render_in_pixels() {
        assert_eq!(Command::FontSize(14).script(), "RE.setFontSize('14px');");
        assert_eq!(Command::LineHeight(28).script(), "RE.setLineHeight('28px');");
    }

    #[test]
    fn editable_flag_is_a_bare_boolean() {
        assert_eq!(
            Command::SetEditable(false).script(),
            "RE.editor.contentEditable = false;"
        );
    }

    #[test]
    fn focus_at_point() {
        assert_eq!(
            Command::FocusAt { x: 10.0, y: 20.5 }.script(),
            "RE.focusAtPoint(10, 20.5);"
        );
    }

    #[test]
    fn string_arguments_survive_hostile_input() {
        let inputs = [
            "it's",
            "');alert(1);('",
            "line one\nline two",
            "back\\slash",
            "trailing\\",
            "<a href='x'>y</a>",
        ];
        for input in inputs {
            assert_eq!(
                quoted_args(&Command::SetHtml(input.into()).script()),
                Some(vec![input.to_string()])
            );
            assert_eq!(
                quoted_args(&Command::SetPlaceholder(input.into()).script()),
                Some(vec![input.to_string()])
            );
            assert_eq!(
                quoted_args(&Command::insert_link(input, input).script()),
                Some(vec![input.to_string(), input.to_string()])
            );
            assert_eq!(
                quoted_args(&Command::insert_image(input, "alt").script()),
                Some(vec![input.to_string(), "alt".to_string()])
            );
        }
    }

    #[test]
    fn non_finite_focus_point_renders_as_zero() {
        assert_eq!(
            Command::FocusAt { x: f64::INFINITY, y: f64::NAN }.script(),
            "RE.focusAtPoint(0, 0);"
        );
        assert_eq!(
            Command::FocusAt { x: f64::NEG_INFINITY, y: 4.5 }.script(),
            "RE.focusAtPoint(0, 4.5);"
        );
    }

    proptest! {
        #[test]
        fn any_string_argument_round_trips(text in any::<String>()) {
            prop_assert!(!has_unescaped_quote(&escape_js_string(&text)));
            for script in [
                Command::SetHtml(text.clone()).script(),
                Command::SetPlaceholder(text.clone()).script(),
            ] {
                prop_assert_eq!(quoted_args(&script), Some(vec![text.clone()]));
                prop_assert!(!script.contains('\n') && !script.contains('\r'));
                prop_assert!(!script.contains('\u{2028}') && !script.contains('\u{2029}'), "script contains raw U+2028/U+2029");
            }
            let link = Command::insert_link(text.clone(), text.clone()).script();
            prop_assert_eq!(quoted_args(&link), Some(vec![text.clone(), text.clone()]));
        }

        #[test]
        fn focus_point_is_always_a_script_number(x in any::<f64>(), y in any::<f64>()) {
            let script = Command::FocusAt { x, y }.script();
            prop_assert!(!script.contains("inf") && !script.contains("NaN"));
        }
    }

    #[test]
    fn queries_render_engine_reads() {
        assert_eq!(Query::Html.script(), "RE.getHtml();");
        assert_eq!(Query::CommandQueue.script(), "RE.getCommandQueue();");
        assert_eq!(
            Query::ContentHeight.script(),
            "document.getElementById('editor').clientHeight;"
        );
    }
}
