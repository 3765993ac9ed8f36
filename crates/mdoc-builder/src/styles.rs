//! Presentational strings consumed by the HTML backend.

/// Baseline CSS for blockquotes and inline code.
const DEFAULT_GLOBAL_CSS: &str = r"
blockquote {
    margin-top: 5px;
    margin-bottom: 5px;
    padding-left: 1em;
    margin-left: 0px;
    border-left: 3px solid #eee;
    color: #8C8C8C;
}

code {
    font-family: SFMono-Regular, Consolas, Liberation Mono, Menlo, Courier, monospace;
    font-size: inherit;
    background-color: rgba(0, 0, 0, 0.06);
    padding: 0 2px;
    border: 1px solid rgba(0, 0, 0, 0.08);
    border-radius: 2px 2px;
    line-height: inherit;
    word-wrap: break-word;
    text-indent: 0;
}
";

const DEFAULT_TABLE_STYLE: &str = "border: 1px solid #000;";
const DEFAULT_TH_STYLE: &str = "vertical-align: middle; background-color: #d9edfa;";
const DEFAULT_TD_STYLE: &str = "vertical-align: middle;";

/// HTML style configuration.
///
/// Read-only input to HTML rendering. [`HtmlStyles::new`] carries no styling
/// and renders bare tags; [`HtmlStyles::default`] supplies a baseline
/// blockquote/code stylesheet and neutral table borders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlStyles {
    /// Stylesheet embedded in the page `<style>` block.
    pub global_css: Option<String>,
    /// Inline style of `<table>` elements.
    pub table_style: Option<String>,
    /// Inline style prefix of header cells.
    pub th_style: Option<String>,
    /// Inline style prefix of data cells.
    pub td_style: Option<String>,
}

impl HtmlStyles {
    /// Styles with every entry absent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global_css: None,
            table_style: None,
            th_style: None,
            td_style: None,
        }
    }

    /// Baseline styles. Same as [`HtmlStyles::default`].
    #[must_use]
    pub fn default_styles() -> Self {
        Self::new().use_default()
    }

    /// Replace every entry with its baseline value.
    #[must_use]
    pub fn use_default(self) -> Self {
        self.global_css(DEFAULT_GLOBAL_CSS)
            .table_style(DEFAULT_TABLE_STYLE)
            .th_style(DEFAULT_TH_STYLE)
            .td_style(DEFAULT_TD_STYLE)
    }

    #[must_use]
    pub fn global_css(mut self, css: impl Into<String>) -> Self {
        self.global_css = Some(css.into());
        self
    }

    #[must_use]
    pub fn table_style(mut self, style: impl Into<String>) -> Self {
        self.table_style = Some(style.into());
        self
    }

    #[must_use]
    pub fn th_style(mut self, style: impl Into<String>) -> Self {
        self.th_style = Some(style.into());
        self
    }

    #[must_use]
    pub fn td_style(mut self, style: impl Into<String>) -> Self {
        self.td_style = Some(style.into());
        self
    }

    /// Global CSS, if set and non-empty.
    pub fn global_css_content(&self) -> Option<&str> {
        non_empty(self.global_css.as_deref())
    }

    /// Table style, if set and non-empty.
    pub fn table_style_content(&self) -> Option<&str> {
        non_empty(self.table_style.as_deref())
    }

    /// Header cell style, if set and non-empty.
    pub fn th_style_content(&self) -> Option<&str> {
        non_empty(self.th_style.as_deref())
    }

    /// Data cell style, if set and non-empty.
    pub fn td_style_content(&self) -> Option<&str> {
        non_empty(self.td_style.as_deref())
    }
}

impl Default for HtmlStyles {
    fn default() -> Self {
        Self::default_styles()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
