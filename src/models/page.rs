//! Page models: the two render targets a chart is drawn into

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use super::chart::Chart;

/// Element id of the chart canvas container
pub const CANVAS_ID: &str = "insert-bar-chart";
/// Element id of the tooltip container
pub const TOOLTIP_ID: &str = "tooltip";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => f.write_str("visible"),
            Visibility::Hidden => f.write_str("hidden"),
        }
    }
}

/// Tooltip element state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    pub visibility: Visibility,
    pub width: Option<String>,
    pub height: Option<String>,
    /// `data-date` attribute, set from the hovered bar
    pub data_date: Option<String>,
    pub text: String,
}

/// Shared handle to a page's tooltip element.
///
/// Cloned into each bar's hover listeners; the page is single threaded so a
/// `RefCell` is enough.
#[derive(Debug, Clone, Default)]
pub struct TooltipHandle(Rc<RefCell<Tooltip>>);

impl TooltipHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hidden, auto sized
    pub fn reset(&self) {
        let mut tooltip = self.0.borrow_mut();
        tooltip.visibility = Visibility::Hidden;
        tooltip.width = Some("auto".to_string());
        tooltip.height = Some("auto".to_string());
    }

    pub fn show(&self, date: &str) {
        let mut tooltip = self.0.borrow_mut();
        tooltip.visibility = Visibility::Visible;
        tooltip.text.clear();
        tooltip.data_date = Some(date.to_string());
    }

    pub fn hide(&self) {
        self.0.borrow_mut().visibility = Visibility::Hidden;
    }

    /// Copy of the current tooltip state
    pub fn snapshot(&self) -> Tooltip {
        self.0.borrow().clone()
    }
}

/// Container the chart's svg root gets appended to
#[derive(Debug, Default)]
pub struct Canvas {
    pub charts: Vec<Chart>,
}

impl Canvas {
    pub fn append(&mut self, chart: Chart) {
        self.charts.push(chart);
    }

    /// Number of bars across every chart in this container
    pub fn bar_count(&self) -> usize {
        self.charts.iter().map(|c| c.bars.len()).sum()
    }
}

/// Minimal document: named canvas and tooltip containers
#[derive(Debug, Default)]
pub struct Page {
    title: String,
    canvases: BTreeMap<String, Canvas>,
    tooltips: BTreeMap<String, TooltipHandle>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Page with the default `#insert-bar-chart` and `#tooltip` containers
    pub fn with_default_targets(title: impl Into<String>) -> Self {
        let mut page = Self::new(title);
        page.add_canvas(CANVAS_ID);
        page.add_tooltip(TOOLTIP_ID);
        page
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_canvas(&mut self, id: &str) {
        self.canvases.entry(id.to_string()).or_default();
    }

    pub fn add_tooltip(&mut self, id: &str) -> TooltipHandle {
        self.tooltips
            .entry(id.to_string())
            .or_insert_with(TooltipHandle::new)
            .clone()
    }

    pub fn canvas(&self, id: &str) -> Option<&Canvas> {
        self.canvases.get(id)
    }

    pub fn canvas_mut(&mut self, id: &str) -> Option<&mut Canvas> {
        self.canvases.get_mut(id)
    }

    pub fn tooltip(&self, id: &str) -> Option<TooltipHandle> {
        self.tooltips.get(id).cloned()
    }

    pub fn canvases(&self) -> impl Iterator<Item = (&str, &Canvas)> {
        self.canvases.iter().map(|(id, c)| (id.as_str(), c))
    }

    pub fn tooltips(&self) -> impl Iterator<Item = (&str, &TooltipHandle)> {
        self.tooltips.iter().map(|(id, t)| (id.as_str(), t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_transitions() {
        let tooltip = TooltipHandle::new();
        tooltip.reset();
        assert_eq!(tooltip.snapshot().visibility, Visibility::Hidden);
        assert_eq!(tooltip.snapshot().width.as_deref(), Some("auto"));

        tooltip.show("1947-01-01");
        assert_eq!(tooltip.snapshot().visibility, Visibility::Visible);
        assert_eq!(tooltip.snapshot().data_date.as_deref(), Some("1947-01-01"));
        assert!(tooltip.snapshot().text.is_empty());

        // repeated entries just re-apply the same transition
        tooltip.show("1947-04-01");
        tooltip.show("1947-04-01");
        assert_eq!(tooltip.snapshot().visibility, Visibility::Visible);

        tooltip.hide();
        assert_eq!(tooltip.snapshot().visibility, Visibility::Hidden);
        assert_eq!(tooltip.snapshot().data_date.as_deref(), Some("1947-04-01"));
    }

    #[test]
    fn test_clones_share_state() {
        let page = Page::with_default_targets("GDP");
        let a = page.tooltip(TOOLTIP_ID).unwrap();
        let b = page.tooltip(TOOLTIP_ID).unwrap();
        a.show("2000-01-01");
        assert_eq!(b.snapshot().visibility, Visibility::Visible);
    }

    #[test]
    fn test_missing_targets() {
        let page = Page::new("empty");
        assert!(page.canvas(CANVAS_ID).is_none());
        assert!(page.tooltip(TOOLTIP_ID).is_none());
    }
}
