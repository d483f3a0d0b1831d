//! Chart models

use std::fmt;

/// Which side of the plot an axis is drawn on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

/// A tick mark: offset along the axis in pixels plus its label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

/// An axis group (`<g>`) with its ticks
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub id: String,
    pub orient: AxisOrient,
    /// (x, y) translation of the group
    pub translate: (f64, f64),
    /// Pixel extent of the domain line along the axis
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn transform(&self) -> String {
        format!("translate({}, {})", self.translate.0, self.translate.1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Title {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub text: String,
}

type Listener = Box<dyn Fn()>;

/// Pointer listeners attached to a bar
#[derive(Default)]
pub struct Listeners {
    pub mouse_over: Option<Listener>,
    pub mouse_out: Option<Listener>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("mouse_over", &self.mouse_over.is_some())
            .field("mouse_out", &self.mouse_out.is_some())
            .finish()
    }
}

/// One `<rect class="bar">` per record
#[derive(Debug)]
pub struct Bar {
    pub class: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    /// `data-date`
    pub date: String,
    /// `data-gdp`
    pub gdp: f64,
    /// Child `<title>` text
    pub label: String,
    pub listeners: Listeners,
}

impl Bar {
    pub fn on_mouse_over(&mut self, listener: impl Fn() + 'static) {
        self.listeners.mouse_over = Some(Box::new(listener));
    }

    pub fn on_mouse_out(&mut self, listener: impl Fn() + 'static) {
        self.listeners.mouse_out = Some(Box::new(listener));
    }

    /// Dispatch a pointer-enter event
    pub fn mouse_over(&self) {
        if let Some(listener) = &self.listeners.mouse_over {
            listener();
        }
    }

    /// Dispatch a pointer-leave event
    pub fn mouse_out(&self) {
        if let Some(listener) = &self.listeners.mouse_out {
            listener();
        }
    }

    /// Attribute value of `data-gdp` as it appears in markup
    pub fn data_gdp(&self) -> String {
        self.gdp.to_string()
    }
}

/// The svg root appended to the canvas container
#[derive(Debug)]
pub struct Chart {
    pub width: f64,
    pub height: f64,
    pub class: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub title: Title,
    pub bars: Vec<Bar>,
}
