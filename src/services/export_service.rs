use maud::{html, Markup, PreEscaped, Render, DOCTYPE};

use crate::models::{Axis, AxisOrient, Bar, Chart, Page, Tooltip};

/// Length of the outer tick marks, in pixels
const TICK_SIZE: f64 = 6.0;

impl Render for Axis {
    fn render(&self) -> Markup {
        let (r0, r1) = self.range;
        let (anchor, domain) = match self.orient {
            AxisOrient::Bottom => ("middle", format!("M{},{}V0H{}V{}", r0, TICK_SIZE, r1, TICK_SIZE)),
            AxisOrient::Left => ("end", format!("M{},{}H0V{}H{}", -TICK_SIZE, r0, r1, -TICK_SIZE)),
        };

        html! {
            g id=(self.id) transform=(self.transform()) fill="none" font-size="10" font-family="sans-serif" text-anchor=(anchor) {
                path class="domain" stroke="currentColor" d=(domain) {}
                @for tick in &self.ticks {
                    @match self.orient {
                        AxisOrient::Bottom => {
                            g class="tick" opacity="1" transform=(format!("translate({},0)", tick.offset)) {
                                line stroke="currentColor" y2=(TICK_SIZE) {}
                                text fill="currentColor" y=(TICK_SIZE + 3.0) dy="0.71em" { (tick.label) }
                            }
                        }
                        AxisOrient::Left => {
                            g class="tick" opacity="1" transform=(format!("translate(0,{})", tick.offset)) {
                                line stroke="currentColor" x2=(-TICK_SIZE) {}
                                text fill="currentColor" x=(-(TICK_SIZE + 3.0)) dy="0.32em" { (tick.label) }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Render for Bar {
    fn render(&self) -> Markup {
        html! {
            rect class=(self.class) width=(self.width) data-date=(self.date) data-gdp=(self.data_gdp())
                x=(self.x) height=(self.height) y=(self.y) fill=(self.fill) {
                title { (self.label) }
            }
        }
    }
}

impl Render for Chart {
    fn render(&self) -> Markup {
        html! {
            svg width=(self.width) height=(self.height) class=(self.class) {
                (self.x_axis)
                (self.y_axis)
                text id=(self.title.id) x=(self.title.x) y=(self.title.y) { (self.title.text) }
                @for bar in &self.bars {
                    (bar)
                }
            }
        }
    }
}

/// Tooltip state paired with the id of the element it lives in
pub struct TooltipElement<'a> {
    pub id: &'a str,
    pub tooltip: Tooltip,
}

impl Render for TooltipElement<'_> {
    fn render(&self) -> Markup {
        let tooltip = &self.tooltip;
        let mut style = format!("visibility: {};", tooltip.visibility);
        if let Some(width) = &tooltip.width {
            style.push_str(&format!(" width: {};", width));
        }
        if let Some(height) = &tooltip.height {
            style.push_str(&format!(" height: {};", height));
        }

        html! {
            div id=(self.id) style=(style) data-date=[tooltip.data_date.as_deref()] { (tooltip.text) }
        }
    }
}

/// Serialize the page to a standalone HTML document
pub fn render_html(page: &Page) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (page.title()) }
                style { (PreEscaped(".bar:hover { fill: orange; }")) }
            }
            body {
                @for (id, canvas) in page.canvases() {
                    div id=(id) {
                        @for chart in &canvas.charts {
                            (chart)
                        }
                    }
                }
                @for (id, tooltip) in page.tooltips() {
                    (TooltipElement { id, tooltip: tooltip.snapshot() })
                }
            }
        }
    }
    .into_string()
}
