//! Minimal SVG line charts.
//!
//! Charts are assembled as plain SVG text, the same way the CSV artifacts
//! are assembled as plain text. Good enough for a COP time series and the
//! parametric study; anything fancier belongs in an external viewer.

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 50.0;

const PALETTE: [&str; 4] = ["#1f77b4", "#d62728", "#2ca02c", "#9467bd"];

/// One named polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

/// Build a series from optional values indexed by position; gaps (`None`)
/// are simply dropped, which reads as missing points on the chart.
pub fn indexed_series(name: &str, values: &[Option<f64>]) -> Series {
    Series {
        name: name.to_string(),
        points: values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|y| (i as f64, y)))
            .collect(),
    }
}

fn bounds(series: &[Series]) -> Option<(f64, f64, f64, f64)> {
    let mut it = series.iter().flat_map(|s| s.points.iter());
    let first = it.next()?;
    let (mut x0, mut x1, mut y0, mut y1) = (first.0, first.0, first.1, first.1);
    for &(x, y) in it {
        x0 = x0.min(x);
        x1 = x1.max(x);
        y0 = y0.min(y);
        y1 = y1.max(y);
    }
    // Avoid a degenerate scale when all points share a coordinate
    if (x1 - x0).abs() < 1e-12 {
        x1 = x0 + 1.0;
    }
    if (y1 - y0).abs() < 1e-12 {
        y1 = y0 + 1.0;
    }
    Some((x0, x1, y0, y1))
}

/// Render a line chart as an SVG document string.
pub fn line_chart(title: &str, x_label: &str, y_label: &str, series: &[Series]) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" \
         font-family=\"sans-serif\" font-size=\"12\">\n"
    );
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"20\" text-anchor=\"middle\" font-size=\"16\">{title}</text>\n",
        WIDTH / 2.0
    ));

    let plot_w = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

    // Axes
    svg.push_str(&format!(
        "  <line x1=\"{l:.0}\" y1=\"{b:.0}\" x2=\"{r:.0}\" y2=\"{b:.0}\" stroke=\"black\"/>\n  \
         <line x1=\"{l:.0}\" y1=\"{t:.0}\" x2=\"{l:.0}\" y2=\"{b:.0}\" stroke=\"black\"/>\n",
        l = MARGIN_LEFT,
        r = WIDTH - MARGIN_RIGHT,
        t = MARGIN_TOP,
        b = HEIGHT - MARGIN_BOTTOM,
    ));
    svg.push_str(&format!(
        "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\">{x_label}</text>\n",
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 10.0
    ));
    svg.push_str(&format!(
        "  <text x=\"15\" y=\"{:.0}\" text-anchor=\"middle\" transform=\"rotate(-90 15 {:.0})\">{y_label}</text>\n",
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    ));

    match bounds(series) {
        None => {
            svg.push_str(&format!(
                "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\">no data</text>\n",
                WIDTH / 2.0,
                HEIGHT / 2.0
            ));
        }
        Some((x0, x1, y0, y1)) => {
            let to_px = |x: f64, y: f64| {
                let px = MARGIN_LEFT + (x - x0) / (x1 - x0) * plot_w;
                let py = HEIGHT - MARGIN_BOTTOM - (y - y0) / (y1 - y0) * plot_h;
                (px, py)
            };

            // Min/max tick labels
            svg.push_str(&format!(
                "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\">{x0:.1}</text>\n  \
                 <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"middle\">{x1:.1}</text>\n",
                MARGIN_LEFT,
                HEIGHT - MARGIN_BOTTOM + 18.0,
                WIDTH - MARGIN_RIGHT,
                HEIGHT - MARGIN_BOTTOM + 18.0,
            ));
            svg.push_str(&format!(
                "  <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"end\">{y0:.2}</text>\n  \
                 <text x=\"{:.0}\" y=\"{:.0}\" text-anchor=\"end\">{y1:.2}</text>\n",
                MARGIN_LEFT - 6.0,
                HEIGHT - MARGIN_BOTTOM,
                MARGIN_LEFT - 6.0,
                MARGIN_TOP + 4.0,
            ));

            for (i, s) in series.iter().enumerate() {
                if s.points.is_empty() {
                    continue;
                }
                let color = PALETTE[i % PALETTE.len()];
                let pts: Vec<String> = s
                    .points
                    .iter()
                    .map(|&(x, y)| {
                        let (px, py) = to_px(x, y);
                        format!("{px:.1},{py:.1}")
                    })
                    .collect();
                svg.push_str(&format!(
                    "  <polyline fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\" points=\"{}\"/>\n",
                    pts.join(" ")
                ));
                // Legend entry
                svg.push_str(&format!(
                    "  <text x=\"{:.0}\" y=\"{:.0}\" fill=\"{color}\">{}</text>\n",
                    MARGIN_LEFT + 8.0,
                    MARGIN_TOP + 16.0 + 16.0 * i as f64,
                    s.name
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}
