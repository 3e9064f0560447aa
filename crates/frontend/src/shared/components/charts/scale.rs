//! Geometry helpers shared by the chart components

/// Drawing area of a chart inside its SVG viewBox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Frame {
    pub const DEFAULT: Frame = Frame {
        width: 800.0,
        height: 380.0,
        margin_left: 72.0,
        margin_right: 24.0,
        margin_top: 24.0,
        margin_bottom: 96.0,
    };

    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    /// y coordinate of the value axis origin
    pub fn baseline(&self) -> f64 {
        self.height - self.margin_bottom
    }

    /// Maps `value` in `[0, max]` to a y coordinate
    pub fn y(&self, value: f64, max: f64) -> f64 {
        if max <= 0.0 {
            return self.baseline();
        }
        self.baseline() - (value / max) * self.plot_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Rounds `max` up to 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let exp = 10f64.powi(max.log10().floor() as i32);
    let fraction = max / exp;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * exp
}

/// `count + 1` evenly spaced values from 0 to `max`
pub fn ticks(max: f64, count: usize) -> Vec<f64> {
    let count = count.max(1);
    (0..=count).map(|i| max * i as f64 / count as f64).collect()
}

/// Indices of at most `max_ticks` evenly spread items, first and last included
pub fn tick_indices(len: usize, max_ticks: usize) -> Vec<usize> {
    if len == 0 || max_ticks == 0 {
        return Vec::new();
    }
    if len <= max_ticks {
        return (0..len).collect();
    }
    if max_ticks == 1 {
        return vec![0];
    }
    let step = (len - 1) as f64 / (max_ticks - 1) as f64;
    (0..max_ticks)
        .map(|i| (i as f64 * step).round() as usize)
        .collect()
}

/// Compact axis label: 950, 2.5K, 1.2M
pub fn short_number(value: f64) -> String {
    let abs = value.abs();
    let text = if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };
    text.replace(".0K", "K").replace(".0M", "M")
}

/// Cuts long category labels, marking the cut with an ellipsis
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
