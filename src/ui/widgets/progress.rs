use std::time::{Duration, Instant};

/// Step progress: `Removing core ━━━━──────  2/5 (40%)  ETA: 3s`
#[derive(Debug, Clone)]
pub struct StepProgress {
    total: usize,
    fraction: f64,
    width: u16,
    label: String,
    started: Instant,
}

impl StepProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            fraction: 0.0,
            width: 20,
            label: String::new(),
            started: Instant::now(),
        }
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width.max(1);
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    /// Progress only moves forward
    pub fn set_fraction(&mut self, fraction: f64) {
        self.fraction = fraction.clamp(self.fraction, 1.0);
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    fn completed(&self) -> usize {
        (self.fraction * self.total as f64).round() as usize
    }

    pub fn eta(&self) -> Option<Duration> {
        if self.fraction <= 0.0 {
            return None;
        }
        if self.fraction >= 1.0 {
            return Some(Duration::ZERO);
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        if elapsed <= 0.0 {
            return None;
        }
        let secs = elapsed / self.fraction * (1.0 - self.fraction);
        if !secs.is_finite() || secs.is_sign_negative() {
            return None;
        }
        Some(Duration::from_secs_f64(secs))
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let (filled, empty) = self.bar_segments();
        let bar = if supports_unicode {
            format!("{}{}", "━".repeat(filled), "─".repeat(empty))
        } else {
            format!("{}{}", "=".repeat(filled), "-".repeat(empty))
        };

        let mut out = String::new();
        if !self.label.is_empty() {
            out.push_str("Removing ");
            out.push_str(&self.label);
            out.push(' ');
        }
        out.push_str(&bar);
        out.push_str(&format!(
            "  {}/{} ({}%)",
            self.completed(),
            self.total,
            (self.fraction * 100.0).round() as u32
        ));
        if let Some(eta) = self.eta().filter(|_| self.fraction < 1.0) {
            out.push_str(&format!("  ETA: {}", format_duration_compact(eta)));
        }
        out
    }

    fn bar_segments(&self) -> (usize, usize) {
        let width = self.width.max(1) as usize;
        let filled = (self.fraction * width as f64).round().clamp(0.0, width as f64) as usize;
        (filled, width - filled)
    }
}

fn format_duration_compact(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        return format!("{}s", secs);
    }
    let mins = secs / 60;
    if mins < 60 {
        return format!("{}m", mins);
    }
    format!("{}h", mins / 60)
}
