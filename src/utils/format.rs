//! Display formatting for the clock face

/// Format a second count as `MM:SS`. Minutes are not folded into hours.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Progress ring color, blue at 0.0 through purple to pink at 1.0
pub fn gradient_color(progress: f64) -> String {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let hue = 240.0 + progress * 120.0;
    format!("hsl({}, 100%, 50%)", hue)
}
