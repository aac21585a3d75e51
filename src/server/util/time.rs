use chrono::TimeDelta;

/// Formats a duration as `[-][d.]hh:mm:ss[.fffffff]`.
///
/// Days appear only when the span is at least a day long and the fractional part
/// only when it is non-zero, in 100 nanosecond ticks.
///
/// # Arguments
/// - `span` - Duration to format, may be negative
///
/// # Returns
/// - `String` - e.g. `01:30:00`, `-00:45:00`, `1.02:00:00`
pub fn format_time_span(span: TimeDelta) -> String {
    let sign = if span < TimeDelta::zero() { "-" } else { "" };
    let span = span.abs();

    let days = span.num_days();
    let hours = span.num_hours() % 24;
    let minutes = span.num_minutes() % 60;
    let seconds = span.num_seconds() % 60;
    let ticks = span.subsec_nanos() / 100;

    let days = if days > 0 {
        format!("{}.", days)
    } else {
        String::new()
    };
    let fraction = if ticks > 0 {
        format!(".{:07}", ticks)
    } else {
        String::new()
    };

    format!(
        "{}{}{:02}:{:02}:{:02}{}",
        sign, days, hours, minutes, seconds, fraction
    )
}
