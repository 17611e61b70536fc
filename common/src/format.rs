/// Formats a byte count as kilobytes with one decimal place, e.g. `"1.5 KB"`.
///
/// The unit is always `KB` (1024 bytes); there is no switching to MB or GB.
pub fn format_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    format!("{:.1} KB", kb)
}
