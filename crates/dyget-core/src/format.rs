//! Human-readable sizes and durations for display.

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;
const GIB: f64 = MIB * 1024.0;

/// `1536` → `"1.50KB"`. Plain bytes have no decimals.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    if b < KIB {
        format!("{bytes}B")
    } else if b < MIB {
        format!("{:.2}KB", b / KIB)
    } else if b < GIB {
        format!("{:.2}MB", b / MIB)
    } else {
        format!("{:.2}GB", b / GIB)
    }
}

/// `125` → `"02:05"`. Minutes are not wrapped into hours.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
