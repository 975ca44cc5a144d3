// Emergency escape and rescue openings per IRC R310.1
use super::Finding;
use crate::components::Room;

pub const IRC_R310_1: &str = "IRC R310.1";

/// Minimum clear opening for an egress window, sq ft
pub const MIN_CLEAR_OPENING_SQFT: f64 = 5.7;

/// Bedrooms need at least one window whose clear opening alone reaches
/// 5.7 sq ft. Openings of separate windows are never combined.
///
/// Emits at most one finding: either no windows at all, or the largest
/// clear opening found falls short.
pub fn check_bedroom_egress(room: &Room) -> Vec<Finding> {
    let mut findings = Vec::new();
    let windows = room.all_windows();

    if windows.is_empty() {
        findings.push(Finding::error(
            IRC_R310_1,
            "Bedroom requires at least one egress window",
            Some(room.room_type.to_string()),
        ));
        return findings;
    }

    let has_compliant_egress = windows
        .iter()
        .any(|w| w.clear_opening_sqft() >= MIN_CLEAR_OPENING_SQFT);

    if !has_compliant_egress {
        let largest = windows
            .iter()
            .map(|w| w.clear_opening_sqft())
            .fold(0.0_f64, f64::max);
        findings.push(Finding::error(
            IRC_R310_1,
            format!(
                "No window meets egress requirement. Required: {:?} sq ft, Largest found: {:.2} sq ft",
                MIN_CLEAR_OPENING_SQFT, largest
            ),
            Some(room.room_type.to_string()),
        ));
    }

    findings
}
