// Minimum ceiling height per IRC R305.1
use super::Finding;
use crate::components::Room;

pub const IRC_R305_1: &str = "IRC R305.1";

/// Minimum habitable ceiling height in feet
pub const MIN_CEILING_HEIGHT_FT: f64 = 7.0;

/// Habitable rooms need at least a 7 ft ceiling. Exactly 7.0 passes.
pub fn check_ceiling_height(room: &Room) -> Vec<Finding> {
    let mut findings = Vec::new();

    if room.ceiling_height_feet < MIN_CEILING_HEIGHT_FT {
        findings.push(Finding::error(
            IRC_R305_1,
            format!(
                "Ceiling height {:?}ft is below minimum {:?}ft",
                room.ceiling_height_feet, MIN_CEILING_HEIGHT_FT
            ),
            Some(room.room_type.to_string()),
        ));
    }

    findings
}
