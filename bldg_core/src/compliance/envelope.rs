// Thermal envelope wall insulation per IECC R402.1
use super::Finding;
use crate::components::Room;
use crate::project::ClimateZone;

pub const IECC_R402_1: &str = "IECC R402.1";

/// Required wall R-value for a zone number outside the known table
pub const FALLBACK_WALL_R_VALUE: u32 = 20;

/// Minimum assembly R-value for exterior walls by climate zone
/// (simplified prescriptive table).
pub const fn required_wall_r_value(zone: ClimateZone) -> u32 {
    match zone {
        ClimateZone::Zone1 | ClimateZone::Zone2 | ClimateZone::Zone3 => 13,
        ClimateZone::Zone4 => 15,
        ClimateZone::Zone5 | ClimateZone::Zone6 => 20,
        ClimateZone::Zone7 | ClimateZone::Zone8 => 21,
    }
}

/// Required wall R-value for a raw zone number. Numbers that do not name
/// an IECC zone get [`FALLBACK_WALL_R_VALUE`].
///
/// ```rust
/// use bldg_core::compliance::envelope::required_wall_r_value_for_zone;
///
/// assert_eq!(required_wall_r_value_for_zone(4), 15);
/// assert_eq!(required_wall_r_value_for_zone(9), 20);
/// ```
pub fn required_wall_r_value_for_zone(zone_number: u8) -> u32 {
    ClimateZone::try_from(zone_number)
        .map(required_wall_r_value)
        .unwrap_or(FALLBACK_WALL_R_VALUE)
}

/// Exterior walls must meet the zone's minimum R-value. One finding per
/// failing wall, in wall order; meeting the requirement exactly passes.
/// Interior walls are never checked.
pub fn check_thermal_envelope(room: &Room, climate_zone: ClimateZone) -> Vec<Finding> {
    let required = required_wall_r_value(climate_zone);

    room.walls
        .iter()
        .enumerate()
        .filter(|(_, wall)| wall.is_exterior && wall.total_r_value() < f64::from(required))
        .map(|(i, wall)| {
            Finding::error(
                IECC_R402_1,
                format!(
                    "Exterior wall R-value {:.1} below required {} for Climate Zone {}",
                    wall.total_r_value(),
                    required,
                    climate_zone
                ),
                Some(format!("Wall #{} ({})", i + 1, wall.framing_type)),
            )
        })
        .collect()
}
