//! Player, pronoun and timezone lookups over a loaded guild section.
use super::models::GuildData;
use std::collections::HashMap;

// Real UTC offsets span -12h to +14h; anything past a day is a data-entry error.
const MAX_OFFSET_HOURS: f64 = 24.0;

pub fn pronoun_role_ids(guild: &GuildData) -> &[String] {
    &guild.pronoun_role_ids
}

/// Timezone role id -> UTC offset in hours (may be fractional, e.g. 5.5). Offsets
/// outside a day either side are dropped.
pub fn timezone_offsets(guild: &GuildData) -> HashMap<String, f64> {
    guild
        .timezones
        .iter()
        .filter(|(_, tz)| tz.offset.is_finite() && tz.offset.abs() <= MAX_OFFSET_HOURS)
        .map(|(role_id, tz)| (role_id.clone(), tz.offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::TimezoneRecord;

    #[test]
    fn out_of_range_offsets_are_dropped() {
        let mut guild = GuildData::default();
        for (role, offset) in [("ist", 5.5), ("nzdt", 13.0), ("typo", 1e15), ("neg", -30.0)] {
            guild
                .timezones
                .insert(role.to_string(), TimezoneRecord { offset });
        }
        let offsets = timezone_offsets(&guild);
        assert_eq!(offsets.len(), 2);
        assert_eq!(offsets["ist"], 5.5);
        assert_eq!(offsets["nzdt"], 13.0);
    }
}
