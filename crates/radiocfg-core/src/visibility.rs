//! Visibility resolver - which fields are shown, hidden or read-only
//!
//! Visibility is a pure function of the band, mode and project role. When a
//! field is hidden it is restored to its schema default, so a stale value
//! never re-emerges once the field is shown again in a different context.

use tracing::debug;

use crate::field::Field;
use crate::record::ConfigRecord;
use crate::tables::DomainTables;
use crate::types::{FrequencyBand, NetworkMode, ProjectRole};

/// Whether a field is hidden for the current selections
pub fn is_hidden(record: &ConfigRecord, field: Field) -> bool {
    let frequency_hopping = record.mode == NetworkMode::FrequencyHopping;
    let beacon = record.mode == NetworkMode::Beacon;
    let collector = record.project_role == ProjectRole::Collector;
    let sensor = record.project_role == ProjectRole::Sensor;
    let sub1 = record.freq_band == FrequencyBand::Sub1Ghz;

    let visible = match field {
        Field::ChannelMask => !frequency_hopping,
        Field::FhChannelMask | Field::FhAsyncChannelMask | Field::FhNetname => frequency_hopping,
        Field::FhBroadcastInterval | Field::FhBroadcastDwellTime => collector && frequency_hopping,
        Field::OrphanBackoffInterval | Field::ScanBackoffInterval => sensor && !frequency_hopping,
        Field::TrackingDelayTime | Field::MaxDevices => collector,
        Field::PollingInterval => !beacon,
        Field::TransmitPowerSubG | Field::FreqSub1 => sub1,
        Field::TransmitPower24G => !sub1,
        Field::RxOnIdle => sensor,
        _ => true,
    };
    !visible
}

/// Reason a field cannot be edited, if it is read-only
pub fn read_only_reason(record: &ConfigRecord, field: Field) -> Option<&'static str> {
    match field {
        Field::PhyId | Field::ChannelPage => {
            Some("Automatically set based on frequency and phy type selected")
        }
        Field::OadBlockSize => Some("Automatically set based on the frequency band selected"),
        Field::MacBeaconOrder | Field::MacSuperframeOrder if record.mode != NetworkMode::Beacon => {
            Some("Only configurable in beacon mode")
        }
        _ => None,
    }
}

/// Fields whose visibility depends on the network mode
pub const MODE_DEPENDENT_FIELDS: [Field; 9] = [
    Field::ChannelMask,
    Field::FhChannelMask,
    Field::FhAsyncChannelMask,
    Field::FhNetname,
    Field::FhBroadcastInterval,
    Field::FhBroadcastDwellTime,
    Field::OrphanBackoffInterval,
    Field::ScanBackoffInterval,
    Field::PollingInterval,
];

/// Fields whose visibility depends on the frequency band
pub const BAND_DEPENDENT_FIELDS: [Field; 3] = [
    Field::FreqSub1,
    Field::TransmitPowerSubG,
    Field::TransmitPower24G,
];

/// Re-evaluate a field's visibility, restoring its default when hidden
///
/// Returns whether the field is hidden. A visible field is never touched.
pub fn sync_hidden(record: &mut ConfigRecord, tables: &DomainTables, field: Field) -> bool {
    let hidden = is_hidden(record, field);
    if hidden {
        debug!(field = %field, "Field hidden, restoring default");
        record.restore_default(field, tables);
    }
    hidden
}

/// Re-evaluate every field's visibility
pub fn sync_all(record: &mut ConfigRecord, tables: &DomainTables) {
    for field in Field::ALL {
        sync_hidden(record, tables, field);
    }
}

/// Fields currently hidden, in declaration order
pub fn hidden_fields(record: &ConfigRecord) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|field| is_hidden(record, *field))
        .collect()
}
