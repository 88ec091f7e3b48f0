//! Derivation resolver - cascades run when a triggering field changes
//!
//! Each cascade recomputes the fields that depend on the edited one. The
//! order inside a cascade matters: the PHY type is settled before the PHY ID
//! and channel page, and channel masks come last.

use tracing::debug;

use crate::field::Field;
use crate::record::{default_channel_mask, default_oad_block_size, ConfigRecord};
use crate::record::{BEACON_MODE_ORDER, NON_BEACON_ORDER};
use crate::tables::{DomainTables, TableError};
use crate::types::{FrequencyBand, NetworkMode, PhyType};
use crate::visibility::{sync_hidden, BAND_DEPENDENT_FIELDS, MODE_DEPENDENT_FIELDS};

/// Cascade for an edit of the frequency band
pub fn on_frequency_band_change(
    record: &mut ConfigRecord,
    tables: &DomainTables,
) -> Result<(), TableError> {
    debug!(band = %record.freq_band, "Frequency band changed");

    for field in BAND_DEPENDENT_FIELDS {
        sync_hidden(record, tables, field);
    }

    record.phy_type = PhyType::default_for(record.freq_band);
    set_phy_id_channel_page(record, tables)?;
    set_default_channel_masks(record, tables);
    record.oad_block_size = default_oad_block_size(record.freq_band);
    Ok(())
}

/// Cascade for an edit of the Sub-1 GHz frequency or the PHY type
pub fn on_freq_or_phy_type_change(
    record: &mut ConfigRecord,
    tables: &DomainTables,
) -> Result<(), TableError> {
    debug!(
        frequency = %record.freq_sub1,
        phy = %record.phy_type,
        "Frequency or PHY type changed"
    );

    set_phy_id_channel_page(record, tables)?;
    set_default_channel_masks(record, tables);
    Ok(())
}

/// Cascade for an edit of the network mode
pub fn on_mode_change(record: &mut ConfigRecord, tables: &DomainTables) {
    debug!(mode = %record.mode, "Network mode changed");

    let order = if record.mode == NetworkMode::Beacon {
        BEACON_MODE_ORDER
    } else {
        NON_BEACON_ORDER
    };
    record.mac_beacon_order = order;
    record.mac_superframe_order = order;

    for field in MODE_DEPENDENT_FIELDS {
        sync_hidden(record, tables, field);
    }
}

/// Look up PHY ID and channel page for the current band, frequency and PHY
pub fn set_phy_id_channel_page(
    record: &mut ConfigRecord,
    tables: &DomainTables,
) -> Result<(), TableError> {
    let settings = tables.phy_settings(record.freq_band, record.freq_sub1, record.phy_type)?;
    record.phy_id = settings.phy_id.to_string();
    record.channel_page = settings.channel_page.to_string();
    Ok(())
}

/// Reset the channel masks for the current selections
///
/// The fixed-channel mask takes the band's default; both frequency hopping
/// masks select every channel currently supported.
pub fn set_default_channel_masks(record: &mut ConfigRecord, tables: &DomainTables) {
    record.channel_mask = default_channel_mask(record.freq_band == FrequencyBand::Sub1Ghz);

    let supported = tables.supported_channels(record.freq_band, record.freq_sub1, record.phy_type);
    record.fh_channel_mask = supported.iter().copied().collect();
    record.fh_async_channel_mask = supported.into_iter().collect();
}

/// Run the cascade belonging to an edited field, if it has one
pub fn on_field_change(
    record: &mut ConfigRecord,
    tables: &DomainTables,
    field: Field,
) -> Result<(), TableError> {
    match field {
        Field::FreqBand => on_frequency_band_change(record, tables),
        Field::FreqSub1 | Field::PhyType => on_freq_or_phy_type_change(record, tables),
        Field::Mode => {
            on_mode_change(record, tables);
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rf_defaults::RfDefaults;
    use crate::types::{ProjectRole, Sub1Frequency};

    fn setup(board: Board) -> (DomainTables, ConfigRecord) {
        let tables = DomainTables::new(board, &RfDefaults::builtin().unwrap()).unwrap();
        let record = ConfigRecord::defaults(&tables, ProjectRole::Collector);
        (tables, record)
    }

    #[test]
    fn test_band_change_to_24ghz() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        record.freq_sub1 = Sub1Frequency::Mhz863;
        record.transmit_power_sub_g = 12;
        record.freq_band = FrequencyBand::Ghz24;

        on_frequency_band_change(&mut record, &tables).unwrap();

        assert_eq!(record.phy_type, PhyType::Ieee250Kbps);
        assert_eq!(record.phy_id, "APIMAC_PHY_ID_NONE");
        assert_eq!(record.channel_page, "APIMAC_CHANNEL_PAGE_NONE");
        assert_eq!(record.channel_mask, [11, 12, 13, 14].into_iter().collect());
        assert_eq!(record.fh_channel_mask, (11..=26).collect());
        assert_eq!(record.fh_async_channel_mask, (11..=26).collect());
        assert_eq!(record.oad_block_size, 128);
        // Hidden Sub-1 GHz fields went back to their defaults
        assert_eq!(record.freq_sub1, Sub1Frequency::Mhz915);
        assert_eq!(record.transmit_power_sub_g, 0);
    }

    #[test]
    fn test_band_change_back_to_sub1() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        record.freq_band = FrequencyBand::Ghz24;
        on_frequency_band_change(&mut record, &tables).unwrap();
        record.freq_band = FrequencyBand::Sub1Ghz;
        on_frequency_band_change(&mut record, &tables).unwrap();

        assert_eq!(record.phy_type, PhyType::Gfsk50Kbps);
        assert_eq!(record.phy_id, "APIMAC_STD_US_915_PHY_1");
        assert_eq!(record.channel_mask, [0, 1, 2, 3].into_iter().collect());
        assert_eq!(record.fh_channel_mask.len(), 129);
        assert_eq!(record.oad_block_size, 64);
    }

    #[test]
    fn test_band_change_is_idempotent() {
        let (tables, mut record) = setup(Board::Cc1352P2);
        record.freq_band = FrequencyBand::Ghz24;
        on_frequency_band_change(&mut record, &tables).unwrap();
        let once = record.clone();
        on_frequency_band_change(&mut record, &tables).unwrap();
        assert_eq!(record, once);
    }

    #[test]
    fn test_phy_type_change_updates_phy_and_masks() {
        let (tables, mut record) = setup(Board::Cc1312R1);
        record.freq_sub1 = Sub1Frequency::Mhz863;
        record.phy_type = PhyType::Gfsk200Kbps;
        on_freq_or_phy_type_change(&mut record, &tables).unwrap();

        assert_eq!(record.phy_id, "APIMAC_GENERIC_ETSI_863_PHY_133");
        assert_eq!(record.channel_page, "APIMAC_CHANNEL_PAGE_10");
        assert_eq!(record.fh_channel_mask, (0..=16).collect());

        record.phy_type = PhyType::Slr5Kbps;
        on_freq_or_phy_type_change(&mut record, &tables).unwrap();
        assert_eq!(record.phy_id, "APIMAC_GENERIC_ETSI_LRM_863_PHY_131");
        assert_eq!(record.fh_channel_mask, (0..=33).collect());
    }

    #[test]
    fn test_unmapped_phy_is_fatal() {
        let (tables, mut record) = setup(Board::Cc1352P4);
        record.phy_type = PhyType::Gfsk200Kbps;
        let err = on_freq_or_phy_type_change(&mut record, &tables).unwrap_err();
        assert!(matches!(err, TableError::UnmappedPhy { .. }));
    }

    #[test]
    fn test_mode_change_orders_and_visibility() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        record.fh_netname = "custom".to_string();
        record.mode = NetworkMode::Beacon;
        on_mode_change(&mut record, &tables);

        assert_eq!(record.mac_beacon_order, 8);
        assert_eq!(record.mac_superframe_order, 8);
        // fhNetname is hidden outside frequency hopping
        assert_eq!(record.fh_netname, "FHTest");

        record.mode = NetworkMode::NonBeacon;
        on_mode_change(&mut record, &tables);
        assert_eq!(record.mac_beacon_order, 15);
    }

    #[test]
    fn test_on_field_change_dispatch() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        record.freq_sub1 = Sub1Frequency::Mhz863;
        on_field_change(&mut record, &tables, Field::FreqSub1).unwrap();
        assert_eq!(record.phy_id, "APIMAC_STD_ETSI_863_PHY_3");

        let before = record.clone();
        on_field_change(&mut record, &tables, Field::PanId).unwrap();
        assert_eq!(record, before);
    }
}
