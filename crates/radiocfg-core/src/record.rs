//! Configuration record - the current value of every field for one project

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::board::Board;
use crate::field::Field;
use crate::power::default_transmit_power;
use crate::tables::{Channel, DomainTables};
use crate::types::{FrequencyBand, NetworkMode, PhyType, ProjectRole, Sub1Frequency};

pub const DEFAULT_PAN_ID: i64 = 0xFFFF;
pub const DEFAULT_FH_NETNAME: &str = "FHTest";
pub const DEFAULT_MAX_DEVICES: i64 = 50;
pub const DEFAULT_REPORTING_INTERVAL: i64 = 3000;
pub const DEFAULT_POLLING_INTERVAL: i64 = 2000;
pub const DEFAULT_TRACKING_DELAY_TIME: i64 = 5000;
pub const DEFAULT_SCAN_BACKOFF_INTERVAL: i64 = 5000;
pub const DEFAULT_ORPHAN_BACKOFF_INTERVAL: i64 = 300_000;
pub const DEFAULT_SCAN_DURATION: i64 = 5;
/// Beacon and superframe order outside beacon mode (beacons disabled)
pub const NON_BEACON_ORDER: i64 = 15;
/// Beacon and superframe order applied when beacon mode is selected
pub const BEACON_MODE_ORDER: i64 = 8;
pub const DEFAULT_MIN_BE: i64 = 3;
pub const DEFAULT_MAX_BE: i64 = 5;
pub const DEFAULT_FH_BROADCAST_INTERVAL: i64 = 10_000;
pub const DEFAULT_FH_BROADCAST_DWELL_TIME: i64 = 100;

/// Default channel mask for the band family the board defaults to
pub fn default_channel_mask(sub1_selected: bool) -> BTreeSet<Channel> {
    if sub1_selected {
        [0, 1, 2, 3].into_iter().collect()
    } else {
        [11, 12, 13, 14].into_iter().collect()
    }
}

/// OAD image block size in bytes for a band
pub fn default_oad_block_size(band: FrequencyBand) -> u32 {
    match band {
        FrequencyBand::Sub1Ghz => 64,
        FrequencyBand::Ghz24 => 128,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord {
    pub board: Board,
    pub project_role: ProjectRole,
    pub mode: NetworkMode,

    // Radio
    pub freq_band: FrequencyBand,
    pub freq_sub1: Sub1Frequency,
    pub phy_type: PhyType,
    #[serde(rename = "phyID")]
    pub phy_id: String,
    pub channel_page: String,

    // Network
    #[serde(rename = "panID")]
    pub pan_id: i64,
    pub channel_mask: BTreeSet<Channel>,
    pub fh_channel_mask: BTreeSet<Channel>,
    pub fh_async_channel_mask: BTreeSet<Channel>,
    pub fh_netname: String,
    pub max_devices: i64,
    pub reporting_interval: i64,
    pub polling_interval: i64,
    pub tracking_delay_time: i64,
    pub scan_backoff_interval: i64,
    pub orphan_backoff_interval: i64,
    pub scan_duration: i64,
    pub mac_beacon_order: i64,
    pub mac_superframe_order: i64,
    pub min_be: i64,
    pub max_be: i64,
    pub fh_broadcast_interval: i64,
    pub fh_broadcast_dwell_time: i64,

    // Power
    #[serde(rename = "transmitPowerSubG")]
    pub transmit_power_sub_g: i32,
    #[serde(rename = "transmitPower24G")]
    pub transmit_power_24g: i32,
    pub rx_on_idle: bool,

    // OAD
    pub oad_block_size: u32,
}

impl ConfigRecord {
    /// Record holding every field's schema default for the board
    pub fn defaults(tables: &DomainTables, project_role: ProjectRole) -> Self {
        let band = tables.default_frequency_band();
        let phy = tables.default_phy_settings();
        let device_channels: BTreeSet<Channel> = tables.channel_range().into_iter().collect();

        Self {
            board: tables.board(),
            project_role,
            mode: NetworkMode::FrequencyHopping,
            freq_band: band,
            freq_sub1: tables.default_sub1_frequency(),
            phy_type: PhyType::default_for(band),
            phy_id: phy.phy_id.to_string(),
            channel_page: phy.channel_page.to_string(),
            pan_id: DEFAULT_PAN_ID,
            channel_mask: default_channel_mask(tables.rf_class().sub1ghz),
            fh_channel_mask: device_channels.clone(),
            fh_async_channel_mask: device_channels,
            fh_netname: DEFAULT_FH_NETNAME.to_string(),
            max_devices: DEFAULT_MAX_DEVICES,
            reporting_interval: DEFAULT_REPORTING_INTERVAL,
            polling_interval: DEFAULT_POLLING_INTERVAL,
            tracking_delay_time: DEFAULT_TRACKING_DELAY_TIME,
            scan_backoff_interval: DEFAULT_SCAN_BACKOFF_INTERVAL,
            orphan_backoff_interval: DEFAULT_ORPHAN_BACKOFF_INTERVAL,
            scan_duration: DEFAULT_SCAN_DURATION,
            mac_beacon_order: NON_BEACON_ORDER,
            mac_superframe_order: NON_BEACON_ORDER,
            min_be: DEFAULT_MIN_BE,
            max_be: DEFAULT_MAX_BE,
            fh_broadcast_interval: DEFAULT_FH_BROADCAST_INTERVAL,
            fh_broadcast_dwell_time: DEFAULT_FH_BROADCAST_DWELL_TIME,
            transmit_power_sub_g: default_transmit_power(tables, FrequencyBand::Sub1Ghz),
            transmit_power_24g: default_transmit_power(tables, FrequencyBand::Ghz24),
            rx_on_idle: false,
            oad_block_size: default_oad_block_size(band),
        }
    }

    /// Restore one field to its schema default
    pub fn restore_default(&mut self, field: Field, tables: &DomainTables) {
        let defaults = Self::defaults(tables, self.project_role);
        match field {
            Field::Mode => self.mode = defaults.mode,
            Field::FreqBand => self.freq_band = defaults.freq_band,
            Field::FreqSub1 => self.freq_sub1 = defaults.freq_sub1,
            Field::PhyType => self.phy_type = defaults.phy_type,
            Field::PhyId => self.phy_id = defaults.phy_id,
            Field::ChannelPage => self.channel_page = defaults.channel_page,
            Field::PanId => self.pan_id = defaults.pan_id,
            Field::ChannelMask => self.channel_mask = defaults.channel_mask,
            Field::FhChannelMask => self.fh_channel_mask = defaults.fh_channel_mask,
            Field::FhAsyncChannelMask => self.fh_async_channel_mask = defaults.fh_async_channel_mask,
            Field::FhNetname => self.fh_netname = defaults.fh_netname,
            Field::TransmitPowerSubG => self.transmit_power_sub_g = defaults.transmit_power_sub_g,
            Field::TransmitPower24G => self.transmit_power_24g = defaults.transmit_power_24g,
            Field::RxOnIdle => self.rx_on_idle = defaults.rx_on_idle,
            Field::OadBlockSize => self.oad_block_size = defaults.oad_block_size,
            integer => {
                if let Some(value) = defaults.integer(integer) {
                    self.set_integer(integer, value);
                }
            }
        }
    }

    /// Value of a plain integer field
    pub fn integer(&self, field: Field) -> Option<i64> {
        let value = match field {
            Field::PanId => self.pan_id,
            Field::MaxDevices => self.max_devices,
            Field::ReportingInterval => self.reporting_interval,
            Field::PollingInterval => self.polling_interval,
            Field::TrackingDelayTime => self.tracking_delay_time,
            Field::ScanBackoffInterval => self.scan_backoff_interval,
            Field::OrphanBackoffInterval => self.orphan_backoff_interval,
            Field::ScanDuration => self.scan_duration,
            Field::MacBeaconOrder => self.mac_beacon_order,
            Field::MacSuperframeOrder => self.mac_superframe_order,
            Field::MinBe => self.min_be,
            Field::MaxBe => self.max_be,
            Field::FhBroadcastInterval => self.fh_broadcast_interval,
            Field::FhBroadcastDwellTime => self.fh_broadcast_dwell_time,
            _ => return None,
        };
        Some(value)
    }

    /// Set a plain integer field, returning false for non-integer fields
    pub fn set_integer(&mut self, field: Field, value: i64) -> bool {
        let slot = match field {
            Field::PanId => &mut self.pan_id,
            Field::MaxDevices => &mut self.max_devices,
            Field::ReportingInterval => &mut self.reporting_interval,
            Field::PollingInterval => &mut self.polling_interval,
            Field::TrackingDelayTime => &mut self.tracking_delay_time,
            Field::ScanBackoffInterval => &mut self.scan_backoff_interval,
            Field::OrphanBackoffInterval => &mut self.orphan_backoff_interval,
            Field::ScanDuration => &mut self.scan_duration,
            Field::MacBeaconOrder => &mut self.mac_beacon_order,
            Field::MacSuperframeOrder => &mut self.mac_superframe_order,
            Field::MinBe => &mut self.min_be,
            Field::MaxBe => &mut self.max_be,
            Field::FhBroadcastInterval => &mut self.fh_broadcast_interval,
            Field::FhBroadcastDwellTime => &mut self.fh_broadcast_dwell_time,
            _ => return false,
        };
        *slot = value;
        true
    }

    pub fn channel_mask(&self, field: Field) -> Option<&BTreeSet<Channel>> {
        match field {
            Field::ChannelMask => Some(&self.channel_mask),
            Field::FhChannelMask => Some(&self.fh_channel_mask),
            Field::FhAsyncChannelMask => Some(&self.fh_async_channel_mask),
            _ => None,
        }
    }

    pub fn channel_mask_mut(&mut self, field: Field) -> Option<&mut BTreeSet<Channel>> {
        match field {
            Field::ChannelMask => Some(&mut self.channel_mask),
            Field::FhChannelMask => Some(&mut self.fh_channel_mask),
            Field::FhAsyncChannelMask => Some(&mut self.fh_async_channel_mask),
            _ => None,
        }
    }

    /// The transmit power field for the selected band
    pub fn active_transmit_power_field(&self) -> Field {
        match self.freq_band {
            FrequencyBand::Sub1Ghz => Field::TransmitPowerSubG,
            FrequencyBand::Ghz24 => Field::TransmitPower24G,
        }
    }

    /// Selected transmit power (dBm) for the selected band
    pub fn active_transmit_power(&self) -> i32 {
        match self.freq_band {
            FrequencyBand::Sub1Ghz => self.transmit_power_sub_g,
            FrequencyBand::Ghz24 => self.transmit_power_24g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rf_defaults::RfDefaults;

    fn tables(board: Board) -> DomainTables {
        DomainTables::new(board, &RfDefaults::builtin().unwrap()).unwrap()
    }

    #[test]
    fn test_defaults_for_24ghz_only_board() {
        let t = tables(Board::Cc26x2R1);
        let record = ConfigRecord::defaults(&t, ProjectRole::Collector);
        assert_eq!(record.freq_band, FrequencyBand::Ghz24);
        assert_eq!(record.phy_type, PhyType::Ieee250Kbps);
        assert_eq!(record.phy_id, "APIMAC_PHY_ID_NONE");
        assert_eq!(record.channel_mask, [11, 12, 13, 14].into_iter().collect());
        assert_eq!(record.fh_channel_mask, (11..=26).collect());
        assert_eq!(record.oad_block_size, 128);
    }

    #[test]
    fn test_defaults_for_433_board() {
        let t = tables(Board::Cc1352P4);
        let record = ConfigRecord::defaults(&t, ProjectRole::Sensor);
        assert_eq!(record.freq_band, FrequencyBand::Sub1Ghz);
        assert_eq!(record.freq_sub1, Sub1Frequency::Mhz433);
        assert_eq!(record.channel_mask, [0, 1, 2, 3].into_iter().collect());
        assert_eq!(record.fh_async_channel_mask, (0..=6).collect());
        assert_eq!(record.transmit_power_sub_g, 0);
    }

    #[test]
    fn test_restore_default() {
        let t = tables(Board::Cc1352R1);
        let mut record = ConfigRecord::defaults(&t, ProjectRole::Collector);
        record.freq_sub1 = Sub1Frequency::Mhz863;
        record.max_be = 9;
        record.fh_channel_mask.clear();

        record.restore_default(Field::FreqSub1, &t);
        record.restore_default(Field::MaxBe, &t);
        record.restore_default(Field::FhChannelMask, &t);
        assert_eq!(record, ConfigRecord::defaults(&t, ProjectRole::Collector));
    }

    #[test]
    fn test_integer_accessors() {
        let t = tables(Board::Cc1312R1);
        let mut record = ConfigRecord::defaults(&t, ProjectRole::Other);
        assert_eq!(record.integer(Field::PanId), Some(0xFFFF));
        assert!(record.set_integer(Field::ScanDuration, 7));
        assert_eq!(record.scan_duration, 7);
        assert!(!record.set_integer(Field::FhNetname, 1));
        assert_eq!(record.integer(Field::PhyType), None);
    }

    #[test]
    fn test_serde_field_names() {
        let t = tables(Board::Cc1352R1);
        let record = ConfigRecord::defaults(&t, ProjectRole::Collector);
        let value = serde_json::to_value(&record).unwrap();
        for field in Field::ALL {
            assert!(value.get(field.as_str()).is_some(), "missing {field}");
        }
        let back: ConfigRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
