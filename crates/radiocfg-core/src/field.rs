//! Field identifiers of the configuration record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::ParseError;

/// Group a field is displayed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldGroup {
    Radio,
    Network,
    Power,
    Oad,
}

impl FieldGroup {
    /// Display order of the groups
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Radio,
        FieldGroup::Network,
        FieldGroup::Power,
        FieldGroup::Oad,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Radio => "Radio",
            Self::Network => "Network",
            Self::Power => "Power Management",
            Self::Oad => "Over the Air Download",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Mode,
    FreqBand,
    FreqSub1,
    PhyType,
    #[serde(rename = "phyID")]
    PhyId,
    ChannelPage,
    #[serde(rename = "panID")]
    PanId,
    ChannelMask,
    FhChannelMask,
    FhAsyncChannelMask,
    FhNetname,
    MaxDevices,
    ReportingInterval,
    PollingInterval,
    TrackingDelayTime,
    ScanBackoffInterval,
    OrphanBackoffInterval,
    ScanDuration,
    MacBeaconOrder,
    MacSuperframeOrder,
    MinBe,
    MaxBe,
    FhBroadcastInterval,
    FhBroadcastDwellTime,
    TransmitPowerSubG,
    TransmitPower24G,
    RxOnIdle,
    OadBlockSize,
}

impl Field {
    pub const ALL: [Field; 28] = [
        Field::Mode,
        Field::FreqBand,
        Field::FreqSub1,
        Field::PhyType,
        Field::PhyId,
        Field::ChannelPage,
        Field::PanId,
        Field::ChannelMask,
        Field::FhChannelMask,
        Field::FhAsyncChannelMask,
        Field::FhNetname,
        Field::MaxDevices,
        Field::ReportingInterval,
        Field::PollingInterval,
        Field::TrackingDelayTime,
        Field::ScanBackoffInterval,
        Field::OrphanBackoffInterval,
        Field::ScanDuration,
        Field::MacBeaconOrder,
        Field::MacSuperframeOrder,
        Field::MinBe,
        Field::MaxBe,
        Field::FhBroadcastInterval,
        Field::FhBroadcastDwellTime,
        Field::TransmitPowerSubG,
        Field::TransmitPower24G,
        Field::RxOnIdle,
        Field::OadBlockSize,
    ];

    /// Name used by the host and in project files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mode => "mode",
            Self::FreqBand => "freqBand",
            Self::FreqSub1 => "freqSub1",
            Self::PhyType => "phyType",
            Self::PhyId => "phyID",
            Self::ChannelPage => "channelPage",
            Self::PanId => "panID",
            Self::ChannelMask => "channelMask",
            Self::FhChannelMask => "fhChannelMask",
            Self::FhAsyncChannelMask => "fhAsyncChannelMask",
            Self::FhNetname => "fhNetname",
            Self::MaxDevices => "maxDevices",
            Self::ReportingInterval => "reportingInterval",
            Self::PollingInterval => "pollingInterval",
            Self::TrackingDelayTime => "trackingDelayTime",
            Self::ScanBackoffInterval => "scanBackoffInterval",
            Self::OrphanBackoffInterval => "orphanBackoffInterval",
            Self::ScanDuration => "scanDuration",
            Self::MacBeaconOrder => "macBeaconOrder",
            Self::MacSuperframeOrder => "macSuperframeOrder",
            Self::MinBe => "minBe",
            Self::MaxBe => "maxBe",
            Self::FhBroadcastInterval => "fhBroadcastInterval",
            Self::FhBroadcastDwellTime => "fhBroadcastDwellTime",
            Self::TransmitPowerSubG => "transmitPowerSubG",
            Self::TransmitPower24G => "transmitPower24G",
            Self::RxOnIdle => "rxOnIdle",
            Self::OadBlockSize => "oadBlockSize",
        }
    }

    /// Label shown next to the field
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mode => "Mode",
            Self::FreqBand => "Frequency Band",
            Self::FreqSub1 => "Sub-1 GHz Frequency",
            Self::PhyType => "Phy Type",
            Self::PhyId => "Phy ID",
            Self::ChannelPage => "Channel Page",
            Self::PanId => "Pan ID",
            Self::ChannelMask => "Channel Mask",
            Self::FhChannelMask => "FH Channel Mask",
            Self::FhAsyncChannelMask => "FH Async Channel Mask",
            Self::FhNetname => "FH Network Name",
            Self::MaxDevices => "Max Devices",
            Self::ReportingInterval => "Reporting Interval (ms)",
            Self::PollingInterval => "Polling Interval (ms)",
            Self::TrackingDelayTime => "Tracking Time Delay (ms)",
            Self::ScanBackoffInterval => "Scan Back-off Interval (ms)",
            Self::OrphanBackoffInterval => "Orphan Back-off Interval (ms)",
            Self::ScanDuration => "Scan Duration (s)",
            Self::MacBeaconOrder => "MAC Beacon Order",
            Self::MacSuperframeOrder => "MAC Super Frame Order",
            Self::MinBe => "Min Back-off Exponent",
            Self::MaxBe => "Max Back-off Exponent",
            Self::FhBroadcastInterval => "Broadcast Interval (ms)",
            Self::FhBroadcastDwellTime => "Broadcast Dwell Time (ms)",
            Self::TransmitPowerSubG | Self::TransmitPower24G => "Transmit Power",
            Self::RxOnIdle => "Non Sleepy Device",
            Self::OadBlockSize => "OAD Block Size",
        }
    }

    /// One-line help text
    pub fn description(&self) -> &'static str {
        match self {
            Self::Mode => "Configures the network mode of operation",
            Self::FreqBand => "Configures the frequency band used for radio operations",
            Self::FreqSub1 => "Configures Sub-1 GHz frequency band used for radio operation",
            Self::PhyType => "Configures the PHY frequency modulation and data-rate",
            Self::PhyId => "Configures the PHY descriptor",
            Self::ChannelPage => "Configures the channel page on which to perform the scan",
            Self::PanId => "Configures the personal area network identifier",
            Self::ChannelMask => "Configures channels to be scanned",
            Self::FhChannelMask => "Configures channels used for frequency hopping",
            Self::FhAsyncChannelMask => "Configures channels used for asynchronous messages",
            Self::FhNetname => "Configures the frequency hopping network name",
            Self::MaxDevices => "Configures the maximum number of devices in the network",
            Self::ReportingInterval => "Configures the sensor reporting interval",
            Self::PollingInterval => "Configures the sensor data polling interval",
            Self::TrackingDelayTime => "Configures the delay between tracking messages",
            Self::ScanBackoffInterval => "Configures the wait time between scans",
            Self::OrphanBackoffInterval => "Configures the wait time before rejoining as an orphan",
            Self::ScanDuration => "Configures the exponent of the scan duration per channel",
            Self::MacBeaconOrder => "Configures the interval between beacons",
            Self::MacSuperframeOrder => "Configures the active portion of the superframe",
            Self::MinBe => "Configures the minimum CSMA back-off exponent",
            Self::MaxBe => "Configures the maximum CSMA back-off exponent",
            Self::FhBroadcastInterval => "Configures the interval between broadcast slots",
            Self::FhBroadcastDwellTime => "Configures the duration of a broadcast slot",
            Self::TransmitPowerSubG | Self::TransmitPower24G => {
                "Configures the transmit power in dBm"
            }
            Self::RxOnIdle => "Keeps the receiver on while the device is idle",
            Self::OadBlockSize => "Configures the over the air download block size in bytes",
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            Self::FreqBand | Self::FreqSub1 | Self::PhyType | Self::PhyId | Self::ChannelPage => {
                FieldGroup::Radio
            }
            Self::TransmitPowerSubG | Self::TransmitPower24G | Self::RxOnIdle => FieldGroup::Power,
            Self::OadBlockSize => FieldGroup::Oad,
            _ => FieldGroup::Network,
        }
    }

    /// Fields whose value is only ever derived, never set by the user
    pub fn is_derived(&self) -> bool {
        matches!(self, Self::PhyId | Self::ChannelPage | Self::OadBlockSize)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseError::Unknown {
                kind: "field",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_as_str() {
        for field in Field::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
        }
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("panID".parse::<Field>().unwrap(), Field::PanId);
        assert_eq!(" transmitPower24G ".parse::<Field>().unwrap(), Field::TransmitPower24G);
        assert!("panId".parse::<Field>().is_err());
    }

    #[test]
    fn test_groups() {
        assert_eq!(Field::PhyId.group(), FieldGroup::Radio);
        assert_eq!(Field::RxOnIdle.group(), FieldGroup::Power);
        assert_eq!(Field::MinBe.group(), FieldGroup::Network);
        assert!(Field::ChannelPage.is_derived());
        assert!(!Field::PanId.is_derived());
        for group in FieldGroup::ALL {
            assert!(Field::ALL.iter().any(|f| f.group() == group));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::PanId.display_name(), "Pan ID");
        assert_eq!(Field::ScanDuration.display_name(), "Scan Duration (s)");
        assert_eq!(
            Field::FreqBand.description(),
            "Configures the frequency band used for radio operations"
        );
        for field in Field::ALL {
            assert!(!field.display_name().is_empty());
            assert!(!field.description().is_empty());
        }
    }
}
