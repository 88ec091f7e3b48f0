//! Domain tables - board-keyed lookups for channels, PHYs and transmit power
//!
//! A [`DomainTables`] is built once per board from the vendor RF defaults and
//! never mutated afterwards. Construction checks that every table the resolver
//! can reach is present, so later lookups only fail for combinations the
//! visibility rules should have made unreachable.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::board::{Board, RfClass};
use crate::rf_defaults::{PowerTableEntry, RfDefaults};
use crate::types::{FrequencyBand, PhyType, Sub1Frequency};

/// An IEEE 802.15.4 channel number
pub type Channel = u8;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    #[error("No transmit power table for board={board}, band={band}")]
    MissingPowerTable { board: Board, band: FrequencyBand },
    #[error("Empty transmit power table for board={board}, band={band}")]
    EmptyPowerTable { board: Board, band: FrequencyBand },
    #[error("High PA power table given for {board}, which has no high PA")]
    UnexpectedHighPa { board: Board },
    #[error("No PHY settings for band={band}, frequency={frequency}, phy={phy} on {board}")]
    UnmappedPhy {
        board: Board,
        band: FrequencyBand,
        frequency: Sub1Frequency,
        phy: PhyType,
    },
    #[error("No radio arguments for phy={phy} on {board}")]
    MissingPhyArgs { board: Board, phy: PhyType },
}

/// PHY ID and channel page tokens handed to the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhySettings {
    pub phy_id: &'static str,
    pub channel_page: &'static str,
}

/// A PHY entry of the PHY type drop-down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhyDescriptor {
    pub phy_type: PhyType,
    pub display_name: &'static str,
    /// Radio configuration settings module implementing the PHY
    pub module_name: &'static str,
}

impl PhyDescriptor {
    pub fn for_phy(phy_type: PhyType) -> Self {
        let module_name = if phy_type.is_ieee() {
            "/ti/devices/radioconfig/settings/ieee_15_4"
        } else {
            "/ti/devices/radioconfig/settings/prop"
        };
        Self {
            phy_type,
            display_name: phy_type.display_name(),
            module_name,
        }
    }
}

/// One entry of the transmit power drop-down
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerOption {
    /// Displayed level, rounded to whole dBm
    pub level: i32,
    /// Underlying radio step the option was created from
    pub hardware_level: f64,
    /// Whether that step comes from the high PA table
    pub high_pa: bool,
}

/// Transmit power steps for one band, standard and high PA
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerTable {
    standard: Vec<f64>,
    high_pa: Vec<f64>,
    options: Vec<PowerOption>,
    floor: f64,
}

impl PowerTable {
    fn from_entry(entry: &PowerTableEntry, class: RfClass) -> Result<Self, TableError> {
        let mut standard = entry.tx_power.clone();
        let mut high_pa = entry.tx_power_hi.clone();
        if !high_pa.is_empty() && !class.high_pa {
            return Err(TableError::UnexpectedHighPa { board: entry.board });
        }

        // Mapping scans for the first step at or below a selection
        standard.sort_by(|a, b| b.total_cmp(a));
        high_pa.sort_by(|a, b| b.total_cmp(a));

        let mut options: Vec<PowerOption> = Vec::new();
        let steps = standard
            .iter()
            .map(|level| (*level, false))
            .chain(high_pa.iter().map(|level| (*level, true)));
        for (hardware_level, is_high_pa) in steps {
            let level = hardware_level.round() as i32;
            if options.iter().any(|o| o.level == level) {
                continue;
            }
            options.push(PowerOption {
                level,
                hardware_level,
                high_pa: is_high_pa,
            });
        }
        options.sort_by(|a, b| b.level.cmp(&a.level));

        let Some(&floor) = standard.last() else {
            return Err(TableError::EmptyPowerTable {
                board: entry.board,
                band: entry.band,
            });
        };
        Ok(Self {
            standard,
            high_pa,
            options,
            floor,
        })
    }

    /// Standard PA steps, descending
    pub fn standard(&self) -> &[f64] {
        &self.standard
    }

    /// High PA steps, descending (empty when the band has no high PA)
    pub fn high_pa(&self) -> &[f64] {
        &self.high_pa
    }

    /// Drop-down options: both tables unioned, rounded, deduplicated, descending
    pub fn options(&self) -> &[PowerOption] {
        &self.options
    }

    /// Lowest standard PA step
    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn offers(&self, level: i32) -> bool {
        self.options.iter().any(|o| o.level == level)
    }
}

/// Immutable lookup tables for one board
#[derive(Debug, Clone)]
pub struct DomainTables {
    board: Board,
    class: RfClass,
    sub1_power: PowerTable,
    ghz24_power: PowerTable,
    default_phy: PhySettings,
    phy_args: Vec<(PhyType, Map<String, Value>)>,
}

impl DomainTables {
    /// Build the tables for a board from vendor RF defaults
    pub fn new(board: Board, rf_defaults: &RfDefaults) -> Result<Self, TableError> {
        let class = board.rf_class();

        let load = |band: FrequencyBand| -> Result<Option<PowerTable>, TableError> {
            if !class.supports(band) {
                return Ok(None);
            }
            let entry = rf_defaults
                .find(board, band)
                .ok_or(TableError::MissingPowerTable { board, band })?;
            PowerTable::from_entry(entry, class).map(Some)
        };

        // An unsupported band borrows the supported band's steps so its
        // hidden transmit power field still has a valid option list
        let (sub1_power, ghz24_power) = match (load(FrequencyBand::Sub1Ghz)?, load(FrequencyBand::Ghz24)?) {
            (Some(sub1), Some(ghz24)) => (sub1, ghz24),
            (Some(sub1), None) => (sub1.clone(), sub1),
            (None, Some(ghz24)) => (ghz24.clone(), ghz24),
            (None, None) => {
                return Err(TableError::MissingPowerTable {
                    board,
                    band: FrequencyBand::Sub1Ghz,
                })
            }
        };

        let phy_args = rf_defaults
            .phy
            .iter()
            .filter(|entry| entry.board == board)
            .map(|entry| (entry.phy_type, entry.args.clone()))
            .collect();

        let mut tables = Self {
            board,
            class,
            sub1_power,
            ghz24_power,
            default_phy: PhySettings {
                phy_id: "",
                channel_page: "",
            },
            phy_args,
        };
        let band = tables.default_frequency_band();
        tables.default_phy = tables.phy_settings(
            band,
            tables.default_sub1_frequency(),
            PhyType::default_for(band),
        )?;
        Ok(tables)
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn rf_class(&self) -> RfClass {
        self.class
    }

    /// Bands offered by the board, Sub-1 GHz first
    pub fn frequency_band_options(&self) -> Vec<FrequencyBand> {
        FrequencyBand::ALL
            .into_iter()
            .filter(|band| self.class.supports(*band))
            .collect()
    }

    /// Sub-1 GHz when the board has it, otherwise 2.4 GHz
    pub fn default_frequency_band(&self) -> FrequencyBand {
        if self.class.sub1ghz {
            FrequencyBand::Sub1Ghz
        } else {
            FrequencyBand::Ghz24
        }
    }

    pub fn sub1_frequency_options(&self) -> Vec<Sub1Frequency> {
        if self.class.mhz433 {
            vec![Sub1Frequency::Mhz433]
        } else {
            vec![Sub1Frequency::Mhz863, Sub1Frequency::Mhz915]
        }
    }

    pub fn default_sub1_frequency(&self) -> Sub1Frequency {
        if self.class.mhz433 {
            Sub1Frequency::Mhz433
        } else {
            Sub1Frequency::Mhz915
        }
    }

    /// Every PHY the board offers: proprietary PHYs first, then IEEE
    pub fn all_phy_options(&self) -> Vec<PhyDescriptor> {
        FrequencyBand::ALL
            .into_iter()
            .flat_map(|band| self.phy_options(band))
            .collect()
    }

    /// PHYs legal in one band on this board
    pub fn phy_options(&self, band: FrequencyBand) -> Vec<PhyDescriptor> {
        if !self.class.supports(band) {
            return Vec::new();
        }
        match band {
            FrequencyBand::Sub1Ghz => {
                let mut phys = vec![PhyType::Slr5Kbps, PhyType::Gfsk50Kbps];
                // 200 kbps has no 433 MHz band plan
                if !self.class.mhz433 {
                    phys.push(PhyType::Gfsk200Kbps);
                }
                phys.into_iter().map(PhyDescriptor::for_phy).collect()
            }
            FrequencyBand::Ghz24 => vec![PhyDescriptor::for_phy(PhyType::Ieee250Kbps)],
        }
    }

    /// The drop-down entry for a PHY, if the board offers it at all
    pub fn phy_descriptor(&self, phy: PhyType) -> Option<PhyDescriptor> {
        self.all_phy_options()
            .into_iter()
            .find(|descriptor| descriptor.phy_type == phy)
    }

    /// PHY options greyed out for the selected band, with the reason shown
    pub fn disabled_phy_options(&self, band: FrequencyBand) -> Vec<(PhyType, &'static str)> {
        match band {
            FrequencyBand::Sub1Ghz if self.class.ghz24 => {
                vec![(PhyType::Ieee250Kbps, "Only available on 2.4 GHz projects")]
            }
            FrequencyBand::Ghz24 if self.class.sub1ghz => self
                .phy_options(FrequencyBand::Sub1Ghz)
                .into_iter()
                .map(|d| (d.phy_type, "Only available on Sub-1 GHz projects"))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// PHY ID and channel page for a band, frequency and PHY selection
    ///
    /// The Sub-1 GHz frequency is ignored for the 2.4 GHz band.
    pub fn phy_settings(
        &self,
        band: FrequencyBand,
        frequency: Sub1Frequency,
        phy: PhyType,
    ) -> Result<PhySettings, TableError> {
        let unmapped = TableError::UnmappedPhy {
            board: self.board,
            band,
            frequency,
            phy,
        };
        if !self.class.supports(band) {
            return Err(unmapped);
        }

        let (phy_id, channel_page) = match (band, phy) {
            (FrequencyBand::Ghz24, PhyType::Ieee250Kbps) => {
                ("APIMAC_PHY_ID_NONE", "APIMAC_CHANNEL_PAGE_NONE")
            }
            (FrequencyBand::Ghz24, _) | (FrequencyBand::Sub1Ghz, PhyType::Ieee250Kbps) => {
                return Err(unmapped)
            }
            (FrequencyBand::Sub1Ghz, _) if !self.sub1_frequency_options().contains(&frequency) => {
                return Err(unmapped)
            }
            (FrequencyBand::Sub1Ghz, PhyType::Slr5Kbps) => match frequency {
                Sub1Frequency::Mhz433 => (
                    "APIMAC_GENERIC_CHINA_LRM_433_PHY_130",
                    "APIMAC_CHANNEL_PAGE_10",
                ),
                Sub1Frequency::Mhz863 => (
                    "APIMAC_GENERIC_ETSI_LRM_863_PHY_131",
                    "APIMAC_CHANNEL_PAGE_10",
                ),
                Sub1Frequency::Mhz915 => (
                    "APIMAC_GENERIC_US_LRM_915_PHY_129",
                    "APIMAC_CHANNEL_PAGE_10",
                ),
            },
            (FrequencyBand::Sub1Ghz, PhyType::Gfsk50Kbps) => match frequency {
                Sub1Frequency::Mhz433 => {
                    ("APIMAC_GENERIC_CHINA_433_PHY_128", "APIMAC_CHANNEL_PAGE_10")
                }
                Sub1Frequency::Mhz863 => ("APIMAC_STD_ETSI_863_PHY_3", "APIMAC_CHANNEL_PAGE_9"),
                Sub1Frequency::Mhz915 => ("APIMAC_STD_US_915_PHY_1", "APIMAC_CHANNEL_PAGE_9"),
            },
            (FrequencyBand::Sub1Ghz, PhyType::Gfsk200Kbps) => match frequency {
                Sub1Frequency::Mhz433 => return Err(unmapped),
                Sub1Frequency::Mhz863 => {
                    ("APIMAC_GENERIC_ETSI_863_PHY_133", "APIMAC_CHANNEL_PAGE_10")
                }
                Sub1Frequency::Mhz915 => {
                    ("APIMAC_GENERIC_US_915_PHY_132", "APIMAC_CHANNEL_PAGE_10")
                }
            },
        };

        Ok(PhySettings {
            phy_id,
            channel_page,
        })
    }

    /// PHY settings of the board's default band, frequency and PHY
    pub fn default_phy_settings(&self) -> PhySettings {
        self.default_phy
    }

    /// Largest set of channels the device can use, ascending
    pub fn channel_range(&self) -> Vec<Channel> {
        if self.class.mhz433 {
            (0..=6).collect()
        } else if self.class.sub1ghz {
            (0..=128).collect()
        } else {
            (11..=26).collect()
        }
    }

    /// Channels usable with the current band, frequency and PHY, ascending
    pub fn supported_channels(
        &self,
        band: FrequencyBand,
        frequency: Sub1Frequency,
        phy: PhyType,
    ) -> Vec<Channel> {
        let low_rate = matches!(phy, PhyType::Slr5Kbps | PhyType::Gfsk50Kbps);
        match (band, frequency) {
            (FrequencyBand::Ghz24, _) => (11..=26).collect(),
            (FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz433) => self.channel_range(),
            (FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz863) if low_rate => (0..=33).collect(),
            (FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz863) => (0..=16).collect(),
            (FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz915) if low_rate => self.channel_range(),
            (FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz915) => (0..=63).collect(),
        }
    }

    /// Device channels greyed out for the current selections
    pub fn disabled_channels(
        &self,
        band: FrequencyBand,
        frequency: Sub1Frequency,
        phy: PhyType,
    ) -> Vec<Channel> {
        let supported = self.supported_channels(band, frequency, phy);
        self.channel_range()
            .into_iter()
            .filter(|channel| !supported.contains(channel))
            .collect()
    }

    /// Board-specific radio arguments selecting a PHY
    pub fn phy_args(&self, phy: PhyType) -> Result<&Map<String, Value>, TableError> {
        self.phy_args
            .iter()
            .find(|(phy_type, _)| *phy_type == phy)
            .map(|(_, args)| args)
            .ok_or(TableError::MissingPhyArgs {
                board: self.board,
                phy,
            })
    }

    /// Transmit power steps for a band
    pub fn power_table(&self, band: FrequencyBand) -> &PowerTable {
        match band {
            FrequencyBand::Sub1Ghz => &self.sub1_power,
            FrequencyBand::Ghz24 => &self.ghz24_power,
        }
    }

    /// Transmit power drop-down options for a band
    pub fn power_options(&self, band: FrequencyBand) -> &[PowerOption] {
        self.power_table(band).options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables(board: Board) -> DomainTables {
        DomainTables::new(board, &RfDefaults::builtin().unwrap()).unwrap()
    }

    fn is_strictly_increasing(channels: &[Channel]) -> bool {
        channels.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_channel_range_per_rf_class() {
        for board in Board::ALL {
            let range = tables(board).channel_range();
            assert!(!range.is_empty());
            assert!(is_strictly_increasing(&range));
        }
        assert_eq!(tables(Board::Cc26x2R1).channel_range(), (11..=26).collect::<Vec<_>>());
        assert_eq!(tables(Board::Cc1352P4).channel_range(), (0..=6).collect::<Vec<_>>());
        assert_eq!(tables(Board::Cc1312R1).channel_range().last(), Some(&128));
    }

    #[test]
    fn test_supported_channels_by_data_rate() {
        let t = tables(Board::Cc1352R1);
        let sub1 = FrequencyBand::Sub1Ghz;
        assert_eq!(
            t.supported_channels(sub1, Sub1Frequency::Mhz863, PhyType::Gfsk50Kbps),
            (0..=33).collect::<Vec<_>>()
        );
        assert_eq!(
            t.supported_channels(sub1, Sub1Frequency::Mhz863, PhyType::Gfsk200Kbps),
            (0..=16).collect::<Vec<_>>()
        );
        assert_eq!(
            t.supported_channels(sub1, Sub1Frequency::Mhz915, PhyType::Gfsk200Kbps),
            (0..=63).collect::<Vec<_>>()
        );
        assert_eq!(
            t.supported_channels(sub1, Sub1Frequency::Mhz915, PhyType::Slr5Kbps).len(),
            129
        );
        assert_eq!(
            t.supported_channels(FrequencyBand::Ghz24, Sub1Frequency::Mhz915, PhyType::Ieee250Kbps),
            (11..=26).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_disabled_channels_complement_supported() {
        let t = tables(Board::Cc1352R1);
        let disabled =
            t.disabled_channels(FrequencyBand::Ghz24, Sub1Frequency::Mhz915, PhyType::Ieee250Kbps);
        assert_eq!(disabled.len(), 129 - 16);
        assert!(disabled.contains(&10));
        assert!(!disabled.contains(&11));
        assert!(disabled.contains(&27));
    }

    #[test]
    fn test_phy_settings_for_every_valid_pair() {
        for board in Board::ALL {
            let t = tables(board);
            for band in t.frequency_band_options() {
                for phy in t.phy_options(band) {
                    let freqs = if band.is_sub1() {
                        t.sub1_frequency_options()
                    } else {
                        vec![t.default_sub1_frequency()]
                    };
                    for freq in freqs {
                        assert!(
                            t.phy_settings(band, freq, phy.phy_type).is_ok(),
                            "{board} {band} {freq} {}",
                            phy.phy_type
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_phy_settings_values() {
        let t = tables(Board::Cc1352R1);
        let s = t
            .phy_settings(FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz915, PhyType::Gfsk50Kbps)
            .unwrap();
        assert_eq!(s.phy_id, "APIMAC_STD_US_915_PHY_1");
        assert_eq!(s.channel_page, "APIMAC_CHANNEL_PAGE_9");

        let s = t
            .phy_settings(FrequencyBand::Ghz24, Sub1Frequency::Mhz863, PhyType::Ieee250Kbps)
            .unwrap();
        assert_eq!(s.phy_id, "APIMAC_PHY_ID_NONE");
        assert_eq!(s.channel_page, "APIMAC_CHANNEL_PAGE_NONE");
    }

    #[test]
    fn test_phy_settings_unmapped_combinations() {
        let t = tables(Board::Cc1352R1);
        assert!(t
            .phy_settings(FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz915, PhyType::Ieee250Kbps)
            .is_err());
        assert!(t
            .phy_settings(FrequencyBand::Ghz24, Sub1Frequency::Mhz915, PhyType::Gfsk50Kbps)
            .is_err());
        // 433 MHz is not offered on this board
        assert!(t
            .phy_settings(FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz433, PhyType::Slr5Kbps)
            .is_err());

        let p4 = tables(Board::Cc1352P4);
        let err = p4
            .phy_settings(FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz433, PhyType::Gfsk200Kbps)
            .unwrap_err();
        assert!(matches!(err, TableError::UnmappedPhy { .. }));

        let ieee_only = tables(Board::Cc2652Rb);
        assert!(ieee_only
            .phy_settings(FrequencyBand::Sub1Ghz, Sub1Frequency::Mhz915, PhyType::Gfsk50Kbps)
            .is_err());
    }

    #[test]
    fn test_phy_options_and_disabled() {
        let t = tables(Board::Cc1352R1);
        let all: Vec<PhyType> = t.all_phy_options().iter().map(|d| d.phy_type).collect();
        assert_eq!(
            all,
            vec![
                PhyType::Slr5Kbps,
                PhyType::Gfsk50Kbps,
                PhyType::Gfsk200Kbps,
                PhyType::Ieee250Kbps
            ]
        );
        assert_eq!(t.disabled_phy_options(FrequencyBand::Sub1Ghz).len(), 1);
        assert_eq!(t.disabled_phy_options(FrequencyBand::Ghz24).len(), 3);

        let p4 = tables(Board::Cc1352P4);
        assert!(p4.phy_descriptor(PhyType::Gfsk200Kbps).is_none());
        assert!(tables(Board::Cc1312R1).disabled_phy_options(FrequencyBand::Sub1Ghz).is_empty());
    }

    #[test]
    fn test_power_options_union_rounded_descending() {
        let t = tables(Board::Cc1352P1);
        let levels: Vec<i32> = t
            .power_options(FrequencyBand::Sub1Ghz)
            .iter()
            .map(|o| o.level)
            .collect();
        assert_eq!(levels.first(), Some(&20));
        assert_eq!(levels.last(), Some(&-20));
        assert!(levels.windows(2).all(|w| w[0] > w[1]));

        // 12.5 rounds onto 13 and is dropped as a duplicate
        let r1 = tables(Board::Cc1312R1);
        let options = r1.power_options(FrequencyBand::Sub1Ghz);
        assert_eq!(options.iter().filter(|o| o.level == 13).count(), 1);
        let thirteen = options.iter().find(|o| o.level == 13).unwrap();
        assert_eq!(thirteen.hardware_level, 13.0);

        // 14.5 is displayed as 15
        let p4 = tables(Board::Cc1352P4);
        assert!(p4.power_table(FrequencyBand::Sub1Ghz).offers(15));
        assert_eq!(p4.power_table(FrequencyBand::Sub1Ghz).floor(), -20.0);
    }

    #[test]
    fn test_unsupported_band_borrows_power_table() {
        let t = tables(Board::Cc1312R1);
        assert_eq!(
            t.power_table(FrequencyBand::Ghz24),
            t.power_table(FrequencyBand::Sub1Ghz)
        );
    }

    #[test]
    fn test_missing_power_table_is_fatal() {
        let defaults = RfDefaults::from_toml(
            r#"
[[table]]
board = "CC1352R1_LAUNCHXL"
band = "freqBandSub1"
txPower = [14, 0]
"#,
        )
        .unwrap();
        let err = DomainTables::new(Board::Cc1352R1, &defaults).unwrap_err();
        assert_eq!(
            err,
            TableError::MissingPowerTable {
                board: Board::Cc1352R1,
                band: FrequencyBand::Ghz24
            }
        );
    }

    #[test]
    fn test_empty_power_table_is_fatal() {
        let defaults = RfDefaults::from_toml(
            r#"
[[table]]
board = "CC2652RB_LAUNCHXL"
band = "freqBand24"
txPower = []
"#,
        )
        .unwrap();
        assert_eq!(
            DomainTables::new(Board::Cc2652Rb, &defaults).unwrap_err(),
            TableError::EmptyPowerTable {
                board: Board::Cc2652Rb,
                band: FrequencyBand::Ghz24
            }
        );
    }

    #[test]
    fn test_high_pa_table_on_standard_board_rejected() {
        let defaults = RfDefaults::from_toml(
            r#"
[[table]]
board = "CC26X2R1_LAUNCHXL"
band = "freqBand24"
txPower = [5, 0]
txPowerHi = [20]
"#,
        )
        .unwrap();
        assert!(matches!(
            DomainTables::new(Board::Cc26x2R1, &defaults),
            Err(TableError::UnexpectedHighPa { .. })
        ));
    }

    #[test]
    fn test_phy_args_lookup() {
        let t = tables(Board::Cc1352R1);
        assert_eq!(t.phy_args(PhyType::Gfsk50Kbps).unwrap()["phyType868"], "2gfsk50kbps154g");
        assert!(t.phy_args(PhyType::Ieee250Kbps).unwrap().is_empty());

        let power_only = RfDefaults::from_toml(
            r#"
[[table]]
board = "CC26X2R1_LAUNCHXL"
band = "freqBand24"
txPower = [5, 0]
"#,
        )
        .unwrap();
        let t = DomainTables::new(Board::Cc26x2R1, &power_only).unwrap();
        assert_eq!(
            t.phy_args(PhyType::Ieee250Kbps).unwrap_err(),
            TableError::MissingPhyArgs {
                board: Board::Cc26x2R1,
                phy: PhyType::Ieee250Kbps
            }
        );
    }

    #[test]
    fn test_default_phy_settings() {
        assert_eq!(
            tables(Board::Cc1312R1).default_phy_settings().phy_id,
            "APIMAC_STD_US_915_PHY_1"
        );
        assert_eq!(
            tables(Board::Cc1352P4).default_phy_settings().phy_id,
            "APIMAC_GENERIC_CHINA_433_PHY_128"
        );
        assert_eq!(
            tables(Board::Cc26x2R1).default_phy_settings().phy_id,
            "APIMAC_PHY_ID_NONE"
        );
    }
}
