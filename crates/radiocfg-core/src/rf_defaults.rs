//! Vendor RF defaults - per-board transmit power tables
//!
//! Power tables and per-board PHY selection arguments are read-only input
//! data. A built-in copy ships with the crate
//! and an alternative file can be loaded in its place.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

use crate::board::Board;
use crate::types::{FrequencyBand, PhyType};

const BUILTIN_RF_DEFAULTS: &str = include_str!("../data/rf_defaults.toml");

#[derive(Error, Debug)]
pub enum RfDefaultsError {
    #[error("Failed to read RF defaults: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse RF defaults: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Transmit power steps for one board and band
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerTableEntry {
    pub board: Board,
    pub band: FrequencyBand,
    /// Standard PA steps in dBm
    pub tx_power: Vec<f64>,
    /// High PA steps in dBm
    #[serde(default)]
    pub tx_power_hi: Vec<f64>,
}

/// Board-specific radio arguments selecting one PHY
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhyArgsEntry {
    pub board: Board,
    pub phy_type: PhyType,
    /// Merged over the PHY's common arguments, e.g. `freqBand`, `phyType868`
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// The RF defaults document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RfDefaults {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub table: Vec<PowerTableEntry>,
    #[serde(default)]
    pub phy: Vec<PhyArgsEntry>,
}

fn default_version() -> String {
    "1.0".to_string()
}

impl RfDefaults {
    /// The tables bundled with this crate
    pub fn builtin() -> Result<Self, RfDefaultsError> {
        Self::from_toml(BUILTIN_RF_DEFAULTS)
    }

    pub fn from_toml(content: &str) -> Result<Self, RfDefaultsError> {
        let defaults: RfDefaults = toml::from_str(content)?;
        Ok(defaults)
    }

    pub fn from_file(path: &Path) -> Result<Self, RfDefaultsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Find the entry for a board and band
    pub fn find(&self, board: Board, band: FrequencyBand) -> Option<&PowerTableEntry> {
        self.table
            .iter()
            .find(|entry| entry.board == board && entry.band == band)
    }

    /// Find the PHY selection arguments for a board and PHY
    pub fn find_phy_args(&self, board: Board, phy: PhyType) -> Option<&PhyArgsEntry> {
        self.phy
            .iter()
            .find(|entry| entry.board == board && entry.phy_type == phy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_supported_band() {
        let defaults = RfDefaults::builtin().unwrap();
        for board in Board::ALL {
            for band in FrequencyBand::ALL {
                if board.rf_class().supports(band) {
                    assert!(
                        defaults.find(board, band).is_some(),
                        "missing {board} {band}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtin_covers_every_offered_phy() {
        let defaults = RfDefaults::builtin().unwrap();
        for board in Board::ALL {
            let class = board.rf_class();
            for phy in PhyType::ALL {
                let offered = class.supports(phy.band())
                    && !(class.mhz433 && phy == PhyType::Gfsk200Kbps);
                assert_eq!(
                    defaults.find_phy_args(board, phy).is_some(),
                    offered,
                    "{board} {phy}"
                );
            }
        }
    }

    #[test]
    fn test_phy_args_keep_document_order() {
        let defaults = RfDefaults::builtin().unwrap();
        let entry = defaults
            .find_phy_args(Board::Cc1352P4, PhyType::Slr5Kbps)
            .unwrap();
        let keys: Vec<&str> = entry.args.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["freqBand", "phyType433"]);
        assert_eq!(entry.args["freqBand"], "433");
    }

    #[test]
    fn test_parse_mixed_integer_and_float_levels() {
        let toml = r#"
[[table]]
board = "CC1352P_4_LAUNCHXL"
band = "freqBandSub1"
txPower = [14.5, 13, 0]
"#;
        let defaults = RfDefaults::from_toml(toml).unwrap();
        let entry = defaults.find(Board::Cc1352P4, FrequencyBand::Sub1Ghz).unwrap();
        assert_eq!(entry.tx_power, vec![14.5, 13.0, 0.0]);
        assert!(entry.tx_power_hi.is_empty());
        assert_eq!(defaults.version, "1.0");
        assert!(defaults.phy.is_empty());
    }

    #[test]
    fn test_unknown_board_rejected() {
        let toml = r#"
[[table]]
board = "CC2640R2_LAUNCHXL"
band = "freqBand24"
txPower = [5]
"#;
        assert!(RfDefaults::from_toml(toml).is_err());
    }
}
