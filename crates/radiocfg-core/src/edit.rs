//! Typed field edits and their application through the derivation cascades

use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

use crate::derive::on_field_change;
use crate::field::Field;
use crate::record::ConfigRecord;
use crate::tables::{Channel, DomainTables, TableError};
use crate::types::{FrequencyBand, NetworkMode, ParseError, PhyType, Sub1Frequency};
use crate::visibility::{is_hidden, read_only_reason};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("Expected field=value, got '{0}'")]
    Syntax(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: Field, value: String },
    #[error("{field} is read-only: {reason}")]
    ReadOnly { field: Field, reason: &'static str },
    #[error("{0} is hidden for the current selections")]
    Hidden(Field),
    #[error("{value} is not an available option for {field}")]
    NotOffered { field: Field, value: String },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// A single user edit of one field
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    FreqBand(FrequencyBand),
    FreqSub1(Sub1Frequency),
    PhyType(PhyType),
    Mode(NetworkMode),
    TransmitPower { field: Field, level: i32 },
    Integer { field: Field, value: i64 },
    Channels { field: Field, channels: BTreeSet<Channel> },
    FhNetname(String),
    RxOnIdle(bool),
}

fn parse_integer(field: Field, value: &str) -> Result<i64, EditError> {
    let invalid = || EditError::InvalidValue {
        field,
        value: value.to_string(),
    };
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16).map_err(|_| invalid()),
        None => value.parse().map_err(|_| invalid()),
    }
}

fn parse_channels(field: Field, value: &str) -> Result<BTreeSet<Channel>, EditError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Channel>().map_err(|_| EditError::InvalidValue {
                field,
                value: s.to_string(),
            })
        })
        .collect()
}

impl Edit {
    /// Parse `field=value`, e.g. `freqBand=freqBand24` or `channelMask=0,1,5`
    pub fn parse(input: &str) -> Result<Self, EditError> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| EditError::Syntax(input.to_string()))?;
        let field: Field = name.parse()?;
        let value = value.trim();

        let edit = match field {
            Field::FreqBand => Self::FreqBand(value.parse()?),
            Field::FreqSub1 => Self::FreqSub1(value.parse()?),
            Field::PhyType => Self::PhyType(value.parse()?),
            Field::Mode => Self::Mode(value.parse()?),
            Field::TransmitPowerSubG | Field::TransmitPower24G => {
                let level = value.parse().map_err(|_| EditError::InvalidValue {
                    field,
                    value: value.to_string(),
                })?;
                Self::TransmitPower { field, level }
            }
            Field::ChannelMask | Field::FhChannelMask | Field::FhAsyncChannelMask => {
                Self::Channels {
                    field,
                    channels: parse_channels(field, value)?,
                }
            }
            Field::FhNetname => Self::FhNetname(value.to_string()),
            Field::RxOnIdle => match value {
                "true" => Self::RxOnIdle(true),
                "false" => Self::RxOnIdle(false),
                _ => {
                    return Err(EditError::InvalidValue {
                        field,
                        value: value.to_string(),
                    })
                }
            },
            derived if derived.is_derived() => {
                return Err(EditError::ReadOnly {
                    field: derived,
                    reason: "Derived from other selections",
                })
            }
            _ => Self::Integer {
                field,
                value: parse_integer(field, value)?,
            },
        };
        Ok(edit)
    }

    /// The field this edit changes
    pub fn field(&self) -> Field {
        match self {
            Self::FreqBand(_) => Field::FreqBand,
            Self::FreqSub1(_) => Field::FreqSub1,
            Self::PhyType(_) => Field::PhyType,
            Self::Mode(_) => Field::Mode,
            Self::TransmitPower { field, .. }
            | Self::Integer { field, .. }
            | Self::Channels { field, .. } => *field,
            Self::FhNetname(_) => Field::FhNetname,
            Self::RxOnIdle(_) => Field::RxOnIdle,
        }
    }
}

/// Check that an edit targets an editable field and picks an offered option
fn check_edit(record: &ConfigRecord, tables: &DomainTables, edit: &Edit) -> Result<(), EditError> {
    let field = edit.field();
    if let Some(reason) = read_only_reason(record, field) {
        return Err(EditError::ReadOnly { field, reason });
    }
    if is_hidden(record, field) {
        return Err(EditError::Hidden(field));
    }

    let not_offered = |value: String| EditError::NotOffered { field, value };
    match edit {
        Edit::FreqBand(band) if !tables.frequency_band_options().contains(band) => {
            Err(not_offered(band.to_string()))
        }
        Edit::FreqSub1(freq) if !tables.sub1_frequency_options().contains(freq) => {
            Err(not_offered(freq.to_string()))
        }
        Edit::PhyType(phy)
            if !tables
                .phy_options(record.freq_band)
                .iter()
                .any(|d| d.phy_type == *phy) =>
        {
            Err(not_offered(phy.to_string()))
        }
        Edit::TransmitPower { level, .. } if !tables.power_table(record.freq_band).offers(*level) => {
            Err(not_offered(level.to_string()))
        }
        Edit::Integer { field, .. } if record.integer(*field).is_none() => {
            Err(EditError::InvalidValue {
                field: *field,
                value: "integer".to_string(),
            })
        }
        _ => Ok(()),
    }
}

/// Apply an edit and run the cascade belonging to the edited field
pub fn apply_edit(
    record: &mut ConfigRecord,
    tables: &DomainTables,
    edit: Edit,
) -> Result<(), EditError> {
    check_edit(record, tables, &edit)?;
    let field = edit.field();
    debug!(field = %field, "Applying edit");

    match edit {
        Edit::FreqBand(band) => record.freq_band = band,
        Edit::FreqSub1(freq) => record.freq_sub1 = freq,
        Edit::PhyType(phy) => record.phy_type = phy,
        Edit::Mode(mode) => record.mode = mode,
        Edit::TransmitPower { field, level } => match field {
            Field::TransmitPowerSubG => record.transmit_power_sub_g = level,
            _ => record.transmit_power_24g = level,
        },
        Edit::Integer { field, value } => {
            record.set_integer(field, value);
        }
        Edit::Channels { field, channels } => {
            if let Some(mask) = record.channel_mask_mut(field) {
                *mask = channels;
            }
        }
        Edit::FhNetname(name) => record.fh_netname = name,
        Edit::RxOnIdle(on) => record.rx_on_idle = on,
    }

    on_field_change(record, tables, field)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::rf_defaults::RfDefaults;
    use crate::types::ProjectRole;

    fn setup(board: Board) -> (DomainTables, ConfigRecord) {
        let tables = DomainTables::new(board, &RfDefaults::builtin().unwrap()).unwrap();
        let record = ConfigRecord::defaults(&tables, ProjectRole::Collector);
        (tables, record)
    }

    #[test]
    fn test_parse_edits() {
        assert_eq!(
            Edit::parse("freqBand=freqBand24").unwrap(),
            Edit::FreqBand(FrequencyBand::Ghz24)
        );
        assert_eq!(
            Edit::parse("panID=0x1234").unwrap(),
            Edit::Integer {
                field: Field::PanId,
                value: 0x1234
            }
        );
        assert_eq!(
            Edit::parse("channelMask=0, 3,5").unwrap(),
            Edit::Channels {
                field: Field::ChannelMask,
                channels: [0, 3, 5].into_iter().collect()
            }
        );
        assert_eq!(
            Edit::parse("fhChannelMask=").unwrap(),
            Edit::Channels {
                field: Field::FhChannelMask,
                channels: BTreeSet::new()
            }
        );
        assert!(matches!(Edit::parse("panID"), Err(EditError::Syntax(_))));
        assert!(matches!(Edit::parse("bogus=1"), Err(EditError::Parse(_))));
        assert!(matches!(
            Edit::parse("phyID=APIMAC_PHY_ID_NONE"),
            Err(EditError::ReadOnly { .. })
        ));
        assert!(matches!(
            Edit::parse("rxOnIdle=maybe"),
            Err(EditError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_apply_band_edit_runs_cascade() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        apply_edit(&mut record, &tables, Edit::parse("freqBand=freqBand24").unwrap()).unwrap();
        assert_eq!(record.phy_type, PhyType::Ieee250Kbps);
        assert_eq!(record.fh_channel_mask, (11..=26).collect());
    }

    #[test]
    fn test_apply_rejects_unoffered_options() {
        let (tables, mut record) = setup(Board::Cc1312R1);
        let err = apply_edit(&mut record, &tables, Edit::FreqBand(FrequencyBand::Ghz24)).unwrap_err();
        assert!(matches!(err, EditError::NotOffered { .. }));

        let err = apply_edit(&mut record, &tables, Edit::PhyType(PhyType::Ieee250Kbps)).unwrap_err();
        assert!(matches!(err, EditError::NotOffered { .. }));

        let err = apply_edit(
            &mut record,
            &tables,
            Edit::TransmitPower {
                field: Field::TransmitPowerSubG,
                level: 17,
            },
        )
        .unwrap_err();
        assert!(matches!(err, EditError::NotOffered { .. }));
    }

    #[test]
    fn test_apply_rejects_hidden_and_read_only() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        // Default mode is frequency hopping, which hides the fixed mask
        let err = apply_edit(&mut record, &tables, Edit::parse("channelMask=1").unwrap()).unwrap_err();
        assert_eq!(err, EditError::Hidden(Field::ChannelMask));

        let err = apply_edit(&mut record, &tables, Edit::parse("macBeaconOrder=4").unwrap()).unwrap_err();
        assert!(matches!(err, EditError::ReadOnly { .. }));

        apply_edit(&mut record, &tables, Edit::parse("mode=beacon").unwrap()).unwrap();
        apply_edit(&mut record, &tables, Edit::parse("macBeaconOrder=4").unwrap()).unwrap();
        assert_eq!(record.mac_beacon_order, 4);
    }

    #[test]
    fn test_apply_integer_out_of_range_is_accepted() {
        let (tables, mut record) = setup(Board::Cc1352R1);
        apply_edit(&mut record, &tables, Edit::parse("panID=0x10000").unwrap()).unwrap();
        assert_eq!(record.pan_id, 0x10000);
    }
}
