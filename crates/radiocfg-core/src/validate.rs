//! Validator - errors, warnings and notices for a fully selected record
//!
//! Every rule runs on every pass; a rule is skipped only when the field it
//! checks is hidden. The validator never mutates the record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::field::Field;
use crate::power::map_power_selection;
use crate::record::{ConfigRecord, DEFAULT_MAX_DEVICES};
use crate::tables::{Channel, DomainTables};
use crate::types::{NetworkMode, PhyType};
use crate::visibility::is_hidden;

const U8_MAX: i64 = u8::MAX as i64;
const I16_MAX: i64 = i16::MAX as i64;
const U32_MAX: i64 = u32::MAX as i64;

/// Optimal beacon and superframe order in beacon mode
const OPTIMAL_ORDER: i64 = 8;

/// Tolerance when comparing radio power steps against board thresholds
const LEVEL_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        };
        f.write_str(s)
    }
}

/// One validation message attached to one or more fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    pub fields: Vec<Field>,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields.iter().map(Field::as_str).collect();
        write!(f, "{} [{}]: {}", self.severity, fields.join(", "), self.message)
    }
}

/// Ordered findings of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, fields: &[Field], message: impl Into<String>) {
        self.findings.push(Finding {
            severity,
            fields: fields.to_vec(),
            message: message.into(),
        });
    }

    fn error(&mut self, field: Field, message: impl Into<String>) {
        self.push(Severity::Error, &[field], message);
    }

    fn info(&mut self, field: Field, message: impl Into<String>) {
        self.push(Severity::Info, &[field], message);
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Warning)
    }

    pub fn infos(&self) -> impl Iterator<Item = &Finding> {
        self.by_severity(Severity::Info)
    }

    /// Whether the record must not be exported
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Findings attached to a field
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.fields.contains(&field))
    }

    pub fn is_empty(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Device configuration flags the power rules depend on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceConfig {
    #[serde(default)]
    pub force_vddr: bool,
}

/// Validate a record against the board's tables
pub fn validate(
    record: &ConfigRecord,
    tables: &DomainTables,
    device: &DeviceConfig,
) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_network(record, tables, &mut report);
    validate_radio(record, tables, &mut report);
    validate_power(record, tables, device, &mut report);
    report
}

fn check_range(report: &mut ValidationReport, field: Field, value: i64, min: i64, max: i64) {
    if !(min..=max).contains(&value) {
        report.error(field, format!("Must be between {min} and {max}"));
    }
}

fn check_range_hex(report: &mut ValidationReport, field: Field, value: i64, min: i64, max: i64) {
    if !(min..=max).contains(&value) {
        report.error(field, format!("Must be between 0x{min:X} and 0x{max:X}"));
    }
}

/// Range check that only runs while the field is shown
fn check_visible_range(
    record: &ConfigRecord,
    report: &mut ValidationReport,
    field: Field,
    max: i64,
) {
    if is_hidden(record, field) {
        return;
    }
    if let Some(value) = record.integer(field) {
        check_range(report, field, value, 0, max);
    }
}

fn format_channels(channels: &BTreeSet<Channel>) -> String {
    channels
        .iter()
        .map(Channel::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_channel_masks(record: &ConfigRecord, tables: &DomainTables, report: &mut ValidationReport) {
    let supported: BTreeSet<Channel> = tables
        .supported_channels(record.freq_band, record.freq_sub1, record.phy_type)
        .into_iter()
        .collect();

    for field in [Field::ChannelMask, Field::FhChannelMask, Field::FhAsyncChannelMask] {
        if is_hidden(record, field) {
            continue;
        }
        let Some(mask) = record.channel_mask(field) else {
            continue;
        };
        if mask.is_empty() {
            report.error(field, "Must select at least one channel");
            continue;
        }
        let unsupported: BTreeSet<Channel> = mask.difference(&supported).copied().collect();
        if !unsupported.is_empty() {
            report.error(
                field,
                format!(
                    "Channels not supported by the selected frequency and PHY: {}",
                    format_channels(&unsupported)
                ),
            );
        }
    }
}

fn validate_order(record: &ConfigRecord, report: &mut ValidationReport, field: Field) {
    if record.mode != NetworkMode::Beacon {
        return;
    }
    let Some(value) = record.integer(field) else {
        return;
    };
    check_range(report, field, value, 1, 14);
    if value != OPTIMAL_ORDER {
        report.info(field, "Optimal value is 8");
    }
}

fn validate_network(record: &ConfigRecord, tables: &DomainTables, report: &mut ValidationReport) {
    check_range_hex(report, Field::PanId, record.pan_id, 0, 0xFFFF);

    validate_channel_masks(record, tables, report);

    if !is_hidden(record, Field::FhNetname) && record.fh_netname.chars().count() >= 32 {
        report.error(Field::FhNetname, "Must be less than 32 characters");
    }

    if !is_hidden(record, Field::MaxDevices) {
        check_range(report, Field::MaxDevices, record.max_devices, 0, I16_MAX);
        if record.max_devices != DEFAULT_MAX_DEVICES {
            report.info(
                Field::MaxDevices,
                "The selected value requires MAX_DEVICE_TABLE_ENTRIES to be updated in collector.opts",
            );
        }
        if record.max_devices > 150 {
            report.info(
                Field::MaxDevices,
                "It is not recommended that this value be set above 150",
            );
        }
    }

    check_range(report, Field::ReportingInterval, record.reporting_interval, 0, U32_MAX);
    if record.reporting_interval < 500 {
        report.info(
            Field::ReportingInterval,
            "It is not recommended that this value be set below 500",
        );
    }

    if !is_hidden(record, Field::PollingInterval) {
        check_range(report, Field::PollingInterval, record.polling_interval, 0, U32_MAX);
        if record.phy_type == PhyType::Slr5Kbps {
            if record.polling_interval < 500 {
                report.info(
                    Field::PollingInterval,
                    "It is not recommended that this value be set below 500 ms for a data rate of 5 kbps",
                );
            }
        } else if record.polling_interval < 100 {
            report.info(
                Field::PollingInterval,
                "It is not recommended that this value be set below 100 ms for this data rate",
            );
        }
    }

    for field in [
        Field::TrackingDelayTime,
        Field::ScanBackoffInterval,
        Field::OrphanBackoffInterval,
    ] {
        check_visible_range(record, report, field, U32_MAX);
    }

    check_range(report, Field::ScanDuration, record.scan_duration, 0, U8_MAX);

    validate_order(record, report, Field::MacBeaconOrder);
    validate_order(record, report, Field::MacSuperframeOrder);

    if record.max_be < record.min_be {
        report.push(
            Severity::Error,
            &[Field::MinBe, Field::MaxBe],
            "Max must be more than min",
        );
    }
    check_range(report, Field::MinBe, record.min_be, 0, U8_MAX);
    check_range(report, Field::MaxBe, record.max_be, 0, U8_MAX);

    check_visible_range(record, report, Field::FhBroadcastInterval, U32_MAX);
    check_visible_range(record, report, Field::FhBroadcastDwellTime, U8_MAX);
}

fn validate_radio(record: &ConfigRecord, tables: &DomainTables, report: &mut ValidationReport) {
    if !tables.frequency_band_options().contains(&record.freq_band) {
        report.error(
            Field::FreqBand,
            format!("{} is not supported by {}", record.freq_band.display_name(), tables.board()),
        );
    }

    if !is_hidden(record, Field::FreqSub1)
        && !tables.sub1_frequency_options().contains(&record.freq_sub1)
    {
        report.error(
            Field::FreqSub1,
            format!("{} is not supported by {}", record.freq_sub1.display_name(), tables.board()),
        );
    }

    if tables.phy_descriptor(record.phy_type).is_none() {
        report.error(
            Field::PhyType,
            format!("{} is not supported by {}", record.phy_type.display_name(), tables.board()),
        );
    }

    if record.phy_type.band() != record.freq_band {
        report.error(Field::PhyType, "PHY type not supported by frequency band");
    }
}

fn validate_power(
    record: &ConfigRecord,
    tables: &DomainTables,
    device: &DeviceConfig,
    report: &mut ValidationReport,
) {
    let field = record.active_transmit_power_field();
    let selected = record.active_transmit_power();
    if !tables.power_table(record.freq_band).offers(selected) {
        report.error(
            field,
            format!("{selected} dBm is not an available transmit power for this board"),
        );
        return;
    }

    let mapping = map_power_selection(record, tables);
    if mapping.arg.is_high_pa() {
        report.info(field, "The selected RF TX Power enables high PA");
        return;
    }

    let requires_vddr = tables
        .board()
        .force_vddr_tx_power()
        .is_some_and(|threshold| (mapping.level - threshold).abs() < LEVEL_EPSILON);
    if requires_vddr && !device.force_vddr {
        report.push(
            Severity::Warning,
            &[field],
            "The selected RF TX Power requires Force VDDR to be enabled in the Device Configuration module",
        );
    }
}
