//! Project file loading and saving
//!
//! A project file names the board, carries the device configuration flags
//! and overlays any number of settings on top of the board's defaults.

use anyhow::{bail, Context, Result};
use radiocfg_core::derive::set_phy_id_channel_page;
use radiocfg_core::record::default_oad_block_size;
use radiocfg_core::{
    on_field_change, sync_all, Board, ConfigRecord, DeviceConfig, DomainTables, Field,
    ProjectRole, RfDefaults,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// Record keys owned by the `[project]` table rather than `[settings]`
const IDENTITY_KEYS: [&str; 2] = ["board", "projectRole"];

/// Settings that drive a cascade, applied one at a time in this order
const CASCADE_FIELDS: [Field; 4] = [Field::FreqBand, Field::FreqSub1, Field::PhyType, Field::Mode];

/// On-disk layout of a project file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub project: ProjectInfo,
    #[serde(default)]
    pub device: DeviceConfig,
    #[serde(default)]
    pub settings: toml::Table,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub board: Board,
    /// Project name, used to tell collectors from sensors
    #[serde(default)]
    pub name: String,
}

/// A loaded project: identity, device flags, tables and resolved record
#[derive(Debug, Clone)]
pub struct Project {
    pub info: ProjectInfo,
    pub device: DeviceConfig,
    pub tables: DomainTables,
    pub record: ConfigRecord,
}

impl Project {
    /// Project holding the board's defaults
    pub fn new(board: Board, name: &str, rf_defaults: &RfDefaults) -> Result<Self> {
        let tables = DomainTables::new(board, rf_defaults)?;
        let record = ConfigRecord::defaults(&tables, ProjectRole::from_project_name(name));
        Ok(Self {
            info: ProjectInfo {
                board,
                name: name.to_string(),
            },
            device: DeviceConfig::default(),
            tables,
            record,
        })
    }

    /// Resolve a parsed project file against the board's defaults
    pub fn from_file(file: ProjectFile, rf_defaults: &RfDefaults) -> Result<Self> {
        let mut project = Self::new(file.project.board, &file.project.name, rf_defaults)?;
        project.device = file.device;

        // Selections first so their cascades fill in the dependent defaults,
        // which any explicit setting below then overrides
        for field in CASCADE_FIELDS {
            let Some(value) = file.settings.get(field.as_str()) else {
                continue;
            };
            let selection = toml::Table::from_iter([(field.as_str().to_string(), value.clone())]);
            let updated = overlay_settings(&project.record, &selection)?;
            if updated != project.record {
                project.record = updated;
                project.apply_cascade(field);
            }
        }

        let rest: toml::Table = file
            .settings
            .iter()
            .filter(|(key, _)| !CASCADE_FIELDS.iter().any(|f| f.as_str() == key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        project.record = overlay_settings(&project.record, &rest)?;
        project.refresh_derived();
        Ok(project)
    }

    fn apply_cascade(&mut self, field: Field) {
        debug!(field = %field, "Running cascade for loaded selection");
        if let Err(e) = on_field_change(&mut self.record, &self.tables, field) {
            warn!(field = %field, error = %e, "Cascade incomplete for loaded selection");
        }
    }

    /// Bring hidden and read-only fields in line with the current selections
    fn refresh_derived(&mut self) {
        sync_all(&mut self.record, &self.tables);
        self.record.oad_block_size = default_oad_block_size(self.record.freq_band);
        // An inconsistent PHY selection is left for the validator to report
        if let Err(e) = set_phy_id_channel_page(&mut self.record, &self.tables) {
            warn!(error = %e, "Keeping stored PHY ID and channel page");
        }
    }

    pub fn to_file(&self) -> Result<ProjectFile> {
        let mut settings = match toml::Value::try_from(&self.record)? {
            toml::Value::Table(table) => table,
            other => bail!("Record serialized to {} instead of a table", other.type_str()),
        };
        for key in IDENTITY_KEYS {
            settings.remove(key);
        }
        Ok(ProjectFile {
            project: self.info.clone(),
            device: self.device,
            settings,
        })
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.to_file()?)?)
    }
}

/// Apply the `[settings]` overlay onto a default record
fn overlay_settings(defaults: &ConfigRecord, settings: &toml::Table) -> Result<ConfigRecord> {
    let mut merged = match toml::Value::try_from(defaults)? {
        toml::Value::Table(table) => table,
        other => bail!("Record serialized to {} instead of a table", other.type_str()),
    };

    for (key, value) in settings {
        if IDENTITY_KEYS.contains(&key.as_str()) {
            warn!(key = %key, "Ignoring identity key in [settings], use [project]");
            continue;
        }
        key.parse::<Field>()
            .with_context(|| format!("Unknown setting '{key}'"))?;
        merged.insert(key.clone(), value.clone());
    }

    toml::Value::Table(merged)
        .try_into()
        .context("Invalid value in [settings]")
}

/// Load a project file
pub fn load_project(path: &Path, rf_defaults: &RfDefaults) -> Result<Project> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project {}", path.display()))?;
    let file: ProjectFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse project {}", path.display()))?;
    info!(
        path = %path.display(),
        board = %file.project.board,
        settings = file.settings.len(),
        "Loaded project"
    );
    Project::from_file(file, rf_defaults)
}

/// Write a project back to disk
pub fn save_project(path: &Path, project: &Project) -> Result<()> {
    std::fs::write(path, project.to_toml_string()?)
        .with_context(|| format!("Failed to write project {}", path.display()))?;
    info!(path = %path.display(), "Saved project");
    Ok(())
}
