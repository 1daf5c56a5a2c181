use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::action::RotationAction;
use crate::domain::rotation::Rotation;

pub const MAX_ACTIONS: usize = 50;
pub const MAX_CAST_TIME: f64 = 300.0;
pub const MAX_COOLDOWN: f64 = 600.0;
pub const MAX_BUFF_DURATION: f64 = 600.0;

#[derive(Error, Debug)]
pub enum RotationFileError {
    #[error("failed to read rotation file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse rotation yaml: {0}")]
    ParseYaml(#[from] serde_yaml::Error),
    #[error("failed to parse rotation json: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("missing action id")]
    MissingActionId,
    #[error("missing skill name for action {0}")]
    MissingSkillName(String),
    #[error("invalid cast time {value} for action {id}")]
    InvalidCastTime { id: String, value: f64 },
    #[error("invalid cooldown {value} for action {id}")]
    InvalidCooldown { id: String, value: f64 },
    #[error("invalid buff duration {value} for action {id}")]
    InvalidBuffDuration { id: String, value: f64 },
    #[error("rotation has {0} actions, maximum is 50")]
    TooManyActions(usize),
}

#[derive(Serialize, Deserialize)]
struct RotationRecord {
    name: String,
    actions: Vec<ActionRecord>,
}

#[derive(Serialize, Deserialize)]
struct ActionRecord {
    id: String,
    skill_name: String,
    #[serde(default)]
    cast_time: f64,
    #[serde(default)]
    cooldown: f64,
    buff_duration: Option<f64>,
    notes: Option<String>,
    color: Option<String>,
}

/// Load and validate a rotation. Files ending in `.json` are parsed as
/// JSON (the format the rotations were originally exported in), anything
/// else as YAML.
pub fn load_rotation_from_file(path: &str) -> Result<Rotation, RotationFileError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        deserialize_rotation_from_json_str(&contents)
    } else {
        deserialize_rotation_from_yaml_str(&contents)
    }
}

pub fn deserialize_rotation_from_yaml_str(input: &str) -> Result<Rotation, RotationFileError> {
    let record: RotationRecord = serde_yaml::from_str(input)?;
    rotation_from_record(record)
}

pub fn deserialize_rotation_from_json_str(input: &str) -> Result<Rotation, RotationFileError> {
    let record: RotationRecord = serde_json::from_str(input)?;
    rotation_from_record(record)
}

pub fn serialize_rotation_to_yaml<W: Write>(
    writer: &mut W,
    rotation: &Rotation,
) -> io::Result<()> {
    let record = RotationRecord {
        name: rotation.name.clone(),
        actions: rotation.actions.iter().map(action_to_record).collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn rotation_from_record(record: RotationRecord) -> Result<Rotation, RotationFileError> {
    if record.actions.len() > MAX_ACTIONS {
        return Err(RotationFileError::TooManyActions(record.actions.len()));
    }

    let mut actions = Vec::with_capacity(record.actions.len());
    for action_record in record.actions {
        actions.push(action_from_record(action_record)?);
    }

    Ok(Rotation {
        name: record.name,
        actions,
    })
}

fn action_from_record(record: ActionRecord) -> Result<RotationAction, RotationFileError> {
    if record.id.trim().is_empty() {
        return Err(RotationFileError::MissingActionId);
    }
    if record.skill_name.trim().is_empty() {
        return Err(RotationFileError::MissingSkillName(record.id));
    }
    // Range checks also reject NaN, which satisfies neither bound.
    if !(0.0..=MAX_CAST_TIME).contains(&record.cast_time) {
        return Err(RotationFileError::InvalidCastTime {
            id: record.id,
            value: record.cast_time,
        });
    }
    if !(0.0..=MAX_COOLDOWN).contains(&record.cooldown) {
        return Err(RotationFileError::InvalidCooldown {
            id: record.id,
            value: record.cooldown,
        });
    }
    if let Some(buff_duration) = record.buff_duration {
        if !(0.0..=MAX_BUFF_DURATION).contains(&buff_duration) {
            return Err(RotationFileError::InvalidBuffDuration {
                id: record.id,
                value: buff_duration,
            });
        }
    }

    Ok(RotationAction {
        id: record.id,
        skill_name: record.skill_name,
        cast_time: record.cast_time,
        cooldown: record.cooldown,
        buff_duration: record.buff_duration,
        notes: record.notes,
        color: record.color,
    })
}

fn action_to_record(action: &RotationAction) -> ActionRecord {
    ActionRecord {
        id: action.id.clone(),
        skill_name: action.skill_name.clone(),
        cast_time: action.cast_time,
        cooldown: action.cooldown,
        buff_duration: action.buff_duration,
        notes: action.notes.clone(),
        color: action.color.clone(),
    }
}
