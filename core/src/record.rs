//! Scheme record model
//!
//! Field names on the wire follow the scheme service (`_id`, `schemename`,
//! `desc`, ...). Fields the model does not know about are kept in `extra`
//! and sent back unchanged on update and delete.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

use crate::error::SchemeError;

/// Monetary value as the service sends it: either a JSON number or free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(Number),
    Text(String),
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{}", n),
            Amount::Text(s) => f.write_str(s),
        }
    }
}

/// `null` reads as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serial numbers arrive as numbers or numeric strings; anything else reads as absent
fn lenient_serial<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    #[allow(dead_code)]
    enum Raw {
        Int(i64),
        Float(f64),
        Text(String),
        Other(de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Int(n)) => Some(n),
        Some(Raw::Float(f)) if f.fract() == 0.0 => Some(f as i64),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// A government scheme as stored by the scheme service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemeRecord {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(
        rename = "srno",
        default,
        deserialize_with = "lenient_serial",
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<i64>,
    #[serde(rename = "schemename", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ministry: String,
    #[serde(rename = "desc", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub place: String,
    #[serde(rename = "moneygranted", default, skip_serializing_if = "Option::is_none")]
    pub money_granted: Option<Amount>,
    #[serde(rename = "moneyspent", default, skip_serializing_if = "Option::is_none")]
    pub money_spent: Option<Amount>,
    #[serde(rename = "timeOfschemeAdded", default, skip_serializing_if = "Option::is_none")]
    pub time_added: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Server fields this model does not name
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `GET /getschemes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemeListResponse {
    #[serde(default)]
    pub schemes: Vec<SchemeRecord>,
}

/// Attributes of a record that can be overwritten through the edit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeField {
    SerialNumber,
    Name,
    Ministry,
    Description,
    Place,
    MoneyGranted,
    MoneySpent,
    Date,
    /// Set by the service when the scheme is created; read-only
    TimeAdded,
}

impl SchemeField {
    /// Fields offered as inputs in the edit form, in display order
    pub const EDITABLE: [SchemeField; 6] = [
        SchemeField::Name,
        SchemeField::Ministry,
        SchemeField::Description,
        SchemeField::Place,
        SchemeField::MoneyGranted,
        SchemeField::MoneySpent,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeField::SerialNumber => "srno",
            SchemeField::Name => "schemename",
            SchemeField::Ministry => "ministry",
            SchemeField::Description => "desc",
            SchemeField::Place => "place",
            SchemeField::MoneyGranted => "moneygranted",
            SchemeField::MoneySpent => "moneyspent",
            SchemeField::Date => "date",
            SchemeField::TimeAdded => "timeOfschemeAdded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SchemeField::SerialNumber => "Sr. No.",
            SchemeField::Name => "Scheme Name",
            SchemeField::Ministry => "Ministry",
            SchemeField::Description => "Description",
            SchemeField::Place => "Place",
            SchemeField::MoneyGranted => "Money Granted",
            SchemeField::MoneySpent => "Money Spent",
            SchemeField::Date => "Date",
            SchemeField::TimeAdded => "Time of Scheme Added",
        }
    }
}

impl fmt::Display for SchemeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemeField {
    type Err = SchemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "srno" => Ok(SchemeField::SerialNumber),
            "schemename" | "name" => Ok(SchemeField::Name),
            "ministry" => Ok(SchemeField::Ministry),
            "desc" | "description" => Ok(SchemeField::Description),
            "place" => Ok(SchemeField::Place),
            "moneygranted" => Ok(SchemeField::MoneyGranted),
            "moneyspent" => Ok(SchemeField::MoneySpent),
            "date" => Ok(SchemeField::Date),
            "timeOfschemeAdded" => Ok(SchemeField::TimeAdded),
            other => Err(SchemeError::Validation(format!(
                "unknown scheme field '{}'",
                other
            ))),
        }
    }
}

impl SchemeRecord {
    /// Display value of a field; absent optional values render as an empty string
    pub fn field(&self, field: SchemeField) -> String {
        match field {
            SchemeField::SerialNumber => self
                .serial_number
                .map(|n| n.to_string())
                .unwrap_or_default(),
            SchemeField::Name => self.name.clone(),
            SchemeField::Ministry => self.ministry.clone(),
            SchemeField::Description => self.description.clone(),
            SchemeField::Place => self.place.clone(),
            SchemeField::MoneyGranted => amount_text(&self.money_granted),
            SchemeField::MoneySpent => amount_text(&self.money_spent),
            SchemeField::Date => self.date.clone().unwrap_or_default(),
            SchemeField::TimeAdded => self.time_added.clone().unwrap_or_default(),
        }
    }

    /// Overwrite exactly one attribute, leaving every other one untouched.
    ///
    /// Values are forwarded as typed. The only rejection is a serial number
    /// that is not an integer, since the model cannot hold it.
    pub fn set_field(
        &mut self,
        field: SchemeField,
        value: impl Into<String>,
    ) -> Result<(), SchemeError> {
        let value = value.into();
        match field {
            SchemeField::SerialNumber => {
                let trimmed = value.trim();
                self.serial_number = if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.parse().map_err(|_| {
                        SchemeError::Validation(format!(
                            "serial number must be an integer, got '{}'",
                            value
                        ))
                    })?)
                };
            }
            SchemeField::Name => self.name = value,
            SchemeField::Ministry => self.ministry = value,
            SchemeField::Description => self.description = value,
            SchemeField::Place => self.place = value,
            SchemeField::MoneyGranted => self.money_granted = Some(Amount::Text(value)),
            SchemeField::MoneySpent => self.money_spent = Some(Amount::Text(value)),
            SchemeField::Date => self.date = Some(value),
            SchemeField::TimeAdded => {
                return Err(SchemeError::Validation(
                    "time of scheme added is set by the service".to_string(),
                ))
            }
        }
        Ok(())
    }

    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }
}

fn amount_text(amount: &Option<Amount>) -> String {
    amount.as_ref().map(Amount::to_string).unwrap_or_default()
}
