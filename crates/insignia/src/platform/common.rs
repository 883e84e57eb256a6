use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for an [`OverviewProject`](super::OverviewProject).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

/// Stable identifier for a unit. Invoices, viewings, and reservations join on it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    ResidentialVillaCompound,
    ApartmentBuilding,
    CommercialOfficeSpace,
}

impl ProjectType {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ResidentialVillaCompound,
            Self::ApartmentBuilding,
            Self::CommercialOfficeSpace,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ResidentialVillaCompound => "residential villa compound",
            Self::ApartmentBuilding => "apartment building",
            Self::CommercialOfficeSpace => "commercial office space",
        }
    }

    /// Title-cased label used for grouped chart nodes.
    pub const fn title(self) -> &'static str {
        match self {
            Self::ResidentialVillaCompound => "Residential Villa Compound",
            Self::ApartmentBuilding => "Apartment Building",
            Self::CommercialOfficeSpace => "Commercial Office Space",
        }
    }
}

/// User-defined attribute attached to projects, units, leads, and assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub field_name: String,
    pub value: CustomFieldValue,
}

/// The variant doubles as the field type, so a value can never disagree with its tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field_type", content = "field_value", rename_all = "snake_case")]
pub enum CustomFieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Boolean(bool),
}

impl CustomFieldValue {
    pub const fn field_type(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::Date(_) => "date",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl fmt::Display for CustomFieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(value) if value.fract() == 0.0 => write!(f, "{}", *value as i64),
            Self::Number(value) => write!(f, "{}", value),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Boolean(flag) => write!(f, "{}", flag),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_field_serializes_type_tag_next_to_value() {
        let field = CustomField {
            field_name: "Internal Rating".to_string(),
            value: CustomFieldValue::Number(412.0),
        };
        let json = serde_json::to_value(&field).expect("serializes");
        assert_eq!(json["value"]["field_type"], "number");
        assert_eq!(json["value"]["field_value"], 412.0);
        assert_eq!(field.value.to_string(), "412");
    }

    #[test]
    fn date_values_render_as_iso_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        assert_eq!(CustomFieldValue::Date(date).to_string(), "2024-03-09");
        assert_eq!(CustomFieldValue::Boolean(true).field_type(), "boolean");
    }
}
