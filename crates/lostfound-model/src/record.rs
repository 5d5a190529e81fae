//! Found-item record as it travels between import, standardization and
//! persistence.
//!
//! Only the fields the standardizer understands are typed. Every other key
//! of the incoming object (category, office data, coordinates, ...) is kept
//! verbatim in [`ItemRecord::other`] so a record can be read, rewritten and
//! written back without losing anything.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category-specific form values (brand, colour, serial number, ...).
pub type CustomFields = BTreeMap<String, Value>;

/// Wire names of the typed fields.
pub mod fields {
    pub const ITEM_NAME: &str = "item_name";
    pub const DESCRIPTION: &str = "description";
    pub const LOCATION_FOUND: &str = "location_found";
    pub const MUNICIPALITY: &str = "municipality";
    pub const COUNTY: &str = "county";
    pub const VOIVODESHIP: &str = "voivodeship";
    pub const DATE_FOUND: &str = "date_found";
    pub const CUSTOM_FIELDS: &str = "custom_fields";

    /// Keys inside `custom_fields` holding a brand name.
    pub const BRAND_KEYS: &[&str] = &["brand", "watch_brand", "car_brand"];
    /// Key inside `custom_fields` holding a colour name.
    pub const COLOR_KEY: &str = "color";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRecord", into = "WireRecord")]
pub struct ItemRecord {
    pub item_name: Option<String>,
    pub description: Option<String>,
    pub location_found: Option<String>,
    pub municipality: Option<String>,
    pub county: Option<String>,
    pub voivodeship: Option<String>,
    pub date_found: Option<String>,
    /// Either a JSON object or, as stored in the database column, a string
    /// holding a JSON object.
    pub custom_fields: Option<Value>,
    /// Keys the standardizer does not interpret.
    pub other: BTreeMap<String, Value>,
    /// Typed fields (and `custom_fields`) that arrived as an explicit JSON
    /// `null`. They are `None` above and written back as `null`.
    pub explicit_nulls: BTreeSet<String>,
}

/// Serialized shape of [`ItemRecord`]. A typed key is `None` when absent
/// and `Some(Value::Null)` when sent as `null`.
#[derive(Serialize, Deserialize)]
struct WireRecord {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    item_name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    description: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    location_found: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    municipality: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    county: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    voivodeship: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    date_found: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    custom_fields: Option<Value>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

impl From<WireRecord> for ItemRecord {
    fn from(wire: WireRecord) -> Self {
        let mut record = ItemRecord::new();
        for (name, value) in [
            (fields::ITEM_NAME, wire.item_name),
            (fields::DESCRIPTION, wire.description),
            (fields::LOCATION_FOUND, wire.location_found),
            (fields::MUNICIPALITY, wire.municipality),
            (fields::COUNTY, wire.county),
            (fields::VOIVODESHIP, wire.voivodeship),
            (fields::DATE_FOUND, wire.date_found),
            (fields::CUSTOM_FIELDS, wire.custom_fields),
        ] {
            if let Some(value) = value {
                record.set_field(name, value);
            }
        }
        record.other = wire.other;
        record
    }
}

impl From<ItemRecord> for WireRecord {
    fn from(record: ItemRecord) -> Self {
        let nulls = &record.explicit_nulls;
        let text = |value: Option<String>, name: &str| match value {
            Some(text) => Some(Value::String(text)),
            None => nulls.contains(name).then_some(Value::Null),
        };
        WireRecord {
            item_name: text(record.item_name, fields::ITEM_NAME),
            description: text(record.description, fields::DESCRIPTION),
            location_found: text(record.location_found, fields::LOCATION_FOUND),
            municipality: text(record.municipality, fields::MUNICIPALITY),
            county: text(record.county, fields::COUNTY),
            voivodeship: text(record.voivodeship, fields::VOIVODESHIP),
            date_found: text(record.date_found, fields::DATE_FOUND),
            custom_fields: match record.custom_fields {
                Some(value) => Some(value),
                None => nulls.contains(fields::CUSTOM_FIELDS).then_some(Value::Null),
            },
            other: record.other,
        }
    }
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for any field, typed or not.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_field(name, Value::String(value.into()));
        self
    }

    /// Returns the string value of a typed or untyped field.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self.typed_slot(name) {
            Some(slot) => slot.as_deref(),
            None => self.other.get(name).and_then(Value::as_str),
        }
    }

    /// Sets a field by wire name.
    ///
    /// Typed string fields only accept strings (other JSON values are
    /// rendered with their JSON text); unknown names go to `other`. A
    /// `null` for a typed field clears it and is remembered in
    /// [`explicit_nulls`](Self::explicit_nulls).
    pub fn set_field(&mut self, name: &str, value: Value) {
        if name == fields::CUSTOM_FIELDS {
            self.mark_null(name, value.is_null());
            self.custom_fields = (!value.is_null()).then_some(value);
            return;
        }
        if self.typed_slot(name).is_none() {
            self.other.insert(name.to_string(), value);
            return;
        }
        self.mark_null(name, value.is_null());
        if let Some(slot) = self.typed_slot_mut(name) {
            *slot = match value {
                Value::Null => None,
                Value::String(text) => Some(text),
                other => Some(other.to_string()),
            };
        }
    }

    fn mark_null(&mut self, name: &str, is_null: bool) {
        if is_null {
            self.explicit_nulls.insert(name.to_string());
        } else {
            self.explicit_nulls.remove(name);
        }
    }

    /// Parsed view of `custom_fields`.
    ///
    /// Returns `None` when the field is absent, or when it is a string that
    /// does not hold a JSON object.
    pub fn custom_fields_map(&self) -> Option<CustomFields> {
        match self.custom_fields.as_ref()? {
            Value::Object(map) => Some(map.clone().into_iter().collect()),
            Value::String(raw) => match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Some(map.into_iter().collect()),
                _ => None,
            },
            _ => None,
        }
    }

    /// Value of a string entry inside `custom_fields`.
    pub fn custom_field(&self, key: &str) -> Option<String> {
        self.custom_fields_map()?
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn typed_slot(&self, name: &str) -> Option<&Option<String>> {
        Some(match name {
            fields::ITEM_NAME => &self.item_name,
            fields::DESCRIPTION => &self.description,
            fields::LOCATION_FOUND => &self.location_found,
            fields::MUNICIPALITY => &self.municipality,
            fields::COUNTY => &self.county,
            fields::VOIVODESHIP => &self.voivodeship,
            fields::DATE_FOUND => &self.date_found,
            _ => return None,
        })
    }

    fn typed_slot_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        Some(match name {
            fields::ITEM_NAME => &mut self.item_name,
            fields::DESCRIPTION => &mut self.description,
            fields::LOCATION_FOUND => &mut self.location_found,
            fields::MUNICIPALITY => &mut self.municipality,
            fields::COUNTY => &mut self.county,
            fields::VOIVODESHIP => &mut self.voivodeship,
            fields::DATE_FOUND => &mut self.date_found,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_keys_survive_round_trip() {
        let raw = json!({
            "item_name": "Portfel",
            "category": "wallet",
            "coordinates_lat": 50.06,
            "lost_and_found_office": { "name": "Biuro Rzeczy Znalezionych" }
        });
        let record: ItemRecord = serde_json::from_value(raw.clone()).expect("deserialize");
        assert_eq!(record.item_name.as_deref(), Some("Portfel"));
        assert_eq!(record.other.len(), 3);
        assert_eq!(serde_json::to_value(&record).expect("serialize"), raw);
    }

    #[test]
    fn absent_fields_stay_absent() {
        let record: ItemRecord = serde_json::from_value(json!({ "county": "krakowski" }))
            .expect("deserialize");
        let out = serde_json::to_value(&record).expect("serialize");
        insta::assert_json_snapshot!(out, @r#"
        {
          "county": "krakowski"
        }
        "#);
    }

    #[test]
    fn explicit_nulls_survive_round_trip() {
        let raw = json!({ "item_name": null, "county": "krakowski", "custom_fields": null, "notes": null });
        let record: ItemRecord = serde_json::from_value(raw.clone()).expect("deserialize");
        assert_eq!(record.item_name, None);
        assert_eq!(record.custom_fields, None);
        assert_eq!(serde_json::to_value(&record).expect("serialize"), raw);

        let mut record = record;
        record.set_field(fields::ITEM_NAME, json!("Portfel"));
        let out = serde_json::to_value(&record).expect("serialize");
        assert_eq!(out["item_name"], json!("Portfel"));
        assert!(record.explicit_nulls.contains(fields::CUSTOM_FIELDS));
    }

    #[test]
    fn custom_fields_accepts_string_encoded_object() {
        let record = ItemRecord {
            custom_fields: Some(Value::String(r#"{"brand":"vw"}"#.to_string())),
            ..ItemRecord::default()
        };
        assert_eq!(record.custom_field("brand").as_deref(), Some("vw"));
    }

    #[test]
    fn custom_fields_ignores_non_object_strings() {
        let record = ItemRecord {
            custom_fields: Some(Value::String("not json".to_string())),
            ..ItemRecord::default()
        };
        assert!(record.custom_fields_map().is_none());
    }

    #[test]
    fn set_field_routes_typed_and_untyped_names() {
        let mut record = ItemRecord::new().with(fields::DATE_FOUND, "wczoraj");
        record.set_field("status", json!("stored"));
        record.set_field(fields::COUNTY, json!(1261));
        assert_eq!(record.field(fields::DATE_FOUND), Some("wczoraj"));
        assert_eq!(record.field("status"), Some("stored"));
        assert_eq!(record.county.as_deref(), Some("1261"));
    }
}
