use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A recurring maintenance schedule that assets can be assigned to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub interval_days: u32,
    pub active: bool,
}

impl Row for MaintenanceType {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "description" => self.description.as_str().into(),
            "interval_days" => self.interval_days.into(),
            "status" => (if self.active { "active" } else { "inactive" }).into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for MaintenanceType {
    const REQUIRED: &'static [&'static str] = &["name", "interval_days"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let interval_days = form.integer("interval_days").unwrap_or(0);
        if interval_days == 0 {
            form.error("interval_days", "Interval days must be at least 1");
        }
        let status = form.choice("status", &["active", "inactive"], "active");

        let maintenance_type = MaintenanceType {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            name: form.text("name"),
            description: form.text("description"),
            interval_days,
            active: status == "active",
        };
        form.finish(maintenance_type)
    }

    fn to_form(&self) -> FormValues {
        let interval = self.interval_days.to_string();
        super::form([
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
            ("interval_days", interval.as_str()),
            ("status", if self.active { "active" } else { "inactive" }),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("interval_days", "30"), ("status", "active")])
    }
}

impl Entity for MaintenanceType {
    const NAME: &'static str = "Maintenance type";

    fn set_id(&mut self, id: RowId) {
        if let RowId::Number(n) = id {
            self.id = n;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form;

    #[test]
    fn zero_interval_is_rejected() {
        let values = form([("name", "Oil change"), ("interval_days", "0")]);
        let errors = MaintenanceType::from_form(None, &values).expect_err("zero interval");
        assert_eq!(
            errors.for_field("interval_days"),
            Some("Interval days must be at least 1")
        );
    }

    #[test]
    fn status_maps_to_active_flag() {
        let values = form([
            ("name", "Generator service"),
            ("interval_days", "90"),
            ("status", "inactive"),
        ]);
        let parsed = MaintenanceType::from_form(Some(RowId::Number(4)), &values).expect("valid");
        assert_eq!(parsed.id, 4);
        assert!(!parsed.active);
        assert_eq!(parsed.field("status"), Some(CellValue::from("inactive")));
    }
}
