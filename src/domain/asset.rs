use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId};
use serde::{Deserialize, Serialize};

pub const ASSET_STATUSES: &[&str] = &["active", "in_maintenance", "retired"];

/// A tracked government asset (vehicle, equipment, furniture).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i64,
    pub asset_tag: String,
    pub name: String,
    pub category: String,
    pub location: String,
    pub status: String,
    pub purchase_date: Option<String>,
    pub value: f64,
}

impl Row for Asset {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "asset_tag" => self.asset_tag.as_str().into(),
            "name" => self.name.as_str().into(),
            "category" => self.category.as_str().into(),
            "location" => self.location.as_str().into(),
            "status" => self.status.as_str().into(),
            "purchase_date" => self.purchase_date.clone().into(),
            "value" => self.value.into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Asset {
    const REQUIRED: &'static [&'static str] = &["asset_tag", "name", "category"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, super::ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let asset = Asset {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            asset_tag: form.text("asset_tag"),
            name: form.text("name"),
            category: form.text("category"),
            location: form.text("location"),
            status: form.choice("status", ASSET_STATUSES, "active"),
            purchase_date: form.date("purchase_date"),
            value: form.number("value").unwrap_or(0.0),
        };
        if asset.value < 0.0 {
            form.error("value", "Value cannot be negative");
        }
        form.finish(asset)
    }

    fn to_form(&self) -> FormValues {
        let value = self.value.to_string();
        super::form([
            ("asset_tag", self.asset_tag.as_str()),
            ("name", self.name.as_str()),
            ("category", self.category.as_str()),
            ("location", self.location.as_str()),
            ("status", self.status.as_str()),
            ("purchase_date", self.purchase_date.as_deref().unwrap_or_default()),
            ("value", value.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("status", "active")])
    }
}

impl Entity for Asset {
    const NAME: &'static str = "Asset";

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
    fn parse_asset_form() {
        let values = form([
            ("asset_tag", "AST-100"),
            ("name", "Toyota Hilux"),
            ("category", "Vehicle"),
            ("value", "18,500,000"),
            ("purchase_date", "2023-06-14"),
        ]);

        let asset = Asset::from_form(None, &values).expect("valid asset");
        assert_eq!(asset.status, "active");
        assert_eq!(asset.value, 18_500_000.0);
        assert_eq!(asset.purchase_date.as_deref(), Some("2023-06-14"));
        assert_eq!(asset.field("unknown"), None);
    }

    #[test]
    fn negative_value_is_rejected() {
        let values = form([
            ("asset_tag", "AST-101"),
            ("name", "Desk"),
            ("category", "Furniture"),
            ("value", "-5"),
        ]);
        let errors = Asset::from_form(None, &values).expect_err("negative value");
        assert_eq!(errors.for_field("value"), Some("Value cannot be negative"));
    }
}
