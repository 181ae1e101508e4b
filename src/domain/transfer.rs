use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const TRANSFER_STATUSES: &[&str] = &["pending", "approved", "completed", "rejected"];

/// Movement of an employee between duty locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    pub employee_name: String,
    pub ippis_number: String,
    pub from_location: String,
    pub to_location: String,
    pub transfer_date: String,
    pub reason: Option<String>,
    pub status: String,
}

impl Row for Transfer {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "employee_name" => self.employee_name.as_str().into(),
            "ippis_number" => self.ippis_number.as_str().into(),
            "from_location" => self.from_location.as_str().into(),
            "to_location" => self.to_location.as_str().into(),
            "transfer_date" => self.transfer_date.as_str().into(),
            "reason" => self.reason.clone().into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Transfer {
    const REQUIRED: &'static [&'static str] = &[
        "employee_name",
        "ippis_number",
        "from_location",
        "to_location",
        "transfer_date",
    ];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let from_location = form.text("from_location");
        let to_location = form.text("to_location");
        if !to_location.is_empty() && to_location.eq_ignore_ascii_case(&from_location) {
            form.error("to_location", "Destination must differ from the current location");
        }

        let transfer = Transfer {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            employee_name: form.text("employee_name"),
            ippis_number: form.text("ippis_number"),
            from_location,
            to_location,
            transfer_date: form.date("transfer_date").unwrap_or_default(),
            reason: form.opt_text("reason"),
            status: form.choice("status", TRANSFER_STATUSES, "pending"),
        };
        form.finish(transfer)
    }

    fn to_form(&self) -> FormValues {
        super::form([
            ("employee_name", self.employee_name.as_str()),
            ("ippis_number", self.ippis_number.as_str()),
            ("from_location", self.from_location.as_str()),
            ("to_location", self.to_location.as_str()),
            ("transfer_date", self.transfer_date.as_str()),
            ("reason", self.reason.as_deref().unwrap_or_default()),
            ("status", self.status.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("status", "pending")])
    }
}

impl Entity for Transfer {
    const NAME: &'static str = "Transfer";

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
    fn same_location_transfer_is_rejected() {
        let values = form([
            ("employee_name", "Chinedu Okafor"),
            ("ippis_number", "IPP-110023"),
            ("from_location", "Abuja HQ"),
            ("to_location", "abuja hq"),
            ("transfer_date", "2024-07-01"),
        ]);
        let errors = Transfer::from_form(None, &values).expect_err("same location");
        assert_eq!(
            errors.for_field("to_location"),
            Some("Destination must differ from the current location")
        );
    }
}
