use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const APPROVAL_STATUSES: &[&str] = &["pending", "approved", "rejected"];

/// A grade-level promotion request for an employee.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub employee_name: String,
    pub ippis_number: String,
    pub from_grade: u32,
    pub to_grade: u32,
    pub effective_date: String,
    pub status: String,
}

impl Row for Promotion {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "employee_name" => self.employee_name.as_str().into(),
            "ippis_number" => self.ippis_number.as_str().into(),
            "from_grade" => self.from_grade.into(),
            "to_grade" => self.to_grade.into(),
            "effective_date" => self.effective_date.as_str().into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Promotion {
    const REQUIRED: &'static [&'static str] =
        &["employee_name", "ippis_number", "to_grade", "effective_date"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let from_grade = form.integer("from_grade").unwrap_or(0);
        let to_grade = form.integer("to_grade").unwrap_or(0);
        if to_grade != 0 && to_grade <= from_grade {
            form.error("to_grade", "To grade must be above the current grade");
        }

        let promotion = Promotion {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            employee_name: form.text("employee_name"),
            ippis_number: form.text("ippis_number"),
            from_grade,
            to_grade,
            effective_date: form.date("effective_date").unwrap_or_default(),
            status: form.choice("status", APPROVAL_STATUSES, "pending"),
        };
        form.finish(promotion)
    }

    fn to_form(&self) -> FormValues {
        let from_grade = self.from_grade.to_string();
        let to_grade = self.to_grade.to_string();
        super::form([
            ("employee_name", self.employee_name.as_str()),
            ("ippis_number", self.ippis_number.as_str()),
            ("from_grade", from_grade.as_str()),
            ("to_grade", to_grade.as_str()),
            ("effective_date", self.effective_date.as_str()),
            ("status", self.status.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("status", "pending")])
    }
}

impl Entity for Promotion {
    const NAME: &'static str = "Promotion";

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
    fn demotion_is_rejected() {
        let values = form([
            ("employee_name", "Aisha Bello"),
            ("ippis_number", "IPP-204411"),
            ("from_grade", "10"),
            ("to_grade", "9"),
            ("effective_date", "2024-01-01"),
        ]);
        let errors = Promotion::from_form(None, &values).expect_err("demotion");
        assert!(errors.for_field("to_grade").is_some());
    }

    #[test]
    fn round_trips_through_form() {
        let values = form([
            ("employee_name", "Aisha Bello"),
            ("ippis_number", "IPP-204411"),
            ("from_grade", "9"),
            ("to_grade", "10"),
            ("effective_date", "2024-01-01"),
            ("status", "approved"),
        ]);
        let promotion = Promotion::from_form(Some(RowId::Number(3)), &values).expect("valid");
        assert_eq!(promotion.to_form(), values);
    }
}
