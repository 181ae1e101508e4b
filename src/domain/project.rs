use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const PROJECT_STATUSES: &[&str] = &["planned", "active", "on_hold", "completed"];

/// A funded project run by a contracted company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub company: String,
    pub budget: f64,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

impl Row for Project {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "company" => self.company.as_str().into(),
            "budget" => self.budget.into(),
            "start_date" => self.start_date.as_str().into(),
            "end_date" => self.end_date.clone().into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Project {
    const REQUIRED: &'static [&'static str] = &["code", "name", "company", "start_date"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let start_date = form.date("start_date").unwrap_or_default();
        let end_date = form.date("end_date");
        // ISO dates order lexically
        if let Some(end) = &end_date {
            if !start_date.is_empty() && end.as_str() < start_date.as_str() {
                form.error("end_date", "End date cannot be before the start date");
            }
        }
        let budget = form.number("budget").unwrap_or(0.0);
        if budget < 0.0 {
            form.error("budget", "Budget cannot be negative");
        }

        let project = Project {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            code: form.text("code"),
            name: form.text("name"),
            company: form.text("company"),
            budget,
            start_date,
            end_date,
            status: form.choice("status", PROJECT_STATUSES, "planned"),
        };
        form.finish(project)
    }

    fn to_form(&self) -> FormValues {
        let budget = self.budget.to_string();
        super::form([
            ("code", self.code.as_str()),
            ("name", self.name.as_str()),
            ("company", self.company.as_str()),
            ("budget", budget.as_str()),
            ("start_date", self.start_date.as_str()),
            ("end_date", self.end_date.as_deref().unwrap_or_default()),
            ("status", self.status.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("status", "planned")])
    }
}

impl Entity for Project {
    const NAME: &'static str = "Project";

    fn set_id(&mut self, id: RowId) {
        if let RowId::Number(n) = id {
            self.id = n;
        }
    }
}
