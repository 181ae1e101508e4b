use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const LOCATION_TYPES: &[&str] = &["headquarters", "branch", "field_office"];

/// A duty station or office.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub state: String,
    pub address: Option<String>,
    pub location_type: String,
}

impl Row for Location {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "code" => self.code.as_str().into(),
            "name" => self.name.as_str().into(),
            "state" => self.state.as_str().into(),
            "address" => self.address.clone().into(),
            "location_type" => self.location_type.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Location {
    const REQUIRED: &'static [&'static str] = &["code", "name", "state"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let code = form.text("code").to_uppercase();
        if code.chars().any(char::is_whitespace) {
            form.error("code", "Code cannot contain spaces");
        }

        let location = Location {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            code,
            name: form.text("name"),
            state: form.text("state"),
            address: form.opt_text("address"),
            location_type: form.choice("location_type", LOCATION_TYPES, "branch"),
        };
        form.finish(location)
    }

    fn to_form(&self) -> FormValues {
        super::form([
            ("code", self.code.as_str()),
            ("name", self.name.as_str()),
            ("state", self.state.as_str()),
            ("address", self.address.as_deref().unwrap_or_default()),
            ("location_type", self.location_type.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("location_type", "branch")])
    }
}

impl Entity for Location {
    const NAME: &'static str = "Location";

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
    fn code_is_normalized_to_uppercase() {
        let values = form([("code", "kan-01"), ("name", "Kano Branch"), ("state", "Kano")]);
        let location = Location::from_form(None, &values).expect("valid");
        assert_eq!(location.code, "KAN-01");
        assert_eq!(location.location_type, "branch");
    }
}
