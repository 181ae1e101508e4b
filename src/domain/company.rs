use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

/// A registered company (contractor or vendor).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub registration_number: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub active: bool,
}

impl Row for Company {
    fn id(&self) -> RowId {
        RowId::Number(self.id)
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "registration_number" => self.registration_number.as_str().into(),
            "email" => self.email.as_str().into(),
            "phone" => self.phone.clone().into(),
            "address" => self.address.clone().into(),
            "status" => (if self.active { "active" } else { "inactive" }).into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Company {
    const REQUIRED: &'static [&'static str] = &["name", "registration_number", "email"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let email = form.text("email");
        let well_formed = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !email.is_empty() && !well_formed {
            form.error("email", "Email must be a valid address");
        }
        let status = form.choice("status", &["active", "inactive"], "active");

        let company = Company {
            id: id.and_then(|id| id.as_number()).unwrap_or(0),
            name: form.text("name"),
            registration_number: form.text("registration_number"),
            email,
            phone: form.opt_text("phone"),
            address: form.opt_text("address"),
            active: status == "active",
        };
        form.finish(company)
    }

    fn to_form(&self) -> FormValues {
        super::form([
            ("name", self.name.as_str()),
            ("registration_number", self.registration_number.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_deref().unwrap_or_default()),
            ("address", self.address.as_deref().unwrap_or_default()),
            ("status", if self.active { "active" } else { "inactive" }),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("status", "active")])
    }
}

impl Entity for Company {
    const NAME: &'static str = "Company";

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
    fn malformed_email_is_rejected() {
        let values = form([
            ("name", "Sigma Systems Ltd"),
            ("registration_number", "RC-778812"),
            ("email", "info@sigma"),
        ]);
        let errors = Company::from_form(None, &values).expect_err("bad email");
        assert_eq!(errors.for_field("email"), Some("Email must be a valid address"));
    }
}
