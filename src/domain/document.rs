use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An uploaded personnel or administrative document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub category: String,
    pub owner: String,
    pub uploaded_at: String,
    pub size_kb: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Row for Document {
    fn id(&self) -> RowId {
        RowId::Text(self.id.clone())
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.as_str().into(),
            "title" => self.title.as_str().into(),
            "category" => self.category.as_str().into(),
            "owner" => self.owner.as_str().into(),
            "uploaded_at" => self.uploaded_at.as_str().into(),
            "size_kb" => self.size_kb.into(),
            "metadata" => CellValue::Object(
                self.metadata
                    .iter()
                    .map(|(k, v)| (k.clone(), CellValue::from(v)))
                    .collect(),
            ),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Document {
    const REQUIRED: &'static [&'static str] = &["title", "category", "owner"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let size_kb = form.number("size_kb").unwrap_or(0.0);
        let uploaded_at = form
            .date("uploaded_at")
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
        let metadata = values
            .iter()
            .filter_map(|(k, v)| {
                let key = k.strip_prefix("meta.")?;
                let value = v.trim();
                (!value.is_empty()).then(|| (key.to_string(), value.to_string()))
            })
            .collect();

        let document = Document {
            id: id.map(|id| id.to_string()).unwrap_or_default(),
            title: form.text("title"),
            category: form.text("category"),
            owner: form.text("owner"),
            uploaded_at,
            size_kb,
            metadata,
        };
        form.finish(document)
    }

    fn to_form(&self) -> FormValues {
        let size = self.size_kb.to_string();
        let mut values = super::form([
            ("title", self.title.as_str()),
            ("category", self.category.as_str()),
            ("owner", self.owner.as_str()),
            ("uploaded_at", self.uploaded_at.as_str()),
            ("size_kb", size.as_str()),
        ]);
        for (key, value) in &self.metadata {
            values.insert(format!("meta.{key}"), value.clone());
        }
        values
    }
}

impl Entity for Document {
    const NAME: &'static str = "Document";

    fn set_id(&mut self, id: RowId) {
        self.id = id.to_string();
    }

    fn id_for(seq: u64) -> RowId {
        RowId::Text(format!("DOC-{seq:04}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form;

    #[test]
    fn meta_prefixed_fields_become_metadata() {
        let values = form([
            ("title", "Appointment letter"),
            ("category", "HR"),
            ("owner", "Grace Eze"),
            ("uploaded_at", "2024-02-10"),
            ("meta.pages", "3"),
            ("meta.signed", "yes"),
            ("meta.empty", " "),
        ]);
        let doc = Document::from_form(Some(RowId::from("DOC-0042")), &values).expect("valid");
        assert_eq!(doc.id, "DOC-0042");
        assert_eq!(doc.metadata.len(), 2);
        assert_eq!(
            doc.field("metadata").map(|v| v.to_string()).as_deref(),
            Some("{pages: 3, signed: yes}")
        );
    }
}
