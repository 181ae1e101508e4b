use super::{CellValue, Entity, EntityForm, FormReader, FormValues, Row, RowId, ValidationErrors};
use serde::{Deserialize, Serialize};

pub const BACKUP_TYPES: &[&str] = &["full", "incremental"];

/// A database backup snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    pub id: String,
    pub name: String,
    pub backup_type: String,
    pub created_at: String,
    pub size_mb: f64,
    pub status: String,
}

impl Row for Backup {
    fn id(&self) -> RowId {
        RowId::Text(self.id.clone())
    }

    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.as_str().into(),
            "name" => self.name.as_str().into(),
            "backup_type" => self.backup_type.as_str().into(),
            "created_at" => self.created_at.as_str().into(),
            "size_mb" => self.size_mb.into(),
            "status" => self.status.as_str().into(),
            _ => return None,
        };
        Some(value)
    }
}

impl EntityForm for Backup {
    const REQUIRED: &'static [&'static str] = &["name", "backup_type"];

    fn from_form(id: Option<RowId>, values: &FormValues) -> Result<Self, ValidationErrors> {
        let mut form = FormReader::new(values, Self::REQUIRED);
        let backup = Backup {
            id: id.map(|id| id.to_string()).unwrap_or_default(),
            name: form.text("name"),
            backup_type: form.choice("backup_type", BACKUP_TYPES, "full"),
            created_at: chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            size_mb: 0.0,
            status: "in_progress".to_string(),
        };
        form.finish(backup)
    }

    fn to_form(&self) -> FormValues {
        super::form([
            ("name", self.name.as_str()),
            ("backup_type", self.backup_type.as_str()),
        ])
    }

    fn defaults() -> FormValues {
        super::form([("backup_type", "full")])
    }
}

impl Entity for Backup {
    const NAME: &'static str = "Backup";

    fn set_id(&mut self, id: RowId) {
        self.id = id.to_string();
    }

    fn id_for(seq: u64) -> RowId {
        RowId::Text(format!("BKP-{seq:04}"))
    }
}
