//! Domain Layer
//!
//! Typed records for every admin screen, the `Row` view used by the data
//! table, and form parsing for the dialogs.

mod asset;
mod backup;
mod company;
mod document;
mod form;
mod location;
mod maintenance_type;
mod project;
mod promotion;
mod row;
mod transfer;
mod value;

pub use asset::*;
pub use backup::*;
pub use company::*;
pub use document::*;
pub use form::*;
pub use location::*;
pub use maintenance_type::*;
pub use project::*;
pub use promotion::*;
pub use row::*;
pub use transfer::*;
pub use value::*;

/// A record managed by a page: displayable, editable and storable.
pub trait Entity: Row + EntityForm + Clone + Send + Sync + 'static {
    /// Human-readable singular name (toasts, dialog titles)
    const NAME: &'static str;

    fn set_id(&mut self, id: RowId);

    /// Id assigned to the `seq`-th record created by a repository.
    fn id_for(seq: u64) -> RowId {
        RowId::Number(seq as i64)
    }
}
