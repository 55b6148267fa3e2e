pub mod append;
pub mod catalog;
pub mod filter;
pub mod form;
pub mod render;
pub mod store;

pub use crate::domain::model::{
    CatalogResponse, ContentRegion, FieldIssue, FormField, IssueKind, PackageDraft, PackageRecord,
    RegionSelection, ALL_REGIONS,
};
pub use crate::domain::ports::{ConfigProvider, PackageSource, PresentationSurface, Storage};
pub use crate::utils::error::Result;
