//! Request and response models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod pagination;
pub mod filters;
pub mod commit;
pub mod request;

pub use validation::ValidationError;
pub use pagination::{PageMeta, Paginated, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use filters::{DateRange, FilterEcho};
pub use commit::CommitRecord;
pub use request::{CommitListParams, PageRequest};
