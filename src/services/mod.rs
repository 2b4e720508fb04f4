mod bound_operation;
mod context;
mod list_objects;
mod object_operations;
mod signed_url;

pub use bound_operation::BoundOperation;
pub use context::OperationContext;
pub use list_objects::ListObjects;
pub use object_operations::{DeleteObject, GetObject, HeadObject, PutObject};
pub use signed_url::GetSignedUrl;
