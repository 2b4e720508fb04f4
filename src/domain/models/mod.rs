pub mod body;
pub mod listing;
pub mod object;
pub mod signed_url;

pub use body::ObjectBody;
pub use listing::*;
pub use object::*;
pub use signed_url::*;
