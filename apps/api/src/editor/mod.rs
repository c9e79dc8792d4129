// Resume editor: the section store, its canned suggestions and the HTTP handlers
// that drive it. Handlers are the only callers that mutate the store.

pub mod handlers;
pub mod store;
pub mod suggestions;

pub use store::{ResumeEditor, ResumeSnapshot, StoreError};
