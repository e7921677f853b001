/// Book records, the ordered store, and the editing session
pub mod record;
pub mod session;
pub mod store;

pub use record::{BookRecord, Draft, Field};
pub use session::Session;
pub use store::{CatalogStore, SubmitGuard};
