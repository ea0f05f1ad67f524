//! Browser-side services: session state, the REST client and the helpers
//! pages use to run fetches.

pub mod api;
pub mod batch;
pub mod cancel;
pub mod error;
pub mod session;

pub use api::ApiClient;
pub use batch::{section, Section};
pub use cancel::ViewScope;
pub use error::{ApiError, ApiResult};
pub use session::{GateState, GuardView, SessionStore};
