// promo-console/src/lib.rs

//! Promo Console - operator console for the promotion service
//!
//! Form fields in, typed requests out, responses back into the form and a
//! result table. Talks to the service through [`promo_client`].

pub mod config;
pub mod console;
pub mod form;
pub mod logger;
pub mod query;
pub mod render;
pub mod validator;

pub use config::ConsoleConfig;
pub use console::{
    Action, Console, ConsoleState, DELETED_MESSAGE, PreparedRequest, Response,
    SERVER_ERROR_MESSAGE, SUCCESS_MESSAGE, dispatch,
};
pub use form::{FormState, SearchForm};
pub use query::{Criterion, CriterionValue, QueryBuilder};
pub use render::{ResultRenderer, ResultRow, ResultsTable};
pub use validator::{INVALID_ID_MESSAGE, InvalidId, is_valid_id, parse_id};
