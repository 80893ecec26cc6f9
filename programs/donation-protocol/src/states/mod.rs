pub mod common;
pub use common::*;

pub mod protocol_config;
pub use protocol_config::*;

pub mod authorized_price_program;
pub use authorized_price_program::*;

pub mod authorized_pool;
pub use authorized_pool::*;

pub mod creator_ledger;
pub use creator_ledger::*;

pub mod contributor_ledger;
pub use contributor_ledger::*;

pub mod campaign;
pub use campaign::*;
