pub mod authorize_pool;
pub mod authorize_price_program;
pub mod contribute;
pub mod create_campaign;
pub mod initialize_protocol;
pub mod register_contributor;
pub mod register_creator;
pub mod withdraw;

pub use authorize_pool::*;
pub use authorize_price_program::*;
pub use contribute::*;
pub use create_campaign::*;
pub use initialize_protocol::*;
pub use register_contributor::*;
pub use register_creator::*;
pub use withdraw::*;
