pub mod call;
pub mod errors;
pub mod network;
pub mod result;

pub use call::*;
pub use errors::*;
pub use network::*;
pub use result::*;
