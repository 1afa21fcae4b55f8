pub mod codec;
pub mod error;
pub mod intent;
pub mod payload;
pub mod settings;

pub use codec::*;
pub use error::{BridgeError, Result};
pub use intent::*;
pub use payload::*;
pub use settings::*;
