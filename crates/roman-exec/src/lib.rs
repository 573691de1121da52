mod error;
pub use error::{ExecError, FanOutError};

pub mod fanout;
pub use fanout::{ConcurrencyLimit, fan_out};

#[cfg(feature = "probe")]
pub mod probe;
#[cfg(feature = "probe")]
pub use probe::{ProbeConfig, ProbeError, Prober};

pub mod prelude {
    pub use crate::error::{ExecError, FanOutError};
    pub use crate::fanout::{ConcurrencyLimit, fan_out};
}
