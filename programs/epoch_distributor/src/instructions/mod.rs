pub mod initialize_distributor;
pub mod deposit;
pub mod epoch;
pub mod owner_settings;
pub mod distribute;
pub mod emergency_withdraw;
pub mod ownership;

pub use initialize_distributor::*;
pub use deposit::*;
pub use epoch::*;
pub use owner_settings::*;
pub use distribute::*;
pub use emergency_withdraw::*;
pub use ownership::*;
