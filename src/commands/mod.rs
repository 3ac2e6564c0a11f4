//! CLI commands implementation

pub mod browse;
pub mod init;
pub mod lookup;
pub mod search;
pub mod speak;

pub use browse::*;
pub use init::*;
pub use lookup::*;
pub use search::*;
pub use speak::*;
