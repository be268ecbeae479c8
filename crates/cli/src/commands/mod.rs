pub mod algorithms;
pub mod candidates;
pub mod checksum;
pub mod histogram;
pub mod scan;

pub use algorithms::*;
pub use candidates::*;
pub use checksum::*;
pub use histogram::*;
pub use scan::*;
