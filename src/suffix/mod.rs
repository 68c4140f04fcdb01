//! Static suffix index over a byte string: suffix array, inverse suffix
//! array, LCP array, and an RMQ structure over the LCP array.

pub mod construct;
pub mod rmq;

pub use construct::sa_isa_lcp;
pub use rmq::RangeMinQuery;
