mod depth;
mod error;
mod llrb;
mod map;
mod set;

pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::llrb::{Iter, Llrb, Node, OrdCmp, Stats};
pub use crate::map::LlrbMap;
pub use crate::set::LlrbSet;

#[cfg(test)]
mod map_test;
#[cfg(test)]
mod set_test;
