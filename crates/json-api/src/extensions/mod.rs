//! Extension traits

mod depot;
mod depth;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use depth::DepthExt as _;
pub(crate) use result::ResultExt as _;
