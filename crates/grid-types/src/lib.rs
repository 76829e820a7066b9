pub mod consts;
pub mod geom;
pub mod spec;

pub use consts::*;
pub use geom::*;
pub use spec::*;
