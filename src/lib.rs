mod bundle;
mod ident;
mod pair;
mod parse;
mod render;

pub use crate::bundle::*;
pub use crate::ident::*;
pub use crate::pair::*;
pub use crate::parse::*;
pub use crate::render::*;
