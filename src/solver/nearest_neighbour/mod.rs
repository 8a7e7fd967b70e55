pub mod search;
pub mod selection;
pub mod visited;

pub use search::*;
pub use selection::*;
pub use visited::*;
