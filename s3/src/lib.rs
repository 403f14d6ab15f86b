pub mod lister;
pub mod util;
