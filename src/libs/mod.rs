pub mod bitree;
pub mod io;
