pub mod nav;
pub mod pointer;
