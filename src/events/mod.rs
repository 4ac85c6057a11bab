pub mod pointer;
pub mod toggles;
