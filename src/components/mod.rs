// src/components/mod.rs
mod benefits;
mod code_compare;
mod footer;
mod header;
mod hero;
mod tutorial;

pub use benefits::Benefits;
pub use code_compare::CodeCompare;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use tutorial::Tutorial;
