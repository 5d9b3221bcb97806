//! Classic object-oriented teaching demos translated into Rust idioms:
//! trait objects for virtual dispatch, a shared `Rc` identity where a
//! diamond-shaped hierarchy would otherwise duplicate its base,
//! `std::ops` for operator overloading, and plain enums.
//!
//! Each module carries its own demo-sized API plus tests; `cargo run`
//! walks through all of them. Set `RUST_LOG=debug` to see the
//! constructor trace events.

pub mod cards;
pub mod fraction;
pub mod shapes;
pub mod vehicles;
