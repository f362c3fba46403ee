//! Backend layer: the async scan task behind the UI loop.

pub mod scan;
