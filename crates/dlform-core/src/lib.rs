pub mod logging;

pub mod behavior;
pub mod clipboard;
pub mod controller;
pub mod dom;
pub mod page;
pub mod scenario;
pub mod snapshot;
pub mod timer;
pub mod urlcheck;
