pub mod anchor;
pub mod city;
pub mod cursor;
pub mod globe;
pub mod header;
pub mod lazy;
pub mod loader;
pub mod magnetic;
pub mod menu;
pub mod parallax;
pub mod reveal;
pub mod transition;
pub mod typewriter;
