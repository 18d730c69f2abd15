//! Template engine implementations

mod tera;

pub use self::tera::TeraEngine;
