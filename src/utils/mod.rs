pub mod app_time;
pub mod maths_utils;
