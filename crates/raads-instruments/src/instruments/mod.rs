pub mod raads_r;
pub mod raads_r_preview;
