// 描画のインフラ層

pub mod svg;

pub use svg::{render_svg, save_svg};
