mod status_palette;

pub use status_palette::StatusPalette;
