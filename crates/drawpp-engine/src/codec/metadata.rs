use image::codecs::png::{CompressionType, FilterType};

/// Sample width written to the output file.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum BitDepth {
    #[default]
    Eight,
    Sixteen,
}

/// Channels written to the output file.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ColorLayout {
    #[default]
    Rgba,
    /// Alpha is dropped on export.
    Rgb,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Compression {
    #[default]
    Default,
    Fast,
    Best,
}

/// PNG row filter.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum PngFilter {
    None,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Per-row heuristic choice.
    #[default]
    Adaptive,
}

/// Export parameters a canvas carries without interpreting them.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ImageMetadata {
    pub bit_depth: BitDepth,
    pub color_layout: ColorLayout,
    pub compression: Compression,
    pub filter: PngFilter,
}

impl From<Compression> for CompressionType {
    fn from(c: Compression) -> Self {
        match c {
            Compression::Default => CompressionType::Default,
            Compression::Fast => CompressionType::Fast,
            Compression::Best => CompressionType::Best,
        }
    }
}

impl From<PngFilter> for FilterType {
    fn from(f: PngFilter) -> Self {
        match f {
            PngFilter::None => FilterType::NoFilter,
            PngFilter::Sub => FilterType::Sub,
            PngFilter::Up => FilterType::Up,
            PngFilter::Avg => FilterType::Avg,
            PngFilter::Paeth => FilterType::Paeth,
            PngFilter::Adaptive => FilterType::Adaptive,
        }
    }
}
