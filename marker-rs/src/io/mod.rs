/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Bounding box computations for previewing a layout
pub mod preview;

/// All logic for creating SVG previews of layouts
pub mod svg;
