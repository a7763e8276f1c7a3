pub mod band_scale;
pub mod bar_series;
pub mod dataset;
pub mod scale;
pub mod types;

pub use band_scale::BandScale;
pub use bar_series::{BarGeometry, VALUE_LABEL_OFFSET_PX, project_bars};
pub use dataset::{DatasetStore, sample_dataset, sample_items};
pub use scale::LinearScale;
pub use types::{Item, Margins, Viewport};
