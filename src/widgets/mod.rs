pub mod section_header;

pub use section_header::SectionHeader;
