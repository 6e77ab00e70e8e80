//! PowerPoint (.pptx) presentation writing.
//!
//! This module builds PresentationML packages from an in-memory
//! [`MutablePresentation`]:
//!
//! - `writer`: the mutable presentation, slide and shape types
//! - `package`: assembly of the OPC parts and ZIP serialization
//! - `template`: the fixed master, layout and theme parts every deck shares
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::common::RGBColor;
//! use deckgen::ooxml::pptx::{Frame, MutablePresentation, Paragraph, PresentationWriter, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_text_box(
//!     vec![Paragraph::plain("Hello", TextFormat::sized(24.0).with_color(RGBColor::hex(0x3b82f6)))],
//!     Frame::from_inches(0.75, 0.75, 8.5, 0.6),
//! );
//! PresentationWriter::write("hello.pptx", &pres)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod backgrounds;
pub mod format;
pub mod package;
pub mod template;
pub mod writer;

pub use backgrounds::SlideBackground;
pub use format::{Alignment, Frame, Paragraph, ParagraphMarker, TextFormat, TextRun, VerticalAnchor};
pub use package::PresentationWriter;
pub use writer::{MutablePresentation, MutableShape, MutableSlide, PresentationMetadata, TableCellData};
