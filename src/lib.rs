//! deckgen - declarative slide decks written as PowerPoint (.pptx) files
//!
//! The crate has three layers:
//!
//! - **Package writer** (`ooxml`): a minimal PresentationML writer. It keeps
//!   slides, text boxes and tables in memory and serializes them into an OPC
//!   (ZIP) package with one master, one blank layout and one theme.
//! - **Slide builder** (`deck`): slides described as data ([`deck::SlideSpec`])
//!   and rendered with a [`deck::Theme`] by a layout cursor that stacks content
//!   items top to bottom.
//! - **Decks** (`decks`): the two built-in presentations, plus the small
//!   greeting application (`greeting`) they talk about.
//!
//! # Example - Rendering a built-in deck
//!
//! ```no_run
//! use deckgen::deck::DeckSerializer;
//! use deckgen::decks::workflow;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pres = workflow::deck()?.render()?;
//! assert_eq!(pres.slide_count(), 17);
//! DeckSerializer::write(&pres, "presentation.pptx")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Writing slides directly
//!
//! ```no_run
//! use deckgen::common::RGBColor;
//! use deckgen::ooxml::pptx::{
//!     Frame, MutablePresentation, Paragraph, PresentationWriter, SlideBackground, TextFormat,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.set_background(SlideBackground::solid(RGBColor::hex(0x1a1a2e)));
//! slide.add_text_box(
//!     vec![Paragraph::plain("Hello", TextFormat::sized(44.0).with_bold(true))],
//!     Frame::from_inches(0.5, 2.5, 9.0, 1.0),
//! );
//! PresentationWriter::write("hello.pptx", &pres)?;
//! # Ok(())
//! # }
//! ```

/// Shared colour, unit, XML and error utilities
pub mod common;

/// Declarative slide building on top of the presentation writer
pub mod deck;

/// Built-in decks
pub mod decks;

/// The greeting demo application
pub mod greeting;

/// OOXML (Office Open XML) package writing
///
/// This module provides the OPC packaging layer and the PresentationML
/// (.pptx) writer.
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Result};
pub use deck::{Deck, DeckSerializer, SlideBuilder, SlideSpec};
