//! Declarative slide building.
//!
//! A deck is described as data: a [`Theme`] plus a list of [`SlideSpec`]s.
//! [`SlideBuilder`] renders the specs into a [`MutablePresentation`] and
//! [`DeckSerializer`] writes the result.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::deck::{ContentItem, Deck, DeckSerializer, SlideSpec};
//! use deckgen::decks::workflow;
//!
//! let deck = Deck {
//!     metadata: workflow::metadata(),
//!     theme: workflow::theme(),
//!     slides: vec![
//!         SlideSpec::title("Hello", Some("World")),
//!         SlideSpec::content("Agenda", vec![ContentItem::bullets(&["One", "Two"])]),
//!     ],
//! };
//! let pres = deck.render()?;
//! DeckSerializer::write(&pres, "hello.pptx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod content;
pub mod layout;
pub mod serializer;
pub mod theme;

pub use builder::{SlideBuilder, SlideHandle};
pub use content::{ContentItem, ItemStyle, ListMarker, SlideKind, SlideSpec, Table, TableCell};
pub use layout::{LayoutCursor, Placement};
pub use serializer::DeckSerializer;
pub use theme::{LayoutConfig, Palette, Theme, TitleLayout, Typography};

/// Errors raised while building or writing a deck.
pub use crate::common::Error as DeckError;

use crate::common::Result;
use crate::ooxml::pptx::{MutablePresentation, PresentationMetadata};
use tracing::debug;

/// A complete deck description.
#[derive(Debug, Clone)]
pub struct Deck {
    pub metadata: PresentationMetadata,
    pub theme: Theme,
    pub slides: Vec<SlideSpec>,
}

impl Deck {
    /// Render every slide into a new presentation.
    pub fn render(&self) -> Result<MutablePresentation> {
        let mut metadata = self.metadata.clone();
        metadata.theme_name = self.theme.name.clone();
        metadata.major_font = self.theme.typography.heading_font.clone();
        metadata.minor_font = self.theme.typography.body_font.clone();

        let mut pres = MutablePresentation::with_metadata(metadata);
        SlideBuilder::new(&mut pres, &self.theme).render_all(&self.slides)?;
        debug!(slides = pres.slide_count(), title = %self.metadata.title, "rendered deck");
        Ok(pres)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
