//! Office Open XML (OOXML) writing.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): package structure, relationships, content types and the ZIP container
//! 2. **Errors** (`error`): XML generation errors layered over OPC errors
//! 3. **PresentationML** (`pptx`): the mutable presentation model and its serialization
//!
//! # Example
//!
//! ```rust,no_run
//! use deckgen::ooxml::pptx::{MutablePresentation, PresentationWriter};
//!
//! let mut pres = MutablePresentation::new();
//! pres.add_slide().set_title("Empty");
//! let bytes = PresentationWriter::to_bytes(&pres)?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
