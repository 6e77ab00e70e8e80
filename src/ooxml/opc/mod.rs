/// Open Packaging Conventions (OPC), write side.
///
/// This module provides what is needed to assemble an Office Open XML package
/// from generated parts:
///
/// - Package structure (parts, relationships)
/// - Content type management
/// - ZIP-based physical packaging
pub mod constants;
pub mod error;
pub mod package;
pub mod packuri;
pub mod part;
pub mod phys_pkg;
pub mod pkgwriter;
pub mod rel;

// Re-export commonly used types
pub use package::OpcPackage;
pub use packuri::PackURI;
pub use part::Part;
pub use pkgwriter::PackageWriter;
pub use rel::{Relationship, Relationships};
