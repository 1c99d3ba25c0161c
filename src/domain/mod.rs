//! Domain Layer
//!
//! The core of RecipeBook: pure logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Asset triplets and catalog records
//! - `value_objects/` - Immutable value types (AssetHash, ContentHash)
//! - `services/` - Discovery patterns and the document renderer
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
