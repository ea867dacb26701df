//! MPK2 System-Exclusive preset-dump decoding.
//!
//! The decoder follows a layered structure:
//! - `layout`: byte offsets and frame accounting (source of truth)
//! - `catalog`: the field catalog, one static table per dump shape
//! - `reader`: bounds-checked window access over the data region
//! - `frame`: framing validation (header, device, length, terminator)
//! - `parser`: record decoding driven by the catalog
//! - `codec`: 7-bit packing and bank labelling
//! - `tables`: static code-to-label mappings
//! - `error`: explicit, actionable errors
//!
//! Decoding is a pure function of one buffer; no I/O, no state across
//! calls, all-or-nothing results.
//!
//! Version française (résumé):
//! Décodage des dumps de presets MPK2 en couches (layout/catalog/
//! reader/frame/parser). Fonctions pures sans E/S; toute erreur
//! interrompt le décodage, jamais de résultat partiel.

pub mod catalog;
pub mod codec;
pub mod error;
pub mod frame;
pub mod layout;
pub mod parser;
pub mod reader;
pub mod tables;

pub use error::DecodeError;
pub use frame::{ValidatedFrame, validate_frame};
pub use parser::{decode, decode_preset_dump, decode_preset_dump_with};
pub use tables::DeviceModel;
