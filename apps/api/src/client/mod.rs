//! Client side of the generator: the request/state controller behind the form,
//! and the HTTP transport it talks through.

pub mod api;
pub mod controller;

pub use api::{ClientError, GenerateApi, HttpGenerateApi};
pub use controller::{
    celebration_palette, Celebration, Clipboard, ClipboardError, GenerateController, Phase,
    COPIED_FOR, GENERIC_ERROR,
};
