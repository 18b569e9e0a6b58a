//! HTTP client for the external text-recognition backend.
//!
//! The backend is either an OCR engine or a vision-language model behind an
//! HTTP endpoint; this crate only relays the image and interprets the JSON
//! response shape. All pattern matching on recognized text lives in
//! `komitrack_core::isbn`.

mod client;

pub use client::{OcrClient, OcrError, Recognition, DEFAULT_TIMEOUT_SECS};
