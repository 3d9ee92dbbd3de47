//! # MGF Reader Module
//!
//! Streaming reader for Mascot Generic Format (MGF) peak lists, the text format
//! Proteome Discoverer and most converters export alongside search results.
//!
//! ## MGF Structure
//!
//! ```text
//! COM=optional global parameters
//! BEGIN IONS
//! TITLE=sample.144.144.2 File:"sample.raw", NativeID:"controllerType=0 controllerNumber=1 scan=144"
//! PEPMASS=523.2843 1520.3
//! CHARGE=2+
//! SCANS=144
//! 110.0713 2033.4
//! 129.1022 1120.8
//! END IONS
//! BEGIN IONS
//! ...
//! END IONS
//! ```
//!
//! Spectra are read strictly in file order, one block at a time, so files of any
//! size are handled with constant memory.

mod models;
pub mod streamer;

pub use models::{MgfSpectrum, SpectrumParams};
pub use streamer::{MgfError, MgfStreamer, SpectrumIterator};
