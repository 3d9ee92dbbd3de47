#![no_main]

use libfuzzer_sys::fuzz_target;
use mgf_scan_repair::indexer::SpectrumIndexer;
use mgf_scan_repair::mgf::MgfStreamer;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Parsing arbitrary bytes may fail but must never panic
    let mut streamer = MgfStreamer::new(Cursor::new(data));
    for _ in 0..100 {
        match streamer.next_spectrum() {
            Ok(Some(_spectrum)) => {}
            Ok(None) | Err(_) => break,
        }
    }

    // Indexing must produce one entry per spectrum it read
    let indexer = SpectrumIndexer::default().with_progress_interval(0);
    if let Ok(mapping) = indexer.index(MgfStreamer::new(Cursor::new(data)).spectra()) {
        assert_eq!(mapping.iter().count(), mapping.len());
        assert_eq!(mapping.stats().spectra_read, mapping.len());
    }
});
