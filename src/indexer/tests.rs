use super::*;
use crate::mgf::SpectrumParams;
use std::io::Cursor;

fn spectrum(index: i64, pairs: &[(&str, &str)]) -> Result<MgfSpectrum, MgfError> {
    Ok(MgfSpectrum {
        index,
        params: pairs.iter().copied().collect::<SpectrumParams>(),
        ..Default::default()
    })
}

#[test]
fn test_mapping_keyed_by_position() {
    let spectra = vec![
        spectrum(0, &[("SCANS", "144")]),
        spectrum(1, &[("TITLE", "sample.273.273.2")]),
        spectrum(2, &[("TITLE", "controllerType=0 controllerNumber=1 scan=892")]),
    ];

    let mapping = SpectrumIndexer::default().index(spectra).unwrap();

    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get(1), Some(144));
    assert_eq!(mapping.get(2), Some(273));
    assert_eq!(mapping.get(3), Some(892));
    assert_eq!(mapping.get(0), None);
    assert_eq!(mapping.get(4), None);
    assert_eq!(mapping.get(-1), None);

    let stats = mapping.stats();
    assert_eq!(stats.spectra_read, 3);
    assert_eq!(stats.from_scans_field, 1);
    assert_eq!(stats.from_title_pattern, 1);
    assert_eq!(stats.from_title_scan_token, 1);
    assert_eq!(stats.unresolved, 0);
}

#[test]
fn test_unresolved_positions_get_negative_sentinel() {
    let spectra = vec![
        spectrum(0, &[("TITLE", "first")]),
        spectrum(1, &[("SCANS", "20")]),
        spectrum(2, &[]),
        spectrum(3, &[("TITLE", "40")]),
    ];

    let mapping = SpectrumIndexer::default().index(spectra).unwrap();

    assert_eq!(mapping.len(), 4);
    assert_eq!(mapping.get(1), Some(-1));
    assert_eq!(mapping.get(3), Some(-3));
    assert_eq!(mapping.stats().unresolved, 2);
    assert_eq!(mapping.stats().resolved(), 2);
    assert_eq!(mapping.unresolved_positions().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_failure_count_matches_sentinel_positions() {
    let spectra: Vec<_> = (0..50)
        .map(|i| {
            if i % 7 == 0 {
                spectrum(i, &[("TITLE", "unparseable")])
            } else {
                let scan = (1000 + i * 3).to_string();
                spectrum(i, &[("SCANS", scan.as_str())])
            }
        })
        .collect();

    let mapping = SpectrumIndexer::default()
        .with_progress_interval(10)
        .index(spectra)
        .unwrap();

    let keys: Vec<i64> = mapping.iter().map(|(position, _)| position).collect();
    assert_eq!(keys, (1..=50).collect::<Vec<_>>());
    assert_eq!(
        mapping.stats().unresolved,
        mapping.unresolved_positions().count()
    );
}

#[test]
fn test_empty_source() {
    let mapping = SpectrumIndexer::default()
        .index(Vec::<Result<MgfSpectrum, MgfError>>::new())
        .unwrap();
    assert!(mapping.is_empty());
    assert_eq!(mapping.get(1), None);
}

#[test]
fn test_stream_error_propagates() {
    let mgf = "BEGIN IONS\nSCANS=1\nEND IONS\nBEGIN IONS\nSCANS=2\n";
    let streamer = MgfStreamer::new(Cursor::new(mgf));
    let result = SpectrumIndexer::default().index(streamer.spectra());
    assert!(matches!(result, Err(MgfError::UnterminatedSpectrum { index: 1, .. })));
}

#[test]
fn test_custom_pattern_indexer() {
    let indexer = SpectrumIndexer::with_pattern(r"Scan\s+\d+").unwrap();
    assert_eq!(indexer.parser().pattern(), r"Scan\s+\d+");

    let mgf = "BEGIN IONS\nTITLE=Elution from: 12.3 Scan 1501\nEND IONS\n";
    let mapping = indexer.index(MgfStreamer::new(Cursor::new(mgf)).spectra()).unwrap();
    assert_eq!(mapping.get(1), Some(1501));
}

#[test]
fn test_index_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spectra.mgf");
    std::fs::write(
        &path,
        "BEGIN IONS\nTITLE=a.10.10.2\nEND IONS\nBEGIN IONS\nTITLE=a.11.11.2\nEND IONS\n",
    )
    .unwrap();

    let mapping = SpectrumIndexer::default().index_file(&path).unwrap();
    assert_eq!(mapping.iter().collect::<Vec<_>>(), vec![(1, 10), (2, 11)]);
}

#[test]
fn test_index_missing_file() {
    let result = SpectrumIndexer::default().index_file("/nonexistent/spectra.mgf");
    assert!(matches!(result, Err(MgfError::IoError(_))));
}
