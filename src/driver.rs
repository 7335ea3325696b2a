//! The streaming driver: gate → decode → emit, strictly in input order.
//!
//! The driver owns the per-run bookkeeping (line counter, skip counters,
//! and the missing-codes journal) and hands every surviving record to the
//! emitter as soon as it is decoded, so memory use is flat regardless of
//! input size. Per-line decode failures are recorded and the run continues;
//! I/O failures on either side are fatal.

use std::collections::BTreeMap;

use crate::decoder::Decoder;
use crate::error::HistError;
use crate::formatter::Emitter;
use crate::gate::RangeGate;

/// Aggregate counters and diagnostics for one input.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Physical lines read from the source.
    pub lines_read: u64,
    /// Lines admitted by the range gate.
    pub admitted: u64,
    /// Records handed to the emitter.
    pub emitted: u64,
    /// Admitted lines rejected by the decoder.
    pub skipped: u64,
    /// Total unknown data codes across all emitted records.
    pub unknown_codes: u64,
    /// Line number → comma-joined unknown tags for that line.
    pub missing: BTreeMap<u64, String>,
}

/// Drive one line source through the decoder into `emitter`.
///
/// Invariant: `emitted + skipped == admitted` for every completed run.
pub fn run(
    source: impl Iterator<Item = std::io::Result<String>>,
    gate: &RangeGate,
    decoder: &Decoder<'_>,
    emitter: &mut dyn Emitter,
    debug: bool,
) -> Result<RunSummary, HistError> {
    let mut summary = RunSummary::default();

    for line in source {
        let line = line?;
        summary.lines_read += 1;

        if !gate.admits(&line) {
            continue;
        }
        summary.admitted += 1;

        match decoder.decode_line(&line) {
            Ok(decoded) => {
                if !decoded.missing.is_empty() {
                    summary.unknown_codes += decoded.error_code() as u64;
                    summary
                        .missing
                        .insert(summary.lines_read, decoded.missing.join(","));
                }
                emitter.emit(&decoded.record)?;
                summary.emitted += 1;
            }
            Err(err) => {
                if debug {
                    eprintln!("  warning: line {}: {err}", summary.lines_read);
                }
                summary.skipped += 1;
            }
        }
    }

    emitter.finish()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::array::ArrayEmitter;
    use crate::formatter::ndjson::NdjsonEmitter;
    use crate::tables::CodeTables;

    fn lines(raw: &[&str]) -> impl Iterator<Item = std::io::Result<String>> {
        raw.iter()
            .map(|l| Ok(l.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_emitted_plus_skipped_equals_admitted() {
        let tables = CodeTables::builtin();
        let decoder = Decoder::new(&tables, None);
        let mut emitter = NdjsonEmitter::new(Vec::new());

        let input = [
            "E202310100510083031R ^S01EVFFADMIN^NQ31221112079020",
            "not a log line",
            "",
            "E202310110510083031R ^S01CVFFADMIN^NQ31221112079021",
        ];
        let summary = run(
            lines(&input),
            &RangeGate::default(),
            &decoder,
            &mut emitter,
            false,
        )
        .unwrap();

        assert_eq!(summary.lines_read, 4);
        assert_eq!(summary.admitted, 4);
        assert_eq!(summary.emitted, 2);
        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.emitted + summary.skipped, summary.admitted);
    }

    #[test]
    fn test_gate_filters_before_decode() {
        let tables = CodeTables::builtin();
        let decoder = Decoder::new(&tables, None);
        let mut emitter = NdjsonEmitter::new(Vec::new());

        let input = [
            "E202304100900003031R ^S01EVFFADMIN^NQ1",
            "E202304120900003031R ^S01EVFFADMIN^NQ2",
            "E202304140900003031R ^S01EVFFADMIN^NQ3",
        ];
        let gate = RangeGate::new(Some("20230412"), Some("20230413"));
        let summary = run(lines(&input), &gate, &decoder, &mut emitter, false).unwrap();

        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.admitted, 1);
        assert_eq!(summary.emitted, 1);
    }

    #[test]
    fn test_journal_keyed_by_line_number() {
        let tables = CodeTables::builtin();
        let decoder = Decoder::new(&tables, None);
        let mut emitter = NdjsonEmitter::new(Vec::new());

        let input = [
            "E202310100510083031R ^S01EVFFADMIN^NQ1",
            "E202310100510093031R ^S01EVFFADMIN^zZx^qqY",
        ];
        let summary = run(
            lines(&input),
            &RangeGate::default(),
            &decoder,
            &mut emitter,
            false,
        )
        .unwrap();

        assert_eq!(summary.unknown_codes, 2);
        assert_eq!(summary.missing.get(&2).map(String::as_str), Some("zZ,qq"));
        assert!(summary.missing.get(&1).is_none());
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let tables = CodeTables::builtin();
        let decoder = Decoder::new(&tables, None);
        let mut emitter = NdjsonEmitter::new(Vec::new());

        let input = [
            "E202310100510083031R ^S01EVFFADMIN^NQ111",
            "E202310100510093031R ^S01EVFFADMIN^NQ222",
        ];
        run(
            lines(&input),
            &RangeGate::default(),
            &decoder,
            &mut emitter,
            false,
        )
        .unwrap();

        let out = String::from_utf8(emitter.into_inner()).unwrap();
        let first = out.lines().next().unwrap();
        assert!(first.contains("111"));
    }

    #[test]
    fn test_array_emitter_through_driver() {
        let tables = CodeTables::builtin();
        let decoder = Decoder::new(&tables, None);
        let mut out = Vec::new();
        {
            let mut emitter = ArrayEmitter::new(&mut out);
            let input = [
                "E202310100510083031R ^S01EVFFADMIN^NQ111",
                "E202310100510093031R ^S01EVFFADMIN^NQ222",
            ];
            run(
                lines(&input),
                &RangeGate::default(),
                &decoder,
                &mut emitter,
                false,
            )
            .unwrap();
        }
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
    }
}
