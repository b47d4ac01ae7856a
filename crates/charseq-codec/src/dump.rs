//! Human-readable record listing for debugging and the CLI.

use std::fmt::Write as _;

use charseq_core::{Code, Colors, LabelRegistry};

use crate::model::OpRecord;

/// Printable form of a code: the character itself, or `U+XXXX` for
/// surrogates, controls and whitespace.
pub fn glyph(code: Code) -> String {
    match code.to_char() {
        Some(c) if !c.is_control() && !c.is_whitespace() => c.to_string(),
        _ => format!("U+{:04X}", code.0),
    }
}

fn width_for_count(count: usize) -> usize {
    count.max(1).to_string().len()
}

/// Render records, one per line. Labels, when present, follow the glyph.
///
/// ```text
/// [sequence]
/// length = 9
///
/// [records]
/// #1 A(circle) a a b
/// #2 B(rect) a b c c
/// ```
pub fn dump(records: &[OpRecord], labels: &LabelRegistry, colors: Colors) -> String {
    let c = &colors;
    let mut out = String::new();
    let length: usize = records.iter().map(OpRecord::encoded_len).sum();

    out.push_str("[sequence]\n");
    writeln!(out, "length = {length}").unwrap();
    out.push('\n');

    out.push_str("[records]\n");
    let max_id = records.iter().map(|r| r.id.get()).max().unwrap_or(0);
    let id_width = width_for_count(max_id as usize);

    for record in records {
        write!(out, "{}#{:<id_width$}{} ", c.dim, record.id, c.reset).unwrap();
        out.push_str(c.blue);
        out.push_str(&named(record.operation, labels));
        out.push_str(c.reset);
        for &arg in &record.arguments {
            out.push(' ');
            out.push_str(c.green);
            out.push_str(&named(arg, labels));
            out.push_str(c.reset);
        }
        out.push('\n');
    }

    out
}

fn named(code: Code, labels: &LabelRegistry) -> String {
    match labels.label_for(code) {
        Some(label) => format!("{}({label})", glyph(code)),
        None => glyph(code),
    }
}
