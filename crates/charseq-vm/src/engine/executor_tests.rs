//! Executor tests against the circle/rect registries.

use std::cell::RefCell;
use std::rc::Rc;

use charseq_codec::{Sequence, SequenceModel};
use charseq_core::{Code, OperationRegistry, Value, ValueRegistry, callback};

use super::{ArgResolution, ExecStats, Executor};

type Calls = Rc<RefCell<Vec<(String, Vec<Option<Value>>)>>>;

fn code(c: char) -> Code {
    Code(c as u16)
}

fn recording(calls: &Calls, name: &'static str) -> charseq_core::Callback {
    let calls = calls.clone();
    callback(move |args| calls.borrow_mut().push((name.to_owned(), args.to_vec())))
}

fn shapes(calls: &Calls) -> (OperationRegistry, ValueRegistry) {
    let mut ops = OperationRegistry::new();
    ops.insert(code('A'), recording(calls, "circle"));
    ops.insert(code('B'), recording(calls, "rect"));

    let mut values = ValueRegistry::new();
    values.insert(code('a'), Value::Int(30));
    values.insert(code('b'), Value::Int(20));
    values.insert(code('c'), Value::Int(55));
    (ops, values)
}

fn ints(xs: &[i64]) -> Vec<Option<Value>> {
    xs.iter().map(|&x| Some(Value::Int(x))).collect()
}

#[test]
fn executes_sequence_in_order() {
    let calls = Calls::default();
    let (mut ops, values) = shapes(&calls);

    let seq = Sequence::from("AaabBabcc");
    let stats = Executor::new(&mut ops, &values).run_sequence(seq.as_units());

    assert_eq!(
        stats,
        ExecStats {
            invoked: 2,
            skipped: 0
        }
    );
    assert_eq!(
        *calls.borrow(),
        vec![
            ("circle".to_owned(), ints(&[30, 30, 20])),
            ("rect".to_owned(), ints(&[30, 20, 55, 55])),
        ]
    );
}

#[test]
fn executes_records() {
    let calls = Calls::default();
    let (mut ops, values) = shapes(&calls);

    let mut model = SequenceModel::new();
    model.append(code('B'), vec![code('c'), code('a')]);
    model.append(code('A'), vec![]);

    Executor::new(&mut ops, &values).run_records(model.records());

    assert_eq!(
        *calls.borrow(),
        vec![
            ("rect".to_owned(), ints(&[55, 30])),
            ("circle".to_owned(), vec![]),
        ]
    );
}

#[test]
fn skips_records_without_callback() {
    let calls = Calls::default();
    let (mut ops, values) = shapes(&calls);

    let mut model = SequenceModel::new();
    model.append(code('Z'), vec![code('a')]);
    model.append(code('A'), vec![code('b')]);

    let stats = Executor::new(&mut ops, &values).run_records(model.records());

    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.invoked, 1);
    assert_eq!(*calls.borrow(), vec![("circle".to_owned(), ints(&[20]))]);
}

#[test]
fn unknown_codes_in_raw_sequence_are_absent() {
    let calls = Calls::default();
    let (mut ops, values) = shapes(&calls);

    let seq = Sequence::from("?Za?b");
    let stats = Executor::new(&mut ops, &values).run_sequence(seq.as_units());

    // no operation starts in this sequence
    assert_eq!(stats.invoked, 0);

    let seq = Sequence::from("A?b");
    Executor::new(&mut ops, &values).run_sequence(seq.as_units());
    assert_eq!(
        *calls.borrow(),
        vec![("circle".to_owned(), vec![None, Some(Value::Int(20))])]
    );
    assert!(!values.contains(code('?')));
}

#[test]
fn presence_passes_falsy_values() {
    let calls = Calls::default();
    let (mut ops, mut values) = shapes(&calls);
    values.insert(code('z'), Value::Int(0));
    values.insert(code('n'), Value::Null);
    values.insert(code('e'), Value::from(""));

    let seq = Sequence::from("Azne");
    Executor::new(&mut ops, &values).run_sequence(seq.as_units());

    assert_eq!(
        calls.borrow()[0].1,
        vec![Some(Value::Int(0)), Some(Value::Null), Some(Value::from(""))]
    );
}

#[test]
fn truthiness_hides_falsy_values() {
    let calls = Calls::default();
    let (mut ops, mut values) = shapes(&calls);
    values.insert(code('z'), Value::Int(0));
    values.insert(code('n'), Value::Null);

    let seq = Sequence::from("Azna");
    Executor::new(&mut ops, &values)
        .resolution(ArgResolution::Truthiness)
        .run_sequence(seq.as_units());

    assert_eq!(calls.borrow()[0].1, vec![None, None, Some(Value::Int(30))]);
}

#[test]
fn resolve_arguments_without_running() {
    let calls = Calls::default();
    let (mut ops, values) = shapes(&calls);

    let exec = Executor::new(&mut ops, &values);
    assert_eq!(
        exec.resolve_arguments(&[code('c'), code('x')]),
        vec![Some(Value::Int(55)), None]
    );
    assert!(calls.borrow().is_empty());
}
