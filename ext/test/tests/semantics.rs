//! Dispatch semantics over the typed test domains.
//!
//! Run with: cargo test -p kase-test --test semantics

use kase_test::prelude::*;
use std::cell::{Cell, RefCell};

// ═══════════════════════════════════════════════════════════════════════════════
// Type cases
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn type_single_failing_match_returns_default_value() {
    let value = Foo::from(B::new(10, "busy bee"));
    let result = match_on(&value, DefaultCase::value(-42), [Case::of(|a: &A| a.a)]);
    assert_eq!(result, -42);
}

#[test]
fn type_single_failing_match_uses_default_thunk() {
    let value = Foo::from(B::new(10, "busy bee"));
    let result = match_on(&value, DefaultCase::lazy(|| -42), [Case::of(|a: &A| a.a)]);
    assert_eq!(result, -42);
}

#[test]
fn type_single_match_returns_handler_result() {
    let value = Foo::from(A::new(55, "test string"));
    let result = match_on(&value, DefaultCase::value(-42), [Case::of(|a: &A| a.a)]);
    assert_eq!(result, 55);
}

#[test]
fn type_multiple_cases_pick_the_input_alternative() {
    let value = Foo::from(C::new(5, "test string"));
    let result = match_on(
        &value,
        DefaultCase::value(-42),
        [
            Case::of(|a: &A| a.a),
            Case::of(|b: &B| b.b),
            Case::of(|c: &C| c.c),
        ],
    );
    assert_eq!(result, 5);
}

#[test]
fn type_cases_can_return_the_sum_type() {
    let value = Foo::from(C::new(5, "test string"));
    let result = match_on(
        &value,
        DefaultCase::value(Foo::from(B::new(3, "foo"))),
        [
            Case::of(|a: &A| Foo::from(A::new(a.a, a.name.clone()))),
            Case::of(|b: &B| Foo::from(B::new(b.b, b.name.clone()))),
            Case::of(|c: &C| Foo::from(C::new(c.c, "Success"))),
        ],
    );
    assert_eq!(result.name(), "Success");
}

#[test]
fn unit_result_runs_only_the_matching_handler() {
    let value = Foo::from(B::new(42, "test string"));
    let fired = RefCell::new(Vec::new());
    match_on(
        &value,
        DefaultCase::empty(),
        [
            Case::of(|_: &B| fired.borrow_mut().push("B")),
            Case::of(|_: &A| fired.borrow_mut().push("A")),
            Case::of(|_: &C| fired.borrow_mut().push("C")),
        ],
    );
    assert_eq!(*fired.borrow(), vec!["B"]);
}

#[test]
fn sum_type_case_matches_every_alternative() {
    let value = Foo::from(B::new(1, "b"));
    let result = match_on(
        &value,
        DefaultCase::value("default"),
        [Case::of(|_: &Foo| "any foo"), Case::of(|_: &B| "b")],
    );
    assert_eq!(result, "any foo");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Ordering and laziness
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn first_match_wins_and_later_cases_never_run() {
    let later_predicate = Cell::new(0);
    let later_handler = Cell::new(0);
    let shape = Shape::square(2.0);

    let result = match_on(
        &shape,
        DefaultCase::value("default"),
        [
            Case::of(|_: &Polygon| "polygon"),
            Case::new(
                |_: &Shape| {
                    later_predicate.set(later_predicate.get() + 1);
                    true
                },
                |_| {
                    later_handler.set(later_handler.get() + 1);
                    "later"
                },
            ),
        ],
    );

    assert_eq!(result, "polygon");
    assert_eq!(later_predicate.get(), 0);
    assert_eq!(later_handler.get(), 0);
}

#[test]
fn default_thunk_never_runs_on_match() {
    let calls = Cell::new(0);
    let result = match_on(
        &Shape::circle(1.0),
        DefaultCase::lazy(|| {
            calls.set(calls.get() + 1);
            "default"
        }),
        [Case::of(|_: &Circle| "circle")],
    );
    assert_eq!(result, "circle");
    assert_eq!(calls.get(), 0);
}

#[test]
fn default_thunk_runs_once_when_nothing_matches() {
    let seen = RefCell::new(Vec::new());
    let seen = &seen;
    let calls = Cell::new(0);
    match_on(
        &4_i64,
        DefaultCase::lazy(|| calls.set(calls.get() + 1)),
        [1_i64, 2, 3].map(|n| Case::literal(n, move |n| seen.borrow_mut().push(*n))),
    );
    assert_eq!(calls.get(), 1);
    assert!(seen.borrow().is_empty());
}

#[test]
fn empty_default_yields_absent_value_without_error() {
    let result: Option<f64> = match_on(
        &Shape::circle(1.0),
        DefaultCase::empty(),
        [Case::of(|s: &Square| Some(s.side))],
    );
    assert_eq!(result, None);
}

// ═══════════════════════════════════════════════════════════════════════════════
// Reusable tables
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn table_matches_one_shot_dispatch() {
    let table = Match::new(
        vec![
            Case::of(|_: &Square| "square"),
            Case::of(|_: &Polygon| "polygon"),
            Case::of(|_: &Shape| "shape"),
        ],
        DefaultCase::value("unreachable"),
    );

    for shape in [Shape::square(1.0), Shape::triangle(1.0, 2.0), Shape::circle(3.0)] {
        let one_shot = match_on(
            &shape,
            DefaultCase::value("unreachable"),
            [
                Case::of(|_: &Square| "square"),
                Case::of(|_: &Polygon| "polygon"),
                Case::of(|_: &Shape| "shape"),
            ],
        );
        assert_eq!(table.evaluate(&shape), one_shot);
        assert_eq!(table.evaluate_with_trace(&shape).result, one_shot);
    }
}

#[test]
fn trace_labels_name_variant_types() {
    let table = Match::new(
        vec![Case::of(|c: &Circle| c.radius), Case::of(|s: &Square| s.side)],
        DefaultCase::value(0.0),
    );
    let trace = table.evaluate_with_trace(&Shape::square(4.0));
    assert_eq!(trace.result, 4.0);
    assert_eq!(trace.steps.len(), 2);
    assert!(trace.steps[0].label.ends_with("Circle"));
    assert!(trace.steps[1].label.ends_with("Square"));
    assert_eq!(trace.matched_index(), Some(1));
}
