use std::{hint::black_box, rc::Rc};

use crate::scope::{Scope, ScopeError, Value};

mod clock;
mod report;

pub use clock::*;
pub use report::*;

pub const ITERATIONS: u32 = 1_000_000;

/// One binding per nesting level, outermost first.
const BINDINGS: [(&str, &str); 6] = [
    ("a", "global"),
    ("b", "first"),
    ("c", "second"),
    ("d", "third"),
    ("e", "fourth"),
    ("f", "fifth"),
];

/// Names read from the innermost scope on every iteration.
const READS: [&str; 3] = ["a", "b", "e"];

/// Probe observes the values read on each iteration. `()` ignores them.
pub trait Probe {
    fn observe(&mut self, x: &Value, y: &Value, z: &Value);
}

impl Probe for () {
    #[inline(always)]
    fn observe(&mut self, _x: &Value, _y: &Value, _z: &Value) {}
}

#[derive(Debug, Clone, Copy)]
pub struct ScopeBenchmark {
    iterations: u32,
}

impl Default for ScopeBenchmark {
    fn default() -> Self {
        Self::new(ITERATIONS)
    }
}

impl ScopeBenchmark {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Builds the nested scopes, then reads three bindings from the
    /// innermost scope `iterations` times between two clock readings.
    pub fn run(&self, clock: &impl Clock, probe: &mut impl Probe) -> Result<Report, ScopeError> {
        let innermost = nested_scopes();

        let [x, y, z] = [
            innermost.resolve(READS[0])?,
            innermost.resolve(READS[1])?,
            innermost.resolve(READS[2])?,
        ];

        let start_ms = clock.now_millis();
        let mut i = 0;
        while i < self.iterations {
            let x = black_box(innermost.get_at(black_box(x))?);
            let y = black_box(innermost.get_at(black_box(y))?);
            let z = black_box(innermost.get_at(black_box(z))?);
            probe.observe(&x, &y, &z);
            i += 1;
        }
        let end_ms = clock.now_millis();

        Ok(Report {
            iterations: i,
            start_ms,
            end_ms,
        })
    }
}

/// Returns the innermost of the [BINDINGS] scopes, each one enclosed by the
/// previous.
fn nested_scopes() -> Scope {
    let mut bindings = BINDINGS.iter();
    let mut scope = Scope::global();
    if let Some((name, value)) = bindings.next() {
        scope.define(*name, *value);
    }

    for (name, value) in bindings {
        let mut nested = Scope::nested(&Rc::new(scope));
        nested.define(*name, *value);
        scope = nested;
    }

    scope
}
