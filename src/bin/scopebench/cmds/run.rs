use std::io::Write;

use anyhow::{ensure, Context};

use crate::bench::{MonotonicClock, ScopeBenchmark, ITERATIONS};

pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let clock = MonotonicClock::default();
    let report = ScopeBenchmark::default()
        .run(&clock, &mut ())
        .context("failed to run scope benchmark")?;
    ensure!(
        report.iterations == ITERATIONS,
        "scope benchmark stopped after {} of {} iterations",
        report.iterations,
        ITERATIONS
    );

    writeln!(out, "{report}").context("failed to write benchmark report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::run;

    #[test]
    fn prints_a_single_report_line() {
        let mut out = Vec::new();
        run(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let re = Regex::new(r"^Time taken: \d+ ms\n$").unwrap();
        assert!(re.is_match(&out), "unexpected output {out:?}");
    }

    #[test]
    fn consecutive_runs_print_independent_lines() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        run(&mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        let re = Regex::new(r"^Time taken: \d+ ms$").unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| re.is_match(line)), "{lines:?}");
    }
}
