//! Benchmark runner: builds the dataset representations and times one
//! lookup against each.
//!
//! Construction always happens outside the timed regions; each timed region
//! covers exactly one search call. Both strategies are pointed at the same
//! target so their durations are directly comparable.

use std::collections::HashMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

use lookup_core::{
    child_label, generate_index, generate_sequence, indexed_find, linear_find, ParentRecord,
};

use crate::report::{BenchReport, LookupOutcome};
use crate::BenchArgs;

struct TimedLookup {
    build: Duration,
    search: Duration,
    outcome: LookupOutcome,
}

/// Execute the benchmark described by `args` and return the full report.
///
/// Never fails: an out-of-range target is a normal absent outcome, and a
/// verification mismatch is recorded in the report rather than aborting.
pub fn run(args: &BenchArgs) -> BenchReport {
    tracing::info!(
        parents = args.parents,
        children = args.children,
        low_memory = args.low_memory,
        "building dataset representations"
    );

    let (linear, hashed) = if args.low_memory {
        measure_sequential(args)
    } else {
        measure_resident(args)
    };

    let verified = verify(args, &linear.outcome, &hashed.outcome);

    BenchReport {
        parents: args.parents,
        children: args.children,
        target_parent: args.target_parent,
        target_child: args.target_child,
        low_memory: args.low_memory,
        sequence_build: linear.build,
        index_build: hashed.build,
        linear_search: linear.search,
        hashed_lookup: hashed.search,
        linear_outcome: linear.outcome,
        hashed_outcome: hashed.outcome,
        verified,
    }
}

/// Default mode: both representations resident before any lookup is timed.
fn measure_resident(args: &BenchArgs) -> (TimedLookup, TimedLookup) {
    let start = Instant::now();
    let sequence = generate_sequence(args.parents, args.children);
    let sequence_build = start.elapsed();

    let start = Instant::now();
    let index = generate_index(args.parents, args.children);
    let index_build = start.elapsed();

    tracing::info!(
        sequence_build_ms = sequence_build.as_millis() as u64,
        index_build_ms = index_build.as_millis() as u64,
        "representations ready, timing lookups"
    );

    let linear = time_linear(&sequence, sequence_build, args);
    let hashed = time_hashed(&index, index_build, args);
    (linear, hashed)
}

/// Low-memory mode: build, measure, and discard the sequence before the
/// mapping exists. Generation is deterministic, so the rebuilt mapping
/// holds exactly the content the sequence held.
fn measure_sequential(args: &BenchArgs) -> (TimedLookup, TimedLookup) {
    let start = Instant::now();
    let sequence = generate_sequence(args.parents, args.children);
    let sequence_build = start.elapsed();

    let linear = time_linear(&sequence, sequence_build, args);
    drop(sequence);
    tracing::info!(
        sequence_build_ms = linear.build.as_millis() as u64,
        "sequence phase done, rebuilding as hashed mapping"
    );

    let start = Instant::now();
    let index = generate_index(args.parents, args.children);
    let index_build = start.elapsed();

    let hashed = time_hashed(&index, index_build, args);
    (linear, hashed)
}

fn time_linear(sequence: &[ParentRecord], build: Duration, args: &BenchArgs) -> TimedLookup {
    let start = Instant::now();
    let hit = black_box(linear_find(sequence, args.target_parent, args.target_child));
    let search = start.elapsed();

    TimedLookup {
        build,
        search,
        outcome: LookupOutcome::capture(hit),
    }
}

fn time_hashed(
    index: &HashMap<u32, ParentRecord>,
    build: Duration,
    args: &BenchArgs,
) -> TimedLookup {
    let start = Instant::now();
    let hit = black_box(indexed_find(index, args.target_parent, args.target_child));
    let search = start.elapsed();

    TimedLookup {
        build,
        search,
        outcome: LookupOutcome::capture(hit),
    }
}

/// Check the two outcomes against each other and against the generation
/// scheme: an in-range target must surface its generated label from both
/// strategies, and an out-of-range target must be absent from both.
fn verify(args: &BenchArgs, linear: &LookupOutcome, hashed: &LookupOutcome) -> bool {
    let in_range = args.target_parent < args.parents && args.target_child < args.children;
    let expected = in_range.then(|| child_label(args.target_parent, args.target_child));

    let agree = linear == hashed;
    let expected_ok = match (&expected, linear) {
        (Some(label), LookupOutcome::Found(found)) => label == found,
        (None, LookupOutcome::Absent) => true,
        _ => false,
    };

    let verified = agree && expected_ok;
    if !verified {
        tracing::warn!(
            agree,
            expected = expected.as_deref().unwrap_or("absent"),
            linear = %linear,
            hashed = %hashed,
            "lookup verification failed"
        );
    }
    verified
}
