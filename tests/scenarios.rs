//! End-to-end layout scenarios over many fixed seeds.
//!
//! Positions are random, so each scenario asserts the laws every result must
//! satisfy (containment, no overlap, cap) rather than exact coordinates.

use bubblelayout::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const SEEDS: u64 = 200;

/// Check containment, no-overlap, and cap; return failure descriptions.
fn violations(
    result: &LayoutResult,
    items: usize,
    cw: f64,
    ch: f64,
    vw: f64,
) -> Vec<String> {
    let policy = derive_policy(vw);
    let mut out = Vec::new();
    let cap = items.min(policy.max_tokens);
    if result.accepted_count() > cap {
        out.push(format!("accepted {} > cap {cap}", result.accepted_count()));
    }
    for (i, p) in result.iter().enumerate() {
        if !p.is_within(cw, ch, &policy.padding) {
            out.push(format!("placement {i} {p:?} not contained"));
        }
        for (j, q) in result.iter().enumerate().skip(i + 1) {
            let min = OVERLAP_TOLERANCE * (p.size + q.size) / 2.0;
            if p.distance_to(q) < min {
                out.push(format!("placements {i} and {j} closer than {min}"));
            }
        }
    }
    out
}

fn run(items: usize, cw: f64, ch: f64, vw: f64) -> (Vec<LayoutResult>, Vec<String>) {
    let list: Vec<usize> = (0..items).collect();
    let mut results = Vec::new();
    let mut failures = Vec::new();
    for seed in 0..SEEDS {
        let mut rng = SmallRng::seed_from_u64(seed);
        let r = compute_layout(&list, cw, ch, vw, &mut rng);
        for v in violations(&r, items, cw, ch, vw) {
            failures.push(format!("seed {seed}: {v}"));
        }
        results.push(r);
    }
    (results, failures)
}

#[test]
fn desktop_800x400_twelve_items() {
    let (results, failures) = run(12, 800.0, 400.0, 1200.0);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
    for (seed, r) in results.iter().enumerate() {
        assert!(
            (1..=12).contains(&r.accepted_count()),
            "seed {seed}: accepted {}",
            r.accepted_count()
        );
    }
}

#[test]
fn desktop_100x100_places_nothing() {
    let (results, failures) = run(5, 100.0, 100.0, 1200.0);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
    for r in &results {
        assert_eq!(r.accepted_count(), 0);
        assert_eq!(r.termination, Termination::NoRoom);
    }
}

#[test]
fn ample_space_places_everything() {
    let (results, failures) = run(3, 5000.0, 5000.0, 1200.0);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
    let full = results.iter().filter(|r| r.accepted_count() == 3).count();
    assert_eq!(full, results.len());
    assert!(results.iter().all(|r| r.degraded_count() == 0));
}

#[test]
fn mobile_400x600_respects_mobile_policy() {
    let (results, failures) = run(10, 400.0, 600.0, 500.0);
    assert!(failures.is_empty(), "{}", failures.join("\n"));
    let policy = derive_policy(500.0);
    for r in &results {
        assert!(r.accepted_count() <= 8);
        for p in r {
            assert!(p.left >= 20.0 && p.top >= 20.0);
            assert!(p.right() <= 380.0 && p.bottom() <= 500.0);
            if p.degraded {
                assert_eq!(p.size, policy.fallback_size as f64);
            } else {
                assert!(p.size >= 60.0 && p.size < 90.0);
            }
        }
    }
}

#[test]
fn candidate_work_is_bounded() {
    let list: Vec<u8> = vec![0; 40];
    for (cw, ch, vw) in [(800.0, 400.0, 1200.0), (400.0, 600.0, 500.0), (240.0, 240.0, 1200.0)] {
        let cap = derive_policy(vw).max_tokens as u32;
        for seed in 0..50 {
            let r = compute_layout_seeded(&list, cw, ch, vw, seed);
            assert!(
                r.candidates_tried <= cap * (PLACEMENT_ATTEMPTS + DEGRADED_ATTEMPTS),
                "{cw}x{ch} seed {seed}: {} candidates",
                r.candidates_tried
            );
        }
    }
}

#[test]
fn crowded_container_stops_at_first_failure() {
    // A container that holds only a handful of desktop tokens: once one item
    // fails, nothing after it is placed.
    let list: Vec<u8> = vec![0; 12];
    let mut exhausted = 0;
    for seed in 0..SEEDS {
        let r = compute_layout_seeded(&list, 340.0, 420.0, 1200.0, seed);
        match r.termination {
            Termination::Exhausted | Termination::NoRoom => {
                assert!(r.accepted_count() < 12);
                exhausted += 1;
            }
            Termination::AllPlaced => assert_eq!(r.accepted_count(), 12),
            other => panic!("seed {seed}: {other:?}"),
        }
    }
    assert!(exhausted > 0);
}

#[test]
fn resize_recomputes_from_scratch() {
    // Hidden items reappear once the container grows.
    let list: Vec<u8> = vec![0; 12];
    let small = compute_layout_seeded(&list, 340.0, 420.0, 1200.0, 4);
    let large = compute_layout_seeded(&list, 4000.0, 4000.0, 1200.0, 4);
    assert!(small.accepted_count() < large.accepted_count());
    assert_eq!(large.accepted_count(), 12);
}
