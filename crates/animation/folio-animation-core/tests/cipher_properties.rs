use folio_animation_core::{
    CipherConfig, CipherReveal, RandomSource, RngSource, TickResult, VirtualTicker,
};

const NAME: &str = "Yaswanth Kuramdasu";

/// Never wins a lock-in roll; noise cycles through the alphabet.
#[derive(Default)]
struct NeverLock {
    next: usize,
}

impl RandomSource for NeverLock {
    fn chance(&mut self, _p: f64) -> bool {
        false
    }

    fn pick(&mut self, len: usize) -> usize {
        self.next = (self.next + 1) % len;
        self.next
    }
}

/// Wins every roll; noise is always the first alphabet character.
struct AlwaysLock;

impl RandomSource for AlwaysLock {
    fn chance(&mut self, _p: f64) -> bool {
        true
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

fn seeded(seed: u64) -> CipherReveal<VirtualTicker, RngSource> {
    CipherReveal::new(
        CipherConfig::default(),
        VirtualTicker::new(),
        RngSource::seeded(seed),
    )
    .unwrap()
}

/// Acting ticks until complete.
fn ticks_to_complete<R: RandomSource>(c: &mut CipherReveal<VirtualTicker, R>) -> u64 {
    let mut acted = 0;
    loop {
        let r = c.step();
        if r.acted() {
            acted += 1;
        }
        match r {
            TickResult::Completed => return acted,
            TickResult::Ignored => panic!("engine stopped before completing"),
            _ => {}
        }
    }
}

#[test]
fn reveal_is_monotonic_and_left_to_right() {
    for seed in 0..50 {
        let mut c = seeded(seed);
        c.start(NAME);
        let mut prev = c.state().clone();
        while c.ticker().pending().is_some() {
            c.step();
            let s = c.state();
            assert!(s.frontier >= prev.frontier, "frontier moved back");
            for i in 0..s.len() {
                if prev.revealed[i] {
                    assert!(s.revealed[i], "position {i} un-revealed");
                }
                assert_eq!(s.revealed[i], i < s.frontier);
                if i > 0 && s.revealed[i] {
                    assert!(s.revealed[i - 1], "position {i} revealed before {}", i - 1);
                }
                if s.revealed[i] {
                    assert_eq!(s.displayed[i], s.target[i]);
                }
            }
            prev = s.clone();
        }
        assert!(c.is_complete());
        assert_eq!(c.state().displayed_text(), NAME);
    }
}

#[test]
fn completion_is_bounded_over_many_trials() {
    let n = NAME.chars().count() as u64;
    let bound = CipherConfig::default().max_effective_ticks(n as usize);
    let mut worst = 0;
    let mut total = 0;
    for seed in 0..1000 {
        let mut c = seeded(seed);
        c.start(NAME);
        let ticks = ticks_to_complete(&mut c);
        worst = worst.max(ticks);
        total += ticks;
    }
    assert!(worst <= 40 * n, "worst case {worst} exceeds {}", 40 * n);
    assert!(worst <= bound, "worst case {worst} exceeds derived bound {bound}");
    // 1/0.08 = 12.5 acting ticks per character on average, less with forcing.
    let mean = total as f64 / 1000.0;
    assert!(mean < 12.5 * n as f64 * 1.1, "mean {mean} too slow");
}

#[test]
fn frame_budget_forces_lock_without_luck() {
    let mut c = CipherReveal::new(
        CipherConfig::default(),
        VirtualTicker::new(),
        NeverLock::default(),
    )
    .unwrap();
    c.start(NAME);

    let mut locks = Vec::new();
    let mut acted = 0;
    loop {
        let r = c.step();
        if r.acted() {
            acted += 1;
        }
        match r {
            TickResult::Locked { index, forced } => {
                assert!(forced);
                locks.push((index, c.state().frame_count));
            }
            TickResult::Completed => break,
            TickResult::Ignored => panic!("stalled"),
            _ => {}
        }
    }
    // Position k is forced on the first even raw tick past 40 * (k + 1).
    for (k, (index, frame)) in locks.iter().enumerate() {
        assert_eq!(*index, k);
        assert_eq!(*frame, 40 * (k as u64 + 1) + 2);
    }
    assert_eq!(c.state().frame_count, 722);
    assert_eq!(acted, 361);
    assert!(c.ticker().pending().is_none());
}

#[test]
fn empty_target_completes_immediately() {
    let mut c = seeded(0);
    c.start("");
    assert!(c.is_complete());
    assert!(!c.is_running());
    assert!(c.ticker().pending().is_none());
    let f = c.frame();
    assert_eq!(f.text, "");
    assert!(f.revealed.is_empty());
    assert!(f.complete);
}

#[test]
fn restart_discards_progress() {
    let mut c = seeded(42);
    c.start("first target");
    for _ in 0..200 {
        c.step();
    }
    assert!(c.state().frame_count > 0);

    c.start("second");
    let s = c.state();
    assert_eq!(s.frontier, 0);
    assert_eq!(s.frame_count, 0);
    assert_eq!(s.target, "second".chars().collect::<Vec<_>>());
    assert!(s.revealed.iter().all(|r| !r));
    assert!(c.is_running());
    assert!(!c.is_complete());

    c.run_to_completion(10_000);
    assert_eq!(c.state().displayed_text(), "second");
}

#[test]
fn same_seed_same_noise() {
    let mut a = seeded(1234);
    let mut b = seeded(1234);
    a.start(NAME);
    b.start(NAME);
    while a.ticker().pending().is_some() {
        assert_eq!(a.step(), b.step());
        assert_eq!(a.state().displayed, b.state().displayed);
    }
    assert!(b.is_complete());
}

#[test]
fn exact_sequence_with_scripted_source() {
    let mut c =
        CipherReveal::new(CipherConfig::default(), VirtualTicker::new(), AlwaysLock).unwrap();
    c.start("abc");
    assert_eq!(c.state().displayed_text(), "AAA");

    assert_eq!(c.step(), TickResult::Skipped);
    assert_eq!(
        c.step(),
        TickResult::Locked {
            index: 0,
            forced: false
        }
    );
    assert_eq!(c.state().displayed_text(), "aAA");
    c.step();
    c.step();
    assert_eq!(c.state().displayed_text(), "abA");
    c.step();
    assert_eq!(c.step(), TickResult::Completed);
    assert_eq!(c.frame().text, "abc");
    assert_eq!(c.ticker().requests(), 6);
}

#[test]
fn custom_cadence_acts_every_tick() {
    let cfg = CipherConfig {
        tick_divisor: 1,
        lock_probability: 1.0,
        ..CipherConfig::default()
    };
    let mut c = CipherReveal::new(cfg, VirtualTicker::new(), RngSource::seeded(3)).unwrap();
    c.start("four");
    assert_eq!(c.run_to_completion(100), 4);
    assert!(c.is_complete());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = CipherConfig {
        alphabet: String::new(),
        ..CipherConfig::default()
    };
    assert!(CipherReveal::new(cfg, VirtualTicker::new(), RngSource::seeded(0)).is_err());
}
