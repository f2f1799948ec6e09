//! Headless preview of the home screen.
//!
//! Builds the screen from an optional JSON config (first argument, or
//! `SANI_HOME_CONFIG`), replays a few taps, logs the bar state frame by frame
//! and prints the final view tree. Time is stepped by hand unless
//! `--realtime` is passed, in which case frames follow the wall clock.

use std::rc::Rc;

use anyhow::Context;
use sani_core::{Clock, ManualClock, SystemClock};
use sani_home::{HomeConfig, HomeScreen};
use sani_ui::{click_by_label, outline};
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);

/// Tab label to tap and how long to keep rendering before the next tap.
const SCRIPT: &[(&str, u64)] = &[
    ("Services", 300),
    // Interrupted before it settles.
    ("Products", 80),
    ("Discover", 300),
    ("Sani", 300),
];

/// How time moves forward between frames.
enum Pace {
    Stepped(Rc<ManualClock>),
    Realtime,
}

impl Pace {
    fn clock(&self) -> Rc<dyn Clock> {
        match self {
            Pace::Stepped(clock) => clock.clone(),
            Pace::Realtime => Rc::new(SystemClock),
        }
    }

    fn wait_frame(&self) {
        match self {
            Pace::Stepped(clock) => clock.advance(FRAME),
            Pace::Realtime => std::thread::sleep(FRAME),
        }
    }
}

struct Options {
    config: Option<String>,
    realtime: bool,
}

fn parse_args() -> Options {
    let mut opts = Options {
        config: None,
        realtime: false,
    };
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            opts.realtime = true;
        } else if opts.config.is_none() {
            opts.config = Some(arg);
        } else {
            log::warn!("ignoring extra argument {arg:?}");
        }
    }
    opts.config = opts.config.or_else(|| std::env::var("SANI_HOME_CONFIG").ok());
    opts
}

fn load_config(path: Option<&str>) -> anyhow::Result<HomeConfig> {
    match path {
        Some(p) => HomeConfig::from_path(p).with_context(|| format!("loading config from {p}")),
        None => Ok(HomeConfig::default()),
    }
}

fn run_frames(screen: &HomeScreen, clock: &dyn Clock, pace: &Pace, start: Instant, hold: Duration) {
    let until = clock.now() + hold;
    while clock.now() < until {
        pace.wait_frame();
        let running = screen.frame();
        let tabs = screen.tabs();
        log::debug!(
            "t={:>4}ms active={:<9} indicator={:.3} running={}",
            clock.now().duration_since(start).as_millis(),
            tabs.active_key(),
            tabs.indicator_position(),
            running
        );
        if !running {
            break;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = parse_args();
    let config = load_config(opts.config.as_deref())?;
    let pace = if opts.realtime {
        Pace::Realtime
    } else {
        Pace::Stepped(Rc::new(ManualClock::default()))
    };
    let clock = pace.clock();
    let start = clock.now();
    let screen = HomeScreen::new(&config, clock.clone()).context("building home screen")?;

    for &(label, hold_ms) in SCRIPT {
        if !click_by_label(&screen.view(), label) {
            log::warn!("nothing to tap for {label:?}");
            continue;
        }
        log::info!("tapped {label:?}, active tab is now {:?}", screen.tabs().active_key());
        run_frames(&screen, clock.as_ref(), &pace, start, Duration::from_millis(hold_ms));
    }

    let tabs = screen.tabs();
    log::info!(
        "settled={} active={:?} indicator={:.2} progress_sum={:.2}",
        tabs.is_settled(),
        tabs.active_key(),
        tabs.indicator_position(),
        tabs.progress_sum()
    );
    drop(tabs);

    println!("{}", outline(&screen.view()));
    Ok(())
}
