use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
struct InnerTimer {
    start: Option<Instant>,
    elapsed: Duration,
    subtimers: SubTimersMap,
}

impl InnerTimer {
    fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    fn stop(&mut self) {
        if let Some(instant) = self.start.take() {
            self.elapsed += instant.elapsed();
        }
    }

    fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[derive(Debug, Default, Clone)]
struct SubTimersMap(HashMap<&'static str, InnerTimer>);

impl Deref for SubTimersMap {
    type Target = HashMap<&'static str, InnerTimer>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for SubTimersMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl SubTimersMap {
    fn start_subtimer(&mut self, key: &'static str) {
        let t = self.0.entry(key).or_default();
        t.start();
    }

    fn log(&self, depth: u8) {
        for (key, val) in self.iter() {
            let tabs = format!("{: <1$}", "", 4 * depth as usize);
            log::info!("{}{:} : {:?}", tabs, *key, val.elapsed);
            val.subtimers.log(depth + 1);
        }
    }
}

/// A tree of named timers.  Timers started while another is running
/// are recorded as children of the running timer.
#[derive(Default, Debug, Clone)]
pub struct Timers {
    stack: Vec<&'static str>,
    subtimers: SubTimersMap,
}

impl Timers {
    fn mut_active_timer(&mut self) -> Option<&mut InnerTimer> {
        let (first, rest) = self.stack.split_first()?;

        //first one gets special treatment since self is not
        //an InnerTimer and a common trait would be overkill
        let mut active_timer = self.subtimers.get_mut(first)?;

        for key in rest {
            active_timer = active_timer.subtimers.get_mut(key)?;
        }
        Some(active_timer)
    }

    pub fn start_as_current(&mut self, key: &'static str) {
        //starts a timer with name "str" as the current timer

        let active_timer = self.mut_active_timer();

        if let Some(active) = active_timer {
            // child of current active timer
            active.subtimers.start_subtimer(key);
        } else {
            // nothing active, create one at root
            self.subtimers.start_subtimer(key);
        }

        //append to timer call stack
        self.stack.push(key);
    }

    pub fn stop_current(&mut self) {
        //stops the current timer, if any
        if let Some(active) = self.mut_active_timer() {
            active.stop();
        }

        //remove from timer call stack
        self.stack.pop();
    }

    /// Accumulated time of a top level timer, if it has ever been started
    pub fn elapsed(&self, key: &str) -> Option<Duration> {
        self.subtimers.get(key).map(|t| t.elapsed())
    }

    /// Accumulated time of a child timer of a top level timer
    pub fn elapsed_child(&self, parent: &str, key: &str) -> Option<Duration> {
        self.subtimers
            .get(parent)
            .and_then(|t| t.subtimers.get(key))
            .map(|t| t.elapsed())
    }

    /// Writes the timer tree to the `log` facade at info level
    pub fn log(&self) {
        self.subtimers.log(0);
    }
}

macro_rules! timeit {
    ($timer:expr => $key:literal; $($tt:tt)+) => {

        $timer.start_as_current($key);
        $(
            $tt
        )+
        $timer.stop_current();
    }
}
pub(crate) use timeit;
