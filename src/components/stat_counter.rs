use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use web_sys::Element;
use yew::prelude::*;

use crate::components::observe::observe_once;
use crate::config::{COUNTER_DURATION_MS, COUNTER_TICK_MS};

/// One animation step. Returns the new accumulator and whether the target was
/// reached; the final step snaps to the exact target rather than overshooting.
pub(crate) fn advance(current: f64, increment: f64, target: f64) -> (f64, bool) {
    let next = current + increment;
    if next >= target {
        (target, true)
    } else {
        (next, false)
    }
}

pub(crate) fn tick_increment(target: u32) -> f64 {
    f64::from(target) / f64::from(COUNTER_DURATION_MS / COUNTER_TICK_MS)
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: String,
    #[prop_or_default]
    pub suffix: String,
}

/// Counts from 0 up to `target` once the element first scrolls into view.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let value = use_state(|| 0u32);
    let ticker = use_mut_ref(|| None::<Interval>);

    {
        let node = node.clone();
        let value = value.clone();
        let ticker = ticker.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let ticker_cell = ticker.clone();
                    observe_once(&element, move || {
                        let increment = tick_increment(target);
                        let current = Rc::new(RefCell::new(0.0f64));
                        let interval = Interval::new(COUNTER_TICK_MS, {
                            let current = current.clone();
                            let value = value.clone();
                            let ticker_cell = ticker_cell.clone();
                            move || {
                                let (next, done) =
                                    advance(*current.borrow(), increment, f64::from(target));
                                *current.borrow_mut() = next;
                                value.set(next as u32);
                                if done {
                                    // dropping the handle clears the interval
                                    ticker_cell.borrow_mut().take();
                                }
                            }
                        });
                        *ticker_cell.borrow_mut() = Some(interval);
                    })
                });
                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class="stat">
            <span class="stat-value">{ *value }{ props.suffix.clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{advance, tick_increment};

    fn run_to_completion(target: u32) -> (f64, u32) {
        let increment = tick_increment(target);
        let mut current = 0.0;
        let mut ticks = 0u32;
        loop {
            let (next, done) = advance(current, increment, f64::from(target));
            assert!(next <= f64::from(target));
            current = next;
            ticks += 1;
            if done {
                return (current, ticks);
            }
            assert!(ticks < 1_000, "counter failed to terminate");
        }
    }

    #[test]
    fn counter_reaches_exact_target() {
        for target in [1u32, 7, 120, 5_000, 98] {
            let (finished, _) = run_to_completion(target);
            assert_eq!(finished, f64::from(target));
        }
    }

    #[test]
    fn counter_finishes_within_the_tick_budget() {
        // 2000 ms / 16 ms = 125 ticks
        let (_, ticks) = run_to_completion(5_000);
        assert!(ticks <= 125);
    }

    #[test]
    fn final_step_snaps_instead_of_overshooting() {
        let (next, done) = advance(9.5, 1.0, 10.0);
        assert!(done);
        assert_eq!(next, 10.0);
    }

    #[test]
    fn intermediate_steps_accumulate_monotonically() {
        let increment = tick_increment(100);
        let (a, done_a) = advance(0.0, increment, 100.0);
        let (b, done_b) = advance(a, increment, 100.0);
        assert!(!done_a && !done_b);
        assert!(b > a && a > 0.0);
    }
}
