//! Catching panics raised by step methods and trimming their backtraces.
//!
//! A process-wide hook is installed once and chains to whatever hook was
//! active before. While a step method runs through [`invoke_step_handler`],
//! or a fixture hook through [`invoke_hook`], the panic hook records a
//! backtrace for the current thread instead of printing; otherwise it defers
//! to the previous hook.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;

use crate::fixture::{StepArgs, StepFn, StepResult};
use crate::localization;

use super::ExecutionError;

static INSTALL: Once = Once::new();

thread_local! {
    static CAPTURING: Cell<bool> = const { Cell::new(false) };
    static BACKTRACE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Frames belonging to the unwinding machinery rather than user code.
const MACHINERY: &[&str] = &[
    "std::panicking",
    "core::panicking",
    "rust_begin_unwind",
    "__rust_end_short_backtrace",
    "__rust_begin_short_backtrace",
    "std::panic::catch_unwind",
    "core::panic::unwind_safe",
    "std::sys::backtrace",
    "std::sys_common::backtrace",
    "std::backtrace::Backtrace",
    "morelia::execution::panic::install_hook",
];

/// Names of the boundary frames; nothing at or below them is user code.
const BOUNDARIES: &[&str] = &["invoke_step_handler", "invoke_hook"];

/// A step method that panicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepPanic {
    pub(crate) message: String,
    pub(crate) backtrace: Option<String>,
}

fn install_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if CAPTURING.with(Cell::get) {
                let trace = Backtrace::force_capture().to_string();
                BACKTRACE.with(|slot| *slot.borrow_mut() = Some(trace));
            } else {
                previous(info);
            }
        }));
    });
}

fn capture<R>(call: impl FnOnce() -> R) -> Result<R, StepPanic> {
    install_hook();
    BACKTRACE.with(|slot| slot.borrow_mut().take());
    let was_capturing = CAPTURING.with(|flag| flag.replace(true));
    let outcome = panic::catch_unwind(AssertUnwindSafe(call));
    CAPTURING.with(|flag| flag.set(was_capturing));
    outcome.map_err(|payload| StepPanic {
        message: panic_message(payload.as_ref()),
        backtrace: BACKTRACE
            .with(|slot| slot.borrow_mut().take())
            .map(|trace| trim_backtrace(&trace)),
    })
}

/// Run a step method, turning a panic into [`StepPanic`].
///
/// Kept out of line so its frame marks where user code begins in captured
/// backtraces.
#[inline(never)]
pub(crate) fn invoke_step_handler<F>(
    handler: StepFn<F>,
    fixture: &mut F,
    args: &StepArgs,
) -> Result<StepResult, StepPanic> {
    capture(|| handler(fixture, args))
}

/// Run the fixture hook `name`, reporting a panic as
/// [`ExecutionError::HookFailed`].
#[inline(never)]
pub(crate) fn invoke_hook<F>(
    name: &'static str,
    hook: fn(&mut F),
    fixture: &mut F,
) -> Result<(), ExecutionError> {
    capture(|| hook(fixture)).map_err(|panic| ExecutionError::HookFailed {
        hook: name,
        message: panic.message,
        backtrace: panic.backtrace,
    })
}

/// Extracts a panic payload into a human-readable message.
///
/// Attempts to downcast common primitives before falling back to an opaque
/// description that includes the payload [`TypeId`](std::any::TypeId).
///
/// # Examples
/// ```
/// use morelia::execution::panic_message;
///
/// let err = std::panic::catch_unwind(|| panic!("boom"))
///     .expect_err("expected panic");
/// assert_eq!(panic_message(err.as_ref()), "boom");
/// ```
#[must_use]
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    macro_rules! try_downcast {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(val) = payload.downcast_ref::<$ty>() {
                    return val.to_string();
                }
            )*
        };
    }

    try_downcast!(&str, String, i32, u32, i64, u64, isize, usize, f32, f64);
    let ty = format!("{:?}", payload.type_id());
    localization::message_with_args("panic-message-opaque-payload", |args| {
        args.set("type", ty);
    })
}

fn is_frame_header(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed
        .split_once(": ")
        .is_some_and(|(index, _)| !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
}

fn is_machinery(frame: &str) -> bool {
    MACHINERY.iter().any(|marker| frame.contains(marker))
}

/// Keep only the frames between the panic machinery and the step or hook
/// boundary.
///
/// Frames are the numbered entries of a rendered [`Backtrace`] together with
/// their `at file:line` lines. Text without a boundary frame is returned
/// unchanged.
#[must_use]
pub fn trim_backtrace(trace: &str) -> String {
    let mut frames: Vec<String> = Vec::new();
    for line in trace.lines() {
        match frames.last_mut() {
            Some(frame) if !is_frame_header(line) => {
                frame.push('\n');
                frame.push_str(line);
            }
            _ => frames.push(line.to_owned()),
        }
    }
    let Some(end) = frames
        .iter()
        .position(|frame| BOUNDARIES.iter().any(|boundary| frame.contains(boundary)))
    else {
        return trace.to_owned();
    };
    let start = frames
        .iter()
        .take(end)
        .position(|frame| is_machinery(frame))
        .and_then(|first| {
            frames
                .iter()
                .enumerate()
                .take(end)
                .skip(first)
                .find(|(_, frame)| !is_machinery(frame))
                .map(|(index, _)| index)
        })
        .unwrap_or(0);
    frames
        .iter()
        .take(end)
        .skip(start)
        .filter(|frame| !is_machinery(frame))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{StepPanic, invoke_step_handler, trim_backtrace};
    use crate::fixture::{StepArgs, StepError, StepResult};

    const TRACE: &str = "\
   0: std::backtrace::Backtrace::force_capture
             at /rustc/library/std/src/backtrace.rs:312:13
   1: morelia::execution::panic::install_hook::{{closure}}
   2: std::panicking::rust_panic_with_hook
   3: std::panicking::begin_panic_handler::{{closure}}
   4: rust_begin_unwind
   5: core::panicking::panic_fmt
   6: calculator::Calculator::step_result
             at tests/calculator.rs:40:9
   7: morelia::execution::panic::invoke_step_handler::{{closure}}
   8: std::panic::catch_unwind
   9: morelia::execution::panic::invoke_step_handler
  10: morelia::execution::visitor::Executor::execute_step";

    #[test]
    fn trimming_keeps_user_frames_only() {
        assert_eq!(
            trim_backtrace(TRACE),
            "   6: calculator::Calculator::step_result\n             at tests/calculator.rs:40:9"
        );
    }

    #[test]
    fn traces_without_boundary_are_kept() {
        let trace = "   0: main\n   1: start";
        assert_eq!(trim_backtrace(trace), trace);
    }

    struct Counter(u32);

    fn bump(counter: &mut Counter, _: &StepArgs) -> StepResult {
        counter.0 += 1;
        Err(StepError::exit(4))
    }

    fn explode(_: &mut Counter, _: &StepArgs) -> StepResult {
        panic!("the result is wrong");
    }

    #[test]
    fn returned_errors_pass_through() {
        let mut counter = Counter(0);
        let outcome = invoke_step_handler(bump, &mut counter, &StepArgs::default());
        assert_eq!(counter.0, 1);
        assert!(matches!(outcome, Ok(Err(StepError::Exit(4)))));
    }

    #[test]
    fn panics_become_step_panics() {
        let mut counter = Counter(0);
        let outcome = invoke_step_handler(explode, &mut counter, &StepArgs::default());
        let StepPanic { message, .. } = outcome
            .err()
            .unwrap_or_else(|| panic!("panicking step should be caught"));
        assert_eq!(message, "the result is wrong");
    }
}
