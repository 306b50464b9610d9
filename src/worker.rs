use std::{cell::Cell, panic::{catch_unwind, resume_unwind, AssertUnwindSafe}};

use crate::{core::Core, defer::defer, executor::Unit, macros::tracing_feat};

thread_local! {
    /// Core id and daemon flag of the unit running on this thread, if any.
    static CURRENT: Cell<Option<(usize, bool)>> = const { Cell::new(None) };
}

/// Body of every thread spawned by a [`Core`].
///
/// A panic of the unit is held back until the stop hook ran, then resumed
/// so joining the thread still reports it. The non-daemon slot is released
/// from a deferred guard whatever panics.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn run_unit(core: Core, id: usize, unit: Unit) {
    tracing_feat!(trace!("Unit {id} started"));

    let daemon = unit.is_daemon();
    CURRENT.with(|current| current.set(Some((core.id(), daemon))));

    let pending_core = core.clone();
    defer!(move || {
        CURRENT.with(|current| current.set(None));

        if !daemon {
            pending_core.leave_pending();
        }

        tracing_feat!(trace!("Unit {id} stopped"));
    });

    // the stop hook must not run while unwinding, a second panic would abort
    let ran = catch_unwind(AssertUnwindSafe(|| {
        core.hooks.call_on_start_fn();
        unit.run();
    }));

    if catch_unwind(AssertUnwindSafe(|| core.hooks.call_on_stop_fn())).is_err() {
        tracing_feat!(error!("Stop hook of unit {id} panicked"));
    }

    if let Err(payload) = ran {
        resume_unwind(payload);
    }
}

/// Whether the calling thread runs a non-daemon unit of the core with `core_id`.
pub(crate) fn is_own_non_daemon(core_id: usize) -> bool {
    CURRENT.with(|current| current.get() == Some((core_id, false)))
}
