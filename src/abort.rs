use nix::sys::signal::{sigaction, SaFlags, SigAction, SigHandler, SigSet, Signal};
use tracing::{debug, warn};

use crate::error::Result;
use crate::guard::{guard, ScopeGuard};


/// Ignore interactive aborts until the returned guard leaves scope.
///
/// Captures the current `SIGINT` disposition, overrides it with `SIG_IGN`
/// and restores the captured disposition on release, so a critical section
/// cannot be left half-finished by a keyboard interrupt.
///
/// Returns `Ok(None)` when stdin is not attached to a terminal: there is no
/// interactive abort channel to suppress.
pub fn ignore_user_abort() -> Result<Option<ScopeGuard<SigAction, impl FnOnce(SigAction)>>> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    Ok(Some(override_disposition(Signal::SIGINT)?))
}

fn override_disposition(
    signal: Signal,
) -> Result<ScopeGuard<SigAction, impl FnOnce(SigAction)>> {
    let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());
    let previous = unsafe { sigaction(signal, &ignore) }?;

    debug!(signal = ?signal, "ignoring signal");

    Ok(guard(previous, move |previous| {
        debug!(signal = ?signal, "restoring signal disposition");

        if let Err(err) = unsafe { sigaction(signal, &previous) } {
            warn!(signal = ?signal, error = %err, "failed to restore signal disposition");
        }
    }))
}


#[cfg(test)]
mod tests {
    use nix::libc;
    use nix::sys::signal::raise;

    use super::*;

    extern "C" fn noop_handler(_: libc::c_int) {}

    // dispositions are process-global; keep all SIGUSR1 handling in this
    // one test
    #[test]
    fn override_and_restore() {
        let custom = SigAction::new(
            SigHandler::Handler(noop_handler),
            SaFlags::empty(),
            SigSet::empty(),
        );
        let original = unsafe { sigaction(Signal::SIGUSR1, &custom) }.unwrap();

        {
            let _guard = override_disposition(Signal::SIGUSR1).unwrap();

            // would terminate the process if the override were not in place
            raise(Signal::SIGUSR1).unwrap();
        }

        // the guard restored the custom handler on release
        let restored = unsafe { sigaction(Signal::SIGUSR1, &original) }.unwrap();
        assert_eq!(restored.handler(), SigHandler::Handler(noop_handler));
    }

    #[test]
    fn cancel_skips_restore() {
        let ignore = SigAction::new(SigHandler::SigIgn, SaFlags::empty(), SigSet::empty());

        let guard = override_disposition(Signal::SIGUSR2).unwrap();
        let previous = ScopeGuard::cancel(guard);

        // still ignored after cancel; put the prior disposition back by hand
        let current = unsafe { sigaction(Signal::SIGUSR2, &previous) }.unwrap();
        assert_eq!(current.handler(), ignore.handler());
    }
}
